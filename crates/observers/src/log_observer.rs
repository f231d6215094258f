use radroot_core::Observer;

use crate::traits::{HasResidual, Iterate};

/// Traces every iteration at `trace` level and never intervenes.
///
/// Records go to the `radroot` target, tagged with the observer's label so
/// concurrent solves can be told apart.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver<'a> {
    label: &'a str,
}

impl<'a> LogObserver<'a> {
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

impl Default for LogObserver<'_> {
    fn default() -> Self {
        Self::new("solve")
    }
}

impl<E, A> Observer<E, A> for LogObserver<'_>
where
    E: Iterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        log::trace!(
            target: "radroot",
            "{}: iter {} x = {:e} f = {:e}",
            self.label,
            event.iter(),
            event.x(),
            event.residual()
        );
        None
    }
}
