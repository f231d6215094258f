use radroot_core::Observer;

use crate::traits::{HasResidual, Iterate};

/// One recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub x: f64,
    pub residual: f64,
}

/// Records every iterate a solver visits.
///
/// Pass `&mut history` to a solver to keep the records after the solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the history and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<E, A> Observer<E, A> for History
where
    E: Iterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(Record {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
        });
        None
    }
}

impl<E, A> Observer<E, A> for &mut History
where
    E: Iterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}
