use std::iter::FusedIterator;
use std::mem;

use super::Odometer;
use crate::error::Result;

/// Lazy, finite walk over successive matches of a pattern.
///
/// Once the odometer is exhausted the iterator keeps returning `None`; a new
/// walk needs a new start value.
#[derive(Debug)]
pub struct Matches<'a> {
    odometer: Odometer<'a>,
    cursor: Option<Vec<char>>,
    pending: bool,
}

impl<'a> Matches<'a> {
    /// Every successor of `start`, excluding `start` itself.
    pub(crate) fn after(odometer: Odometer<'a>, start: &str) -> Result<Self> {
        let cursor = odometer.load(start)?;
        Ok(Matches {
            odometer,
            cursor: Some(cursor),
            pending: false,
        })
    }

    /// The seed followed by all of its successors.
    pub(crate) fn from_seed(odometer: Odometer<'a>) -> Self {
        let cursor = odometer.seed_chars();
        Matches {
            odometer,
            cursor: Some(cursor),
            pending: true,
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let cursor = self.cursor.as_mut()?;
        if mem::take(&mut self.pending) || self.odometer.advance(cursor) {
            return Some(cursor.iter().collect());
        }

        log::debug!("enumeration exhausted after {:?}", cursor);
        self.cursor = None;
        None
    }
}

impl FusedIterator for Matches<'_> {}
