use crate::config::Options;
use crate::error::Result;
use crate::odometer::{Matches, Odometer};
use crate::parser::{Parser, Token};

/// A compiled pattern, ready to seed, step, count and enumerate matches.
pub struct Pattern {
    odometer: Odometer<'static>,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Pattern> {
        Pattern::with_options(pattern, Options::default())
    }

    pub fn with_options(pattern: &str, options: Options) -> Result<Pattern> {
        let tokens = Parser::parse_with(pattern, options)?;
        let odometer = Odometer::new(tokens, options.walk);

        Ok(Pattern { odometer })
    }

    pub fn tokens(&self) -> &[Token] {
        self.odometer.tokens()
    }

    /// Length in chars of every match.
    pub fn width(&self) -> usize {
        self.odometer.width()
    }

    /// The lexicographically smallest match.
    pub fn seed(&self) -> String {
        self.odometer.seed()
    }

    /// The match right after `current`, or `None` once the pattern is
    /// exhausted.
    pub fn next(&self, current: &str) -> Result<Option<String>> {
        self.odometer.next(current)
    }

    pub fn count(&self) -> Result<u128> {
        self.odometer.count()
    }

    pub fn iter_from(&self, start: &str) -> Result<Matches<'_>> {
        Matches::after(self.odometer.borrowed(), start)
    }

    pub fn into_iter_from(self, start: &str) -> Result<Matches<'static>> {
        Matches::after(self.odometer, start)
    }

    pub fn matches(&self) -> Matches<'_> {
        Matches::from_seed(self.odometer.borrowed())
    }
}
