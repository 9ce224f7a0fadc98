//! Enumerates the strings matched by a small pattern language: literal text
//! mixed with bounded character classes such as `[a-c]{2}` or `[abc]{1,3}`.
//!
//! A pattern compiles into a flat [`Token`] sequence. That sequence is then
//! walked as an odometer whose digits are the class positions, so matches
//! come out in strictly increasing order.
//!
//! ```
//! let tokens = pattern_odometer::compile("id-[0-1]{2}").unwrap();
//!
//! assert_eq!(pattern_odometer::seed(&tokens), "id-00");
//! assert_eq!(
//!     pattern_odometer::next(&tokens, "id-01").unwrap().as_deref(),
//!     Some("id-10")
//! );
//! assert_eq!(pattern_odometer::count(&tokens).unwrap(), 4);
//! ```

mod config;
mod error;
mod odometer;
mod parser;
mod pattern;

pub use config::{Options, Walk};
pub use error::{Error, Result};
pub use odometer::Matches;
pub use parser::{Class, Parser, Subrange, Token};
pub use pattern::Pattern;

use odometer::Odometer;

pub fn compile(pattern: &str) -> Result<Vec<Token>> {
    Parser::parse(pattern)
}

pub fn seed(tokens: &[Token]) -> String {
    Odometer::new(tokens, Walk::default()).seed()
}

/// Successor of `current`, `Ok(None)` once every position is at its maximum.
pub fn next(tokens: &[Token], current: &str) -> Result<Option<String>> {
    Odometer::new(tokens, Walk::default()).next(current)
}

pub fn count(tokens: &[Token]) -> Result<u128> {
    Odometer::new(tokens, Walk::default()).count()
}

/// Lazily yields every match after `start`, stopping at exhaustion.
pub fn enumerate(pattern: &str, start: &str) -> Result<Matches<'static>> {
    Pattern::new(pattern)?.into_iter_from(start)
}

pub fn first_match(pattern: &str) -> Result<String> {
    Ok(Pattern::new(pattern)?.seed())
}

pub fn count_matches(pattern: &str) -> Result<u128> {
    Pattern::new(pattern)?.count()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn first_valid_match() {
        assert_eq!(first_match("[a-c]{2}").unwrap(), "aa");
        assert_eq!(first_match("prefix[a]{1}post").unwrap(), "prefixapost");
    }

    #[test]
    fn next_match() {
        let tokens = compile("[a-c]{2}").unwrap();
        assert_eq!(next(&tokens, "aa").unwrap(), Some("ab".to_owned()));

        let tokens = compile("[a]{2}").unwrap();
        assert_eq!(next(&tokens, "aa").unwrap(), None);
    }

    #[test]
    fn next_rejects_wrong_length() {
        let tokens = compile("ex[a-b]{2}yz").unwrap();

        assert_matches!(
            next(&tokens, "exayz"),
            Err(Error::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn generator_yields_successors() {
        let results: Vec<String> = enumerate("[a-b]{2}", "aa").unwrap().take(3).collect();

        assert_eq!(results, ["ab", "ba", "bb"]);
    }

    #[test]
    fn generator_with_literals_runs_out() {
        let pattern = "ex[a-b]{1}yz[0-1]{1}";
        let first = first_match(pattern).unwrap();
        assert_eq!(first, "exayz0");

        let mut matches = enumerate(pattern, &first).unwrap();
        let values: Vec<Option<String>> = (0..4).map(|_| matches.next()).collect();

        assert_eq!(
            values,
            [
                Some("exayz1".to_owned()),
                Some("exbyz0".to_owned()),
                Some("exbyz1".to_owned()),
                None,
            ]
        );
        assert_eq!(matches.next(), None);
    }

    #[test]
    fn enumerate_rejects_bad_input() {
        assert_matches!(
            enumerate("[a-b", "a"),
            Err(Error::MalformedPattern { .. })
        );
        assert_matches!(
            enumerate("[a-b]{2}", "abc"),
            Err(Error::LengthMismatch { .. })
        );
    }

    #[test]
    fn count_combinations() {
        assert_eq!(count_matches("[a-b]{2}").unwrap(), 4);
        assert_eq!(count_matches("ex[a-b]{2}yz").unwrap(), 4);
        assert_eq!(count(&compile("plain").unwrap()).unwrap(), 1);
    }

    #[test]
    fn count_mixed_length_blocks() {
        // one token for the length-1 block, two for the length-2 block
        assert_eq!(count_matches("[a-c]{1,2}").unwrap(), 3 * 3 * 3);
    }

    #[test]
    fn count_beyond_64_bits() {
        let count = count_matches("[a-z]{20}").unwrap();

        assert_eq!(count, 26u128.pow(20));
        assert!(count > u128::from(u64::MAX));
    }

    #[test]
    fn count_overflow() {
        assert_matches!(count_matches("[a-z]{30}"), Err(Error::CountOverflow));
    }
}
