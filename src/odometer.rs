use std::borrow::Cow;

use crate::config::Walk;
use crate::error::{Error, Result};
use crate::parser::{Class, Token};

mod matches;
mod step;

pub use matches::Matches;


/// Mixed-radix counter over the flattened positions of a token sequence.
///
/// Every literal character is a fixed position; every class token is one
/// position whose digits are the class members in declared order.
#[derive(Debug)]
pub(crate) struct Odometer<'a> {
    tokens: Cow<'a, [Token]>,
    slots: Vec<Slot>,
    walk: Walk,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Fixed(char),
    Class(usize), // index into tokens
}

impl<'a> Odometer<'a> {
    pub fn new(tokens: impl Into<Cow<'a, [Token]>>, walk: Walk) -> Self {
        let tokens = tokens.into();
        let mut slots = Vec::with_capacity(tokens.iter().map(Token::width).sum());
        for (index, token) in tokens.iter().enumerate() {
            match token {
                Token::Literal(value) => slots.extend(value.chars().map(Slot::Fixed)),
                Token::Class(_) => slots.push(Slot::Class(index)),
            }
        }

        Odometer {
            tokens,
            slots,
            walk,
        }
    }

    pub fn borrowed(&self) -> Odometer<'_> {
        Odometer {
            tokens: Cow::Borrowed(&*self.tokens),
            slots: self.slots.clone(),
            walk: self.walk,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn width(&self) -> usize {
        self.slots.len()
    }

    pub fn seed(&self) -> String {
        self.seed_chars().into_iter().collect()
    }

    pub fn next(&self, current: &str) -> Result<Option<String>> {
        let mut chars = self.load(current)?;
        match self.advance(&mut chars) {
            true => Ok(Some(chars.into_iter().collect())),
            false => Ok(None),
        }
    }

    pub fn count(&self) -> Result<u128> {
        self.tokens.iter().try_fold(1u128, |total, token| match token {
            Token::Literal(_) => Ok(total),
            Token::Class(class) => total.checked_mul(class.size()).ok_or(Error::CountOverflow),
        })
    }

    pub(crate) fn seed_chars(&self) -> Vec<char> {
        self.slots
            .iter()
            .map(|&slot| match slot {
                Slot::Fixed(c) => c,
                Slot::Class(index) => self.class(index).min(),
            })
            .collect()
    }

    pub(crate) fn load(&self, current: &str) -> Result<Vec<char>> {
        let chars: Vec<char> = current.chars().collect();
        if chars.len() != self.width() {
            return Err(Error::LengthMismatch {
                expected: self.width(),
                actual: chars.len(),
            });
        }
        Ok(chars)
    }

    /// Steps `chars` to its successor in place. Returns `false`, leaving
    /// `chars` untouched, once every class position sits at its maximum.
    pub(crate) fn advance(&self, chars: &mut [char]) -> bool {
        for i in (0..self.slots.len()).rev() {
            let index = match self.slots[i] {
                Slot::Class(index) => index,
                Slot::Fixed(_) => continue,
            };

            if let Some(c) = self.walk.step(self.class(index), chars[i]) {
                chars[i] = c;
                self.reset_after(chars, i);
                return true;
            }
            log::trace!("carry past position {}", i);
        }
        false
    }

    fn reset_after(&self, chars: &mut [char], index: usize) {
        for (i, &slot) in self.slots.iter().enumerate().skip(index + 1) {
            if let Slot::Class(index) = slot {
                chars[i] = self.class(index).min();
            }
        }
    }

    fn class(&self, index: usize) -> &Class {
        match &self.tokens[index] {
            Token::Class(class) => class,
            Token::Literal(_) => unreachable!("slot points at a literal token"),
        }
    }
}
