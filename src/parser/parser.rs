use std::iter::Peekable;
use std::vec::IntoIter;

use super::token::*;
use crate::config::Options;
use crate::error::{Error, Result};

const META_CHARS: [char; 4] = [
    '[', ']', // set brackets
    '{', '}', // repeat brackets
];

pub struct Parser {
    stream: Peekable<IntoIter<char>>,
    offset: usize,
    tokens: Vec<Token>,
    positions: usize,
    max_positions: Option<usize>,
}

impl Parser {
    pub fn parse(pattern: &str) -> Result<Vec<Token>> {
        Parser::parse_with(pattern, Options::default())
    }

    pub fn parse_with(pattern: &str, options: Options) -> Result<Vec<Token>> {
        let mut parser = Parser {
            stream: pattern
                .chars()
                .collect::<Vec<char>>()
                .into_iter()
                .peekable(),
            offset: 0,
            tokens: vec![],
            positions: 0,
            max_positions: options.max_positions,
        };

        parser.parse_root()?;
        log::debug!(
            "compiled {:?}: {} tokens, {} positions",
            pattern,
            parser.tokens.len(),
            parser.positions
        );

        Ok(parser.tokens)
    }

    fn parse_root(&mut self) -> Result<()> {
        loop {
            match self.stream.peek() {
                Some('[') => self.parse_class()?,
                Some(_) => self.parse_literal()?,
                None => return Ok(()),
            }
        }
    }

    fn parse_literal(&mut self) -> Result<()> {
        let mut value = String::new();
        while let Some(c) = self.next_if(|c| !META_CHARS.contains(c)) {
            value.push(c);
        }

        match self.stream.peek() {
            Some('[') | None => {}
            Some(c) => {
                return Err(Error::malformed(
                    self.offset,
                    format!("unexpected '{}' outside of a character class", c),
                ));
            }
        }

        self.reserve(value.chars().count())?;
        self.tokens.push(Token::Literal(value));
        Ok(())
    }

    fn parse_class(&mut self) -> Result<()> {
        let start = self.offset;
        self.bump(); // consume '['

        let subranges = self.parse_set_items()?;

        match self.bump() {
            Some(']') => {}
            _ => return Err(Error::malformed(start, "unmatched opening bracket")),
        }

        let class = Class::new(subranges)
            .ok_or_else(|| Error::malformed(start + 1, "set items are empty"))?;
        let (min, max) = self.parse_repeat()?;
        self.expand(class, min, max)
    }

    fn parse_set_items(&mut self) -> Result<Vec<Subrange>> {
        let mut subranges = Vec::new();
        while let Some(subrange) = self.parse_set_item()? {
            subranges.push(subrange);
        }
        Ok(subranges)
    }

    fn parse_set_item(&mut self) -> Result<Option<Subrange>> {
        let start = self.offset;
        let low = match self.next_if(|c| *c != ']') {
            Some(c) => c,
            None => return Ok(None),
        };

        if self.next_if(|c| *c == '-').is_none() {
            return Ok(Some(Subrange::single(low)));
        }

        let high = match self.next_if(|c| *c != ']') {
            Some(c) => c,
            None => return Err(Error::malformed(self.offset, "missing range end character")),
        };
        if low > high {
            return Err(Error::malformed(
                start,
                format!("out of range order [{}-{}]", low, high),
            ));
        }

        Ok(Some(Subrange::new(low, high)))
    }

    fn parse_repeat(&mut self) -> Result<(u32, u32)> {
        let start = self.offset;
        if self.next_if(|c| *c == '{').is_none() {
            return Err(Error::malformed(
                start,
                "character class must be followed by a repeat count",
            ));
        }

        let min = self.parse_number()?;
        let max = match self.bump() {
            Some('}') => return Ok((min, min)),
            Some(',') => self.parse_number()?,
            Some(c) => {
                return Err(Error::malformed(
                    self.offset - 1,
                    format!("repeat operator want ',' or '}}', get '{}'", c),
                ));
            }
            None => {
                return Err(Error::malformed(
                    self.offset,
                    "unmatched opening curly bracket, get EoL",
                ));
            }
        };

        match self.bump() {
            Some('}') => {}
            Some(c) => {
                return Err(Error::malformed(
                    self.offset - 1,
                    format!("unmatched opening curly bracket, get '{}'", c),
                ));
            }
            None => {
                return Err(Error::malformed(
                    self.offset,
                    "unmatched opening curly bracket, get EoL",
                ));
            }
        }

        if min > max {
            return Err(Error::malformed(
                start,
                format!("out of repeat order {{{},{}}}", min, max),
            ));
        }

        Ok((min, max))
    }

    fn parse_number(&mut self) -> Result<u32> {
        let start = self.offset;
        let mut num = String::new();
        while let Some(c) = self.next_if(|c| c.is_ascii_digit()) {
            num.push(c);
        }

        if num.is_empty() {
            return Err(Error::malformed(start, "repeat count is empty"));
        }
        num.parse()
            .map_err(|_| Error::malformed(start, format!("repeat count {} is too large", num)))
    }

    // One block of `len` copies per permitted length, shortest first.
    fn expand(&mut self, class: Class, min: u32, max: u32) -> Result<()> {
        let (min, max) = (u128::from(min), u128::from(max));
        let total = usize::try_from((min + max) * (max - min + 1) / 2)
            .map_err(|_| self.too_many_positions())?;
        self.reserve(total)?;

        for len in min..=max {
            log::trace!("expanding {:?} into a block of {}", class.subranges(), len);
            for _ in 0..len {
                self.tokens.push(Token::Class(class.clone()));
            }
        }
        Ok(())
    }

    // Unbounded patterns still fail instead of overflowing the counter.
    fn reserve(&mut self, count: usize) -> Result<()> {
        let limit = self.max_positions.unwrap_or(usize::MAX);
        self.positions = self
            .positions
            .checked_add(count)
            .filter(|n| *n <= limit)
            .ok_or_else(|| self.too_many_positions())?;
        Ok(())
    }

    fn too_many_positions(&self) -> Error {
        Error::TooManyPositions {
            limit: self.max_positions.unwrap_or(usize::MAX),
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.stream.next();
        if c.is_some() {
            self.offset += 1;
        }
        c
    }

    fn next_if(&mut self, func: impl FnOnce(&char) -> bool) -> Option<char> {
        let c = self.stream.next_if(func);
        if c.is_some() {
            self.offset += 1;
        }
        c
    }
}
