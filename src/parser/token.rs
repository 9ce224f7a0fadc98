use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Class(Class),
}

impl Token {
    /// Number of characters this token occupies in every match.
    pub fn width(&self) -> usize {
        match self {
            Token::Literal(value) => value.chars().count(),
            Token::Class(_) => 1,
        }
    }
}

/// A single character position drawn from the union of its subranges.
///
/// Subranges keep their declared order, which is the order the odometer
/// walks them in. A class always holds at least one subrange; clones share
/// the same subrange list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    subranges: Arc<[Subrange]>,
}

impl Class {
    pub fn new(subranges: Vec<Subrange>) -> Option<Class> {
        match subranges.is_empty() {
            true => None,
            false => Some(Class {
                subranges: subranges.into(),
            }),
        }
    }

    pub fn subranges(&self) -> &[Subrange] {
        &self.subranges
    }

    /// The character every reset puts this position back to.
    pub fn min(&self) -> char {
        self.subranges[0].low
    }

    pub fn size(&self) -> u128 {
        self.subranges.iter().map(Subrange::size).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subrange {
    pub low: char,
    pub high: char,
}

impl Subrange {
    pub fn new(low: char, high: char) -> Self {
        Subrange { low, high }
    }

    pub fn single(c: char) -> Self {
        Subrange { low: c, high: c }
    }

    /// Count of scalar values in `low..=high`; surrogates are not chars.
    pub fn size(&self) -> u128 {
        if self.high < self.low {
            return 0;
        }

        let span = u128::from(u32::from(self.high) - u32::from(self.low)) + 1;
        match self.low <= '\u{D7FF}' && self.high >= '\u{E000}' {
            true => span - 0x800,
            false => span,
        }
    }
}
