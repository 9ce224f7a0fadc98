/// How a class position steps to its next character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Walk {
    /// Step by one scalar value inside the first subrange whose upper end
    /// lies above the current character. Characters between two declared
    /// subranges are visited too.
    #[default]
    CodePoint,
    /// Like `CodePoint`, but a character below the accepting subrange jumps
    /// straight to that subrange's lower end.
    SkipGaps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Upper bound on the positions a pattern may expand to. `{min,max}`
    /// expands into one block per permitted length, so the position count
    /// grows quadratically with `max`. Unbounded when `None`.
    pub max_positions: Option<usize>,
    pub walk: Walk,
}

impl Options {
    pub fn max_positions(mut self, limit: usize) -> Self {
        self.max_positions = Some(limit);
        self
    }

    pub fn walk(mut self, walk: Walk) -> Self {
        self.walk = walk;
        self
    }
}
