use crate::config::Walk;
use crate::parser::Class;

impl Walk {
    /// Next digit for a class position holding `current`, or `None` when
    /// the position has to carry.
    ///
    /// Only the first subrange, in declared order, whose upper end lies
    /// above `current` may accept the step.
    pub(crate) fn step(self, class: &Class, current: char) -> Option<char> {
        let subrange = class.subranges().iter().find(|s| current < s.high)?;

        match self {
            Walk::SkipGaps if current < subrange.low => Some(subrange.low),
            _ => Some(successor(current)),
        }
    }
}

// `c` is always below some subrange's upper end, so it is never char::MAX.
fn successor(c: char) -> char {
    match c {
        '\u{D7FF}' => '\u{E000}',
        _ => char::from_u32(u32::from(c) + 1).unwrap_or(char::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Subrange;

    fn class(subranges: &[(char, char)]) -> Class {
        Class::new(
            subranges
                .iter()
                .map(|&(low, high)| Subrange::new(low, high))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn step_inside_range() {
        let az = class(&[('a', 'z')]);

        assert_eq!(Walk::CodePoint.step(&az, 'a'), Some('b'));
        assert_eq!(Walk::CodePoint.step(&az, 'y'), Some('z'));
        assert_eq!(Walk::CodePoint.step(&az, 'z'), None);
    }

    #[test]
    fn step_across_single_chars() {
        let abc = class(&[('a', 'a'), ('b', 'b'), ('c', 'c')]);

        assert_eq!(Walk::CodePoint.step(&abc, 'a'), Some('b'));
        assert_eq!(Walk::CodePoint.step(&abc, 'b'), Some('c'));
        assert_eq!(Walk::CodePoint.step(&abc, 'c'), None);
    }

    #[test]
    fn step_into_gap() {
        let gapped = class(&[('a', 'c'), ('x', 'z')]);

        assert_eq!(Walk::CodePoint.step(&gapped, 'c'), Some('d'));
        assert_eq!(Walk::SkipGaps.step(&gapped, 'c'), Some('x'));
        assert_eq!(Walk::SkipGaps.step(&gapped, 'x'), Some('y'));
        assert_eq!(Walk::SkipGaps.step(&gapped, 'z'), None);
    }

    #[test]
    fn step_follows_declared_order() {
        let reversed = class(&[('x', 'z'), ('a', 'c')]);

        assert_eq!(Walk::CodePoint.step(&reversed, 'x'), Some('y'));
        assert_eq!(Walk::CodePoint.step(&reversed, 'z'), None);
        assert_eq!(Walk::SkipGaps.step(&reversed, 'z'), None);
    }

    #[test]
    fn step_over_surrogates() {
        let wide = class(&[('\u{D7FE}', '\u{E001}')]);

        assert_eq!(Walk::CodePoint.step(&wide, '\u{D7FE}'), Some('\u{D7FF}'));
        assert_eq!(Walk::CodePoint.step(&wide, '\u{D7FF}'), Some('\u{E000}'));
        assert_eq!(Walk::CodePoint.step(&wide, '\u{E000}'), Some('\u{E001}'));
    }
}
