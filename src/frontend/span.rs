/// A half-open range of byte positions in the source expression.
/// Expressions are single-line, so a byte offset is all the position
/// information we need.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Span {
    pub lo: usize,
    pub hi: usize,
}

impl Span {
    pub fn new(mut lo: usize, mut hi: usize) -> Self {
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi)
        }
        Span { lo, hi }
    }

    /// Returns the smallest span covering both inputs.
    pub fn to(&self, other: Self) -> Self {
        Span::new(
            std::cmp::min(self.lo, other.lo),
            std::cmp::max(self.hi, other.hi),
        )
    }

    pub fn extract_string<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.lo..self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::more_asserts::*;

    const SAMPLE_TEXT: &str = "12 + 34 * (5 - 6)";

    #[test]
    fn extract_string() {
        assert_eq!(Span::new(0, 2).extract_string(SAMPLE_TEXT).unwrap(), "12");
        assert_eq!(Span::new(5, 7).extract_string(SAMPLE_TEXT).unwrap(), "34");
        assert_eq!(
            Span::new(10, 17).extract_string(SAMPLE_TEXT).unwrap(),
            "(5 - 6)"
        );
        assert_eq!(Span::new(10, 99).extract_string(SAMPLE_TEXT), None);
    }

    #[test]
    fn span_ordering() {
        let span = Span::new(7, 3);
        assert_le!(span.lo, span.hi);
        assert_eq!(span, Span::new(3, 7));

        let joined = Span::new(0, 2).to(Span::new(5, 7));
        assert_eq!(joined, Span::new(0, 7));
        assert_ge!(joined.hi, 5);
    }
}
