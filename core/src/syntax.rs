// Source locations shared by tokens, tree nodes and errors.

use core::{fmt, ops::Range};

/// Byte range into the input line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.0.clone()).unwrap_or_default()
    }
    pub fn start(&self) -> usize {
        self.0.start
    }
    pub fn end(&self) -> usize {
        self.0.end
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self(range)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.0.start, self.0.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_spans() {
        let a = Span::new(2, 3);
        let b = Span::new(5, 8);
        assert_eq!(Span::combine(&a, &b), Span::new(2, 8));
    }

    #[test]
    fn test_str_of() {
        assert_eq!(Span::new(2, 5).str_of("1+(2*3)"), "(2*");
        assert_eq!(Span::new(4, 9).str_of("1+2"), "");
    }
}
