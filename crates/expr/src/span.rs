#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Spanned<T> {
    pub inner: T,
    pub span: Span,
}

pub fn new<T>(inner: T, span: Span) -> Spanned<T> {
    Spanned { inner, span }
}

pub trait WithSpan {
    fn pretty_string(&self, indent: usize) -> String;
}

impl WithSpan for Spanned<i64> {
    fn pretty_string(&self, indent: usize) -> String {
        let buffer = " ".repeat(indent);
        format!(
            "{buffer}{} {}..{} [number]",
            self.inner, self.span.start, self.span.end
        )
    }
}
