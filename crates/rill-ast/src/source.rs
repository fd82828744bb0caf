/// A span represents a continuous, half-open range of bytes `[start, end)` in
/// some source text. Spans can be combined using the `+` operator to create
/// the smallest continuous span containing both.
///
/// The default span is the zero span. A node's span is replaced wholesale,
/// never adjusted field-by-field.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl std::ops::Add for Span {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            start: self.start.min(rhs.start),
            end: self.end.max(rhs.end),
        }
    }
}

impl std::ops::AddAssign for Span {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}
