pub mod span;
pub mod token;

pub use span::{new, Span, Spanned, WithSpan};
pub use token::{Operator, Token, TIERS};
