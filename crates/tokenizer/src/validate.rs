use expr::{Spanned, Token};

/// The UI refuses to evaluate, or to append a second operator, while the
/// last token is an operator.
pub fn ends_with_operator(tokens: &[Spanned<Token>]) -> bool {
    matches!(
        tokens.last(),
        Some(Spanned {
            inner: Token::Op(_),
            ..
        })
    )
}

/// The shortest evaluable expression is number-operator-number.
pub fn has_minimum_length(tokens: &[Spanned<Token>]) -> bool {
    tokens.len() >= 3
}

/// A displayed `=` means the line already shows a computed result; the UI
/// starts a fresh expression instead of appending.
pub fn contains_result_marker(raw: &str) -> bool {
    raw.contains('=')
}
