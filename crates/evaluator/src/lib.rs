use errors::CalcError;
use expr::Spanned;
use tokenizer::tokenize;

mod eval;

#[cfg(test)]
mod test;

pub use eval::evaluate;

/// Tokenizes one display line and reduces it to its value.
pub fn run_on_line<S>(src: S) -> Result<Spanned<i64>, CalcError>
where
    S: AsRef<str>,
{
    let tokens = tokenize(src.as_ref()).map_err(CalcError::TokenizeError)?;

    evaluate(&tokens).map_err(CalcError::EvalError)
}
