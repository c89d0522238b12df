use errors::TokenizeError;
use expr::{new, Operator, Span, Spanned, Token};
use pest::{error::InputLocation, iterators::Pair, Parser};
use pest_derive::Parser;

pub mod validate;

#[derive(Parser)]
#[grammar = "calc.pest"]
pub struct CalcParser;

/// Splits one display line on spaces and classifies every token. The UI
/// keeps a space on both sides of each operator it appends, so the split is
/// lossless; anything that is neither an `i64` nor an operator symbol comes
/// back as `Token::Unknown` and is left for the evaluator to reject.
pub fn tokenize<S>(src: S) -> Result<Vec<Spanned<Token>>, TokenizeError>
where
    S: AsRef<str>,
{
    let pairs =
        CalcParser::parse(Rule::expression, src.as_ref()).map_err(|e| tokenize_error(&e))?;

    let tokens = pairs
        .flatten()
        .filter(|pair| pair.as_rule() == Rule::token)
        .map(spanned_token)
        .collect();

    Ok(tokens)
}

fn spanned_token(pair: Pair<'_, Rule>) -> Spanned<Token> {
    let span = Span {
        start: pair.as_span().start(),
        end: pair.as_span().end(),
    };

    new(classify(pair.as_str()), span)
}

fn classify(text: &str) -> Token {
    if let Ok(number) = text.parse::<i64>() {
        return Token::Number(number);
    }

    match Operator::from_symbol(text) {
        Some(op) => Token::Op(op),
        None => Token::Unknown(text.into()),
    }
}

fn tokenize_error(e: &pest::error::Error<Rule>) -> TokenizeError {
    match e.location {
        InputLocation::Pos(pos) => TokenizeError {
            start: pos,
            end: pos,
        },
        InputLocation::Span((start, end)) => TokenizeError { start, end },
    }
}
