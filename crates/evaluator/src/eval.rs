use errors::{DivisionByZero, EvalError, MalformedExpression, Overflow, UnknownOperator};
use expr::{new, Operator, Span, Spanned, Token, TIERS};

type Res = Result<Spanned<i64>, EvalError>;

/// Collapses (number, operator, number) triples one precedence tier at a
/// time. Total over every input shape: the caller's slice is copied, never
/// mutated, and malformed sequences come back as errors rather than panics.
pub fn evaluate(tokens: &[Spanned<Token>]) -> Res {
    let mut buffer = tokens.to_vec();

    for tier in TIERS {
        reduce_tier(tier, &mut buffer)?;
    }

    match buffer.as_slice() {
        [Spanned {
            inner: Token::Number(number),
            span,
        }] => Ok(new(*number, *span)),
        _ => Err(residual_error(&buffer, tokens)),
    }
}

/// One left-to-right pass for a single tier. After every reduction the scan
/// restarts from the front, since the shrink can put two same-tier operators
/// next to a fresh operand. An operator whose neighbor is missing or not a
/// number is skipped; whatever never reduces is caught by the residual check
/// in `evaluate`.
fn reduce_tier(tier: &[Operator], buffer: &mut Vec<Spanned<Token>>) -> Result<(), EvalError> {
    let mut index = 0;

    while index < buffer.len() {
        if let Some(op) = tier_operator(tier, &buffer[index]) {
            let left = index.checked_sub(1).and_then(|i| number_at(buffer, i));
            let right = number_at(buffer, index + 1);

            if let (Some(left), Some(right)) = (left, right) {
                let result = apply(left, new(op, buffer[index].span), right)?;

                buffer[index - 1] = new(Token::Number(result.inner), result.span);
                buffer.drain(index..=index + 1);

                index = 0;
                continue;
            }
        }

        index += 1;
    }

    Ok(())
}

fn tier_operator(tier: &[Operator], token: &Spanned<Token>) -> Option<Operator> {
    match token.inner {
        Token::Op(op) if tier.contains(&op) => Some(op),
        _ => None,
    }
}

fn number_at(buffer: &[Spanned<Token>], index: usize) -> Option<Spanned<i64>> {
    match buffer.get(index) {
        Some(Spanned {
            inner: Token::Number(number),
            span,
        }) => Some(new(*number, *span)),
        _ => None,
    }
}

// Every step is checked, so an i64 overflow (including i64::MIN / -1) is an
// error, not a panic.
fn apply(left: Spanned<i64>, op: Spanned<Operator>, right: Spanned<i64>) -> Res {
    let span = left.span.merge(right.span);

    let value = match op.inner {
        Operator::Add => left.inner.checked_add(right.inner),
        Operator::Sub => left.inner.checked_sub(right.inner),
        Operator::Mul => left.inner.checked_mul(right.inner),
        Operator::Div => {
            if right.inner == 0 {
                return Err(EvalError::DivisionByZero(DivisionByZero {
                    op_start: op.span.start,
                    op_end: op.span.end,
                    divisor_start: right.span.start,
                    divisor_end: right.span.end,
                }));
            }

            left.inner.checked_div(right.inner)
        }
    };

    match value {
        Some(value) => Ok(new(value, span)),
        None => Err(EvalError::Overflow(Overflow {
            start: span.start,
            end: span.end,
        })),
    }
}

/// The buffer survived both tiers without reducing to a lone number. An
/// unreduced unknown symbol is the most specific diagnosis; anything else
/// (empty input, leftover operators, missing operands) is malformed.
fn residual_error(buffer: &[Spanned<Token>], tokens: &[Spanned<Token>]) -> EvalError {
    for token in buffer {
        if let Token::Unknown(symbol) = &token.inner {
            return EvalError::UnknownOperator(UnknownOperator {
                start: token.span.start,
                end: token.span.end,
                symbol: symbol.clone(),
            });
        }
    }

    let span = full_span(tokens);
    EvalError::Malformed(MalformedExpression {
        start: span.start,
        end: span.end,
    })
}

fn full_span(tokens: &[Spanned<Token>]) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.merge(last.span),
        _ => Span { start: 0, end: 0 },
    }
}
