use smol_str::SmolStr;

use crate::span::{Spanned, WithSpan};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        let op = match symbol {
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "x" => Operator::Mul,
            "/" => Operator::Div,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "x",
            Operator::Div => "/",
        }
    }
}

/// Precedence tiers, highest binding first. Each tier is fully reduced
/// before the next one is scanned.
pub const TIERS: [&[Operator]; 2] = [
    &[Operator::Mul, Operator::Div],
    &[Operator::Add, Operator::Sub],
];

/// Classified exactly once, at tokenization. `Unknown` keeps the raw text
/// of anything that is neither an `i64` nor an operator symbol; rejecting
/// it is the evaluator's job, not the tokenizer's.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    Number(i64),
    Op(Operator),
    Unknown(SmolStr),
}

impl WithSpan for Spanned<Token> {
    fn pretty_string(&self, indent: usize) -> String {
        let buffer = " ".repeat(indent);

        match &self.inner {
            Token::Number(number) => format!(
                "{buffer}{number} {}..{} [number]",
                self.span.start, self.span.end
            ),
            Token::Op(op) => format!(
                "{buffer}{} {}..{} [operator]",
                op.symbol(),
                self.span.start,
                self.span.end
            ),
            Token::Unknown(text) => format!(
                "{buffer}{text} {}..{} [unknown]",
                self.span.start, self.span.end
            ),
        }
    }
}
