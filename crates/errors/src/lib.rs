use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use smol_str::SmolStr;
use thiserror::Error;

const REPORT_ERR: ReportKind = ReportKind::Custom("calc error", Color::Unset);

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("tokenizing failed")]
    TokenizeError(TokenizeError),

    #[error("evaluating failed")]
    EvalError(EvalError),
}

impl CalcError {
    pub fn to_report(&self, source: &str) -> String {
        let report = match self {
            Self::TokenizeError(e) => e.to_report(),
            Self::EvalError(e) => e.to_report(),
        };

        let source = Source::from(source);
        let mut buf = Vec::new();
        report.write(source, &mut buf).unwrap();

        String::from_utf8(buf).unwrap()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenizeError {
    pub start: usize,
    pub end: usize,
}

impl TokenizeError {
    fn to_report(&self) -> Report {
        Report::build(REPORT_ERR, (), self.start)
            .with_message("the input could not be split into tokens")
            .with_label(Label::new(self.start..self.end).with_message("unexpected input"))
            .with_config(Config::default().with_color(false))
            .finish()
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero(DivisionByZero),

    #[error("number overflow")]
    Overflow(Overflow),

    #[error("unknown operator")]
    UnknownOperator(UnknownOperator),

    #[error("malformed expression")]
    Malformed(MalformedExpression),
}

impl EvalError {
    pub fn to_report(&self) -> Report {
        match self {
            Self::DivisionByZero(e) => e.to_report(),
            Self::Overflow(e) => e.to_report(),
            Self::UnknownOperator(e) => e.to_report(),
            Self::Malformed(e) => e.to_report(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DivisionByZero {
    pub op_start: usize,
    pub op_end: usize,
    pub divisor_start: usize,
    pub divisor_end: usize,
}

impl DivisionByZero {
    fn to_report(&self) -> Report {
        Report::build(REPORT_ERR, (), self.op_start)
            .with_message("cannot divide by zero")
            .with_label(
                Label::new(self.op_start..self.op_end).with_message("this division fails"),
            )
            .with_label(
                Label::new(self.divisor_start..self.divisor_end)
                    .with_message("because this divisor is zero"),
            )
            .with_config(Config::default().with_color(false))
            .finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Overflow {
    pub start: usize,
    pub end: usize,
}

impl Overflow {
    fn to_report(&self) -> Report {
        Report::build(REPORT_ERR, (), self.start)
            .with_message("the result does not fit in a 64-bit integer")
            .with_label(Label::new(self.start..self.end).with_message("this operation overflows"))
            .with_config(Config::default().with_color(false))
            .finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownOperator {
    pub start: usize,
    pub end: usize,
    pub symbol: SmolStr,
}

impl UnknownOperator {
    fn to_report(&self) -> Report {
        Report::build(REPORT_ERR, (), self.start)
            .with_message("unknown operator")
            .with_label(Label::new(self.start..self.end).with_message(format!(
                "`{}` is not one of `+`, `-`, `x`, `/`",
                self.symbol
            )))
            .with_config(Config::default().with_color(false))
            .finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MalformedExpression {
    pub start: usize,
    pub end: usize,
}

impl MalformedExpression {
    fn to_report(&self) -> Report {
        Report::build(REPORT_ERR, (), self.start)
            .with_message("the expression does not reduce to a single number")
            .with_label(
                Label::new(self.start..self.end)
                    .with_message("expected numbers and operators alternating"),
            )
            .with_config(Config::default().with_color(false))
            .finish()
    }
}
