use tracing::debug;

use crate::prelude::*;

type Value = Rational<i64>;

const HELP: &str = "\
<n1> <d1> <op> <n2> <d2>   op is one of + - * / ==
reduce <n> <d>             lowest terms
lcm <d1> <d2> ...          least common multiple
help                       this text";

#[derive(Debug, Default)]
pub struct Dispatcher {}

#[derive(Debug, PartialEq, Eq)]
pub enum DispatchResult {
    Success(Option<String>),
    Failure(String),
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {}
    }

    pub fn dispatch(&mut self, input: &str) -> DispatchResult {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        debug!(?tokens, "dispatch");

        match self.evaluate(&tokens) {
            Ok(message) => DispatchResult::Success(message),
            Err(message) => {
                debug!(%message, "dispatch failed");
                DispatchResult::Failure(message)
            }
        }
    }

    fn evaluate(&self, tokens: &[&str]) -> Result<Option<String>, String> {
        match tokens {
            [] => Ok(None),
            ["help"] => Ok(Some(HELP.to_string())),
            ["reduce", n, d] => Ok(Some(fraction(n, d)?.to_string())),
            ["lcm", rest @ ..] => {
                let values = rest.iter().map(|t| integer(t)).collect::<Result<Vec<_>, _>>()?;
                let lcm = lcm_all(&values).map_err(|e| e.to_string())?;
                Ok(Some(lcm.to_string()))
            }
            [n1, d1, op, n2, d2] => {
                let lhs = fraction(n1, d1)?;
                let rhs = fraction(n2, d2)?;
                let result = match *op {
                    "+" => lhs.add(&rhs),
                    "-" => lhs.subtract(&rhs),
                    "*" => lhs.multiply(&rhs),
                    "/" => lhs.divide(&rhs),
                    "==" => return Ok(Some(Rational::are_equal(&lhs, &rhs).to_string())),
                    other => return Err(format!("unknown operator {}", other)),
                };
                result
                    .map(|value| Some(value.to_string()))
                    .map_err(|e| e.to_string())
            }
            _ => Err(format!("unrecognized input: {}", tokens.join(" "))),
        }
    }
}

fn operand(token: &str) -> Operand {
    if let Ok(value) = token.parse::<i128>() {
        Operand::Integer(value)
    } else if let Ok(value) = token.parse::<f64>() {
        Operand::Float(value)
    } else {
        Operand::Text(token.to_string())
    }
}

fn integer(token: &str) -> Result<i64, String> {
    validate_operand(&operand(token)).map_err(|e| e.to_string())
}

fn fraction(numerator: &str, denominator: &str) -> Result<Value, String> {
    Rational::from_operands(&operand(numerator), &operand(denominator)).map_err(|e| e.to_string())
}
