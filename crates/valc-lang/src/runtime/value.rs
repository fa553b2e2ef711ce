//! Runtime values and the `value OP value` arithmetic they support.

use std::fmt;

use crate::error::ErrorKind;

/// A ValC value: there are integers and there is text. Literal parsing,
/// input, arithmetic, and concatenation never produce anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    /// Guards treat integer 0 and empty text as false; a variable that was
    /// never set counts as false too, but that is the engine's call.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::Text(s) => s.is_empty(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The four operators of `WHAT'S THE SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn from_token(token: &str) -> Option<Op> {
        match token {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }
}

/// Apply `a OP b`. `+` also concatenates two text values; everything else
/// is integer-only. Integer arithmetic is checked, and `/` floors like the
/// language's reference semantics (so `(0-7)/2` is `-4`).
pub fn apply(op: Op, a: Value, b: Value) -> Result<Value, ErrorKind> {
    use Value::{Int, Text};

    match (op, a, b) {
        (Op::Add, Int(a), Int(b)) => checked(a.checked_add(b), op),
        (Op::Add, Text(a), Text(b)) => Ok(Text(a + &b)),
        (Op::Sub, Int(a), Int(b)) => checked(a.checked_sub(b), op),
        (Op::Mul, Int(a), Int(b)) => checked(a.checked_mul(b), op),
        (Op::Div, Int(_), Int(0)) => Err(ErrorKind::Arithmetic("division by zero".to_owned())),
        (Op::Div, Int(a), Int(b)) => checked(floor_div(a, b), op),
        (op, a, b) => Err(ErrorKind::Arithmetic(format!(
            "`{}` is not supported between {} and {}",
            op.symbol(),
            a.type_name(),
            b.type_name(),
        ))),
    }
}

/// Render both operands textually and join them; always yields text.
pub fn concat(a: &Value, b: &Value) -> Value {
    Value::Text(format!("{a}{b}"))
}

fn checked(result: Option<i64>, op: Op) -> Result<Value, ErrorKind> {
    result.map(Value::Int).ok_or_else(|| {
        ErrorKind::Arithmetic(format!("integer overflow in `{}`", op.symbol()))
    })
}

/// Floor division, rounding toward negative infinity. `i64::MIN / -1`
/// overflows and reports as such.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        Some(q - 1)
    } else {
        Some(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_floors_toward_negative_infinity() {
        assert_eq!(apply(Op::Div, Value::Int(7), Value::Int(2)), Ok(Value::Int(3)));
        assert_eq!(apply(Op::Div, Value::Int(-7), Value::Int(2)), Ok(Value::Int(-4)));
        assert_eq!(apply(Op::Div, Value::Int(7), Value::Int(-2)), Ok(Value::Int(-4)));
        assert_eq!(apply(Op::Div, Value::Int(-7), Value::Int(-2)), Ok(Value::Int(3)));
    }

    #[test]
    fn add_concatenates_two_texts() {
        let joined = apply(
            Op::Add,
            Value::Text("Iceman".to_owned()),
            Value::Text(" and Maverick".to_owned()),
        );
        assert_eq!(joined, Ok(Value::Text("Iceman and Maverick".to_owned())));
    }

    #[test]
    fn mixed_operands_are_arithmetic_errors() {
        let err = apply(Op::Sub, Value::Int(1), Value::Text("x".to_owned()));
        assert!(matches!(err, Err(ErrorKind::Arithmetic(_))));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let err = apply(Op::Add, Value::Int(i64::MAX), Value::Int(1));
        assert!(matches!(err, Err(ErrorKind::Arithmetic(_))));
        let err = apply(Op::Div, Value::Int(i64::MIN), Value::Int(-1));
        assert!(matches!(err, Err(ErrorKind::Arithmetic(_))));
    }
}
