use super::Var;
use crate::error;
use crate::lang::{ast::Expression, token::Operator, Error};

type Result<T> = std::result::Result<T, Error>;

impl Expression {
    /// Both operands are always evaluated, left first. Arithmetic wraps.
    pub fn eval(&self, var: &mut Var) -> Result<i32> {
        match self {
            Expression::Constant(value) => Ok(*value),
            Expression::Var(name) => var.fetch(name),
            Expression::Compound(op, lhs, rhs) => {
                let lhs = lhs.eval(var)?;
                let rhs = rhs.eval(var)?;
                binary(op, lhs, rhs)
            }
        }
    }
}

fn binary(op: &Operator, lhs: i32, rhs: i32) -> Result<i32> {
    use Operator::*;
    match op {
        Plus => Ok(lhs.wrapping_add(rhs)),
        Minus => Ok(lhs.wrapping_sub(rhs)),
        Multiply => Ok(lhs.wrapping_mul(rhs)),
        Divide => {
            if rhs == 0 {
                return Err(error!(DivisionByZero));
            }
            Ok(lhs.wrapping_div(rhs))
        }
        Power => Ok(power(lhs, rhs)),
        Modulus => Ok(modulus(lhs, rhs)),
        _ => Err(error!(UnknownOperator; &op.to_string())),
    }
}

/// Goes through `f64` and truncates back, so large results lose
/// precision and out of range results saturate.
fn power(lhs: i32, rhs: i32) -> i32 {
    f64::from(lhs).powf(f64::from(rhs)) as i32
}

/// Remainder takes the sign of the divisor. Modulus by zero is zero.
fn modulus(lhs: i32, rhs: i32) -> i32 {
    if rhs == 0 {
        return 0;
    }
    let mut result = lhs.wrapping_rem(rhs);
    if (rhs > 0 && result < 0) || (rhs < 0 && result > 0) {
        result += rhs;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn eval(op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
        Expression::compound(op, Expression::constant(lhs), Expression::constant(rhs))
            .eval(&mut Var::new())
    }

    #[test]
    fn test_modulus_follows_divisor() {
        assert_eq!(modulus(7, 3), 1);
        assert_eq!(modulus(-7, 3), 2);
        assert_eq!(modulus(7, -3), -2);
        assert_eq!(modulus(-7, -3), -1);
        assert_eq!(modulus(6, -3), 0);
        assert_eq!(modulus(5, 0), 0);
        assert_eq!(modulus(i32::MIN, -1), 0);
        for a in -20..=20 {
            for b in (-6..=6).filter(|b| *b != 0) {
                let r = modulus(a, b);
                if b > 0 {
                    assert!(0 <= r && r < b, "{} MOD {} = {}", a, b, r);
                } else {
                    assert!(b < r && r <= 0, "{} MOD {} = {}", a, b, r);
                }
                assert_eq!((a - r) % b, 0);
            }
        }
    }

    #[test]
    fn test_division() {
        assert_eq!(eval(Operator::Divide, 7, 2), Ok(3));
        assert_eq!(eval(Operator::Divide, -7, 2), Ok(-3));
        assert_eq!(eval(Operator::Divide, i32::MIN, -1), Ok(i32::MIN));
        for a in &[0, 1, -1, i32::MAX] {
            let e = eval(Operator::Divide, *a, 0).unwrap_err();
            assert_eq!(e.code(), ErrorCode::DivisionByZero);
        }
    }

    #[test]
    fn test_power() {
        assert_eq!(eval(Operator::Power, 2, 10), Ok(1024));
        assert_eq!(eval(Operator::Power, -3, 3), Ok(-27));
        assert_eq!(eval(Operator::Power, 5, 0), Ok(1));
        assert_eq!(eval(Operator::Power, 2, -1), Ok(0));
        assert_eq!(eval(Operator::Power, 10, 20), Ok(i32::MAX));
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(eval(Operator::Plus, i32::MAX, 1), Ok(i32::MIN));
        assert_eq!(eval(Operator::Multiply, 65536, 65536), Ok(0));
    }

    #[test]
    fn test_unknown_operator() {
        let e = eval(Operator::Less, 1, 2).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnknownOperator);
        assert_eq!(e.text(), "<");
    }

    #[test]
    fn test_left_before_right() {
        let mut var = Var::new();
        var.store(&"A".into(), 4);
        let expr = Expression::compound(
            Operator::Divide,
            Expression::var("A").unwrap(),
            Expression::var("B").unwrap(),
        );
        let e = expr.eval(&mut var).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedVariable);
        assert_eq!(var.stats().uses("A"), 1);
    }
}
