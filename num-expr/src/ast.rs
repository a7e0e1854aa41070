//! Expression tree and evaluation.

use crate::error::ExprError;
use std::collections::HashMap;

/// Binary operators in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

/// Whitelisted functions.
///
/// `log` is the natural logarithm; `log10` is available for the decimal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Sqrt,
    Log,
    Log10,
    Abs,
    Floor,
    Ceil,
}

impl Function {
    /// Look up a whitelisted function by name.
    pub fn from_name(name: &str) -> Option<Function> {
        Some(match name {
            "sin" => Function::Sin,
            "cos" => Function::Cos,
            "tan" => Function::Tan,
            "asin" => Function::Asin,
            "acos" => Function::Acos,
            "atan" => Function::Atan,
            "sinh" => Function::Sinh,
            "cosh" => Function::Cosh,
            "tanh" => Function::Tanh,
            "exp" => Function::Exp,
            "sqrt" => Function::Sqrt,
            "log" | "ln" => Function::Log,
            "log10" => Function::Log10,
            "abs" => Function::Abs,
            "floor" => Function::Floor,
            "ceil" => Function::Ceil,
            _ => return None,
        })
    }

    /// Number of arguments the function takes.
    pub fn arity(&self) -> usize {
        1
    }

    fn apply(&self, x: f64) -> f64 {
        match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Asin => x.asin(),
            Function::Acos => x.acos(),
            Function::Atan => x.atan(),
            Function::Sinh => x.sinh(),
            Function::Cosh => x.cosh(),
            Function::Tanh => x.tanh(),
            Function::Exp => x.exp(),
            Function::Sqrt => x.sqrt(),
            Function::Log => x.ln(),
            Function::Log10 => x.log10(),
            Function::Abs => x.abs(),
            Function::Floor => x.floor(),
            Function::Ceil => x.ceil(),
        }
    }
}

/// A parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(Function, Vec<Expr>),
}

/// Variable bindings for evaluation.
///
/// The constants `pi` and `e` are always bound and may be shadowed.
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    vars: HashMap<String, f64>,
}

impl EvalContext {
    /// Empty context (only the built-in constants resolve).
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    fn get(&self, name: &str) -> Option<f64> {
        if let Some(&v) = self.vars.get(name) {
            return Some(v);
        }
        match name {
            "pi" => Some(std::f64::consts::PI),
            "e" => Some(std::f64::consts::E),
            _ => None,
        }
    }
}

impl Expr {
    /// Evaluate against `ctx`.
    pub fn eval(&self, ctx: &EvalContext) -> Result<f64, ExprError> {
        match self {
            Expr::Number(v) => Ok(*v),
            Expr::Variable(name) => ctx.get(name).ok_or_else(|| ExprError::UnknownVariable {
                name: name.clone(),
            }),
            Expr::Unary(UnaryOp::Neg, inner) => Ok(-inner.eval(ctx)?),
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.eval(ctx)?;
                let b = rhs.eval(ctx)?;
                Ok(match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    BinaryOp::Pow => a.powf(b),
                })
            }
            Expr::Call(function, args) => {
                let x = args[0].eval(ctx)?;
                Ok(function.apply(x))
            }
        }
    }

    /// Evaluate with a single bound variable. Convenient for `f(x)` uses.
    pub fn eval_single(&self, name: &str, value: f64) -> Result<f64, ExprError> {
        let mut ctx = EvalContext::new();
        ctx.set(name, value);
        self.eval(&ctx)
    }

    /// Check that every variable the expression references is one of
    /// `allowed` (or a built-in constant). Used to validate formulas right
    /// after entry, before any numeric work.
    pub fn check_variables(&self, allowed: &[&str]) -> Result<(), ExprError> {
        match self {
            Expr::Number(_) => Ok(()),
            Expr::Variable(name) => {
                if allowed.contains(&name.as_str()) || name == "pi" || name == "e" {
                    Ok(())
                } else {
                    Err(ExprError::UnknownVariable { name: name.clone() })
                }
            }
            Expr::Unary(_, inner) => inner.check_variables(allowed),
            Expr::Binary(_, lhs, rhs) => {
                lhs.check_variables(allowed)?;
                rhs.check_variables(allowed)
            }
            Expr::Call(_, args) => {
                for arg in args {
                    arg.check_variables(allowed)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constants() {
        let expr = Expr::parse("2*pi").unwrap();
        assert_relative_eq!(
            expr.eval(&EvalContext::new()).unwrap(),
            2.0 * std::f64::consts::PI
        );
    }

    #[test]
    fn test_unknown_variable() {
        let expr = Expr::parse("x + y").unwrap();
        let mut ctx = EvalContext::new();
        ctx.set("x", 1.0);
        assert_eq!(
            expr.eval(&ctx),
            Err(ExprError::UnknownVariable { name: "y".into() })
        );
    }

    #[test]
    fn test_check_variables() {
        let expr = Expr::parse("sin(t) * y + e").unwrap();
        assert!(expr.check_variables(&["t", "y"]).is_ok());
        assert!(expr.check_variables(&["t"]).is_err());
    }

    #[test]
    fn test_log_is_natural() {
        let expr = Expr::parse("log(e)").unwrap();
        assert_relative_eq!(expr.eval(&EvalContext::new()).unwrap(), 1.0, epsilon = 1e-12);
    }
}
