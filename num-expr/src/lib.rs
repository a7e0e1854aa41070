//! Math expression parsing and evaluation for user-typed formulas
//!
//! The interactive tools accept formulas like `sin(x) + x^2 / 3` for
//! integrands, ODE right-hand sides, and exact solutions. This crate parses
//! them into an AST and evaluates against a variable context. Only the
//! whitelisted functions and the named variables are reachable; there is no
//! code evaluation of any kind.
//!
//! # Example
//!
//! ```
//! use num_methods_expr::{Expr, EvalContext};
//!
//! let expr = Expr::parse("2 * sin(x) + x^2").unwrap();
//! let mut ctx = EvalContext::new();
//! ctx.set("x", 0.0);
//! assert_eq!(expr.eval(&ctx).unwrap(), 0.0);
//! ```

mod ast;
mod error;
mod parser;
mod token;

pub use ast::{BinaryOp, EvalContext, Expr, Function, UnaryOp};
pub use error::ExprError;

impl Expr {
    /// Parse `source` into an expression tree.
    pub fn parse(source: &str) -> Result<Expr, ExprError> {
        let tokens = token::tokenize(source)?;
        parser::Parser::new(tokens).parse()
    }
}
