//! Interactive interpolation calculator.
//!
//! Pick a method, type the sample points and a query point, read off the
//! polynomial and the interpolated value, then optionally estimate the
//! truncation-error bound from a formula for the underlying function.

use clap::Parser;
use num_methods_common::{input, table};
use num_methods_expr::Expr;
use num_methods_interp::{
    GregoryNewton, NewtonPolynomial, estimate_max_derivative, lagrange_eval, neville,
    truncation_bound,
};
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "interpolation",
    about = "Lagrange, Neville, Newton and Gregory-Newton interpolation"
)]
struct Cli {
    /// Number of sample points for the derivative-bound estimate
    #[arg(long, default_value_t = 1000)]
    bound_samples: usize,
}

fn print_menu() {
    let bar = "=".repeat(40);
    println!("\n{bar}");
    println!("  Numerical interpolation calculator");
    println!("{bar}");
    println!("1. Lagrange method");
    println!("2. Neville method");
    println!("3. Newton method (divided differences)");
    println!("4. Gregory-Newton method");
    println!("0. Exit");
    println!("{bar}");
}

fn read_points() -> io::Result<(Vec<f64>, Vec<f64>)> {
    loop {
        let xs = input::prompt_f64_list("Enter the X values (separated by spaces): ", None)?;
        let ys = input::prompt_f64_list("Enter the Y values (separated by spaces): ", None)?;
        if xs.len() != ys.len() {
            println!("Error: X and Y must have the same number of points.");
            continue;
        }
        if xs.len() < 2 {
            println!("Error: at least 2 points are needed to interpolate.");
            continue;
        }
        return Ok((xs, ys));
    }
}

/// Optional truncation-error flow: asks for f(x), estimates the derivative
/// bound numerically and prints |E(x)| <= M/(n+1)! * |omega(x)|.
fn error_bound_flow(cli: &Cli, xs: &[f64], x: f64) -> io::Result<()> {
    let bar = "=".repeat(40);
    println!("\n{bar}");
    println!("  Truncation-error bound");
    println!("{bar}");
    if !input::prompt_yes_no("Estimate the maximum truncation error? (y/n): ")? {
        return Ok(());
    }

    let expr = loop {
        let text =
            input::prompt_line("Enter f(x) (e.g. 'sin(x)', 'exp(3*x)', 'log(x)'): ")?;
        match Expr::parse(&text) {
            Ok(expr) => match expr.check_variables(&["x"]) {
                Ok(()) => break expr,
                Err(e) => println!("Error: {e}"),
            },
            Err(e) => println!("Error: could not understand the formula ({e})."),
        }
    };

    let n = xs.len() - 1;
    let (a, b) = xs
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    println!("Polynomial degree (n): {n}");
    println!("X interval considered: [{a}, {b}]");

    let f = |v: f64| expr.eval_single("x", v).unwrap_or(f64::NAN);
    let m = estimate_max_derivative(f, n + 1, a, b, cli.bound_samples);
    let tb = truncation_bound(xs, x, m);

    println!("\n{}", "-".repeat(30));
    println!("Estimated max |f^({})| on the interval: {m:.6e}", n + 1);
    println!("|E({x})| <= {:.6e}", tb.bound);
    println!("This is the MAXIMUM error bound at {x}.");
    println!("{}", "-".repeat(30));
    Ok(())
}

fn run(cli: &Cli) -> io::Result<()> {
    loop {
        print_menu();
        let choice = input::prompt_choice("Choose an option: ", 4)?;
        if choice == 0 {
            println!("Exiting...");
            return Ok(());
        }

        let (xs, ys) = read_points()?;
        let x = input::prompt_f64("Enter the X value to interpolate (e.g. 2.5): ")?;

        table::print_heading("Interpolation result");

        let value = match choice {
            1 => match lagrange_eval(&xs, &ys, x) {
                Ok((poly, value)) => {
                    println!("Lagrange polynomial P(x):\n{poly}");
                    Some(value)
                }
                Err(e) => {
                    println!("Error: {e}");
                    None
                }
            },
            2 => match neville(&xs, &ys, x) {
                Ok(value) => {
                    println!("Note: Neville evaluates without forming the polynomial.");
                    Some(value)
                }
                Err(e) => {
                    println!("Error: {e}");
                    None
                }
            },
            3 => match NewtonPolynomial::fit(&xs, &ys) {
                Ok(poly) => {
                    println!("Newton polynomial:\nP(x) = {poly}");
                    Some(poly.eval(x))
                }
                Err(e) => {
                    println!("Error: {e}");
                    None
                }
            },
            _ => match GregoryNewton::fit(&xs, &ys) {
                Ok(poly) => {
                    println!("Gregory-Newton polynomial:\n{poly}");
                    println!("At the query point: s = {:.4}", poly.normalized(x));
                    Some(poly.eval(x))
                }
                Err(e) => {
                    println!("Error: {e}");
                    println!("Gregory-Newton cannot be applied to this data.");
                    None
                }
            },
        };

        if let Some(value) = value {
            println!("\n{}", "-".repeat(40));
            println!("Interpolated value: P({x}) = {value:.7}");
            println!("{}", "-".repeat(40));
            error_bound_flow(cli, &xs, x)?;
        }
    }
}

fn main() {
    let cli = Cli::parse();
    // A closed stdin just ends the session.
    let _ = run(&cli);
}
