//! Interactive numerical-integration calculator.
//!
//! Input comes either from a formula (sampled on a uniform grid, with a
//! Gauss-Legendre reference for the error column) or from a typed x/y table.
//! The same data can be run through any of the Newton-Cotes rules.

use clap::Parser;
use ndarray::Array1;
use num_methods_common::{Report, input, lin_space, plot, table};
use num_methods_expr::Expr;
use num_methods_quadrature::{ALL_RULES, Rule, percent_error, reference_integral, table_step};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "integrals",
    about = "Trapezoid and Simpson integration with error reporting"
)]
struct Cli {
    /// Export each result table as a JSON report
    #[arg(long)]
    report: bool,

    /// Directory for exported reports (defaults to the user cache dir)
    #[arg(long)]
    report_dir: Option<PathBuf>,
}

/// The data currently loaded: sampled ordinates, the step, and the value the
/// error column compares against (if any).
struct Session {
    y: Array1<f64>,
    h: f64,
    reference: Option<f64>,
}

impl Session {
    fn segments(&self) -> usize {
        self.y.len() - 1
    }
}

#[derive(Serialize)]
struct RuleOutcome {
    method: String,
    value: Option<f64>,
    percent_error: Option<f64>,
    failure: Option<String>,
}

#[derive(Serialize)]
struct IntegralReport {
    segments: usize,
    step: f64,
    reference: Option<f64>,
    outcomes: Vec<RuleOutcome>,
}

fn read_expression() -> io::Result<Expr> {
    loop {
        let text = input::prompt_line("\nEnter the function (e.g. x^2, sin(x)): ")?;
        match Expr::parse(&text) {
            Ok(expr) => match expr.check_variables(&["x"]) {
                Ok(()) => return Ok(expr),
                Err(e) => println!("Error: {e}"),
            },
            Err(e) => println!("Error: {e}"),
        }
    }
}

/// Function mode: sample f on a uniform grid and take a Gauss-Legendre
/// integral as the reference value.
fn function_mode() -> io::Result<Session> {
    let expr = read_expression()?;
    let a = input::prompt_f64("Lower limit (a): ")?;
    let b = input::prompt_f64("Upper limit (b): ")?;

    println!("\nDiscretization:");
    println!("1. By number of segments (n)");
    println!("2. By step size (h)");
    let mode = loop {
        let m = input::prompt_choice("Option: ", 2)?;
        if m >= 1 {
            break m;
        }
        println!(" > Pick 1 or 2.");
    };

    let (n, h) = if mode == 2 {
        let h_input = loop {
            let h = input::prompt_f64("Step size (h): ")?;
            if h > 0.0 {
                break h;
            }
            println!(" > The step must be positive.");
        };
        let distance = b - a;
        let n_real = distance / h_input;
        let n = n_real.round().max(1.0) as usize;
        let h = if (n_real - n as f64).abs() > 1e-9 {
            let adjusted = distance / n as f64;
            println!("[Note] h adjusted to {adjusted:.6} so the grid lands on b");
            adjusted
        } else {
            h_input
        };
        (n, h)
    } else {
        let n = loop {
            let n = input::prompt_usize("Number of segments (n): ")?;
            if n > 0 {
                break n;
            }
            println!(" > The number of segments must be positive.");
        };
        (n, (b - a) / n as f64)
    };

    let xs = lin_space(a, b, n + 1);
    let mut y = Array1::zeros(n + 1);
    for (i, &x) in xs.iter().enumerate() {
        match expr.eval_single("x", x) {
            Ok(v) => y[i] = v,
            Err(e) => {
                println!("Error evaluating the function at x = {x}: {e}");
                return function_mode();
            }
        }
    }

    let f = |x: f64| expr.eval_single("x", x).unwrap_or(f64::NAN);
    let reference = reference_integral(f, a, b);
    let reference = reference.is_finite().then_some(reference);

    Ok(Session { y, h, reference })
}

/// Table mode: typed samples; the reference is optional and user-supplied.
fn table_mode() -> io::Result<Session> {
    loop {
        println!("\nEnter the values separated by spaces.");
        let xs = input::prompt_f64_list("X values: ", None)?;
        let ys = input::prompt_f64_list("Y values: ", None)?;
        let h = match table_step(&xs, &ys) {
            Ok(h) => h,
            Err(e) => {
                println!("Error: {e}");
                continue;
            }
        };

        let reference = if input::prompt_yes_no("Do you know the exact value? (y/n): ")? {
            Some(input::prompt_f64("Exact value: ")?)
        } else {
            None
        };

        return Ok(Session {
            y: Array1::from_vec(ys),
            h,
            reference,
        });
    }
}

fn render_results(session: &Session, rules: &[Rule]) -> (String, Vec<RuleOutcome>) {
    let mut t = table::Table::new(&[
        ("METHOD", 22),
        ("CALCULATED", 16),
        ("REFERENCE", 16),
        ("ERROR %", 12),
    ]);
    let reference_text = session
        .reference
        .map(|v| format!("{v:.6}"))
        .unwrap_or_else(|| "N/A".to_string());

    let mut outcomes = Vec::new();
    for rule in rules {
        match rule.apply(&session.y, session.h) {
            Ok(value) => {
                let error = percent_error(session.reference, value);
                let value_text = if value.abs() < 1e6 {
                    format!("{value:.6}")
                } else {
                    format!("{value:.4e}")
                };
                let error_text = error
                    .map(|e| format!("{e:.4}%"))
                    .unwrap_or_else(|| "N/A".to_string());
                t.push_row(vec![
                    rule.name().to_string(),
                    value_text,
                    reference_text.clone(),
                    error_text,
                ]);
                outcomes.push(RuleOutcome {
                    method: rule.name().to_string(),
                    value: Some(value),
                    percent_error: error,
                    failure: None,
                });
            }
            Err(e) => {
                t.push_spanning_row(rule.name().to_string(), format!("FAILED: {e}"));
                outcomes.push(RuleOutcome {
                    method: rule.name().to_string(),
                    value: None,
                    percent_error: None,
                    failure: Some(e.to_string()),
                });
            }
        }
    }
    (t.render(), outcomes)
}

fn export_report(cli: &Cli, session: &Session, outcomes: Vec<RuleOutcome>) {
    let report = Report::new(
        "integrals",
        IntegralReport {
            segments: session.segments(),
            step: session.h,
            reference: session.reference,
            outcomes,
        },
    );
    let dir = match plot::plot_output_dir(cli.report_dir.as_deref()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Could not resolve report directory: {e}");
            return;
        }
    };
    match report.write_json(&dir, "integrals") {
        Ok(path) => println!("Report written to {}", path.display()),
        Err(e) => eprintln!("Could not write report: {e}"),
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    table::print_title("Numerical integration calculator");

    loop {
        println!("\n1. Input from FUNCTION");
        println!("2. Input from TABLE");
        println!("0. Exit");
        let session = match input::prompt_choice("Choose the input: ", 2)? {
            0 => return Ok(()),
            1 => function_mode()?,
            _ => table_mode()?,
        };

        // Method loop: same samples, as many rules as the user wants.
        loop {
            table::print_title("Method selection");
            println!(
                "Current data: n = {} | h = {:.6}",
                session.segments(),
                session.h
            );
            if let Some(reference) = session.reference {
                println!("Reference: {reference:.6}");
            }

            println!("\n--- Methods ---");
            for (i, rule) in ALL_RULES.iter().enumerate() {
                println!("{}. {}", i + 1, rule.name());
            }
            println!("{}. Run all methods", ALL_RULES.len() + 1);
            println!("{}", "-".repeat(30));
            println!("5. Enter new data");
            println!("0. EXIT");

            let choice = input::prompt_choice("\nOption: ", 5)?;
            match choice {
                0 => {
                    println!("Closing...");
                    return Ok(());
                }
                5 => break,
                c if c <= ALL_RULES.len() => {
                    let (text, outcomes) = render_results(&session, &ALL_RULES[c - 1..c]);
                    table::print_title("Results");
                    println!("{text}");
                    if cli.report {
                        export_report(cli, &session, outcomes);
                    }
                }
                _ => {
                    let (text, outcomes) = render_results(&session, &ALL_RULES);
                    table::print_title("Results");
                    println!("{text}");
                    if cli.report {
                        export_report(cli, &session, outcomes);
                    }
                }
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    // A closed stdin just ends the session.
    let _ = run(&cli);
}
