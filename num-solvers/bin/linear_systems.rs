//! Interactive linear-system solver.
//!
//! Reads a square system equation by equation, lets the user pick among the
//! solver methods, prints the solution and optionally the intermediate
//! matrices, and loops so the same system can be retried with another
//! method.

use clap::Parser;
use ndarray::{Array1, Array2};
use num_methods_common::{Report, input, plot, table};
use num_methods_solvers::{ALL_METHODS, LinearSolution, Method};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "linear_systems",
    about = "Solve square linear systems with Gauss, LU or LUP"
)]
struct Cli {
    /// Start with the built-in example system instead of prompting
    #[arg(long)]
    demo: bool,

    /// Export each solve as a JSON report
    #[arg(long)]
    report: bool,

    /// Directory for exported reports (defaults to the user cache dir)
    #[arg(long)]
    report_dir: Option<PathBuf>,
}

/// The system currently being worked on. Methods borrow it; nothing mutates
/// it, so "try another method" always sees the original coefficients.
struct Session {
    a: Array2<f64>,
    b: Array1<f64>,
}

impl Session {
    fn demo() -> Self {
        println!("\n[!] Loading the example system...");
        Session {
            a: ndarray::array![[3.0, 2.0, -4.0], [2.0, 3.0, 3.0], [5.0, -3.0, 1.0]],
            b: ndarray::array![3.0, 15.0, 14.0],
        }
    }

    fn read_interactive() -> io::Result<Self> {
        table::print_heading("STEP 1: SIZE");
        let n = loop {
            let n = input::prompt_usize("How many unknowns (n)? ")?;
            if n > 0 {
                break n;
            }
            println!(" > The number of unknowns must be positive.");
        };

        table::print_heading("STEP 2: EQUATIONS");
        println!("Enter the coefficients and the right-hand side on one line.");
        println!("E.g. '2 1 10' for 2x + 1y = 10");

        let mut a = Array2::zeros((n, n));
        let mut b = Array1::zeros(n);
        for i in 0..n {
            let row = input::prompt_f64_list(&format!("\nEquation {}: ", i + 1), Some(n + 1))?;
            for j in 0..n {
                a[[i, j]] = row[j];
            }
            b[i] = row[n];
        }
        Ok(Session { a, b })
    }

    /// Echo the system back so typos are caught before solving.
    fn print_confirmation(&self) {
        println!("\n[CONFIRMATION] The system read was:");
        let n = self.b.len();
        for i in 0..n {
            let terms: Vec<String> = (0..n)
                .map(|j| format!("{:+.1}*x{}", self.a[[i, j]], j + 1))
                .collect();
            println!("  Eq {}: {} = {:.2}", i + 1, terms.join(" "), self.b[i]);
        }
    }
}

#[derive(Serialize)]
struct SolveReport {
    method: String,
    solution: Vec<f64>,
    max_residual: f64,
}

fn choose_method() -> io::Result<Method> {
    table::print_heading("STEP 3: METHOD");
    println!("Which algorithm do you want to use?");
    for (i, method) in ALL_METHODS.iter().enumerate() {
        println!("{}. {}", i + 1, method.name());
    }
    let choice = loop {
        let c = input::prompt_choice("\nOption: ", ALL_METHODS.len())?;
        if c >= 1 {
            break c;
        }
        println!(" > Pick one of the methods above.");
    };
    Ok(ALL_METHODS[choice - 1])
}

fn print_solution(session: &Session, solution: &LinearSolution) -> io::Result<()> {
    table::print_heading("RESULT");
    println!("Solution vector (x):");
    for (i, v) in solution.x.iter().enumerate() {
        println!("  x{} = {v:8.4}", i + 1);
    }

    if input::prompt_yes_no("\nShow intermediate matrices? (y/n): ")? {
        for (title, matrix) in solution.details.matrices() {
            println!("\n{}", table::format_matrix(matrix, title));
        }
    }

    let residual = session.a.dot(&solution.x) - &session.b;
    let max = residual.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    println!("\nMax residual |A*x - b|: {max:.3e}");
    Ok(())
}

fn export_report(cli: &Cli, session: &Session, method: Method, solution: &LinearSolution) {
    let residual = session.a.dot(&solution.x) - &session.b;
    let max_residual = residual.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let report = Report::new(
        "linear_systems",
        SolveReport {
            method: method.name().to_string(),
            solution: solution.x.to_vec(),
            max_residual,
        },
    );
    let dir = match plot::plot_output_dir(cli.report_dir.as_deref()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Could not resolve report directory: {e}");
            return;
        }
    };
    match report.write_json(&dir, "linear_systems") {
        Ok(path) => println!("Report written to {}", path.display()),
        Err(e) => eprintln!("Could not write report: {e}"),
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    table::print_title("Linear system solver");

    let mut preload_demo = cli.demo;
    loop {
        println!("\n1. New system (step by step)");
        println!("2. Load example (demo)");
        println!("0. Exit");

        let session = if preload_demo {
            preload_demo = false;
            Session::demo()
        } else {
            match input::prompt_choice("Option: ", 2)? {
                0 => {
                    println!("Closing...");
                    return Ok(());
                }
                1 => Session::read_interactive()?,
                _ => Session::demo(),
            }
        };

        session.print_confirmation();

        // Method loop: same system, as many methods as the user wants.
        loop {
            let method = choose_method()?;
            println!("\nSolving with {}...", method.name());

            match method.solve(&session.a, &session.b) {
                Ok(solution) => {
                    print_solution(&session, &solution)?;
                    if cli.report {
                        export_report(cli, &session, method, &solution);
                    }
                }
                Err(e) => {
                    println!("\n[MATH ERROR]: {e}");
                    if e.is_singular() && method == Method::GaussNaive {
                        println!("Hint: retry with a pivoting method (Gauss or LUP).");
                    }
                }
            }

            println!("\n--------------------------------");
            println!("1. Try another method (same system)");
            println!("2. Enter a new system");
            println!("0. Exit");
            match input::prompt_choice("Option: ", 2)? {
                1 => continue,
                2 => break,
                _ => return Ok(()),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    // A closed stdin just ends the session.
    let _ = run(&cli);
}
