//! Interactive ODE solver with phase-space plotting.
//!
//! The user names the variables, types one first-order equation per
//! dependent variable, picks a method, and gets the final state, a
//! trajectory or phase-space plot, and an optional comparison against an
//! exact solution.

use clap::Parser;
use ndarray::Array1;
use num_methods_common::{input, plot, table};
use num_methods_expr::{EvalContext, Expr};
use num_methods_ode::{ALL_METHODS, OdeMethod, OdeSolution, integrate};
use plotly::common::{Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter, Scatter3D};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ode_solver",
    about = "Fixed-step ODE integration (Euler, improved Euler, RK4)"
)]
struct Cli {
    /// Do not write plot files
    #[arg(long)]
    no_plot: bool,

    /// Directory for plot files (defaults to the user cache dir)
    #[arg(long)]
    plot_dir: Option<PathBuf>,
}

/// Everything the user typed: variable names, right-hand sides, initial
/// state and grid parameters.
struct Problem {
    t_name: String,
    y_names: Vec<String>,
    equations: Vec<Expr>,
    y0: Array1<f64>,
    t0: f64,
    t_end: f64,
    h: f64,
}

/// Prompt for a numeric value written as a constant expression, so `1/3`
/// and `pi/4` are accepted alongside plain numbers.
fn prompt_value(msg: &str) -> io::Result<f64> {
    loop {
        let text = input::prompt_line(msg)?;
        match Expr::parse(&text) {
            Ok(expr) => match expr.eval(&EvalContext::new()) {
                Ok(v) if v.is_finite() => return Ok(v),
                Ok(_) => println!(" > The value is not finite."),
                Err(e) => println!(" > {e}"),
            },
            Err(_) => {
                println!(" > Could not read '{text}'. Use numbers (e.g. 0.5) or expressions (e.g. 1/3).");
            }
        }
    }
}

fn read_problem() -> io::Result<Problem> {
    let t_name = input::prompt_label("Name of the independent variable (e.g. t, x): ", "t")?;

    let n_eq = loop {
        let n = input::prompt_usize("Number of equations/variables (1-3): ")?;
        if (1..=3).contains(&n) {
            break n;
        }
        println!(" > Between 1 and 3 equations.");
    };

    let mut y_names = Vec::with_capacity(n_eq);
    println!("Name your {n_eq} dependent variable(s):");
    for i in 0..n_eq {
        let default = format!("y{i}");
        let name = input::prompt_label(&format!("Variable {} (e.g. y, v, z): ", i + 1), &default)?;
        y_names.push(name);
    }

    let allowed: Vec<&str> = std::iter::once(t_name.as_str())
        .chain(y_names.iter().map(String::as_str))
        .collect();

    println!("\nEnter the equations using '{t_name}' and {y_names:?}:");
    let mut equations = Vec::with_capacity(n_eq);
    let mut y0 = Array1::zeros(n_eq);
    for (i, name) in y_names.iter().enumerate() {
        let expr = loop {
            let text = input::prompt_line(&format!("d({name})/d({t_name}) = "))?;
            match Expr::parse(&text) {
                Ok(expr) => match expr.check_variables(&allowed) {
                    Ok(()) => break expr,
                    Err(e) => println!(" > {e}"),
                },
                Err(e) => println!(" > Syntax error: {e}"),
            }
        };
        equations.push(expr);
        y0[i] = prompt_value(&format!("Initial value of {name} ({name}0): "))?;
    }

    table::print_heading("Interval setup");
    let t0 = prompt_value(&format!("Start ({t_name}0): "))?;
    let t_end = prompt_value(&format!("End ({t_name}_final): "))?;
    let h = prompt_value("Step (h): ")?;

    Ok(Problem {
        t_name,
        y_names,
        equations,
        y0,
        t0,
        t_end,
        h,
    })
}

fn choose_method() -> io::Result<OdeMethod> {
    table::print_heading("Numerical method");
    for (i, method) in ALL_METHODS.iter().enumerate() {
        println!("{} - {}", i + 1, method.name());
    }
    let choice = loop {
        let c = input::prompt_choice("Choose (1-3): ", ALL_METHODS.len())?;
        if c >= 1 {
            break c;
        }
        println!(" > Pick one of the methods above.");
    };
    Ok(ALL_METHODS[choice - 1])
}

/// The parsed right-hand sides as one vector function.
fn system_fn<'a>(
    problem: &'a Problem,
) -> impl Fn(f64, &Array1<f64>) -> Array1<f64> + 'a {
    move |t: f64, y: &Array1<f64>| {
        let mut ctx = EvalContext::new();
        ctx.set(&problem.t_name, t);
        for (name, &value) in problem.y_names.iter().zip(y.iter()) {
            ctx.set(name, value);
        }
        Array1::from_iter(
            problem
                .equations
                .iter()
                .map(|eq| eq.eval(&ctx).unwrap_or(f64::NAN)),
        )
    }
}

fn plot_solution(cli: &Cli, problem: &Problem, solution: &OdeSolution, method: OdeMethod) {
    if cli.no_plot {
        return;
    }

    let mut plot = Plot::new();
    match problem.y_names.len() {
        1 => {
            plot.add_trace(
                Scatter::new(solution.times.clone(), solution.component(0))
                    .mode(Mode::LinesMarkers)
                    .name(&problem.y_names[0]),
            );
            plot.set_layout(
                Layout::new()
                    .title(Title::with_text(format!(
                        "Numerical solution: {}",
                        method.name()
                    )))
                    .x_axis(Axis::new().title(Title::with_text(format!(
                        "Independent variable ({})",
                        problem.t_name
                    ))))
                    .y_axis(Axis::new().title(Title::with_text(format!(
                        "Dependent variable ({})",
                        problem.y_names[0]
                    )))),
            );
        }
        2 => {
            // Phase space with time on the vertical axis.
            plot.add_trace(
                Scatter3D::new(
                    solution.component(0),
                    solution.component(1),
                    solution.times.clone(),
                )
                .mode(Mode::Lines)
                .name("Trajectory"),
            );
            plot.set_layout(Layout::new().title(Title::with_text(format!(
                "Phase space ({})",
                method.name()
            ))));
        }
        _ => {
            plot.add_trace(
                Scatter3D::new(
                    solution.component(0),
                    solution.component(1),
                    solution.component(2),
                )
                .mode(Mode::Lines)
                .name("Attractor"),
            );
            plot.set_layout(Layout::new().title(Title::with_text(format!(
                "Phase space ({})",
                method.name()
            ))));
        }
    }

    let dir = match plot::plot_output_dir(cli.plot_dir.as_deref()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Could not resolve plot directory: {e}");
            return;
        }
    };
    match plot::write_plot(&plot, &dir, "ode_solution") {
        Ok(path) => println!("[Info] Plot written to {}", path.display()),
        Err(e) => eprintln!("Could not write plot: {e}"),
    }
}

/// Compare the final state against user-typed exact solutions.
fn error_analysis(problem: &Problem, solution: &OdeSolution) -> io::Result<()> {
    if !input::prompt_yes_no("\nCompare against the exact solution? (y/n): ")? {
        return Ok(());
    }

    table::print_heading("Error analysis");
    println!("Enter the exact solution formula for each variable:");

    let t_final = *solution.times.last().unwrap_or(&problem.t_end);
    for (i, name) in problem.y_names.iter().enumerate() {
        let expr = loop {
            let text = input::prompt_line(&format!("{name}_exact({}) = ", problem.t_name))?;
            match Expr::parse(&text) {
                Ok(expr) => match expr.check_variables(&[problem.t_name.as_str()]) {
                    Ok(()) => break expr,
                    Err(e) => println!(" > {e}"),
                },
                Err(e) => println!(" > Syntax error: {e}"),
            }
        };

        match expr.eval_single(&problem.t_name, t_final) {
            Ok(exact) => {
                let numeric = solution.final_state()[i];
                println!("\n--- Final comparison for '{name}' ---");
                println!("Numeric: {numeric:.6}");
                println!("Exact:   {exact:.6}");
                if exact.abs() > 1e-9 {
                    let pct = ((exact - numeric) / exact).abs() * 100.0;
                    println!("Error:   {pct:.4}%");
                } else {
                    println!(" [Note: exact value is 0, showing absolute error]");
                    println!("Error:   {:.6e}", (exact - numeric).abs());
                }
            }
            Err(e) => println!("Error evaluating '{name}': {e}"),
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> io::Result<()> {
    table::print_title("ODE solver + error analysis");

    loop {
        let problem = read_problem()?;
        let method = choose_method()?;

        let f = system_fn(&problem);
        match integrate(f, problem.t0, &problem.y0, problem.h, problem.t_end, method) {
            Ok(solution) => {
                table::print_heading("Final numerical result");
                let t_final = solution.times.last().copied().unwrap_or(problem.t0);
                println!("Time ({}): {t_final:.4}", problem.t_name);
                let last = solution.final_state();
                for (name, value) in problem.y_names.iter().zip(last.iter()) {
                    println!("{name}: {value:.6}");
                }

                plot_solution(cli, &problem, &solution, method);
                error_analysis(&problem, &solution)?;
            }
            Err(e) => println!("\n[SETUP ERROR]: {e}"),
        }

        if !input::prompt_yes_no("\nSolve another problem? (y/n): ")? {
            return Ok(());
        }
    }
}

fn main() {
    let cli = Cli::parse();
    // A closed stdin just ends the session.
    let _ = run(&cli);
}
