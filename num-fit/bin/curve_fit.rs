//! Interactive curve-fitting tool.
//!
//! Reads (x, y) data with axis labels, fits a least-squares polynomial or
//! the endpoint line, reports R-squared and residual variance, writes the
//! plots as HTML files, and answers predictions in both directions.

use clap::Parser;
use num_methods_common::{Polynomial, Report, input, lin_space, plot, sort_points, table};
use num_methods_fit::{FitMetrics, endpoint_line, fit_metrics, polyfit, real_solutions};
use plotly::common::{Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "curve_fit", about = "Least-squares polynomial curve fitting")]
struct Cli {
    /// Do not write plot files
    #[arg(long)]
    no_plot: bool,

    /// Directory for plot files (defaults to the user cache dir)
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Start with a built-in example data set
    #[arg(long)]
    demo: bool,

    /// Export each fit as a JSON report
    #[arg(long)]
    report: bool,
}

/// The data set currently loaded, sorted by x.
struct Session {
    xs: Vec<f64>,
    ys: Vec<f64>,
    x_label: String,
    y_label: String,
}

impl Session {
    fn demo() -> Self {
        println!("\n[!] Loading example data (heights vs weights)...");
        let (xs, ys) = sort_points(
            &[1.60, 1.72, 1.58, 1.80, 1.67, 1.75],
            &[58.0, 71.0, 55.0, 84.0, 63.0, 76.0],
        );
        Session {
            xs,
            ys,
            x_label: "Height".to_string(),
            y_label: "Weight".to_string(),
        }
    }

    fn read_interactive() -> io::Result<Self> {
        table::print_heading("Data entry");
        let (xs, ys) = loop {
            let xs = input::prompt_f64_list("Enter the X coordinates separated by spaces: ", None)?;
            let ys = input::prompt_f64_list("Enter the Y coordinates separated by spaces: ", None)?;
            if xs.len() != ys.len() || xs.len() < 2 {
                println!("ERROR: different lengths or too few points (minimum 2).");
                continue;
            }
            break sort_points(&xs, &ys);
        };
        let x_label = input::prompt_label("Name for the X axis (e.g. Height): ", "X axis")?;
        let y_label = input::prompt_label("Name for the Y axis (e.g. Weight): ", "Y axis")?;
        Ok(Session {
            xs,
            ys,
            x_label,
            y_label,
        })
    }
}

#[derive(Serialize)]
struct FitReport {
    model: String,
    equation: String,
    coefficients: Vec<f64>,
    metrics: FitMetrics,
}

fn base_layout(title: &str, x_label: &str, y_label: &str) -> Layout {
    Layout::new()
        .title(Title::with_text(title))
        .x_axis(Axis::new().title(Title::with_text(x_label)))
        .y_axis(Axis::new().title(Title::with_text(y_label)))
}

fn write_plot_file(cli: &Cli, plot: &Plot, stem: &str) {
    if cli.no_plot {
        return;
    }
    let dir = match plot::plot_output_dir(cli.plot_dir.as_deref()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Could not resolve plot directory: {e}");
            return;
        }
    };
    match plot::write_plot(plot, &dir, stem) {
        Ok(path) => println!(">>> Plot written to {}", path.display()),
        Err(e) => eprintln!("Could not write plot: {e}"),
    }
}

/// Scatter of the data plus a smooth model curve.
fn plot_fit(cli: &Cli, session: &Session, model: &Polynomial<f64>, title: &str, stem: &str) {
    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(session.xs.clone(), session.ys.clone())
            .mode(Mode::Markers)
            .name("Original data"),
    );

    let lo = session.xs.first().copied().unwrap_or(0.0);
    let hi = session.xs.last().copied().unwrap_or(1.0);
    let grid = lin_space(lo, hi, 500);
    let curve: Vec<f64> = grid.iter().map(|&x| model.eval(x)).collect();
    plot.add_trace(
        Scatter::new(grid, curve)
            .mode(Mode::Lines)
            .name(title),
    );

    plot.set_layout(base_layout(title, &session.x_label, &session.y_label));
    write_plot_file(cli, &plot, stem);
}

/// Scatter of the data only.
fn plot_points(cli: &Cli, session: &Session) {
    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(session.xs.clone(), session.ys.clone())
            .mode(Mode::Markers)
            .name("Collected data"),
    );
    plot.set_layout(base_layout(
        "Data points",
        &session.x_label,
        &session.y_label,
    ));
    write_plot_file(cli, &plot, "fit_points");
}

/// Data, model curve, and one highlighted prediction.
fn plot_prediction(
    cli: &Cli,
    session: &Session,
    model: &Polynomial<f64>,
    marks: &[(f64, f64)],
    title: &str,
) {
    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(session.xs.clone(), session.ys.clone())
            .mode(Mode::Markers)
            .name("Original data"),
    );

    let mut lo = session.xs.first().copied().unwrap_or(0.0);
    let mut hi = session.xs.last().copied().unwrap_or(1.0);
    for &(x, _) in marks {
        lo = lo.min(x);
        hi = hi.max(x);
    }
    let margin = (hi - lo).abs().max(1.0) * 0.1;
    let grid = lin_space(lo - margin, hi + margin, 500);
    let curve: Vec<f64> = grid.iter().map(|&x| model.eval(x)).collect();
    plot.add_trace(
        Scatter::new(grid, curve)
            .mode(Mode::Lines)
            .name("Fitted model"),
    );

    let (mx, my): (Vec<f64>, Vec<f64>) = marks.iter().copied().unzip();
    plot.add_trace(
        Scatter::new(mx, my)
            .mode(Mode::Markers)
            .name("Prediction"),
    );

    plot.set_layout(base_layout(title, &session.x_label, &session.y_label));
    write_plot_file(cli, &plot, "fit_prediction");
}

fn export_report(cli: &Cli, model_name: &str, model: &Polynomial<f64>, metrics: FitMetrics) {
    if !cli.report {
        return;
    }
    let report = Report::new(
        "curve_fit",
        FitReport {
            model: model_name.to_string(),
            equation: format!("y = {model}"),
            coefficients: model.coeffs().to_vec(),
            metrics,
        },
    );
    let dir = match plot::plot_output_dir(cli.plot_dir.as_deref()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Could not resolve report directory: {e}");
            return;
        }
    };
    match report.write_json(&dir, "curve_fit") {
        Ok(path) => println!("Report written to {}", path.display()),
        Err(e) => eprintln!("Could not write report: {e}"),
    }
}

/// Prediction submenu on top of a fitted model.
fn prediction_menu(cli: &Cli, session: &Session, model: &Polynomial<f64>) -> io::Result<()> {
    loop {
        println!("\n>>> PREDICTIONS (based on the current fit) <<<");
        println!(
            "1. Find {} (Y) given a value of {} (X)",
            session.y_label, session.x_label
        );
        println!(
            "2. Find {} (X) given a value of {} (Y)",
            session.x_label, session.y_label
        );
        println!("0. Back to the main menu");
        match input::prompt_choice("Choose an option: ", 2)? {
            0 => return Ok(()),
            1 => {
                let x = input::prompt_f64(&format!("Value of {} (X): ", session.x_label))?;
                let y = model.eval(x);
                println!(
                    "\n---> For {} = {x}, the model estimates {} = {y:.5}",
                    session.x_label, session.y_label
                );
                plot_prediction(cli, session, model, &[(x, y)], "Prediction: Y given X");
            }
            _ => {
                let target = input::prompt_f64(&format!("Target {} (Y): ", session.y_label))?;
                let solutions = real_solutions(model, target);
                if solutions.is_empty() {
                    println!(
                        "\n---> No real {} value reaches this {} in the current model.",
                        session.x_label, session.y_label
                    );
                } else {
                    println!(
                        "\n---> For {} = {target}, possible {} value(s):",
                        session.y_label, session.x_label
                    );
                    for (i, x) in solutions.iter().enumerate() {
                        println!("   Option {}: {x:.5}", i + 1);
                    }
                    let marks: Vec<(f64, f64)> =
                        solutions.iter().map(|&x| (x, target)).collect();
                    plot_prediction(cli, session, model, &marks, "Prediction: X given Y");
                }
            }
        }
    }
}

fn run_polyfit(cli: &Cli, session: &Session) -> io::Result<()> {
    let degree = input::prompt_usize("Polynomial degree (1=line, 2=parabola, ...): ")?;
    let model = match polyfit(&session.xs, &session.ys, degree) {
        Ok(model) => model,
        Err(e) => {
            println!("Error: {e}");
            return Ok(());
        }
    };

    let predicted: Vec<f64> = session.xs.iter().map(|&x| model.eval(x)).collect();
    let metrics = fit_metrics(&session.ys, &predicted, degree + 1);

    println!("\n--- Least squares, degree {degree} ---");
    println!("y = {model}");
    println!(
        "R²: {:.5} | residual variance: {:.5}",
        metrics.r_squared, metrics.residual_variance
    );

    plot_fit(
        cli,
        session,
        &model,
        &format!("Least squares (degree {degree})"),
        "fit_least_squares",
    );
    export_report(cli, &format!("least_squares_degree_{degree}"), &model, metrics);
    prediction_menu(cli, session, &model)
}

fn run_endpoint_line(cli: &Cli, session: &Session) -> io::Result<()> {
    let model = match endpoint_line(&session.xs, &session.ys) {
        Ok(model) => model,
        Err(e) => {
            println!("Error: {e}");
            return Ok(());
        }
    };

    let predicted: Vec<f64> = session.xs.iter().map(|&x| model.eval(x)).collect();
    let metrics = fit_metrics(&session.ys, &predicted, 2);

    println!("\n--- Line through the endpoints ---");
    println!("y = {model}");
    println!(
        "R²: {:.5} | residual variance: {:.5}",
        metrics.r_squared, metrics.residual_variance
    );

    plot_fit(cli, session, &model, "Endpoint line", "fit_endpoint_line");
    export_report(cli, "endpoint_line", &model, metrics);
    prediction_menu(cli, session, &model)
}

/// Straight polyline through the data, no model at all.
fn run_connect_points(cli: &Cli, session: &Session) {
    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(session.xs.clone(), session.ys.clone())
            .mode(Mode::LinesMarkers)
            .name("Direct connection"),
    );
    plot.set_layout(base_layout(
        "Linear interpolation (visual)",
        &session.x_label,
        &session.y_label,
    ));
    write_plot_file(cli, &plot, "fit_connect_points");
}

fn run(cli: &Cli) -> io::Result<()> {
    let mut session = if cli.demo {
        Session::demo()
    } else {
        Session::read_interactive()?
    };

    loop {
        table::print_title("Curve fitting tool");
        println!(
            "Current data: {} points | X: {} | Y: {}",
            session.xs.len(),
            session.x_label,
            session.y_label
        );
        println!("1. Linear interpolation (visual)");
        println!("2. Line through first and last point");
        println!("3. Least squares (polynomial regression)");
        println!("{}", "-".repeat(30));
        println!("4. Plot the points only");
        println!("5. Enter new data");
        println!("0. Exit");

        match input::prompt_choice("Option: ", 5)? {
            0 => {
                println!("Closing the application...");
                return Ok(());
            }
            1 => run_connect_points(cli, &session),
            2 => run_endpoint_line(cli, &session)?,
            3 => run_polyfit(cli, &session)?,
            4 => plot_points(cli, &session),
            _ => session = Session::read_interactive()?,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    // A closed stdin just ends the session.
    let _ = run(&cli);
}
