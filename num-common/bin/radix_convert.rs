//! Interactive base converter (bases 2 to 36).

use clap::Parser;
use num_methods_common::{convert_base, input, table};

#[derive(Parser, Debug)]
#[command(name = "radix_convert", about = "Convert integers between bases 2 and 36")]
struct Cli {
    /// Number to convert (skips the prompt)
    #[arg(long)]
    number: Option<String>,

    /// Base the number is currently written in
    #[arg(long)]
    from: Option<u32>,

    /// Base to convert to
    #[arg(long)]
    to: Option<u32>,
}

fn prompt_base(msg: &str) -> std::io::Result<u32> {
    loop {
        let base = input::prompt_usize(msg)? as u32;
        if (2..=36).contains(&base) {
            return Ok(base);
        }
        println!(" > The base must be between 2 and 36.");
    }
}

fn run(cli: &Cli) -> std::io::Result<()> {
    table::print_title("Radix converter (bases 2-36)");

    // One-shot mode when everything came in via flags.
    if let (Some(number), Some(from), Some(to)) = (&cli.number, cli.from, cli.to) {
        match convert_base(number, from, to) {
            Ok(result) => println!("{number} (base {from}) = {result} (base {to})"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    loop {
        let number = input::prompt_line("\nNumber to convert (e.g. 1011, F3, 45): ")?;
        let from = prompt_base("Current base of the number (2-36): ")?;
        let to = prompt_base("Target base (2-36): ")?;

        match convert_base(&number, from, to) {
            Ok(result) => {
                println!("\n{number} (base {from}) = {result} (base {to})");
            }
            Err(e) => println!("\nError: {e}"),
        }

        if !input::prompt_yes_no("\nConvert another number? (y/n): ")? {
            break;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    // A closed stdin just ends the session.
    let _ = run(&cli);
}
