//! Blocking stdin prompts with local re-prompt on invalid input
//!
//! Every helper loops until the user types something parseable, printing a
//! short hint on failure. The only error surfaced to callers is end of input
//! (closed stdin), which the tools treat as "quit".

use std::io::{self, BufRead, Write};

/// Read one line after printing `msg` without a newline.
///
/// Returns `Err` only when stdin is closed.
pub fn prompt_line(msg: &str) -> io::Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompt until the user enters a floating-point number.
///
/// Commas are accepted as decimal separators.
pub fn prompt_f64(msg: &str) -> io::Result<f64> {
    loop {
        let line = prompt_line(msg)?;
        match line.replace(',', ".").parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!(" > Invalid value, try again."),
        }
    }
}

/// Prompt until the user enters a non-negative integer.
pub fn prompt_usize(msg: &str) -> io::Result<usize> {
    loop {
        let line = prompt_line(msg)?;
        match line.parse::<usize>() {
            Ok(v) => return Ok(v),
            Err(_) => println!(" > Invalid value, enter an integer."),
        }
    }
}

/// Prompt until the user enters a whitespace- or comma-separated list of
/// numbers. An expected length of `None` accepts any non-empty list.
pub fn prompt_f64_list(msg: &str, expected_len: Option<usize>) -> io::Result<Vec<f64>> {
    loop {
        let line = prompt_line(msg)?;
        let parsed: Result<Vec<f64>, _> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::parse::<f64>)
            .collect();
        match parsed {
            Ok(values) if values.is_empty() => {
                println!(" > Enter at least one number.");
            }
            Ok(values) => {
                if let Some(n) = expected_len {
                    if values.len() != n {
                        println!(" > Enter exactly {n} numbers.");
                        continue;
                    }
                }
                return Ok(values);
            }
            Err(_) => println!(" > Only numbers are accepted."),
        }
    }
}

/// Prompt until the user picks a menu option in `0..=max`.
pub fn prompt_choice(msg: &str, max: usize) -> io::Result<usize> {
    loop {
        let line = prompt_line(msg)?;
        match line.parse::<usize>() {
            Ok(v) if v <= max => return Ok(v),
            _ => println!(" > Enter an option between 0 and {max}."),
        }
    }
}

/// Prompt for a yes/no answer; `y`, `yes`, `s` count as yes.
pub fn prompt_yes_no(msg: &str) -> io::Result<bool> {
    let line = prompt_line(msg)?;
    let line = line.to_lowercase();
    Ok(matches!(line.as_str(), "y" | "yes" | "s"))
}

/// Prompt for a short name, falling back to `default` on empty input.
pub fn prompt_label(msg: &str, default: &str) -> io::Result<String> {
    let line = prompt_line(msg)?;
    if line.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(line)
    }
}
