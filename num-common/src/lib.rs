//! Shared plumbing for the num-methods tool crates
//!
//! This crate collects the pieces every interactive tool needs:
//!
//! - [`grid`]: uniform grids, spacing checks, point sorting, factorials
//! - [`polynomial`]: dense polynomial arithmetic with Horner evaluation
//! - [`table`]: fixed-width ASCII tables and matrix rendering
//! - [`input`]: blocking stdin prompts with local re-prompt on bad input
//! - [`plot`]: plot output directories and HTML writing
//! - [`report`]: timestamped JSON result reports
//! - [`radix`]: integer base conversion (bases 2 to 36)

pub mod grid;
pub mod input;
pub mod plot;
pub mod polynomial;
pub mod radix;
pub mod report;
pub mod table;

pub use grid::{factorial, first_uneven_step, lin_space, sort_points};
pub use polynomial::Polynomial;
pub use radix::{RadixError, convert_base};
pub use report::Report;
