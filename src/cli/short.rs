// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use std::error::Error;
use std::io::Write;

use crate::cli;

#[derive(Args, Debug)]
pub struct Arguments {
    /// Durations in milliseconds. Use 'short -' to read from stdin.
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,
}

/// Print the short form of each value.
///
/// # Returns
/// The number of values printed.
///
pub fn short<W: Write>(args: Arguments, output: &mut W) -> Result<usize, Box<dyn Error>> {
    debug!("Formatting durations in the short form.");

    let values = cli::parse_values(args.values)?;
    for value in &values {
        writeln!(output, "{}", durafmt::to_string_short(value)?)?;
    }

    Ok(values.len())
}
