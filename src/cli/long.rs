// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use std::error::Error;
use std::io::Write;

use crate::cli;

#[derive(Args, Debug)]
pub struct Arguments {
    /// Omit the comma before the final "and".
    #[arg(long, env = "DURAFMT_OMIT_OXFORD_COMMA", display_order = 0)]
    omit_oxford_comma: bool,

    /// Durations in milliseconds. Use 'long -' to read from stdin.
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,
}

/// Print the long form of each value.
///
/// # Returns
/// The number of values printed.
///
pub fn long<W: Write>(args: Arguments, output: &mut W) -> Result<usize, Box<dyn Error>> {
    debug!(
        "Formatting durations in the long form (omit Oxford comma: {}).",
        args.omit_oxford_comma
    );

    let values = cli::parse_values(args.values)?;
    for value in &values {
        writeln!(
            output,
            "{}",
            durafmt::to_string_long(value, args.omit_oxford_comma)?
        )?;
    }

    Ok(values.len())
}
