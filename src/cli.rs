// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

pub mod components;
pub mod long;
pub mod short;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::trace;
use std::io;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, subcommand_required = true)]
pub struct Options {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// When to print colored output.
    #[arg(long, value_name="WHEN", value_enum, default_value_t=ColorMode::Auto, global=true, env="DURAFMT_COLOR", display_order=2)]
    pub color: ColorMode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ColorMode {
    /// Automatically detect when to print colored output.
    Auto,

    /// Always print colored output.
    Always,

    /// Never print colored output.
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print durations in the short positional form.
    ///
    /// `durafmt short` prints one line per VALUE in the form
    /// `D:HH:MM:SS.mmm`. Days and hours appear only when needed and the
    /// millisecond suffix only when nonzero.
    ///
    /// EXAMPLES
    ///
    /// * Print a duration of 1 minute and 1 second:
    ///
    ///   durafmt short 61000
    ///
    /// * Read durations from stdin:
    ///
    ///   durafmt short -
    ///
    Short(short::Arguments),

    /// Print durations in the long natural-language form.
    ///
    /// `durafmt long` prints one line per VALUE, such as
    /// `1 day, 2 hours, 1 minute, 1 second, and 1 millisecond`. Zero valued
    /// units are omitted.
    ///
    /// EXAMPLES
    ///
    /// * Print a duration of 1 minute and 1 second:
    ///
    ///   durafmt long 61000
    ///
    /// * Omit the comma before the final "and":
    ///
    ///   durafmt long --omit-oxford-comma 61000
    ///
    Long(long::Arguments),

    /// Show the components of durations.
    ///
    /// `durafmt components` breaks each VALUE into days, hours, minutes,
    /// seconds, and milliseconds and prints the components in a table.
    ///
    /// EXAMPLES
    ///
    /// * Show the components of a duration:
    ///
    ///   durafmt components 93661001
    ///
    /// * Print the components as JSON:
    ///
    ///   durafmt components --json 93661001
    ///
    Components(components::Arguments),
}

/// Parse duration values passed in on the command line.
///
/// # Returns
/// `Ok(Vec<String>)` listing all the values to format.
/// - One "-" input reads values from stdin, one per line. Blank lines are
///   skipped.
/// - Otherwise, pass through the given values from the command line.
///
/// `Err(io::Error)` when there is an error reading from stdin.
///
pub fn parse_values(mut values: Vec<String>) -> Result<Vec<String>, io::Error> {
    if values.len() == 1 && values[0] == "-" {
        trace!("Reading values from stdin.");
        values.clear();
        for line in io::stdin().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            values.push(line);
        }
    }

    Ok(values)
}
