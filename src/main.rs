// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

#![warn(clippy::pedantic)]

use clap::Parser;
use log::{error, info};
use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

mod cli;
mod ui;

use cli::{ColorMode, Commands, Options};
use durafmt::LongDuration;

fn main_detail() -> Result<(), Box<dyn Error>> {
    let instant = Instant::now();
    let options = Options::parse();

    let log_style;
    match options.global.color {
        ColorMode::Never => {
            log_style = "never";
            console::set_colors_enabled(false);
        }
        ColorMode::Always => {
            log_style = "always";
            console::set_colors_enabled(true);
        }
        ColorMode::Auto => {
            log_style = "auto";
        }
    }

    let log_level = match options.verbose.log_level_filter() {
        clap_verbosity_flag::LevelFilter::Off => "off",
        clap_verbosity_flag::LevelFilter::Error => "error",
        clap_verbosity_flag::LevelFilter::Warn => "warn",
        clap_verbosity_flag::LevelFilter::Info => "info",
        clap_verbosity_flag::LevelFilter::Debug => "debug",
        clap_verbosity_flag::LevelFilter::Trace => "trace",
    };

    let env = env_logger::Env::default()
        .filter_or("DURAFMT_LOG", log_level)
        .write_style_or("DURAFMT_LOG_STYLE", log_style);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()?;

    let mut output = BufWriter::new(io::stdout().lock());

    let count = match options.command {
        Some(Commands::Short(args)) => cli::short::short(args, &mut output)?,
        Some(Commands::Long(args)) => cli::long::long(args, &mut output)?,
        Some(Commands::Components(args)) => cli::components::components(args, &mut output)?,
        None => 0,
    };

    output.flush()?;

    let elapsed = u64::try_from(instant.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(
        "Formatted {count} durations in {}.",
        LongDuration::new(elapsed)
    );

    Ok(())
}

fn main() -> ExitCode {
    if let Err(error) = main_detail() {
        error!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
