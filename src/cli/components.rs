// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

use clap::Args;
use console::Style;
use log::debug;
use std::error::Error;
use std::io::Write;

use crate::cli;
use crate::ui::{Alignment, Cell, Table};

#[derive(Args, Debug)]
pub struct Arguments {
    /// Print one JSON array per value instead of a table.
    #[arg(long, display_order = 0)]
    json: bool,

    /// Hide the table header.
    #[arg(long, conflicts_with = "json", display_order = 0)]
    no_header: bool,

    /// Durations in milliseconds. Use 'components -' to read from stdin.
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,
}

/// Show the components of each value.
///
/// Print a table of units and values for each duration. Blank lines separate
/// the tables.
///
/// # Returns
/// The number of values printed.
///
pub fn components<W: Write>(args: Arguments, output: &mut W) -> Result<usize, Box<dyn Error>> {
    debug!("Showing duration components.");

    let values = cli::parse_values(args.values)?;
    for (i, value) in values.iter().enumerate() {
        let millis = durafmt::validate(value)?;
        let components = durafmt::decompose(millis);

        if args.json {
            writeln!(output, "{}", serde_json::to_string(&components)?)?;
            continue;
        }

        if i > 0 {
            writeln!(output)?;
        }

        let mut table = Table::new().with_hide_header(args.no_header);
        table.header = vec![
            Cell::new("Unit".into(), Style::new().underlined()),
            Cell::new("Value".into(), Style::new().underlined()).with_alignment(Alignment::Right),
        ];

        for component in components {
            table.rows.push(vec![
                Cell::new(component.unit.to_string(), Style::new().bold()),
                Cell::new(component.value.to_string(), Style::new())
                    .with_alignment(Alignment::Right),
            ]);
        }

        table.write(output)?;
    }

    Ok(values.len())
}
