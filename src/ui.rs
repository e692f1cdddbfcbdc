// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

use console::Style;
use std::cmp;
use std::io::{self, Write};

pub(crate) enum Alignment {
    Left,
    Right,
}

/// One styled cell in a table.
pub(crate) struct Cell {
    text: String,
    style: Style,
    alignment: Alignment,
}

/// A table with columns sized to fit the widest cell.
pub(crate) struct Table {
    pub header: Vec<Cell>,

    pub rows: Vec<Vec<Cell>>,

    // Skip the header when true.
    hide_header: bool,
}

impl Cell {
    pub(crate) fn new(text: String, style: Style) -> Self {
        Cell {
            text,
            style,
            alignment: Alignment::Left,
        }
    }

    pub(crate) fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Table {
    pub(crate) fn new() -> Self {
        Table {
            header: Vec::new(),
            rows: Vec::new(),
            hide_header: false,
        }
    }

    pub(crate) fn with_hide_header(mut self, hide_header: bool) -> Self {
        self.hide_header = hide_header;
        self
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .header
            .iter()
            .map(|cell| console::measure_text_width(&cell.text))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = console::measure_text_width(&cell.text);
                match widths.get_mut(i) {
                    Some(w) => *w = cmp::max(*w, width),
                    None => widths.push(width),
                }
            }
        }

        widths
    }

    fn write_row<W: Write>(writer: &mut W, row: &[Cell], widths: &[usize]) -> io::Result<()> {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, &width)| {
                let text = match cell.alignment {
                    Alignment::Left => format!("{:<width$}", cell.text),
                    Alignment::Right => format!("{:>width$}", cell.text),
                };
                cell.style.apply_to(text).to_string()
            })
            .collect();

        writeln!(writer, "{}", cells.join(" "))
    }

    pub(crate) fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let widths = self.column_widths();

        if !self.hide_header {
            Self::write_row(writer, &self.header, &widths)?;
        }

        for row in &self.rows {
            Self::write_row(writer, row, &widths)?;
        }

        Ok(())
    }
}
