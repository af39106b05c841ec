// PlantSafe - ui/table.rs
//
// Plain-text plant table: Name, Scientific, Family, Toxicity.
// Columns are left-aligned and sized to their widest cell.

use crate::core::model::Plant;
use crate::core::sort::SortColumn;
use std::io::{self, Write};

/// Gap between columns.
const COLUMN_GAP: &str = "  ";

/// Render the table with a header row and a dashed rule.
pub fn render<'a, W, I>(out: &mut W, plants: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Plant>,
{
    let columns = SortColumn::all();
    let rows: Vec<Vec<&str>> = plants
        .into_iter()
        .map(|p| columns.iter().map(|c| c.cell(p)).collect())
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.label().chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<&str> = columns.iter().map(|c| c.label()).collect();
    write_row(out, &header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
    write_row(out, &rule, &widths)?;

    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[&str], widths: &[usize]) -> io::Result<()> {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            // No trailing padding on the final column.
            write!(out, "{cell}")?;
        } else {
            let pad = width.saturating_sub(cell.chars().count());
            write!(out, "{cell}{}{COLUMN_GAP}", " ".repeat(pad))?;
        }
    }
    writeln!(out)
}
