// src/presentation.rs
use std::io::{self, Write};

use comfy_table::{Table, presets::UTF8_FULL};
use file_metadata_shared_kernel::{Extraction, FieldRecord, MetadataRecord};
use file_metadata_usecase::Batch;

use crate::config::OutputFormat;

/// Render every outcome of `batch`, in selection order.
///
/// # Errors
///
/// Propagates write failures on `out`.
pub fn render(batch: &Batch, format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(batch, out),
        OutputFormat::Table => render_table(batch, out),
        OutputFormat::Json => render_json(batch, out),
    }
}

fn render_text(batch: &Batch, out: &mut impl Write) -> io::Result<()> {
    for outcome in batch.outcomes() {
        write_block(outcome, out)?;
        writeln!(out)?;
    }
    Ok(())
}

/// One `Name: value` line per field, names padded to a common width.
fn write_block(outcome: &Extraction, out: &mut impl Write) -> io::Result<()> {
    let fields = outcome.fields();
    let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, value) in fields {
        writeln!(out, "{name:<width$} : {value}")?;
    }
    Ok(())
}

fn render_table(batch: &Batch, out: &mut impl Write) -> io::Result<()> {
    if batch.record_count() > 0 {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(MetadataRecord::COLUMNS);
        for record in batch.records() {
            table.add_row(record.fields().into_iter().map(|(_, value)| value));
        }
        writeln!(out, "{table}")?;
    }

    let failures: Vec<_> = batch.failures().collect();
    if !failures.is_empty() {
        writeln!(out)?;
        writeln!(out, "Errors:")?;
        for (_, failure) in failures {
            writeln!(out, "  {}", failure.message)?;
        }
    }
    Ok(())
}

fn render_json(batch: &Batch, out: &mut impl Write) -> io::Result<()> {
    let outcomes: Vec<&Extraction> = batch.outcomes().collect();
    serde_json::to_writer_pretty(&mut *out, &outcomes)?;
    writeln!(out)
}
