//! Console summary and chart hand-off

use crate::chart::{ChartError, ChartRequest, ChartSink};
use crate::stats::{rank_delays, DelayTable, RankedSeries};
use log::info;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Errors raised while presenting results
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write summary: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to render chart: {0}")]
    Chart(#[from] ChartError),
}

/// Write the raw count and total delay of every character, one
/// tab-indented block per character.
pub fn write_summary<W: Write>(table: &DelayTable, out: &mut W) -> io::Result<()> {
    for (symbol, record) in table {
        writeln!(out, "{}:", symbol)?;
        writeln!(out, "\tcount: {}", record.count)?;
        writeln!(out, "\tdelay: {}", record.total_delay_ms)?;
    }
    out.flush()
}

/// Print the summary, rank the table and send the chart to `sink`.
///
/// The summary is fully written before charting starts, so a chart failure
/// never loses it.
pub fn present<W, S>(
    table: &DelayTable,
    out: &mut W,
    sink: &mut S,
    output: &Path,
) -> Result<RankedSeries, ReportError>
where
    W: Write,
    S: ChartSink + ?Sized,
{
    write_summary(table, out)?;

    let series = rank_delays(table);
    let request = ChartRequest::from_series(&series, output);
    sink.render(&request)?;
    info!("Chart with {} bar(s) saved to {}", series.len(), output.display());

    Ok(series)
}
