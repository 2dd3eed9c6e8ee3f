//! Keystroke Delay - measures how long each typed character takes to arrive
//!
//! Collects characters until the terminator, prints per-character totals and
//! saves a bar chart of the average delays.

use anyhow::{Context, Result};
use log::{info, warn};
use std::io::{self, IsTerminal};

use keystroke_delay::{
    chart::SvgChart,
    config::Config,
    input::{ReaderSource, TerminalSource},
    report,
    stats::{DelayCollector, DelayTable},
    ui,
};

fn collect(config: &Config) -> Result<DelayTable> {
    let terminator = config.input.terminator;
    let mut collector = DelayCollector::new(terminator);

    if io::stdin().is_terminal() {
        println!("Type characters, finish with '{}' (Esc also ends input):", terminator);
        let mut source = TerminalSource::new().context("Failed to enable raw terminal mode")?;
        Ok(collector.collect(&mut source)?)
    } else {
        info!("Reading characters from piped input");
        let mut source = ReaderSource::new(io::stdin().lock());
        Ok(collector.collect(&mut source)?)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Using default config: {}", e);
        Config::default()
    });

    let table = collect(&config)?;

    let mut sink = SvgChart::default();
    let series = report::present(&table, &mut io::stdout(), &mut sink, &config.chart.output)
        .with_context(|| format!("Could not save chart to {}", config.chart.output.display()))?;

    println!("Chart saved to {}", config.chart.output.display());

    if io::stdout().is_terminal() && !series.is_empty() {
        ui::show_inline(&series).context("Failed to draw terminal chart")?;
    }

    Ok(())
}
