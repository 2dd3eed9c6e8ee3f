//! Integration tests for Keystroke Delay
//!
//! These tests run the full pipeline: characters from an in-memory reader,
//! scripted timing, the console summary and chart rendering.

use keystroke_delay::chart::{ChartError, ChartRequest, ChartSink, SvgChart};
use keystroke_delay::config::Config;
use keystroke_delay::input::{ManualClock, ReaderSource};
use keystroke_delay::report::{self, ReportError};
use keystroke_delay::stats::{average_delays, rank_delays, DelayCollector, DelayTable};
use keystroke_delay::ui::DelayChart;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Default)]
struct RecordingSink {
    requests: Vec<ChartRequest>,
}

impl ChartSink for RecordingSink {
    fn render(&mut self, request: &ChartRequest) -> Result<(), ChartError> {
        self.requests.push(request.clone());
        Ok(())
    }
}

/// Collect `input` with the n-th character arriving after `delays[n]` ms
fn collect(input: &str, delays: &[u64]) -> DelayTable {
    let mut source = ReaderSource::new(Cursor::new(input.as_bytes().to_vec()));
    let mut collector = DelayCollector::with_clock('.', ManualClock::from_delays(delays));
    collector.collect(&mut source).expect("collection failed")
}

fn run(table: &DelayTable) -> (String, RecordingSink) {
    let mut out = Vec::new();
    let mut sink = RecordingSink::default();
    report::present(table, &mut out, &mut sink, Path::new("chart.svg")).expect("present failed");
    (String::from_utf8(out).unwrap(), sink)
}

fn temp_svg(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "keystroke-delay-it-{}-{}.svg",
        name,
        std::process::id()
    ))
}

/// Trimmed contents of every `<text>` element, in drawing order
fn svg_texts(svg: &str) -> Vec<String> {
    svg.split("<text")
        .skip(1)
        .filter_map(|element| {
            let body = &element[element.find('>')? + 1..];
            Some(body[..body.find("</text>")?].trim().to_string())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn single_character_session() {
    let table = collect("a.", &[250]);
    let (summary, sink) = run(&table);

    assert_eq!(summary, "a:\n\tcount: 1\n\tdelay: 250\n");
    assert_eq!(sink.requests[0].labels, vec!["a"]);
    assert_eq!(sink.requests[0].values, vec![250.0]);
}

#[test]
fn repeated_characters_are_ranked_by_average() {
    // a=10, a=20, b=5; the 30 ms wait for the terminator is dropped
    let table = collect("aab.", &[10, 20, 5, 30]);
    let (summary, sink) = run(&table);

    assert!(summary.contains("a:\n\tcount: 2\n\tdelay: 30\n"));
    assert!(summary.contains("b:\n\tcount: 1\n\tdelay: 5\n"));

    let req = &sink.requests[0];
    assert_eq!(req.labels, vec!["b", "a"]);
    assert_eq!(req.values, vec![5.0, 15.0]);
}

#[test]
fn immediate_terminator_produces_empty_chart() {
    let table = collect(".", &[]);
    assert!(table.is_empty());

    let path = temp_svg("empty");
    let mut out = Vec::new();
    let series = report::present(&table, &mut out, &mut SvgChart::default(), &path)
        .expect("empty chart should not fail");

    assert!(out.is_empty());
    assert!(series.is_empty());
    assert!(path.exists());

    let _ = fs::remove_file(&path);
}

#[test]
fn end_of_stream_without_terminator() {
    let table = collect("xy", &[]);

    assert_eq!(table.get('x').unwrap().count, 1);
    assert_eq!(table.get('y').unwrap().count, 1);
    assert_eq!(table.len(), 2);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn counts_match_characters_consumed() {
    let input = "abracadabra\nsimsalabim.";
    let table = collect(input, &[]);
    let consumed = input
        .chars()
        .take_while(|c| *c != '.')
        .filter(|c| !c.is_whitespace())
        .count() as u64;

    assert_eq!(table.total_count(), consumed);
}

#[test]
fn ranked_series_matches_table_averages() {
    let delays: Vec<u64> = (0..20).map(|i| (i * 37) % 90).collect();
    let table = collect("qwertyqwertyasdfasdf.", &delays);
    let ranked = rank_delays(&table);

    assert_eq!(ranked.len(), table.len());
    assert!(ranked.average_delays.windows(2).all(|w| w[0] <= w[1]));
    for (label, avg) in ranked.iter() {
        let symbol = label.chars().next().unwrap();
        assert_eq!(table.get(symbol).unwrap().average_ms(), avg);
    }

    let mut sorted_avgs = average_delays(&table);
    sorted_avgs.sort_by(f64::total_cmp);
    assert_eq!(sorted_avgs, ranked.average_delays);
}

#[test]
fn aggregation_does_not_mutate_table() {
    let table = collect("hello.", &[5, 10, 15, 20, 25]);
    let before = table.clone();

    let first = rank_delays(&table);
    let second = rank_delays(&table);

    assert_eq!(first, second);
    assert_eq!(table, before);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn svg_chart_written_for_session() {
    let table = collect("zzy.", &[40, 60, 10]);
    let path = temp_svg("session");

    let mut out = Vec::new();
    let mut sink = SvgChart::new(640, 480);
    report::present(&table, &mut out, &mut sink, &path).expect("chart failed");

    let svg = fs::read_to_string(&path).expect("chart missing");
    assert!(svg.contains("symbol"));
    assert!(svg.contains("average delay (ms)"));

    // y (10 ms) ranks ahead of z (50 ms), one bar each
    let bars = svg
        .split("<rect")
        .skip(1)
        .filter(|element| element.contains("fill=\"#00FF00\""))
        .count();
    assert_eq!(bars, 2);

    let labels: Vec<String> = svg_texts(&svg)
        .into_iter()
        .filter(|t| t == "y" || t == "z")
        .collect();
    assert_eq!(labels, vec!["y", "z"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn unwritable_chart_path_reports_error_after_summary() {
    let table = collect("ab.", &[]);
    let mut out = Vec::new();
    let result = report::present(
        &table,
        &mut out,
        &mut SvgChart::default(),
        Path::new("/nonexistent-dir/keystroke-delay/chart.svg"),
    );

    assert!(matches!(result, Err(ReportError::Chart(_))));
    assert!(String::from_utf8(out).unwrap().starts_with("a:\n"));
}

#[test]
fn terminal_chart_renders_session() {
    let table = collect("aab.", &[10, 20, 5]);
    let series = rank_delays(&table);

    let area = Rect::new(0, 0, 40, 12);
    let mut buf = Buffer::empty(area);
    DelayChart::new(&series).render(area, &mut buf);

    let text: String = buf.content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("average delay (ms)"));
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn configured_terminator_drives_collection() {
    let config = Config::parse("[input]\nterminator = \"#\"\n").expect("config parse");
    let mut source = ReaderSource::new(Cursor::new(b"a.b#c".to_vec()));
    let mut collector =
        DelayCollector::with_clock(config.input.terminator, ManualClock::default());
    let table = collector.collect(&mut source).unwrap();

    assert_eq!(table.total_count(), 3);
    assert!(table.get('.').is_some());
    assert!(table.get('c').is_none());
}
