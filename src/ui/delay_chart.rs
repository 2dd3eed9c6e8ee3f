//! Terminal bar chart of ranked delays

use crate::chart::{X_LABEL, Y_LABEL};
use crate::stats::RankedSeries;
use crossterm::{execute, style::Print};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
    Terminal, TerminalOptions, Viewport,
};
use std::io::{self, stdout};

/// Rows used by the inline terminal chart
const INLINE_HEIGHT: u16 = 14;

/// Widget drawing one bar per symbol, in ranked order
pub struct DelayChart<'a> {
    series: &'a RankedSeries,
}

impl<'a> DelayChart<'a> {
    pub fn new(series: &'a RankedSeries) -> Self {
        Self { series }
    }
}

impl<'a> Widget for DelayChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} by {} ", Y_LABEL, X_LABEL))
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(Color::Rgb(90, 90, 110)));

        // Bar heights are whole milliseconds; the text shows the rounded average
        let bars: Vec<Bar> = self
            .series
            .iter()
            .map(|(label, avg)| {
                Bar::default()
                    .value(avg.round() as u64)
                    .text_value(format!("{:.0}", avg))
                    .label(Line::from(label))
            })
            .collect();

        BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(3)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Green))
            .value_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .label_style(Style::default().fg(Color::White))
            .render(area, buf);
    }
}

/// Draw the chart below the current cursor line without taking over the screen
pub fn show_inline(series: &RankedSeries) -> io::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(INLINE_HEIGHT),
        },
    )?;

    terminal.draw(|frame| {
        frame.render_widget(DelayChart::new(series), frame.area());
    })?;
    terminal.show_cursor()?;
    execute!(terminal.backend_mut(), Print("\r\n"))?;
    Ok(())
}
