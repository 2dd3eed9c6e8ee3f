//! Terminal User Interface components

mod delay_chart;

pub use delay_chart::{show_inline, DelayChart};
