use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use zonesnatcher_core::orchestrator::ProgressCallback;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

const TEMPLATE: &str = "{spinner:.blue} {msg} [{bar:32.green/bright_black}] {pos}/{len} ({elapsed})";

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICK_STRINGS)
        .progress_chars("█▓░")
}

/// Creates the span whose progress bar tracks a list scan of `total` domains.
pub fn list_scan_span(total: usize) -> Span {
    let span: Span = info_span!("list_scan");
    span.pb_set_style(&bar_style());
    span.pb_set_length(total as u64);
    span.pb_set_message("Checking domains");
    span
}

/// Moves the bar of `span` each time a domain finishes.
pub fn report_to(span: &Span) -> ProgressCallback {
    let span: Span = span.clone();
    Box::new(move |done| span.pb_set_position(done as u64))
}
