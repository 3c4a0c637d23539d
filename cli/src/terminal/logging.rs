use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use zonesnatcher_common::log::{TARGET_FINDING, TARGET_PRINT, TARGET_SUCCESS};

/// Resolver internals are chatty at debug level; keep them to warnings.
const QUIET_DEPENDENCIES: &str = "hickory_proto=warn,hickory_resolver=warn";

pub struct ZoneFormatter;

impl<S, N> FormatEvent<S, N> for ZoneFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == TARGET_PRINT {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match (meta.target(), *meta.level()) {
                (TARGET_FINDING, _) => ("[!]", |s| s.bright_red().bold()),
                (TARGET_SUCCESS, _) => ("[+]", |s| s.green().bold()),
                (_, Level::TRACE) => ("[ ]", |s| s.dimmed()),
                (_, Level::DEBUG) => ("[?]", |s| s.blue()),
                (_, Level::INFO) => ("[*]", |s| s.cyan().bold()),
                (_, Level::WARN) => ("[~]", |s| s.yellow().bold()),
                (_, Level::ERROR) => ("[-]", |s| s.red().bold()),
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) {
    let level: &str = if verbose { "debug" } else { "info" };
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},{QUIET_DEPENDENCIES}")));

    let indicatif_layer = IndicatifLayer::new();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(ZoneFormatter)
        .with_writer(indicatif_layer.get_stderr_writer());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(indicatif_layer)
        .init();
}
