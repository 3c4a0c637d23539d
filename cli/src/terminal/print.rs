use std::cell::Cell;
use std::time::Duration;

use crate::terminal::{banner, colors};
use colored::*;
use unicode_width::UnicodeWidthStr;
use zonesnatcher_common::mprint;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

pub fn print(msg: &str) {
    mprint!("{msg}");
}

pub fn banner(no_banner: bool) {
    if no_banner {
        return;
    }

    let text_content: String = format!("⟦ ZONESNATCHER v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
    banner::print();
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

/// Prints `key.....: value` lines with the keys padded to the longest one.
pub fn aligned_lines(pairs: &[(&str, String)]) {
    let width: usize = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(width);
    for (key, value) in pairs {
        aligned_line(key, value);
    }
}

fn aligned_line(key: &str, value: &str) {
    let dots: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!(
        "{} {}{} {}",
        prefix,
        key.color(colors::PRIMARY),
        colon,
        value.color(colors::TEXT_DEFAULT)
    ));
}

pub fn as_tree(items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        let last: bool = i + 1 == items.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        print(&format!(" {} {}", branch, item.color(colors::RECORD)));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn summary(leaked: usize, domains: usize, total_time: Duration) {
    let leaked: ColoredString = format!("{leaked} leaked names").bold().red();
    let domains: ColoredString = format!("{domains} domains").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Scan Complete: {leaked} across {domains} in {total_time}").color(colors::TEXT_DEFAULT);

    fat_separator();
    centerln(&output.to_string());
}

const NO_RESULTS_0: &str = r#"
          _   _  ___    _     _____    _    _  __ ____
         | \ | |/ _ \  | |   | ____|  / \  | |/ /  ___|
         |  \| | | | | | |   |  _|   / _ \ | ' /\___ \
         | |\  | |_| | | |___| |___ / ___ \| . \ ___) |
         |_| \_|\___/  |_____|_____/_/   \_\_|\_\____/
"#;

pub fn no_results() {
    print(&format!("{}", NO_RESULTS_0.green().bold()));
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
