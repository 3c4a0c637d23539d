use colored::*;

use crate::terminal::print;

const BANNER_0: &str = r#"
      ____                     _____             __       __
     /_  / ___  ___  ___ ____ / __/__  ___ _____/ /_____ / /
      / /_/ _ \/ _ \/ -_)___/_\ \/ _ \/ _ `/ __/ __/ __// _ \
     /___/\___/_//_/\__/    /___/_//_/\_,_/\__/\__/\__//_//_/
"#;

const BANNER_1: &str = r#"
       ┌─┐┌─┐┌┐┌┌─┐  ┌─┐┌┐┌┌─┐┌┬┐┌─┐┬ ┬┌─┐┬─┐
       ┌─┘│ ││││├┤   └─┐│││├─┤ │ │  ├─┤├┤ ├┬┘
       └─┘└─┘┘└┘└─┘  └─┘┘└┘┴ ┴ ┴ └─┘┴ ┴└─┘┴└─
             ns1 ─── AXFR ──▶ every name
"#;

const BANNERS: &[&str] = &[BANNER_0, BANNER_1];

pub fn print() {
    let idx: usize = rand::random_range(0..BANNERS.len());
    print::print(&format!("{}", BANNERS[idx].bright_green()));
}
