//! Binary entry point for `gopkg-pin`.

use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = gopkg_pin::run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}
