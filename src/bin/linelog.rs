//! `linelog [options] <LEVEL> <MESSAGE>... [-f key=value]...`
//!
//! Loads `linelog.toml`, applies flag overrides, and writes one line through
//! the same console + rolling-file logger a library user would get.

use clap::Parser;
use linelog::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    Cli::parse().run()
}
