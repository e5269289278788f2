//! Tests for ANSI level coloring.

use linelog::fmt::colorize;
use linelog::{AnsiColor, ColorTable, Level};

#[test]
fn colorize_wraps_in_sgr_and_reset() {
    let out = colorize("info", AnsiColor::GREEN);
    assert_eq!(out, "\x1b[32minfo\x1b[0m");
    assert!(out.starts_with("\x1b["));
    assert!(out.ends_with(AnsiColor::RESET));
}

#[test]
fn standard_table_colors() {
    let table = ColorTable::standard();
    assert_eq!(table.color_of(Level::Debug), AnsiColor::BLUE);
    assert_eq!(table.color_of(Level::Info), AnsiColor::GREEN);
    assert_eq!(table.color_of(Level::Warn), AnsiColor::YELLOW);
    for level in [Level::Error, Level::DPanic, Level::Panic, Level::Fatal] {
        assert_eq!(table.color_of(level), AnsiColor::RED);
    }
}

#[test]
fn standard_table_uses_display_names() {
    let table = ColorTable::standard();
    assert_eq!(table.colorize(Level::Warn), "\x1b[33mwarning\x1b[0m");
    assert_eq!(table.colorize(Level::Debug), "\x1b[34mdebug\x1b[0m");
}

#[test]
fn unmapped_levels_use_fallback() {
    let table = ColorTable::new(AnsiColor::MAGENTA);
    assert_eq!(table.fallback(), AnsiColor::MAGENTA);
    for level in Level::all() {
        assert_eq!(table.color_of(level), AnsiColor::MAGENTA);
    }
}

#[test]
fn color_names_map_to_codes() {
    assert_eq!(AnsiColor::from_name("Cyan"), Some(AnsiColor::CYAN));
    assert_eq!(AnsiColor::from_name("purple"), Some(AnsiColor::MAGENTA));
    assert_eq!(AnsiColor::from_name("mauve"), None);
    assert_eq!(AnsiColor::YELLOW.escape(), "\x1b[33m");
}
