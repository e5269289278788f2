//! Level coloring for terminal output: the standard 8-color SGR codes, and a
//! table mapping each level to one of them.

use crate::field::ArrayEncoder;
use crate::level::Level;
use std::fmt;
use std::sync::LazyLock;

/// Foreground SGR code (`ESC[<code>m`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnsiColor(pub u8);

impl AnsiColor {
    pub const RED: Self = Self(31);
    pub const GREEN: Self = Self(32);
    pub const YELLOW: Self = Self(33);
    pub const BLUE: Self = Self(34);
    pub const MAGENTA: Self = Self(35);
    pub const CYAN: Self = Self(36);
    pub const WHITE: Self = Self(37);

    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    /// Escape sequence that switches to this color.
    #[must_use]
    pub fn escape(self) -> String {
        format!("\x1b[{}m", self.0)
    }

    /// Maps the color names accepted in the `[logger.colors]` config table.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "yellow" => Some(Self::YELLOW),
            "blue" => Some(Self::BLUE),
            "magenta" | "purple" => Some(Self::MAGENTA),
            "cyan" => Some(Self::CYAN),
            "white" => Some(Self::WHITE),
            _ => None,
        }
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wraps `text` as `ESC[<code>m<text>ESC[0m`.
#[must_use]
pub fn colorize(text: &str, color: AnsiColor) -> String {
    format!("\x1b[{}m{text}{}", color.0, AnsiColor::RESET)
}

const LEVELS: usize = Level::all().len();

/// Level → color mapping with precomputed colorized level names.
///
/// Levels without an entry render in the fallback color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: [Option<AnsiColor>; LEVELS],
    fallback: AnsiColor,
    rendered: [String; LEVELS],
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new(AnsiColor::RED)
            .with(Level::Debug, AnsiColor::BLUE)
            .with(Level::Info, AnsiColor::GREEN)
            .with(Level::Warn, AnsiColor::YELLOW)
            .with(Level::Error, AnsiColor::RED)
            .with(Level::DPanic, AnsiColor::RED)
            .with(Level::Panic, AnsiColor::RED)
            .with(Level::Fatal, AnsiColor::RED)
    }
}

static STANDARD: LazyLock<ColorTable> = LazyLock::new(ColorTable::default);

impl ColorTable {
    /// Empty table; every level uses `fallback` until mapped.
    #[must_use]
    pub fn new(fallback: AnsiColor) -> Self {
        let mut table = Self {
            colors: [None; LEVELS],
            fallback,
            rendered: Default::default(),
        };
        table.refresh();
        table
    }

    /// The process-wide default table, built on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Maps `level` to `color`.
    #[must_use]
    pub fn with(mut self, level: Level, color: AnsiColor) -> Self {
        self.colors[level as usize] = Some(color);
        self.refresh();
        self
    }

    /// Color used for `level`, falling back when unmapped.
    #[must_use]
    pub fn color_of(&self, level: Level) -> AnsiColor {
        self.colors[level as usize].unwrap_or(self.fallback)
    }

    #[must_use]
    pub const fn fallback(&self) -> AnsiColor {
        self.fallback
    }

    /// Colorized display name of `level`.
    #[must_use]
    pub fn colorize(&self, level: Level) -> &str {
        &self.rendered[level as usize]
    }

    /// Level encoder that appends the colorized name.
    pub fn encode(&self, level: Level, enc: &mut dyn ArrayEncoder) {
        enc.append_str(self.colorize(level));
    }

    fn refresh(&mut self) {
        for level in Level::all() {
            self.rendered[level as usize] = colorize(level.display_name(), self.color_of(level));
        }
    }
}
