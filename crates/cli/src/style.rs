// crates/cli/src/style.rs
//! ANSI text styles.

use std::fmt;

const RESET: &str = "\x1B[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Style {
    const fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Dim => "\x1B[2m",
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Blue => "\x1B[34m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Immutable set of text-style wrappers. Copy it wherever output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    pub fn bold<T: fmt::Display>(self, value: T) -> Painted<T> {
        self.paint(Style::Bold, value)
    }

    pub fn dim<T: fmt::Display>(self, value: T) -> Painted<T> {
        self.paint(Style::Dim, value)
    }

    pub fn red<T: fmt::Display>(self, value: T) -> Painted<T> {
        self.paint(Style::Red, value)
    }

    pub fn green<T: fmt::Display>(self, value: T) -> Painted<T> {
        self.paint(Style::Green, value)
    }

    pub fn yellow<T: fmt::Display>(self, value: T) -> Painted<T> {
        self.paint(Style::Yellow, value)
    }

    pub fn blue<T: fmt::Display>(self, value: T) -> Painted<T> {
        self.paint(Style::Blue, value)
    }

    pub fn cyan<T: fmt::Display>(self, value: T) -> Painted<T> {
        self.paint(Style::Cyan, value)
    }

    fn paint<T>(self, style: Style, value: T) -> Painted<T> {
        Painted {
            style,
            enabled: self.enabled,
            value,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

/// A value rendered with a style when displayed.
#[derive(Debug, Clone, Copy)]
pub struct Painted<T> {
    style: Style,
    enabled: bool,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "{}{}{RESET}", self.style.code(), self.value)
        } else {
            fmt::Display::fmt(&self.value, f)
        }
    }
}
