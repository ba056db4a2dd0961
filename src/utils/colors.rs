/// ANSI color helper utilities for terminal output.
use std::fmt;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";

/// A solid sRGB color shared by every paint backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const GRID_GREY: Rgb = Rgb(0x66, 0x66, 0x66);
    /// Color of the status trace line.
    pub const TRACE: Rgb = Rgb(0x00, 0x66, 0xCC);

    /// `#RRGGBB`, as used by SVG.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Components in `0.0..=1.0`, as used by PDF content streams.
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }

    /// 24-bit ANSI foreground escape.
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }

    /// 24-bit ANSI background escape.
    pub fn ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Divergence color:
/// supplied > computed → yellow
/// supplied < computed → red
/// equal → reset
pub fn color_for_divergence(delta: f64) -> &'static str {
    if delta > 0.005 {
        YELLOW
    } else if delta < -0.005 {
        RED
    } else {
        RESET
    }
}

/// Greys out empty or zero values (`""`, `"0.00"`, `"--:--"`).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "0.00" || v == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
