//! Formatting utilities used for CLI output.

use super::colors::{BOLD, RESET};
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("{BOLD}{s}{RESET}")
}

/// Terminal columns taken by `s`, ANSI escapes excluded.
pub fn display_width(s: &str) -> usize {
    strip_ansi(s).width()
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// Signed hours with two decimals: `+0.50`, `-1.25`, `0.00`.
pub fn signed_hours(delta: f64) -> String {
    if delta.abs() < 0.005 {
        "0.00".to_string()
    } else {
        format!("{:+.2}", delta)
    }
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI: ESC [ ... final byte in @..~
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) && c != '[' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_ignores_escapes_and_wide_chars() {
        assert_eq!(display_width("\x1b[33m1.00\x1b[0m"), 4);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left(&bold("7"), 3), format!("  {}", bold("7")));
    }

    #[test]
    fn signed_hours_rounds_near_zero() {
        assert_eq!(signed_hours(0.001), "0.00");
        assert_eq!(signed_hours(0.5), "+0.50");
        assert_eq!(signed_hours(-1.25), "-1.25");
    }
}
