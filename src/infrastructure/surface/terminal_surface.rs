//! Form surface that renders to the terminal.

use chrono::{DateTime, Local};
use colored::*;

use crate::domain::entities::ShortLink;
use crate::domain::form::{COPY_DONE_LABEL, COPY_LABEL, FormFields};
use crate::domain::ports::FormSurface;
use crate::infrastructure::surface::ViewSurface;

/// A [`ViewSurface`] that prints visible changes as they happen.
///
/// Only transitions a user needs to see are printed: the busy submit label,
/// the result and error panels, and copy feedback. Reverts back to idle
/// labels update state silently so they never cut into a prompt.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    view: ViewSurface,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewSurface {
        &self.view
    }
}

impl FormSurface for TerminalSurface {
    fn read_fields(&self) -> FormFields {
        self.view.read_fields()
    }

    fn reset_fields(&self) {
        self.view.reset_fields();
    }

    fn hide_panels(&self) {
        self.view.hide_panels();
    }

    fn show_result(&self, link: &ShortLink) {
        self.view.show_result(link);
        println!();
        for line in render_result(link, Local::now()) {
            println!("{line}");
        }
        println!();
    }

    fn show_error(&self, message: &str) {
        self.view.show_error(message);
        println!();
        println!("{} {}", "❌".red(), message.red().bold());
        println!();
    }

    fn set_submit_control(&self, enabled: bool, label: &str) {
        self.view.set_submit_control(enabled, label);
        if !enabled {
            println!("{}", format!("⏳ {label}").bright_black());
        }
    }

    fn result_target(&self) -> Option<String> {
        self.view.result_target()
    }

    fn set_copy_label(&self, label: &str) {
        self.view.set_copy_label(label);
        if label == COPY_LABEL {
            return;
        }

        let background = self.view.snapshot().copy.background;
        let text = format!(" 📋 {label} ");
        let styled = match background.as_deref().and_then(hex_to_rgb) {
            Some((r, g, b)) => text.black().on_truecolor(r, g, b),
            None if label == COPY_DONE_LABEL => text.green().bold(),
            None => text.red().bold(),
        };
        println!("{styled}");
    }

    fn set_copy_background(&self, color: Option<&str>) {
        self.view.set_copy_background(color);
    }
}

/// Lines of the result panel.
///
/// # Output Format
///
/// ```text
/// ✅ Short link ready
///   short.ly/abc
///   → https://short.ly/abc
///   Original: https://example.com
///   Expires:  2026-10-17 14:05
///   Quota:    9 requests left, resets in 30 min
/// ```
pub fn render_result(link: &ShortLink, now: DateTime<Local>) -> Vec<String> {
    let mut lines = vec![
        format!("{}", "✅ Short link ready".green().bold()),
        format!("  {}", link.display.bright_cyan().bold()),
        format!("  {}", format!("→ {}", link.target).bright_black()),
    ];

    if let Some(long_url) = &link.long_url {
        lines.push(format!("  Original: {}", long_url.bright_white()));
    }

    if let Some(expires_at) = link.expires_at(now) {
        lines.push(format!(
            "  Expires:  {}",
            expires_at.format("%Y-%m-%d %H:%M").to_string().bright_white()
        ));
    }

    if let Some(quota) = link.quota {
        lines.push(format!(
            "  Quota:    {} requests left, resets in {} min",
            quota.remaining.to_string().bright_green().bold(),
            quota.reset_minutes
        ));
    }

    lines
}

/// Parses `#rrggbb` into its components.
fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RateQuota;
    use chrono::TimeZone;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#03dac6"), Some((0x03, 0xda, 0xc6)));
        assert_eq!(hex_to_rgb("03dac6"), None);
        assert_eq!(hex_to_rgb("#03dac"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
    }

    #[test]
    fn test_render_result_minimal() {
        let now = Local.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let lines = render_result(&ShortLink::new("https://short.ly/abc"), now);

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("short.ly/abc"));
        assert!(!lines[1].contains("https://"));
        assert!(lines[2].contains("https://short.ly/abc"));
    }

    #[test]
    fn test_render_result_with_server_details() {
        let now = Local.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let link = ShortLink {
            long_url: Some("https://example.com".to_string()),
            expiry_hours: Some(24),
            quota: Some(RateQuota {
                remaining: 9,
                reset_minutes: 30,
            }),
            ..ShortLink::new("https://short.ly/abc")
        };

        let lines = render_result(&link, now);
        assert_eq!(lines.len(), 6);
        assert!(lines[3].contains("https://example.com"));
        assert!(lines[4].contains("2026-01-02 12:00"));
        assert!(lines[5].contains("resets in 30 min"));
    }

    #[test]
    fn test_terminal_surface_tracks_view_state() {
        let surface = TerminalSurface::new();
        surface.set_submit_control(false, "Shortening...");
        surface.show_error("Error: boom");

        let view = surface.view().snapshot();
        assert!(!view.submit.enabled);
        assert_eq!(view.panel.error_message(), Some("Error: boom"));
    }
}
