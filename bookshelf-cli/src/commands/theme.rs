//! Theme command implementation and theme selection

use crate::screen::draw_theme;
use anyhow::Result;
use bookshelf_core::Theme;
use std::io;

/// Terminal colour hint: `"<fg>;<bg>"` with ANSI colour numbers
pub const COLOR_ENV: &str = "COLORFGBG";

/// Print the colour palette of a theme
pub fn theme(theme: Theme) -> Result<()> {
    draw_theme(&mut io::stdout().lock(), theme)?;
    Ok(())
}

/// The `--theme` flag when given, otherwise the terminal's preference
pub fn resolve_theme(flag: Option<Theme>) -> Theme {
    flag.unwrap_or_else(|| {
        let hint = std::env::var(COLOR_ENV).ok();
        let theme = Theme::preferred(prefers_dark(hint.as_deref()));
        tracing::debug!(?hint, %theme, "theme from terminal colours");
        theme
    })
}

/// Whether a `COLORFGBG` value describes a dark background
///
/// The background is the last field; ANSI colours 0-6 and 8 are dark.
fn prefers_dark(colorfgbg: Option<&str>) -> bool {
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_backgrounds() {
        assert!(prefers_dark(Some("15;0")));
        assert!(prefers_dark(Some("15;default;8")));
        assert!(!prefers_dark(Some("0;15")));
        assert!(!prefers_dark(Some("0;7")));
    }

    #[test]
    fn test_missing_or_garbled_hint_is_light() {
        assert!(!prefers_dark(None));
        assert!(!prefers_dark(Some("")));
        assert!(!prefers_dark(Some("15;default")));
    }

    #[test]
    fn test_flag_wins() {
        assert_eq!(resolve_theme(Some(Theme::Night)), Theme::Night);
        assert_eq!(resolve_theme(Some(Theme::Day)), Theme::Day);
    }
}
