use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::scoring::{clamp_score, get_score_tier, score_to_progress, ScoreTier};

/// Widest progress bar `render_progress_bar` will draw
pub const MAX_BAR_WIDTH: usize = 200;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score as one line
/// Format: "{score}  {tier}  {risk} risk  {progress}%"
pub fn render_tier_line(score: f64, use_colors: bool) -> String {
    let clamped = clamp_score(score);
    let tier = get_score_tier(score);
    let progress = score_to_progress(score);

    if use_colors {
        let (r, g, b) = tier.rgb();
        format!(
            "{}  {}  {} risk  {}%",
            clamped.bold(),
            tier.tier.truecolor(r, g, b).bold(),
            tier.risk.truecolor(r, g, b),
            progress.dimmed()
        )
    } else {
        format!("{}  {}  {} risk  {}%", clamped, tier.tier, tier.risk, progress)
    }
}

/// Render a fixed-width progress bar for a score, e.g. `[########--]`.
/// `width` is capped at `MAX_BAR_WIDTH`.
pub fn render_progress_bar(score: f64, width: usize, use_colors: bool) -> String {
    let width = width.min(MAX_BAR_WIDTH);
    let progress = score_to_progress(score) as usize;
    let filled = (progress * width + 50) / 100;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(width - filled));

    if use_colors {
        let tier: ScoreTier = get_score_tier(score);
        let (r, g, b) = tier.rgb();
        format!("[{}]", bar.truecolor(r, g, b))
    } else {
        format!("[{}]", bar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tier_line_plain() {
        assert_eq!(render_tier_line(720.0, false), "720  Good  Low risk  85%");
        assert_eq!(render_tier_line(450.0, false), "450  Very Poor  High risk  53%");
    }

    #[test]
    fn test_render_tier_line_clamps() {
        assert_eq!(render_tier_line(9000.0, false), "850  Excellent  Low risk  100%");
        assert_eq!(render_tier_line(f64::NAN, false), "0  Very Poor  High risk  0%");
    }

    #[test]
    fn test_render_tier_line_colored_contains_text() {
        let line = render_tier_line(650.0, true);
        assert!(line.contains("Fair"));
        assert!(line.contains("Medium"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn test_render_progress_bar() {
        assert_eq!(render_progress_bar(850.0, 10, false), "[##########]");
        assert_eq!(render_progress_bar(0.0, 10, false), "[----------]");
        assert_eq!(render_progress_bar(425.0, 10, false), "[#####-----]");
    }

    #[test]
    fn test_render_progress_bar_caps_width() {
        let bar = render_progress_bar(850.0, usize::MAX, false);
        assert_eq!(bar.len(), MAX_BAR_WIDTH + 2);
        assert_eq!(render_progress_bar(0.0, 0, false), "[]");
    }
}
