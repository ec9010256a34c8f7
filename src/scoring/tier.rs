use serde::Serialize;
use std::fmt;

pub const MIN_SCORE: u32 = 0;
pub const MAX_SCORE: u32 = 850;

/// Named score bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl Tier {
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Fair => "Fair",
            Tier::Poor => "Poor",
            Tier::VeryPoor => "Very Poor",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl Risk {
    pub fn name(&self) -> &'static str {
        match self {
            Risk::Low => "Low",
            Risk::Medium => "Medium",
            Risk::High => "High",
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tier classification of a clamped score, with its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreTier {
    pub tier: Tier,
    /// `#RRGGBB` display color
    pub color: &'static str,
    pub risk: Risk,
}

impl ScoreTier {
    /// Decode `color` into RGB components for terminal rendering
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0)
        };
        (channel(0), channel(2), channel(4))
    }
}

/// Clamp a raw score into `[0, 850]`, rounding half up.
/// Non-finite input (NaN, either infinity) maps to 0.
pub fn clamp_score(score: f64) -> u32 {
    if !score.is_finite() {
        return MIN_SCORE;
    }
    // ties round toward positive infinity; x + 0.5 can itself round up
    let floor = score.floor();
    let rounded = if score - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded.clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u32
}

/// Classify a score into one of the five fixed tiers
pub fn get_score_tier(score: f64) -> ScoreTier {
    let (tier, color, risk) = match clamp_score(score) {
        s if s >= 800 => (Tier::Excellent, "#10B981", Risk::Low),
        s if s >= 700 => (Tier::Good, "#3B82F6", Risk::Low),
        s if s >= 600 => (Tier::Fair, "#F59E0B", Risk::Medium),
        s if s >= 500 => (Tier::Poor, "#EF4444", Risk::High),
        _ => (Tier::VeryPoor, "#DC2626", Risk::High),
    };
    ScoreTier { tier, color, risk }
}

/// Score as a whole-number percentage of the maximum, in `[0, 100]`
pub fn score_to_progress(score: f64) -> u32 {
    let ratio = clamp_score(score) as f64 / MAX_SCORE as f64;
    (ratio * 100.0).round() as u32
}
