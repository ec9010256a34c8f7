pub mod tier;

pub use tier::{
    clamp_score, get_score_tier, score_to_progress, Risk, ScoreTier, Tier, MAX_SCORE, MIN_SCORE,
};
