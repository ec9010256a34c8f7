pub mod number;
pub mod render;
pub mod time;

pub use number::{
    format_currency, format_number, normalize_currency_code, to_percent, NumberFormatOptions,
    MAX_FRACTION_DIGITS,
};
pub use render::{render_progress_bar, render_tier_line, should_use_colors};
pub use time::{
    format_timestamp, format_timestamp_in, relative_time_between, relative_time_from_seconds,
};
