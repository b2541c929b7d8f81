//! ANSI color helper utilities for terminal output.
use crate::models::rating::RatingBand;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const ORANGE: &str = "\x1b[38;5;208m";

pub const BADGE_GREEN: &str = "\x1b[42;30m";
pub const BADGE_BLUE: &str = "\x1b[44;97m";
pub const BADGE_YELLOW: &str = "\x1b[43;30m";
pub const BADGE_ORANGE: &str = "\x1b[48;5;208;30m";
pub const BADGE_RED: &str = "\x1b[41;97m";

/// Foreground color of a rating:
/// \>= 4.5 → green, >= 3.5 → blue, >= 2.5 → yellow, >= 1.5 → orange, else red
pub fn rating_color(rating: f64) -> &'static str {
    match RatingBand::from_rating(rating) {
        RatingBand::Outstanding => GREEN,
        RatingBand::Strong => BLUE,
        RatingBand::Average => YELLOW,
        RatingBand::Weak => ORANGE,
        RatingBand::Poor => RED,
    }
}

/// Badge (background) style of a rating, same bands as [`rating_color`].
pub fn rating_badge_color(rating: f64) -> &'static str {
    match RatingBand::from_rating(rating) {
        RatingBand::Outstanding => BADGE_GREEN,
        RatingBand::Strong => BADGE_BLUE,
        RatingBand::Average => BADGE_YELLOW,
        RatingBand::Weak => BADGE_ORANGE,
        RatingBand::Poor => BADGE_RED,
    }
}

/// `4.2` painted in its band color.
pub fn colorize_rating(rating: f64) -> String {
    format!("{}{:.1}{RESET}", rating_color(rating), rating)
}

/// ` 4.2 ` as a badge.
pub fn badge_rating(rating: f64) -> String {
    format!("{} {:.1} {RESET}", rating_badge_color(rating), rating)
}

pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
