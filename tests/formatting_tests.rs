use hrdash::models::department::Department;
use hrdash::models::rating::{RatingBand, round_rating, whole_stars};
use hrdash::utils::colors::{BLUE, GREEN, ORANGE, RED, YELLOW, colorize_rating, rating_color};
use hrdash::utils::formatting::{format_currency, format_date, initials, star_rating};
use hrdash::utils::table::{strip_ansi, visible_width};

#[test]
fn test_format_currency() {
    assert_eq!(format_currency(0), "$0");
    assert_eq!(format_currency(999), "$999");
    assert_eq!(format_currency(1_000), "$1,000");
    assert_eq!(format_currency(75_000), "$75,000");
    assert_eq!(format_currency(149_999), "$149,999");
    assert_eq!(format_currency(1_234_567), "$1,234,567");
    assert_eq!(format_currency(-1_500), "-$1,500");
}

#[test]
fn test_format_date() {
    assert_eq!(format_date("2024-01-05").unwrap(), "January 5, 2024");
    assert_eq!(format_date("2019-11-30").unwrap(), "November 30, 2019");
    assert_eq!(
        format_date("2023-12-25T10:00:00Z").unwrap(),
        "December 25, 2023"
    );
    assert!(format_date("05/01/2024").is_err());
    assert!(format_date("").is_err());
}

#[test]
fn test_rating_band_boundaries() {
    assert_eq!(RatingBand::from_rating(5.0), RatingBand::Outstanding);
    assert_eq!(RatingBand::from_rating(4.5), RatingBand::Outstanding);
    assert_eq!(RatingBand::from_rating(4.4999), RatingBand::Strong);
    assert_eq!(RatingBand::from_rating(3.5), RatingBand::Strong);
    assert_eq!(RatingBand::from_rating(3.4999), RatingBand::Average);
    assert_eq!(RatingBand::from_rating(2.5), RatingBand::Average);
    assert_eq!(RatingBand::from_rating(2.4999), RatingBand::Weak);
    assert_eq!(RatingBand::from_rating(1.5), RatingBand::Weak);
    assert_eq!(RatingBand::from_rating(1.4999), RatingBand::Poor);
    assert_eq!(RatingBand::from_rating(1.0), RatingBand::Poor);
    assert_eq!(RatingBand::from_rating(f64::NAN), RatingBand::Poor);
}

#[test]
fn test_rating_bands_are_monotonic() {
    let mut previous = RatingBand::Poor;
    for step in 0..=50 {
        let band = RatingBand::from_rating(step as f64 / 10.0);
        assert!(band >= previous);
        previous = band;
    }
}

#[test]
fn test_rating_colors_follow_bands() {
    assert_eq!(rating_color(4.5), GREEN);
    assert_eq!(rating_color(4.4999), BLUE);
    assert_eq!(rating_color(3.0), YELLOW);
    assert_eq!(rating_color(2.0), ORANGE);
    assert_eq!(rating_color(1.2), RED);
    assert_eq!(strip_ansi(&colorize_rating(4.3)), "4.3");
}

#[test]
fn test_round_and_whole_stars() {
    assert_eq!(round_rating(3.14159), 3.1);
    assert_eq!(round_rating(4.96), 5.0);
    assert_eq!(whole_stars(3.5), 4);
    assert_eq!(whole_stars(3.4), 3);
    assert_eq!(whole_stars(1.0), 1);
}

#[test]
fn test_star_rating() {
    assert_eq!(star_rating(5.0, 5), "★★★★★");
    assert_eq!(star_rating(4.5, 5), "★★★★½");
    assert_eq!(star_rating(3.2, 5), "★★★☆☆");
    assert_eq!(star_rating(0.0, 5), "☆☆☆☆☆");
    assert_eq!(star_rating(9.0, 5), "★★★★★");
}

#[test]
fn test_star_rating_always_has_max_glyphs() {
    for rating in [1.0, 2.5, 3.7, 4.5] {
        let stars = star_rating(rating, 5);
        assert_eq!(stars.chars().count(), 5);
    }
    assert!(star_rating(2.5, 5).contains('½'));
}

#[test]
fn test_initials() {
    assert_eq!(initials("emily", "Johnson"), "EJ");
    assert_eq!(initials("Ann", ""), "A");
}

#[test]
fn test_visible_width_ignores_ansi() {
    assert_eq!(visible_width("\x1b[32mabc\x1b[0m"), 3);
}

#[test]
fn test_department_parse() {
    assert_eq!(
        Department::parse("customer-support").unwrap(),
        Department::CustomerSupport
    );
    assert_eq!(Department::parse("hr").unwrap(), Department::Hr);
    assert_eq!(
        Department::parse(" ENGINEERING ").unwrap(),
        Department::Engineering
    );
    assert!(Department::parse("Accounting").is_err());
    assert_eq!(Department::CustomerSupport.to_string(), "Customer Support");
}

#[test]
fn test_department_serde_names() {
    assert_eq!(
        serde_json::to_string(&Department::Hr).unwrap(),
        r#""HR""#
    );
    let d: Department = serde_json::from_str(r#""Customer Support""#).unwrap();
    assert_eq!(d, Department::CustomerSupport);
}
