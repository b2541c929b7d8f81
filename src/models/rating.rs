/// One of the five ordered performance bands derived from a numeric rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingBand {
    Poor,
    Weak,
    Average,
    Strong,
    Outstanding,
}

impl RatingBand {
    /// Thresholds are closed at the low end of each band:
    /// >= 4.5 outstanding, >= 3.5 strong, >= 2.5 average, >= 1.5 weak.
    /// Anything else (including NaN) falls into the poor band.
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            RatingBand::Outstanding
        } else if rating >= 3.5 {
            RatingBand::Strong
        } else if rating >= 2.5 {
            RatingBand::Average
        } else if rating >= 1.5 {
            RatingBand::Weak
        } else {
            RatingBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingBand::Outstanding => "Outstanding",
            RatingBand::Strong => "Strong",
            RatingBand::Average => "Average",
            RatingBand::Weak => "Weak",
            RatingBand::Poor => "Poor",
        }
    }
}

/// Round a rating to one decimal place.
pub fn round_rating(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round a rating to the nearest whole star (halves round up), as used by
/// the rating filter.
pub fn whole_stars(rating: f64) -> u8 {
    rating.round().clamp(0.0, u8::MAX as f64) as u8
}
