use crate::models::{CategoryBand, CategoryVerdict, EligibilityVerdict, TournamentCategory};
use thiserror::Error;

/// Slack on the outer buffer edges; `min - buffer` and `max + buffer` are float
/// sums, so a tenth-valued rating sitting on the edge can miss it by one ulp
const EDGE_TOLERANCE: f64 = 1e-9;

/// Caller contract violations rejected by the classifier
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EligibilityError {
    #[error("Invalid category band: min_elo {min_elo} is not <= max_elo {max_elo}")]
    InvalidBand { min_elo: f64, max_elo: f64 },

    #[error("Invalid borderline buffer: {0} (must be finite and >= 0)")]
    InvalidBuffer(f64),
}

/// Classify a rating against a category band
///
/// Inside the closed band is eligible. Within `buffer` below the minimum
/// (`min - buffer <= rating < min`) or above the maximum
/// (`max < rating <= max + buffer`) is borderline. Anything else is ineligible.
pub fn classify(
    rating: f64,
    band: &CategoryBand,
    buffer: f64,
) -> Result<EligibilityVerdict, EligibilityError> {
    if !band.is_well_formed() {
        return Err(EligibilityError::InvalidBand {
            min_elo: band.min_elo,
            max_elo: band.max_elo,
        });
    }
    if !buffer.is_finite() || buffer < 0.0 {
        return Err(EligibilityError::InvalidBuffer(buffer));
    }

    let verdict = if band.min_elo <= rating && rating <= band.max_elo {
        EligibilityVerdict::Eligible
    } else if (band.min_elo - buffer - EDGE_TOLERANCE <= rating && rating < band.min_elo)
        || (band.max_elo < rating && rating <= band.max_elo + buffer + EDGE_TOLERANCE)
    {
        EligibilityVerdict::Borderline
    } else {
        EligibilityVerdict::Ineligible
    };

    Ok(verdict)
}

/// Classify a rating against every category of a tournament
///
/// Results come back eligible first, then borderline, then ineligible; ties keep
/// the order the categories were given in.
pub fn rank_categories(
    rating: f64,
    categories: &[TournamentCategory],
    buffer: f64,
) -> Result<Vec<CategoryVerdict>, EligibilityError> {
    let mut verdicts = categories
        .iter()
        .map(|category| {
            let verdict = classify(rating, &category.band, buffer)?;
            Ok(CategoryVerdict {
                category: category.clone(),
                verdict,
                can_register: verdict.can_register(),
            })
        })
        .collect::<Result<Vec<_>, EligibilityError>>()?;

    verdicts.sort_by_key(|v| v.verdict.rank());

    Ok(verdicts)
}
