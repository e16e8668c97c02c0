use crate::models::{ExperienceAssessment, PlayingFrequency, SkillRating};

/// Sports whose racket skills carry over to padel
pub const RELEVANT_SPORTS: [&str; 4] = ["tennis", "squash", "badminton", "ping-pong"];

/// Self-assessment bonus by level; index 0 is unused
const SELF_ASSESSMENT_BONUS: [f64; 6] = [0.0, 0.1, 0.3, 0.5, 0.7, 0.8];

/// Estimate a starting rating from an onboarding questionnaire
///
/// Rating formula:
/// rating = clamp(
///     1.0                          # Base rating
///     + years_bonus                # 0.0 - 1.2, step function
///     + sports_bonus               # 0.0 - 0.5
///     + self_assessment_bonus      # 0.0 - 0.8
///     + frequency_bonus            # 0.0 - 0.4
///     + competitive_bonus,         # 0.0 - 0.6
///     1.0, 4.5
/// ) rounded to one decimal
pub fn estimate_rating(experience: &ExperienceAssessment) -> SkillRating {
    let years = experience.years_playing.map_or(0.0, years_bonus);
    let sports = sports_bonus(&experience.previous_sports);
    let self_assessment = experience.self_assessed_skill.map_or(0.0, self_assessment_bonus);
    let frequency = experience.playing_frequency.map_or(0.0, frequency_bonus);
    let competitive = competitive_bonus(experience);

    let raw = SkillRating::FLOOR + years + sports + self_assessment + frequency + competitive;

    tracing::trace!(
        years,
        sports,
        self_assessment,
        frequency,
        competitive,
        raw,
        "estimated rating contributions"
    );

    SkillRating::from_raw(raw)
}

/// Step function; most improvement happens in the first few years
#[inline]
fn years_bonus(years: u32) -> f64 {
    match years {
        0 => 0.0,
        1 => 0.2,
        2 => 0.4,
        3..=4 => 0.7,
        5..=7 => 1.0,
        _ => 1.2,
    }
}

/// 0.5 for any racket sport, 0.2 for any other sport, 0 for none
#[inline]
fn sports_bonus(sports: &[String]) -> f64 {
    let listed: Vec<String> = sports
        .iter()
        .map(|sport| sport.trim().to_lowercase())
        .filter(|sport| !sport.is_empty())
        .collect();

    if listed
        .iter()
        .any(|sport| RELEVANT_SPORTS.iter().any(|relevant| sport.contains(relevant)))
    {
        0.5
    } else if !listed.is_empty() {
        0.2
    } else {
        0.0
    }
}

/// Levels outside 1-5 count as not answered
#[inline]
fn self_assessment_bonus(level: u8) -> f64 {
    match level {
        1..=5 => SELF_ASSESSMENT_BONUS[level as usize],
        _ => 0.0,
    }
}

#[inline]
fn frequency_bonus(frequency: PlayingFrequency) -> f64 {
    match frequency {
        PlayingFrequency::Rarely => 0.0,
        PlayingFrequency::Monthly => 0.1,
        PlayingFrequency::Weekly => 0.3,
        PlayingFrequency::Daily => 0.4,
    }
}

#[inline]
fn competitive_bonus(experience: &ExperienceAssessment) -> f64 {
    let mut bonus = 0.0;
    if experience.competitive_experience {
        bonus += 0.2;
    }
    if experience.tournament_participation {
        bonus += 0.3;
    }
    if experience.coaching_experience {
        bonus += 0.1;
    }
    bonus
}
