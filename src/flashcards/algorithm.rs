//! SM-2 Spaced Repetition Algorithm
//!
//! Variant of the SuperMemo 2 algorithm for calculating optimal review
//! intervals based on user performance.
//!
//! Quality ratings (0-5):
//! - 0: Complete blackout, no recall
//! - 1: Incorrect, but upon seeing answer, remembered
//! - 2: Incorrect, but answer seemed easy to recall
//! - 3: Correct response with serious difficulty
//! - 4: Correct response after hesitation
//! - 5: Perfect response with no hesitation

use chrono::{DateTime, Duration, Utc};

use super::models::{Flashcard, ReviewState};

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Result of calculating the next review. The caller writes these fields
/// back to the card and persists them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewResult {
    pub interval: i64,
    pub ease_factor: f64,
    pub difficulty: i32,
    pub repetitions: i32,
    pub due_date: DateTime<Utc>,
}

/// Calculate the next review state using the SM-2 variant.
///
/// Pure: `now` is an argument so schedules are reproducible. Quality values
/// outside 0-5 are clamped.
///
/// # Arguments
/// * `state` - Current card state
/// * `quality` - Quality rating (0-5)
/// * `now` - The review instant; the new due date is `now + interval` days
pub fn calculate_next_review(state: &ReviewState, quality: i32, now: DateTime<Utc>) -> ReviewResult {
    let quality = quality.clamp(0, 5);
    let q = f64::from(quality);

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored and rounded
    // to two decimals. Applied for every rating, including failures.
    let ease_factor = round_ease(
        (state.ease_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02))).max(MIN_EASE_FACTOR),
    );

    let (repetitions, interval) = if quality < 3 {
        // Incorrect response - back to the start, due immediately
        (0, 0)
    } else {
        let repetitions = state.repetitions + 1;
        let interval = match repetitions {
            1 => 1,
            2 => 6,
            _ => (state.interval as f64 * ease_factor).round() as i64,
        };
        (repetitions, interval)
    };

    let difficulty = (5 - quality + 1).clamp(1, 5);

    ReviewResult {
        interval,
        ease_factor,
        difficulty,
        repetitions,
        due_date: now + Duration::days(interval),
    }
}

/// Cards due at or before `now`. Inclusive: a card due exactly at `now` is
/// returned.
pub fn filter_due_cards<'a>(cards: &'a [Flashcard], now: DateTime<Utc>) -> Vec<&'a Flashcard> {
    cards.iter().filter(|c| c.state.is_due(now)).collect()
}

/// Calculate the preview intervals for each quality rating
/// Used to show users what interval each rating would give
pub fn preview_intervals(state: &ReviewState, now: DateTime<Utc>) -> [i64; 4] {
    // Returns intervals for ratings: Again (1), Hard (3), Good (4), Easy (5)
    let again = calculate_next_review(state, 1, now).interval;
    let hard = calculate_next_review(state, 3, now).interval;
    let good = calculate_next_review(state, 4, now).interval;
    let easy = calculate_next_review(state, 5, now).interval;

    [again, hard, good, easy]
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i64) -> String {
    if days == 0 {
        "now".to_string()
    } else if days == 1 {
        "1d".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        let weeks = days / 7;
        if weeks == 1 {
            "1w".to_string()
        } else {
            format!("{}w", weeks)
        }
    } else if days < 365 {
        let months = days / 30;
        if months == 1 {
            "1mo".to_string()
        } else {
            format!("{}mo", months)
        }
    } else {
        let years = days / 365;
        if years == 1 {
            "1y".to_string()
        } else {
            format!("{}y", years)
        }
    }
}

fn round_ease(ease: f64) -> f64 {
    (ease * 100.0).round() / 100.0
}
