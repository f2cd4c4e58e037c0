pub const MAX_LEVEL_LABEL: &str = "Max level";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasteryProgress {
    /// Progress towards the next mastery level, 0..=100.
    pub percent: u8,
    /// Empty when the counters were unusable.
    pub label: String,
}

impl MasteryProgress {
    fn unknown() -> Self {
        MasteryProgress {
            percent: 0,
            label: String::new(),
        }
    }
}

/// Converts the raw mastery counters into a bar percentage and label.
///
/// A negative `points_until` is how the API reports max mastery, so it
/// overrides whatever the arithmetic would give.
pub fn mastery_progress(points_since: f64, points_until: f64) -> MasteryProgress {
    if !points_since.is_finite() || !points_until.is_finite() {
        return MasteryProgress::unknown();
    }

    if points_until < 0.0 {
        return MasteryProgress {
            percent: 100,
            label: MAX_LEVEL_LABEL.to_string(),
        };
    }

    let total = (points_since + points_until).max(1.0);
    let percent = (100.0 * points_since / total).round().clamp(0.0, 100.0) as u8;

    MasteryProgress {
        percent,
        label: format!("{} pts to next level", group_thousands(points_until.round() as i64)),
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
