//! Score accumulator shared by the scorers

use crate::reference::KeywordRule;

/// Reason text when no rule fired
pub const BASELINE_REASON: &str = "Baseline pick";

/// Running score plus the reasons that produced it, in firing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    score: f64,
    reasons: Vec<String>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points and record why
    pub fn add(&mut self, points: f64, reason: impl Into<String>) {
        self.score += points;
        self.reasons.push(reason.into());
    }

    /// Add points without a reason
    pub fn bump(&mut self, points: f64) {
        self.score += points;
    }

    /// Apply a keyword rule to lowercased text. Returns whether it fired.
    pub fn apply(&mut self, rule: &KeywordRule, text_lower: &str) -> bool {
        let fired = rule.matcher.matches(text_lower);
        if fired {
            self.add(rule.points, rule.reason);
        }
        fired
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Reasons joined for display
    pub fn reason_text(&self) -> String {
        if self.reasons.is_empty() {
            BASELINE_REASON.to_string()
        } else {
            self.reasons.join(", ")
        }
    }
}

/// Priority tier for a skill score (1 is highest)
pub fn priority_tier(score: f64) -> u8 {
    if score >= 30.0 {
        1
    } else if score >= 20.0 {
        2
    } else if score >= 10.0 {
        3
    } else {
        4
    }
}
