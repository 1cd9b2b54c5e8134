//! Lifestyle blood-pressure heuristic.
//!
//! A fixed linear model around a 120/80 baseline. Results must stay
//! bit-for-bit compatible with estimates already stored, so the factors and
//! the half-up rounding are not tunable.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::inputs::{ActivityLevel, BpEstimateRequest, Mood, WorkType};

const BASELINE_SYSTOLIC: f64 = 120.0;
const BASELINE_DIASTOLIC: f64 = 80.0;
const DIASTOLIC_WEIGHT: f64 = 0.6;

/// Lifestyle advice returned with every estimate.
pub const RECOMMENDATIONS: [&str; 5] = [
    "Monitor your BP regularly with a proper device",
    "Maintain a healthy diet low in sodium",
    "Exercise regularly (30 min, 5 days/week)",
    "Manage stress through relaxation techniques",
    "Limit alcohol and avoid smoking",
];

pub const DISCLAIMER: &str = "This is an estimate based on lifestyle factors. For accurate readings, \
use a proper blood pressure monitor and consult with healthcare professionals.";

/// Estimated pressure in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BpReading {
    pub systolic: i32,
    pub diastolic: i32,
}

impl BpReading {
    pub fn new(systolic: i32, diastolic: i32) -> Self {
        Self { systolic, diastolic }
    }

    pub fn category(&self) -> BpCategory {
        BpCategory::classify(self.systolic, self.diastolic)
    }
}

impl fmt::Display for BpReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// Risk band of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BpCategory {
    Normal,
    Elevated,
    Stage1High,
    Stage2High,
    Crisis,
}

impl BpCategory {
    /// Rules are checked in order and the first match wins. Note the OR in
    /// the two stage rules: a reading only reaches `Crisis` when both values
    /// are at or above the stage 2 thresholds.
    pub fn classify(systolic: i32, diastolic: i32) -> Self {
        if systolic < 120 && diastolic < 80 {
            BpCategory::Normal
        } else if systolic < 130 && diastolic < 80 {
            BpCategory::Elevated
        } else if systolic < 140 || diastolic < 90 {
            BpCategory::Stage1High
        } else if systolic < 180 || diastolic < 120 {
            BpCategory::Stage2High
        } else {
            BpCategory::Crisis
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BpCategory::Normal => "Normal",
            BpCategory::Elevated => "Elevated",
            BpCategory::Stage1High => "Stage 1 High",
            BpCategory::Stage2High => "Stage 2 High",
            BpCategory::Crisis => "Crisis",
        }
    }
}

impl fmt::Display for BpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimates systolic/diastolic pressure from lifestyle inputs.
///
/// Never fails. Ages outside the form's range are extrapolated, not clamped.
pub fn estimate_bp(
    age: i32,
    work_type: WorkType,
    activity_level: ActivityLevel,
    mood: Mood,
    stress_level: i32,
) -> BpReading {
    let age_factor = ((f64::from(age) - 30.0) * 0.5).max(0.0);
    let stress_factor = (f64::from(stress_level) - 5.0) * 2.0;
    let combined =
        age_factor + work_type.factor() + activity_level.factor() + mood.factor() + stress_factor;

    BpReading {
        systolic: round_half_up(BASELINE_SYSTOLIC + combined),
        diastolic: round_half_up(BASELINE_DIASTOLIC + combined * DIASTOLIC_WEIGHT),
    }
}

impl BpEstimateRequest {
    pub fn estimate(&self) -> BpReading {
        estimate_bp(
            self.age,
            self.work_type,
            self.activity_level,
            self.mood,
            self.stress_level,
        )
    }
}

// Halves round toward positive infinity (-2.5 -> -2), unlike f64::round.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    // ════════════════════════════════════════════════════════════════════
    // Estimation
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn baseline_thirty_year_old_sedentary() {
        let reading = estimate_bp(30, WorkType::Sedentary, ActivityLevel::Moderate, Mood::Good, 5);
        assert_eq!(reading, BpReading::new(125, 83));
    }

    #[test]
    fn high_risk_profile() {
        let reading = estimate_bp(50, WorkType::HighStress, ActivityLevel::Low, Mood::Poor, 10);
        assert_eq!(reading, BpReading::new(159, 103));
    }

    #[test]
    fn age_below_thirty_contributes_nothing() {
        let young = estimate_bp(18, WorkType::Active, ActivityLevel::High, Mood::Excellent, 1);
        let thirty = estimate_bp(30, WorkType::Active, ActivityLevel::High, Mood::Excellent, 1);
        assert_eq!(young, thirty);
        // combined = -3 - 5 - 5 - 8 = -21
        assert_eq!(young, BpReading::new(99, 67));
    }

    #[test]
    fn half_years_round_up() {
        // age 31 -> age factor 0.5, combined 5.5
        let reading = estimate_bp(31, WorkType::Sedentary, ActivityLevel::Moderate, Mood::Good, 5);
        assert_eq!(reading.systolic, 126);
        // 80 + 5.5 * 0.6 = 83.3
        assert_eq!(reading.diastolic, 83);
    }

    #[test]
    fn negative_halves_round_toward_positive_infinity() {
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(103.4), 103);
    }

    #[test]
    fn out_of_range_age_is_extrapolated() {
        let reading = estimate_bp(130, WorkType::Sedentary, ActivityLevel::Moderate, Mood::Good, 5);
        assert_eq!(reading, BpReading::new(175, 113));
    }

    #[test]
    fn estimate_is_deterministic() {
        let req = BpEstimateRequest {
            age: 44,
            work_type: WorkType::HighStress,
            activity_level: ActivityLevel::Moderate,
            mood: Mood::Fair,
            stress_level: 7,
        };
        assert_eq!(req.estimate(), req.estimate());
    }

    // ════════════════════════════════════════════════════════════════════
    // Classification
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn just_below_thresholds_is_normal() {
        assert_eq!(BpCategory::classify(119, 79), BpCategory::Normal);
    }

    #[test]
    fn one_twenty_over_eighty_is_not_normal_or_elevated() {
        let category = BpCategory::classify(120, 80);
        assert_ne!(category, BpCategory::Normal);
        assert_eq!(category, BpCategory::Stage1High);
    }

    #[test]
    fn elevated_requires_low_diastolic() {
        assert_eq!(BpCategory::classify(125, 79), BpCategory::Elevated);
    }

    #[test]
    fn stage_rules_use_or() {
        assert_eq!(BpCategory::classify(150, 85), BpCategory::Stage1High);
        assert_eq!(BpCategory::classify(150, 95), BpCategory::Stage2High);
        assert_eq!(BpCategory::classify(185, 110), BpCategory::Stage2High);
        assert_eq!(BpCategory::classify(180, 120), BpCategory::Crisis);
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(BpReading::new(159, 103).category().label(), "Stage 2 High");
        assert_eq!(BpCategory::Stage1High.to_string(), "Stage 1 High");
    }
}
