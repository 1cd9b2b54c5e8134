//! Lifestyle inputs to the BP heuristic.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::domain::foundation::ValidationError;

/// Age range the estimator form accepts.
pub const AGE_RANGE: RangeInclusive<i32> = 18..=100;

/// Self-reported stress scale.
pub const STRESS_RANGE: RangeInclusive<i32> = 1..=10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    Sedentary,
    Active,
    HighStress,
}

impl WorkType {
    pub fn factor(&self) -> f64 {
        match self {
            WorkType::Sedentary => 5.0,
            WorkType::Active => -3.0,
            WorkType::HighStress => 8.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Sedentary => "sedentary",
            WorkType::Active => "active",
            WorkType::HighStress => "high_stress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Low => 3.0,
            ActivityLevel::Moderate => 0.0,
            ActivityLevel::High => -5.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Mood {
    pub fn factor(&self) -> f64 {
        match self {
            Mood::Excellent => -5.0,
            Mood::Good => 0.0,
            Mood::Fair => 3.0,
            Mood::Poor => 8.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Excellent => "excellent",
            Mood::Good => "good",
            Mood::Fair => "fair",
            Mood::Poor => "poor",
        }
    }
}

/// One estimator submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BpEstimateRequest {
    pub age: i32,
    pub work_type: WorkType,
    pub activity_level: ActivityLevel,
    pub mood: Mood,
    pub stress_level: i32,
}

impl BpEstimateRequest {
    /// Checks the form's range hints.
    ///
    /// The heuristic itself accepts any values; this is for request
    /// boundaries that want to reject nonsense before estimating.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("age", self.age, &AGE_RANGE)?;
        check_range("stress_level", self.stress_level, &STRESS_RANGE)
    }
}

fn check_range(field: &str, value: i32, range: &RangeInclusive<i32>) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, *range.start(), *range.end(), value))
    }
}
