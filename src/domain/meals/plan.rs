//! Meal plans and their generated menus.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MealPlanId, Timestamp, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealGoal {
    WeightLoss,
    EnergyBoost,
    ImmuneSupport,
}

impl MealGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealGoal::WeightLoss => "weight_loss",
            MealGoal::EnergyBoost => "energy_boost",
            MealGoal::ImmuneSupport => "immune_support",
        }
    }

    /// Parses a stored goal. Unknown goals read as weight loss, the same
    /// menu the generator falls back to.
    pub fn from_raw(value: &str) -> Self {
        match value {
            "energy_boost" => MealGoal::EnergyBoost,
            "immune_support" => MealGoal::ImmuneSupport,
            _ => MealGoal::WeightLoss,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    Vegan,
    Keto,
    LowCarb,
    #[default]
    Balanced,
}

impl DietaryPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::Keto => "keto",
            DietaryPreference::LowCarb => "low_carb",
            DietaryPreference::Balanced => "balanced",
        }
    }

    pub fn from_raw(value: &str) -> Self {
        match value {
            "vegan" => DietaryPreference::Vegan,
            "keto" => DietaryPreference::Keto,
            "low_carb" => DietaryPreference::LowCarb,
            _ => DietaryPreference::Balanced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Low,
    #[default]
    Medium,
    High,
}

impl Budget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Low => "low",
            Budget::Medium => "medium",
            Budget::High => "high",
        }
    }

    pub fn from_raw(value: &str) -> Self {
        match value {
            "low" => Budget::Low,
            "high" => Budget::High,
            _ => Budget::Medium,
        }
    }
}

/// One day's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

impl Meals {
    /// Sample menu for a goal.
    pub fn for_goal(goal: MealGoal) -> Self {
        let [breakfast, lunch, dinner, snack] = match goal {
            MealGoal::WeightLoss => [
                "Greek yogurt with berries and almonds",
                "Grilled chicken salad with mixed greens",
                "Baked salmon with steamed vegetables",
                "Apple slices with almond butter",
            ],
            MealGoal::EnergyBoost => [
                "Oatmeal with banana and walnuts",
                "Quinoa bowl with roasted vegetables",
                "Lean beef stir-fry with brown rice",
                "Trail mix with dried fruits",
            ],
            MealGoal::ImmuneSupport => [
                "Smoothie with spinach, orange, and ginger",
                "Lentil soup with whole grain bread",
                "Turmeric chicken with sweet potato",
                "Green tea with honey",
            ],
        };
        Self {
            breakfast: breakfast.to_string(),
            lunch: lunch.to_string(),
            dinner: dinner.to_string(),
            snack: snack.to_string(),
        }
    }
}

/// Preferences submitted to create a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanRequest {
    pub goal: MealGoal,
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
    #[serde(default)]
    pub budget: Budget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: MealPlanId,
    pub user_id: UserId,
    pub goal: MealGoal,
    pub dietary_preference: DietaryPreference,
    pub budget: Budget,
    pub meals: Meals,
    pub created_at: Timestamp,
}

impl MealPlan {
    /// Builds a new plan with the sample menu for the requested goal.
    pub fn generate(user_id: UserId, request: MealPlanRequest) -> Self {
        Self {
            id: MealPlanId::new(),
            user_id,
            goal: request.goal,
            dietary_preference: request.dietary_preference,
            budget: request.budget,
            meals: Meals::for_goal(request.goal),
            created_at: Timestamp::now(),
        }
    }
}
