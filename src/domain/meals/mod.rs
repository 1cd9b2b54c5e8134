//! Meal plan domain module.

mod plan;

pub use plan::{Budget, DietaryPreference, MealGoal, MealPlan, MealPlanRequest, Meals};
