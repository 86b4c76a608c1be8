use serde::Serialize;

use super::{has_factor, AgeBand};
use crate::assessment::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    pub meal_time: &'static str,
    pub suggestions: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietRecommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub foods: Vec<FoodGroup>,
    pub meal_plan: Vec<MealSuggestion>,
    pub tips: Vec<&'static str>,
}

struct FactorAddition {
    factor: &'static str,
    foods: FoodGroup,
    tips: &'static [&'static str],
}

const BASELINE_TITLE: &str = "PCOS-Friendly Balanced Diet";
const BASELINE_DESCRIPTION: &str = "A whole-food eating pattern that keeps blood sugar steady and supports hormonal balance.";

const COMPREHENSIVE_TITLE: &str = "Comprehensive PCOS Management Diet";
const COMPREHENSIVE_DESCRIPTION: &str = "A structured, low-glycemic plan aimed at improving insulin sensitivity and reducing inflammation across every meal.";

const TARGETED_TITLE: &str = "Targeted PCOS Nutrition Plan";
const TARGETED_DESCRIPTION: &str = "A focused plan that addresses the symptoms you reported while keeping meals balanced and flexible.";

const BASELINE_FOODS: [FoodGroup; 4] = [
    FoodGroup {
        category: "Complex Carbohydrates",
        items: &["Quinoa", "Brown rice", "Steel-cut oats", "Sweet potatoes", "Lentils and beans"],
    },
    FoodGroup {
        category: "Lean Proteins",
        items: &["Chicken breast", "Salmon and sardines", "Eggs", "Tofu and tempeh", "Greek yogurt"],
    },
    FoodGroup {
        category: "Healthy Fats",
        items: &["Avocado", "Extra virgin olive oil", "Walnuts and almonds", "Chia seeds"],
    },
    FoodGroup {
        category: "Anti-inflammatory Vegetables",
        items: &["Spinach and kale", "Broccoli", "Cauliflower", "Bell peppers", "Tomatoes"],
    },
];

const BASELINE_MEALS: [MealSuggestion; 4] = [
    MealSuggestion {
        meal_time: "Breakfast",
        suggestions: &[
            "Steel-cut oats with berries and chia seeds",
            "Vegetable omelette with whole-grain toast",
        ],
    },
    MealSuggestion {
        meal_time: "Lunch",
        suggestions: &[
            "Quinoa salad with chickpeas, leafy greens, and olive oil",
            "Grilled chicken wrap with vegetables",
        ],
    },
    MealSuggestion {
        meal_time: "Dinner",
        suggestions: &[
            "Baked salmon with roasted vegetables and brown rice",
            "Lentil and vegetable curry",
        ],
    },
    MealSuggestion {
        meal_time: "Snacks",
        suggestions: &[
            "Greek yogurt with walnuts",
            "Apple slices with almond butter",
            "Hummus with carrot sticks",
        ],
    },
];

const BASELINE_TIPS: [&str; 4] = [
    "Pair carbohydrates with protein or healthy fat to limit blood sugar spikes.",
    "Eat regular meals and avoid skipping breakfast.",
    "Limit refined sugar, white flour, and sugary drinks.",
    "Stay hydrated with water or unsweetened herbal teas.",
];

const HIGH_RISK_TIPS: [&str; 2] = [
    "Work with a registered dietitian to build an individualized meal plan.",
    "Keep a food and symptom journal to spot patterns worth discussing with your doctor.",
];

const FACTOR_ADDITIONS: [FactorAddition; 4] = [
    FactorAddition {
        factor: "weight-gain",
        foods: FoodGroup {
            category: "Metabolism-Boosting Foods",
            items: &["Green tea", "Lean turkey", "Cinnamon", "High-fiber vegetables", "Apple cider vinegar in water"],
        },
        tips: &[
            "Focus on portion control by filling half your plate with non-starchy vegetables.",
            "Include protein and fiber in every meal to stay full longer.",
        ],
    },
    FactorAddition {
        factor: "irregular-periods",
        foods: FoodGroup {
            category: "Hormone-Balancing Foods",
            items: &["Flaxseeds", "Pumpkin seeds", "Spearmint tea", "Leafy greens rich in magnesium"],
        },
        tips: &["Consider seed cycling with flax, pumpkin, sunflower, and sesame seeds."],
    },
    FactorAddition {
        factor: "acne",
        foods: FoodGroup {
            category: "Skin-Supporting Foods",
            items: &["Zinc-rich foods (pumpkin seeds, chickpeas)", "Fatty fish", "Berries", "Green tea"],
        },
        tips: &["Limit dairy and high-glycemic foods, which can aggravate acne."],
    },
    FactorAddition {
        factor: "mood-changes",
        foods: FoodGroup {
            category: "Mood-Supporting Foods",
            items: &["Omega-3 rich fish", "Dark chocolate (70%+)", "Bananas", "Fermented foods"],
        },
        tips: &[
            "Keep blood sugar stable with regular meals to help even out mood swings.",
            "Limit caffeine and alcohol, which can worsen anxiety and sleep.",
        ],
    },
];

const YOUTH_TIP: &str = "Build lasting habits now: learn to cook simple balanced meals and keep nutritious snacks on hand.";

const BONE_SUPPORT_FOODS: FoodGroup = FoodGroup {
    category: "Bone-Support Foods",
    items: &["Calcium-rich dairy or fortified plant milk", "Sardines with bones", "Kale and bok choy", "Almonds"],
};

const MATURE_TIPS: [&str; 2] = [
    "Ensure adequate calcium and vitamin D intake to protect bone density.",
    "Include anti-inflammatory foods to support joint health.",
];

/// Builds the diet plan for an assessment. Pure and total.
pub fn diet_plan<S: AsRef<str>>(
    risk_level: RiskLevel,
    key_factors: &[S],
    age: &str,
) -> DietRecommendation {
    let mut plan = DietRecommendation {
        title: BASELINE_TITLE,
        description: BASELINE_DESCRIPTION,
        foods: BASELINE_FOODS.to_vec(),
        meal_plan: BASELINE_MEALS.to_vec(),
        tips: BASELINE_TIPS.to_vec(),
    };

    match risk_level {
        RiskLevel::High => {
            plan.title = COMPREHENSIVE_TITLE;
            plan.description = COMPREHENSIVE_DESCRIPTION;
            plan.tips.extend_from_slice(&HIGH_RISK_TIPS);
        }
        RiskLevel::Moderate => {
            plan.title = TARGETED_TITLE;
            plan.description = TARGETED_DESCRIPTION;
        }
        RiskLevel::Low => {}
    }

    for addition in &FACTOR_ADDITIONS {
        if has_factor(key_factors, addition.factor) {
            plan.foods.push(addition.foods);
            plan.tips.extend_from_slice(addition.tips);
        }
    }

    match AgeBand::from_answer(age) {
        AgeBand::Youth => plan.tips.push(YOUTH_TIP),
        AgeBand::Mature => {
            plan.foods.push(BONE_SUPPORT_FOODS);
            plan.tips.extend_from_slice(&MATURE_TIPS);
        }
        AgeBand::Unbanded => {}
    }

    plan
}
