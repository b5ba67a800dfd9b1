// ABOUTME: Built-in yoga flow and food catalog entries
// ABOUTME: Used when no catalog files are configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FoodItem, YogaFlow};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn flow(id: &str, name: &str, duration_min: u32, level: &str, tags: &[&str]) -> YogaFlow {
    YogaFlow {
        id: id.to_owned(),
        name: name.to_owned(),
        tags: strings(tags),
        duration_min,
        level: Some(level.to_owned()),
    }
}

fn food(id: &str, name: &str, kcal: f64, ingredients: &[&str], tags: &[&str]) -> FoodItem {
    FoodItem {
        id: id.to_owned(),
        name: name.to_owned(),
        ingredients: strings(ingredients),
        tags: strings(tags),
        kcal: Some(kcal),
    }
}

pub(super) fn yoga_flows() -> Vec<YogaFlow> {
    vec![
        flow("yoga_001", "Sun Salutation A", 20, "beginner", &["flow", "standing"]),
        flow(
            "yoga_002",
            "Shoulder Stand Hold",
            15,
            "intermediate",
            &["inversions", "inversions_long"],
        ),
        flow("yoga_003", "Supported Bridge", 15, "beginner", &["backbend_gentle", "restorative"]),
        flow("yoga_004", "Wheel Pose Practice", 20, "advanced", &["deep_backbends"]),
        flow("yoga_005", "Seated Twist Series", 15, "intermediate", &["deep_twists"]),
        flow("yoga_006", "Child's Pose Restorative", 10, "beginner", &["restorative"]),
        flow("yoga_007", "Warrior Flow", 25, "beginner", &["standing", "strength"]),
        flow("yoga_008", "Legs Up The Wall", 10, "beginner", &["inversions", "restorative"]),
        flow("yoga_009", "Hot Vinyasa", 45, "advanced", &["hot_yoga", "high_intensity"]),
        flow("yoga_010", "Cobra and Locust", 15, "beginner", &["prone_poses", "backbend_gentle"]),
        flow("yoga_011", "Garland Squat Flow", 15, "intermediate", &["deep_knee_flexion"]),
        flow("yoga_012", "Tree and Eagle Balance", 15, "beginner", &["balance_poses", "standing"]),
        flow(
            "yoga_013",
            "Headstand Practice",
            20,
            "advanced",
            &["inversions", "inversions_long"],
        ),
        flow("yoga_014", "Yoga Nidra", 30, "beginner", &["restorative", "supine"]),
        flow("yoga_015", "Gentle Hip Openers", 20, "beginner", &["hip_openers", "seated"]),
        flow("yoga_016", "Chair Yoga Sequence", 20, "beginner", &["seated", "low_impact"]),
    ]
}

pub(super) fn foods() -> Vec<FoodItem> {
    vec![
        food(
            "food_001",
            "Vegetable Poha",
            320.0,
            &["flattened rice", "peas", "onion", "curry leaves"],
            &["vegan", "breakfast"],
        ),
        food(
            "food_002",
            "Moong Dal Chilla",
            280.0,
            &["moong dal", "onion", "tomato"],
            &["vegan", "high_protein"],
        ),
        food(
            "food_003",
            "Paneer Tikka",
            360.0,
            &["paneer", "yogurt", "spices"],
            &["vegetarian", "dairy", "high_protein"],
        ),
        food(
            "food_004",
            "Grilled Chicken Salad",
            410.0,
            &["chicken breast", "lettuce", "olive oil"],
            &["meat", "poultry", "high_protein"],
        ),
        food(
            "food_005",
            "Oats with Banana",
            300.0,
            &["rolled oats", "banana", "cinnamon"],
            &["vegan", "breakfast"],
        ),
        food(
            "food_006",
            "Roasted Almond Oats",
            380.0,
            &["rolled oats", "almond", "honey"],
            &["vegetarian", "honey", "nuts"],
        ),
        food(
            "food_007",
            "Masoor Dal with Brown Rice",
            450.0,
            &["red lentils", "brown rice", "turmeric"],
            &["vegan"],
        ),
        food(
            "food_008",
            "Tofu Stir Fry",
            390.0,
            &["tofu", "broccoli", "soy sauce"],
            &["vegan", "soy", "high_protein"],
        ),
        food(
            "food_009",
            "Egg Bhurji",
            310.0,
            &["egg", "onion", "tomato"],
            &["egg", "high_protein"],
        ),
        food(
            "food_010",
            "Rohu Fish Curry",
            420.0,
            &["rohu fish", "tamarind", "mustard oil"],
            &["fish", "seafood"],
        ),
        food(
            "food_011",
            "Greek Yogurt Parfait",
            290.0,
            &["yogurt", "berries", "honey"],
            &["vegetarian", "dairy", "honey"],
        ),
        food(
            "food_012",
            "Quinoa Vegetable Bowl",
            430.0,
            &["quinoa", "chickpeas", "cucumber"],
            &["vegan", "high_protein"],
        ),
        food(
            "food_013",
            "Sprouts Salad",
            220.0,
            &["moong sprouts", "tomato", "lemon"],
            &["vegan", "raw"],
        ),
        food(
            "food_014",
            "Ragi Dosa",
            260.0,
            &["ragi", "urad dal"],
            &["vegan", "breakfast"],
        ),
        food(
            "food_015",
            "Besan Chilla",
            270.0,
            &["chickpea flour", "spinach"],
            &["vegan", "high_protein"],
        ),
        food(
            "food_016",
            "Mango Lassi",
            340.0,
            &["mango", "yogurt", "sugar"],
            &["vegetarian", "dairy", "high_sugar"],
        ),
        food(
            "food_017",
            "Mixed Pickle Thali",
            480.0,
            &["mixed pickle", "rice", "dal"],
            &["vegan", "high_sodium"],
        ),
        food(
            "food_018",
            "Masala Chai",
            120.0,
            &["tea", "milk", "sugar"],
            &["vegetarian", "dairy", "caffeine"],
        ),
        food(
            "food_019",
            "Whole Wheat Roti with Sabzi",
            400.0,
            &["whole wheat flour", "mixed vegetables"],
            &["vegan", "gluten"],
        ),
        food(
            "food_020",
            "Steamed Idli with Sambar",
            330.0,
            &["rice", "urad dal", "toor dal", "vegetables"],
            &["vegan", "breakfast"],
        ),
        food(
            "food_021",
            "Vegetable Khichdi",
            410.0,
            &["rice", "moong dal", "vegetables"],
            &["vegan"],
        ),
        food(
            "food_022",
            "Grilled Salmon with Greens",
            460.0,
            &["salmon", "spinach", "olive oil"],
            &["fish", "seafood", "high_protein"],
        ),
    ]
}
