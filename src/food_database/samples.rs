// ABOUTME: Built-in food list used to seed an empty food database
// ABOUTME: Nutrient values are per serving as listed on common nutrition labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack_core::models::Food;

/// `[calories, protein_g, carbs_g, fat_g, fiber_g]` per serving
type Macros = [f64; 5];

fn sample(
    id: &str,
    name: &str,
    serving_size: f64,
    serving_unit: &str,
    macros: Macros,
    category: &str,
    tags: &[&str],
) -> Food {
    let [calories, protein_g, carbs_g, fat_g, fiber_g] = macros;
    Food {
        id: id.to_owned(),
        name: name.to_owned(),
        serving_size,
        serving_unit: serving_unit.to_owned(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
        category: category.to_owned(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
    }
}

/// The seed list, in display order
#[must_use]
pub fn sample_foods() -> Vec<Food> {
    vec![
        sample("1", "Grilled Chicken Breast", 100.0, "g", [165.0, 31.0, 0.0, 3.6, 0.0], "meat", &["high-protein", "low-carb"]),
        sample("2", "Beef Steak", 100.0, "g", [271.0, 25.0, 0.0, 18.0, 0.0], "meat", &["high-protein"]),
        sample("3", "Turkey Breast", 100.0, "g", [135.0, 29.0, 0.0, 1.0, 0.0], "meat", &["high-protein", "low-fat"]),
        sample("4", "Lamb Chop", 100.0, "g", [294.0, 25.0, 0.0, 21.0, 0.0], "meat", &["high-protein"]),
        sample("5", "Chicken Thigh", 100.0, "g", [209.0, 26.0, 0.0, 11.0, 0.0], "meat", &["protein"]),
        sample("6", "Salmon Fillet", 100.0, "g", [208.0, 20.0, 0.0, 13.0, 0.0], "fish", &["omega-3", "high-protein"]),
        sample("7", "Tuna", 100.0, "g", [132.0, 28.0, 0.0, 1.0, 0.0], "fish", &["high-protein"]),
        sample("8", "Shrimp", 100.0, "g", [99.0, 24.0, 0.0, 0.3, 0.0], "fish", &["low-fat", "high-protein"]),
        sample("9", "Cod", 100.0, "g", [82.0, 18.0, 0.0, 0.7, 0.0], "fish", &["low-fat", "protein"]),
        sample("10", "Mackerel", 100.0, "g", [205.0, 19.0, 0.0, 13.0, 0.0], "fish", &["omega-3"]),
        sample("11", "Brown Rice", 100.0, "g", [112.0, 2.6, 24.0, 0.9, 1.8], "grains", &["carbs"]),
        sample("12", "White Rice", 100.0, "g", [130.0, 2.4, 28.0, 0.3, 0.4], "grains", &["carbs"]),
        sample("13", "Oatmeal", 100.0, "g", [389.0, 17.0, 66.0, 7.0, 11.0], "grains", &["fiber", "breakfast"]),
        sample("14", "Lentils", 100.0, "g", [116.0, 9.0, 20.0, 0.4, 8.0], "legumes", &["fiber", "protein"]),
        sample("15", "Chickpeas", 100.0, "g", [164.0, 9.0, 27.0, 2.6, 7.6], "legumes", &["fiber", "protein"]),
        sample("16", "Broccoli", 100.0, "g", [34.0, 2.8, 7.0, 0.4, 2.6], "vegetables", &["low-calorie"]),
        sample("17", "Spinach", 100.0, "g", [23.0, 2.9, 3.6, 0.4, 2.2], "vegetables", &["iron", "low-calorie"]),
        sample("18", "Carrot", 100.0, "g", [41.0, 0.9, 10.0, 0.2, 2.8], "vegetables", &["vitamin-A", "low-calorie"]),
        sample("19", "Tomato", 100.0, "g", [18.0, 0.9, 3.9, 0.2, 1.2], "vegetables", &["vitamin-C"]),
        sample("20", "Cucumber", 100.0, "g", [16.0, 0.7, 3.6, 0.1, 0.5], "vegetables", &["low-calorie"]),
        sample("21", "Banana", 100.0, "g", [89.0, 1.1, 23.0, 0.3, 2.6], "fruits", &["natural-sugar"]),
        sample("22", "Apple", 100.0, "g", [52.0, 0.3, 14.0, 0.2, 2.4], "fruits", &["low-fat", "fiber"]),
        sample("23", "Orange", 100.0, "g", [47.0, 0.9, 12.0, 0.1, 2.4], "fruits", &["vitamin-C"]),
        sample("24", "Strawberry", 100.0, "g", [33.0, 0.7, 8.0, 0.3, 2.0], "fruits", &["antioxidants"]),
        sample("25", "Grapes", 100.0, "g", [69.0, 0.7, 18.0, 0.2, 0.9], "fruits", &["natural-sugar"]),
        sample("26", "Almonds", 100.0, "g", [579.0, 21.0, 22.0, 50.0, 12.0], "nuts", &["healthy-fats"]),
        sample("27", "Walnuts", 100.0, "g", [654.0, 15.0, 14.0, 65.0, 7.0], "nuts", &["omega-3"]),
        sample("28", "Cashews", 100.0, "g", [553.0, 18.0, 30.0, 44.0, 3.3], "nuts", &["healthy-fats"]),
        sample("29", "Peanuts", 100.0, "g", [567.0, 26.0, 16.0, 49.0, 8.5], "nuts", &["healthy-fats"]),
        sample("30", "Chia Seeds", 100.0, "g", [486.0, 17.0, 42.0, 31.0, 34.0], "seeds", &["fiber", "omega-3"]),
        sample("31", "Greek Yogurt", 100.0, "g", [59.0, 10.0, 3.6, 0.4, 0.0], "dairy", &["high-protein", "low-fat"]),
        sample("32", "Milk", 100.0, "ml", [42.0, 3.4, 5.0, 1.0, 0.0], "dairy", &["calcium"]),
        sample("33", "Cheddar Cheese", 100.0, "g", [403.0, 25.0, 1.3, 33.0, 0.0], "dairy", &["high-fat", "protein"]),
        sample("34", "Cottage Cheese", 100.0, "g", [98.0, 11.0, 3.4, 4.3, 0.0], "dairy", &["low-fat", "protein"]),
        sample("35", "Butter", 100.0, "g", [717.0, 0.9, 0.1, 81.0, 0.0], "dairy", &["high-fat"]),
        sample("36", "Egg", 50.0, "g", [78.0, 6.0, 0.6, 5.0, 0.0], "dairy", &["high-protein"]),
        sample("37", "Egg White", 100.0, "g", [52.0, 11.0, 0.7, 0.2, 0.0], "dairy", &["high-protein", "low-fat"]),
        sample("38", "Green Tea", 200.0, "ml", [2.0, 0.0, 0.0, 0.0, 0.0], "beverages", &["antioxidants"]),
        sample("39", "Black Coffee", 200.0, "ml", [2.0, 0.3, 0.0, 0.0, 0.0], "beverages", &["caffeine"]),
        sample("40", "Orange Juice", 200.0, "ml", [85.0, 1.7, 20.0, 0.2, 0.5], "beverages", &["vitamin-C"]),
        sample("41", "Almond Milk", 200.0, "ml", [39.0, 1.0, 3.4, 2.5, 0.8], "beverages", &["low-calorie"]),
        sample("42", "Protein Bar", 50.0, "g", [200.0, 20.0, 18.0, 7.0, 3.0], "snacks", &["high-protein"]),
        sample("43", "Rice Cake", 20.0, "g", [77.0, 1.5, 16.0, 0.1, 0.2], "snacks", &["low-calorie"]),
        sample("44", "Beef Jerky", 28.0, "g", [116.0, 9.4, 3.1, 7.3, 0.0], "snacks", &["high-protein"]),
        sample("45", "Popcorn", 100.0, "g", [387.0, 12.0, 78.0, 4.3, 15.0], "snacks", &["fiber"]),
        sample("46", "Dark Chocolate", 100.0, "g", [546.0, 4.9, 61.0, 31.0, 7.0], "snacks", &["antioxidants"]),
        sample("47", "Sunflower Seeds", 100.0, "g", [584.0, 21.0, 20.0, 51.0, 8.6], "seeds", &["healthy-fats"]),
        sample("48", "Pumpkin Seeds", 100.0, "g", [559.0, 30.0, 10.0, 49.0, 6.0], "seeds", &["protein", "healthy-fats"]),
        sample("49", "Flax Seeds", 100.0, "g", [534.0, 18.0, 29.0, 42.0, 27.0], "seeds", &["omega-3", "fiber"]),
        sample("50", "Honey", 100.0, "g", [304.0, 0.3, 82.0, 0.0, 0.2], "sweeteners", &["natural-sugar"]),
    ]
}
