use std::fmt;

use crop_core::PredictionResult;

/// The rendered result panel: predicted crop, city/weather/soil summary,
/// dish and ingredients, and the raw nutrition mapping.
pub struct Panel<'a>(pub &'a PredictionResult);

impl fmt::Display for Panel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "Predicted Crop: {}", result.crop)?;
        writeln!(f)?;
        writeln!(f, "City: {}", result.city)?;
        writeln!(
            f,
            "Weather: {}°C, {}% humidity, {}mm rain",
            result.temperature, result.humidity, result.rainfall
        )?;
        writeln!(f, "Soil: N {}, P {}, K {}, pH {}", result.n, result.p, result.k, result.ph)?;
        writeln!(f)?;

        match &result.dish {
            Some(dish) => {
                writeln!(f, "Dish Recommendation: {dish}")?;
                writeln!(f, "Ingredients: {}", result.ingredients.join(", "))?;
            }
            None => writeln!(f, "Dish Recommendation: no dish found for this crop")?,
        }

        if let Some(nutrition) = &result.nutrition {
            // Printed verbatim, keys in the order the service sent them.
            let pretty = serde_json::to_string_pretty(nutrition).map_err(|_| fmt::Error)?;
            writeln!(f)?;
            writeln!(f, "Nutrition:")?;
            writeln!(f, "{pretty}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn pune_result() -> PredictionResult {
        let mut nutrition = Map::new();
        nutrition.insert("calories".to_string(), json!(350));
        nutrition.insert("protein".to_string(), json!(12));

        PredictionResult {
            city: "Pune".to_string(),
            crop: "Rice".to_string(),
            temperature: 28.0,
            humidity: 80.0,
            rainfall: 120.0,
            n: 90.0,
            p: 40.0,
            k: 45.0,
            ph: 6.5,
            dish: Some("Khichdi".to_string()),
            ingredients: vec!["rice".to_string(), "lentils".to_string()],
            nutrition: Some(nutrition),
            error: None,
        }
    }

    #[test]
    fn renders_all_four_groups() {
        let result = pune_result();
        let panel = Panel(&result).to_string();

        assert!(panel.contains("Predicted Crop: Rice"));
        assert!(panel.contains("City: Pune"));
        assert!(panel.contains("Weather: 28°C, 80% humidity, 120mm rain"));
        assert!(panel.contains("Soil: N 90, P 40, K 45, pH 6.5"));
        assert!(panel.contains("Dish Recommendation: Khichdi"));
        assert!(panel.contains("Ingredients: rice, lentils"));
        assert!(panel.contains("Nutrition:\n{\n  \"calories\": 350,\n  \"protein\": 12\n}"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let result = pune_result();
        assert_eq!(Panel(&result).to_string(), Panel(&result).to_string());
    }

    #[test]
    fn nutrition_keys_keep_the_order_they_arrived_in() {
        let mut result = pune_result();

        // Reversed insertion order must survive into the output.
        let mut nutrition = Map::new();
        nutrition.insert("protein".to_string(), json!(12));
        nutrition.insert("calories".to_string(), json!(350));
        result.nutrition = Some(nutrition);

        let panel = Panel(&result).to_string();
        assert!(panel.contains("{\n  \"protein\": 12,\n  \"calories\": 350\n}"));
    }

    #[test]
    fn no_dish_result_renders_without_ingredients_or_nutrition() {
        let result = PredictionResult {
            crop: "jute".to_string(),
            ..PredictionResult::default()
        };

        let panel = Panel(&result).to_string();
        assert!(panel.contains("Predicted Crop: jute"));
        assert!(panel.contains("Dish Recommendation: no dish found for this crop"));
        assert!(!panel.contains("Ingredients:"));
        assert!(!panel.contains("Nutrition:"));
    }
}
