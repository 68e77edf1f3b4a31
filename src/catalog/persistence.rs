use std::fs;
use std::path::Path;

use crate::catalog::FoodCatalog;
use crate::error::{ProteinError, Result};
use crate::models::Food;

/// Load a catalog from a JSON file.
///
/// Order is preserved and duplicates are kept. Any invalid food fails the load.
pub fn load_catalog_json<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let foods: Vec<Food> = serde_json::from_str(&content)?;

    if let Some((i, food)) = foods.iter().enumerate().find(|(_, f)| !f.is_valid()) {
        return Err(ProteinError::InvalidFood(format!(
            "entry {} ({:?}) has empty text",
            i,
            food.description()
        )));
    }

    log::info!("Loaded {} foods from {}", foods.len(), path.display());
    Ok(FoodCatalog::new(foods))
}

/// Save a catalog to a JSON file.
pub fn save_catalog_json<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.as_slice())?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let catalog = FoodCatalog::new(vec![
            Food::new("Egg", "1 large", 50, 72, 6).unwrap(),
            Food::new("Egg", "1 large", 50, 72, 6).unwrap(),
            Food::new("Almonds", "1 oz", 28, 164, 6).unwrap(),
        ]);

        let file = NamedTempFile::new().unwrap();
        save_catalog_json(file.path(), &catalog).unwrap();

        let reloaded = load_catalog_json(file.path()).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_load_rejects_invalid_food() {
        let json = r#"[
            {"Description": "Egg", "Amount": "1 large", "AmountGrams": 50, "Calories": 72, "Protein": 6},
            {"Description": "", "Amount": "1 cup", "AmountGrams": 1, "Calories": 1, "Protein": 1}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_catalog_json(file.path()),
            Err(ProteinError::InvalidFood(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog_json(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ProteinError::Io(_))));
    }
}
