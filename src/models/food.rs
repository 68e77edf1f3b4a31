use serde::{Deserialize, Serialize};

use crate::error::{ProteinError, Result};

/// One food item from the nutrition database.
///
/// Values describe a single sample of the food. Numeric fields are unsigned,
/// text fields are validated as non-empty on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    #[serde(rename = "Description")]
    description: String,

    #[serde(rename = "Amount")]
    amount: String,

    #[serde(rename = "AmountGrams")]
    amount_g: u32,

    #[serde(rename = "Calories")]
    kcal: u32,

    #[serde(rename = "Protein")]
    protein_g: u32,
}

impl Food {
    /// Create a food, rejecting empty description or amount text.
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        amount_g: u32,
        kcal: u32,
        protein_g: u32,
    ) -> Result<Self> {
        let food = Self {
            description: description.into(),
            amount: amount.into(),
            amount_g,
            kcal,
            protein_g,
        };

        if food.description.trim().is_empty() {
            return Err(ProteinError::InvalidFood(
                "description must not be empty".to_string(),
            ));
        }
        if food.amount.trim().is_empty() {
            return Err(ProteinError::InvalidFood(format!(
                "{}: amount must not be empty",
                food.description
            )));
        }

        Ok(food)
    }

    /// Create a food from measured (possibly fractional) values.
    ///
    /// Values are rounded half away from zero. Negative, non-finite, or
    /// out-of-range values are rejected.
    pub fn from_measured(
        description: impl Into<String>,
        amount: impl Into<String>,
        amount_g: f64,
        kcal: f64,
        protein_g: f64,
    ) -> Result<Self> {
        let description = description.into();
        let amount_g = to_whole(&description, "amount grams", amount_g)?;
        let kcal = to_whole(&description, "calories", kcal)?;
        let protein_g = to_whole(&description, "protein", protein_g)?;
        Self::new(description, amount, amount_g, kcal, protein_g)
    }

    /// Human-readable description, e.g. "WHEAT FLR,WHITE,ALL-PURPOSE".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Human-readable sample amount, e.g. "1 cup".
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Grams in one sample.
    pub fn amount_g(&self) -> u32 {
        self.amount_g
    }

    /// Kilocalories in one sample.
    pub fn kcal(&self) -> u32 {
        self.kcal
    }

    /// Grams of protein in one sample.
    pub fn protein_g(&self) -> u32 {
        self.protein_g
    }

    /// Text invariants hold. Used after deserialization, which bypasses `new`.
    pub fn is_valid(&self) -> bool {
        !self.description.trim().is_empty() && !self.amount.trim().is_empty()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}, {} g): {} kcal, {} g protein",
            self.description, self.amount, self.amount_g, self.kcal, self.protein_g
        )
    }
}

fn to_whole(description: &str, field: &str, value: f64) -> Result<u32> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded > u32::MAX as f64 {
        return Err(ProteinError::InvalidFood(format!(
            "{}: {} out of range ({})",
            description, field, value
        )));
    }
    Ok(rounded as u32)
}
