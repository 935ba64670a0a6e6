use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ingredient name mapped to kilograms per 100 kg of finished batch.
///
/// `BTreeMap` keeps names unique and gives a deterministic iteration
/// order, which is the order scaled line items are produced in.
pub type IngredientTable = BTreeMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Grams,
    Kilograms,
    Tubs,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Grams => write!(f, "g"),
            Unit::Kilograms => write!(f, "kg"),
            Unit::Tubs => write!(f, "tub"),
        }
    }
}

/// One scaled ingredient line. `amount` stays in kilogram terms for
/// table-derived lines (tubs for the yogurt line); `display` carries the
/// value re-expressed in `unit` and formatted to two decimals.
#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    pub name: String,
    pub amount: f64,
    pub unit: Unit,
    pub display: String,
}

impl LineItem {
    /// Build a table-derived line from a kilogram amount. Amounts below
    /// one kilogram are shown in grams.
    #[must_use]
    pub fn from_kg(name: &str, kg: f64) -> Self {
        let (unit, display) = if kg < 1.0 {
            (Unit::Grams, format!("{:.2}", kg * 1000.0))
        } else {
            (Unit::Kilograms, format!("{kg:.2}"))
        };
        Self {
            name: name.to_string(),
            amount: kg,
            unit,
            display,
        }
    }

    /// Build a tub-counted line. Tubs never switch to grams.
    #[must_use]
    pub fn tubs(name: &str, tubs: f64) -> Self {
        Self {
            name: name.to_string(),
            amount: tubs,
            unit: Unit::Tubs,
            display: format!("{tubs:.2}"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScaleRequest {
    pub batch_kg: f64,
    pub pots: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub batch_kg: f64,
    pub pots: u32,
    pub total: Vec<LineItem>,
    pub per_pot: Vec<LineItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub recorded_at: String,
    pub description: String,
}

/// The ratio table shipped with the calculator, in kg per 100 kg batch.
#[must_use]
pub fn default_ingredients() -> IngredientTable {
    IngredientTable::from([
        ("tahini".to_string(), 22.0),
        ("lemon juice".to_string(), 6.5),
        ("garlic".to_string(), 0.75),
        ("cumin".to_string(), 0.8),
        ("salt".to_string(), 1.4),
        ("chili".to_string(), 0.12),
    ])
}

/// Validate and normalize an ingredient name (trimmed, non-empty).
pub fn validate_ingredient_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidIngredient(
            "name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn validate_ingredient_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidIngredient(
            "amount per 100 kg must be a positive number".to_string(),
        ));
    }
    Ok(())
}
