use std::path::Path;

use chrono::Local;

use crate::engine;
use crate::error::{Error, Result};
use crate::models::{
    BatchResult, IngredientTable, LogRecord, ScaleRequest, default_ingredients,
    validate_ingredient_amount, validate_ingredient_name,
};
use crate::store::Store;

const KEY_INGREDIENTS: &str = "ingredients";
const KEY_DRAFT: &str = "ingredients_draft";
const KEY_CHANGES: &str = "changes_history";
const KEY_CALCULATIONS: &str = "calculations_history";
const KEY_DARK_MODE: &str = "dark_mode";

/// Keep only the most recent records of each log.
const LOG_CAP: usize = 1000;

const TIMESTAMP_FORMAT: &str = "%A, %d %B %Y %H:%M:%S";

/// Owns the ingredient table and both history logs, loaded from the
/// store at open and persisted key by key as operations run.
///
/// The committed table under `ingredients` only changes on
/// [`save_ingredients`](Self::save_ingredients); every mutation also
/// writes the working table to a draft key so edits survive between
/// invocations without being silently committed.
pub struct LadleService {
    store: Store,
    ingredients: IngredientTable,
    changes: Vec<LogRecord>,
    calculations: Vec<LogRecord>,
}

impl LadleService {
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_store(Store::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_store(Store::open_in_memory()?)
    }

    fn from_store(store: Store) -> Result<Self> {
        let ingredients = match store.get(KEY_DRAFT)? {
            Some(draft) => draft,
            None => store
                .get(KEY_INGREDIENTS)?
                .unwrap_or_else(default_ingredients),
        };
        let changes = store.get(KEY_CHANGES)?.unwrap_or_default();
        let calculations = store.get(KEY_CALCULATIONS)?.unwrap_or_default();
        Ok(Self {
            store,
            ingredients,
            changes,
            calculations,
        })
    }

    // --- Scaling ---

    /// Scale the working table to `batch_kg` across `pots`. A successful
    /// run is appended to the calculation log; a rejected one logs nothing.
    pub fn calculate(&mut self, batch_kg: f64, pots: u32) -> Result<BatchResult> {
        let result = engine::scale(&self.ingredients, &ScaleRequest { batch_kg, pots })?;
        self.log_calculation(format!(
            "Calculated quantities for {batch_kg} kg split across {pots} pots"
        ))?;
        Ok(result)
    }

    // --- Ingredient registry ---

    pub fn add_ingredient(&mut self, name: &str, amount: f64) -> Result<()> {
        let name = validate_ingredient_name(name)?;
        validate_ingredient_amount(amount)?;
        if self.ingredients.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }

        self.ingredients.insert(name.clone(), amount);
        self.persist_draft()?;
        self.log_change(format!("Added ingredient {name} ({amount} kg per 100 kg)"))
    }

    pub fn rename_ingredient(&mut self, old: &str, new: &str, amount: f64) -> Result<()> {
        let Some(old_amount) = self.ingredients.get(old).copied() else {
            return Err(Error::NotFound(old.to_string()));
        };
        let new = validate_ingredient_name(new)?;
        validate_ingredient_amount(amount)?;
        if new != old && self.ingredients.contains_key(&new) {
            return Err(Error::DuplicateName(new));
        }

        self.ingredients.remove(old);
        self.ingredients.insert(new.clone(), amount);
        self.persist_draft()?;
        self.log_change(format!(
            "Changed ingredient '{old}' to '{new}' and amount from {old_amount} to {amount} kg per 100 kg"
        ))
    }

    /// Remove an ingredient, returning its per-100-kg amount.
    /// Confirmation is the caller's concern.
    pub fn remove_ingredient(&mut self, name: &str) -> Result<f64> {
        let Some(amount) = self.ingredients.remove(name) else {
            return Err(Error::NotFound(name.to_string()));
        };

        self.persist_draft()?;
        self.log_change(format!("Removed ingredient {name} ({amount} kg per 100 kg)"))?;
        Ok(amount)
    }

    /// Commit the working table as the saved snapshot and drop the draft.
    pub fn save_ingredients(&mut self) -> Result<()> {
        self.store.set(KEY_INGREDIENTS, &self.ingredients)?;
        self.store.delete(KEY_DRAFT)?;
        self.log_change("Saved all ingredient changes".to_string())
    }

    pub fn has_unsaved_changes(&self) -> Result<bool> {
        self.store.contains(KEY_DRAFT)
    }

    // --- Display preference ---

    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self.store.get(KEY_DARK_MODE)?.unwrap_or(false))
    }

    pub fn set_dark_mode(&self, on: bool) -> Result<()> {
        self.store.set(KEY_DARK_MODE, &on)
    }

    // --- Accessors ---

    #[must_use]
    pub fn ingredients(&self) -> &IngredientTable {
        &self.ingredients
    }

    /// Registry edit history, newest first.
    #[must_use]
    pub fn changes(&self) -> &[LogRecord] {
        &self.changes
    }

    /// Calculation history, newest first.
    #[must_use]
    pub fn calculations(&self) -> &[LogRecord] {
        &self.calculations
    }

    // --- Internals ---

    fn persist_draft(&self) -> Result<()> {
        self.store.set(KEY_DRAFT, &self.ingredients)
    }

    fn log_change(&mut self, description: String) -> Result<()> {
        Self::prepend(&mut self.changes, description);
        self.store.set(KEY_CHANGES, &self.changes)
    }

    fn log_calculation(&mut self, description: String) -> Result<()> {
        Self::prepend(&mut self.calculations, description);
        self.store.set(KEY_CALCULATIONS, &self.calculations)
    }

    fn prepend(records: &mut Vec<LogRecord>, description: String) {
        records.insert(
            0,
            LogRecord {
                recorded_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
                description,
            },
        );
        records.truncate(LOG_CAP);
    }
}
