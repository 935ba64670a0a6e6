use anyhow::Result;
use std::process;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use ladle_core::error::Error;
use ladle_core::service::LadleService;

use super::helpers::{confirm, json_error, truncate};

pub(crate) fn cmd_ingredient_add(
    svc: &mut LadleService,
    name: &str,
    amount: f64,
    json: bool,
) -> Result<()> {
    svc.add_ingredient(name, amount)?;

    let name = name.trim();
    if json {
        println!(
            "{}",
            serde_json::json!({ "added": name, "per_100_kg": amount })
        );
    } else {
        println!("Added {name}: {amount} kg per 100 kg");
        println!("Commit the table with: ladle ingredient save");
    }
    Ok(())
}

pub(crate) fn cmd_ingredient_rename(
    svc: &mut LadleService,
    old: &str,
    new: &str,
    amount: f64,
    json: bool,
) -> Result<()> {
    match svc.rename_ingredient(old, new, amount) {
        Ok(()) => {
            let new = new.trim();
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "renamed": old, "to": new, "per_100_kg": amount })
                );
            } else {
                println!("Changed {old} to {new}: {amount} kg per 100 kg");
            }
            Ok(())
        }
        Err(Error::NotFound(_)) => {
            not_found(old, json);
        }
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn cmd_ingredient_remove(
    svc: &mut LadleService,
    name: &str,
    yes: bool,
    json: bool,
) -> Result<()> {
    if !yes && !confirm(&format!("Delete '{name}' from the ingredient table?"))? {
        eprintln!("Cancelled");
        return Ok(());
    }

    match svc.remove_ingredient(name) {
        Ok(amount) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "removed": name, "per_100_kg": amount })
                );
            } else {
                println!("Removed {name} ({amount} kg per 100 kg)");
            }
            Ok(())
        }
        Err(Error::NotFound(_)) => {
            not_found(name, json);
        }
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn cmd_ingredient_list(svc: &LadleService, json: bool) -> Result<()> {
    let ingredients = svc.ingredients();

    if json {
        println!("{}", serde_json::to_string_pretty(ingredients)?);
        return Ok(());
    }

    #[derive(Tabled)]
    struct IngredientRow {
        #[tabled(rename = "Ingredient")]
        name: String,
        #[tabled(rename = "Kg per 100 kg")]
        amount: String,
    }

    let rows: Vec<IngredientRow> = ingredients
        .iter()
        .map(|(name, amount)| IngredientRow {
            name: truncate(name, 30),
            amount: format!("{amount}"),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    if svc.has_unsaved_changes()? {
        eprintln!("Unsaved changes. Commit with: ladle ingredient save");
    }

    Ok(())
}

pub(crate) fn cmd_ingredient_save(svc: &mut LadleService, json: bool) -> Result<()> {
    svc.save_ingredients()?;

    let count = svc.ingredients().len();
    if json {
        println!("{}", serde_json::json!({ "saved": count }));
    } else {
        println!("Saved {count} ingredients");
    }
    Ok(())
}

fn not_found(name: &str, json: bool) -> ! {
    if json {
        println!("{}", json_error(&format!("No ingredient named '{name}'")));
    } else {
        eprintln!("No ingredient named '{name}'");
    }
    process::exit(2);
}
