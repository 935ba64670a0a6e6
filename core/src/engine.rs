use crate::error::{Error, Result};
use crate::models::{BatchResult, IngredientTable, LineItem, ScaleRequest};

/// Tubs of yogurt served alongside every 100 kg of finished batch.
/// Fixed garnish ratio, independent of the ingredient table.
pub const YOGURT_TUBS_PER_100_KG: f64 = 30.0;

pub const YOGURT: &str = "yogurt";

/// Scale the ratio table to a target batch weight.
///
/// The table holds kg-per-100-kg ratios, so `ratio = batch_kg / 100`.
/// Each ingredient produces one total line and one per-pot line, in table
/// iteration order, with the yogurt garnish appended last to both views.
/// Pure: logging the run is the caller's responsibility.
pub fn scale(ingredients: &IngredientTable, request: &ScaleRequest) -> Result<BatchResult> {
    if !request.batch_kg.is_finite() || request.batch_kg <= 0.0 {
        return Err(Error::InvalidQuantity);
    }
    if request.pots == 0 {
        return Err(Error::InvalidPotCount);
    }

    let ratio = request.batch_kg / 100.0;
    let pots = f64::from(request.pots);
    let yogurt_tubs = (YOGURT_TUBS_PER_100_KG * ratio * 100.0).round() / 100.0;

    let mut total = Vec::with_capacity(ingredients.len() + 1);
    let mut per_pot = Vec::with_capacity(ingredients.len() + 1);

    for (name, per_100_kg) in ingredients {
        let amount = per_100_kg * ratio;
        total.push(LineItem::from_kg(name, amount));
        per_pot.push(LineItem::from_kg(name, amount / pots));
    }

    // Per-pot yogurt divides the already-rounded total tub count.
    total.push(LineItem::tubs(YOGURT, yogurt_tubs));
    per_pot.push(LineItem::tubs(YOGURT, yogurt_tubs / pots));

    Ok(BatchResult {
        batch_kg: request.batch_kg,
        pots: request.pots,
        total,
        per_pot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    fn table(entries: &[(&str, f64)]) -> IngredientTable {
        entries
            .iter()
            .map(|(name, amount)| ((*name).to_string(), *amount))
            .collect()
    }

    #[test]
    fn test_scale_full_reference_batch() {
        let t = table(&[("A", 22.0)]);
        let result = scale(
            &t,
            &ScaleRequest {
                batch_kg: 100.0,
                pots: 3,
            },
        )
        .unwrap();

        assert_eq!(result.total.len(), 2);
        assert_eq!(result.total[0].name, "A");
        assert!((result.total[0].amount - 22.0).abs() < 1e-9);
        assert_eq!(result.total[0].unit, Unit::Kilograms);
        assert_eq!(result.total[0].display, "22.00");

        assert!((result.per_pot[0].amount - 22.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.per_pot[0].display, "7.33");

        let yogurt = &result.total[1];
        assert_eq!(yogurt.name, YOGURT);
        assert_eq!(yogurt.unit, Unit::Tubs);
        assert_eq!(yogurt.display, "30.00");
        assert_eq!(result.per_pot[1].display, "10.00");
    }

    #[test]
    fn test_scale_half_batch_small_amount_in_grams() {
        let t = table(&[("B", 0.75)]);
        let result = scale(
            &t,
            &ScaleRequest {
                batch_kg: 50.0,
                pots: 1,
            },
        )
        .unwrap();

        // 0.75 * 0.5 = 0.375 kg, below the kilogram threshold
        assert!((result.total[0].amount - 0.375).abs() < 1e-9);
        assert_eq!(result.total[0].unit, Unit::Grams);
        assert_eq!(result.total[0].display, "375.00");
    }

    #[test]
    fn test_total_amounts_follow_ratio() {
        let t = table(&[("a", 1.4), ("b", 6.5), ("c", 22.0)]);
        let request = ScaleRequest {
            batch_kg: 80.0,
            pots: 4,
        };
        let result = scale(&t, &request).unwrap();

        for (line, (_, per_100_kg)) in result.total.iter().zip(t.iter()) {
            assert!((line.amount - per_100_kg * 0.8).abs() < 1e-9);
        }
    }

    #[test]
    fn test_per_pot_divides_total() {
        let t = table(&[("tahini", 22.0), ("salt", 1.4), ("chili", 0.12)]);
        let result = scale(
            &t,
            &ScaleRequest {
                batch_kg: 73.0,
                pots: 7,
            },
        )
        .unwrap();

        for (total, per_pot) in result.total.iter().zip(&result.per_pot) {
            assert_eq!(total.name, per_pot.name);
            assert!((per_pot.amount - total.amount / 7.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_lines_follow_table_order_with_yogurt_last() {
        let t = table(&[("zaatar", 2.0), ("allspice", 1.0), ("mint", 3.0)]);
        let result = scale(
            &t,
            &ScaleRequest {
                batch_kg: 100.0,
                pots: 2,
            },
        )
        .unwrap();

        let names: Vec<&str> = result.total.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["allspice", "mint", "zaatar", YOGURT]);
        let per_pot_names: Vec<&str> = result.per_pot.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, per_pot_names);
    }

    #[test]
    fn test_yogurt_independent_of_table() {
        let empty = IngredientTable::new();
        let result = scale(
            &empty,
            &ScaleRequest {
                batch_kg: 33.0,
                pots: 3,
            },
        )
        .unwrap();

        assert_eq!(result.total.len(), 1);
        // 30 * 0.33 = 9.9, rounded to two decimals
        assert!((result.total[0].amount - 9.9).abs() < 1e-9);
        assert_eq!(result.total[0].display, "9.90");
        assert_eq!(result.per_pot[0].display, "3.30");
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let t = table(&[("A", 1.0)]);
        for bad in [-5.0, 0.0, f64::NAN, f64::INFINITY] {
            let err = scale(
                &t,
                &ScaleRequest {
                    batch_kg: bad,
                    pots: 3,
                },
            )
            .unwrap_err();
            assert!(matches!(err, Error::InvalidQuantity));
        }
    }

    #[test]
    fn test_rejects_zero_pots() {
        let t = table(&[("A", 1.0)]);
        let err = scale(
            &t,
            &ScaleRequest {
                batch_kg: 50.0,
                pots: 0,
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidPotCount));
    }

    #[test]
    fn test_unit_chosen_per_view() {
        // 2.4 kg total stays in kilograms, but split across 4 pots each
        // share is 0.6 kg and flips to grams.
        let t = table(&[("cumin", 3.0)]);
        let result = scale(
            &t,
            &ScaleRequest {
                batch_kg: 80.0,
                pots: 4,
            },
        )
        .unwrap();

        assert_eq!(result.total[0].unit, Unit::Kilograms);
        assert_eq!(result.total[0].display, "2.40");
        assert_eq!(result.per_pot[0].unit, Unit::Grams);
        assert_eq!(result.per_pot[0].display, "600.00");
    }
}
