use anyhow::Result;

use ladle_core::service::LadleService;

use super::helpers::print_line_table;

pub(crate) fn cmd_calc(svc: &mut LadleService, quantity: f64, pots: u32, json: bool) -> Result<()> {
    let result = svc.calculate(quantity, pots)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let batch = result.batch_kg;
    let pot_count = result.pots;
    println!("=== Quantities for {batch} kg ===\n");
    print_line_table(&result.total);

    println!("\n=== Per pot ({pot_count} pots) ===\n");
    print_line_table(&result.per_pot);

    Ok(())
}
