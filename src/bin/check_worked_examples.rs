//! Compare computed values with the figures quoted in the Compounding machine chapter
//! Lending example: $1000 at 10% for 3 and 20 years

use anyhow::Context;

use compounding_machine::chapters::{lending_example, row_for_year};
use compounding_machine::{compute_final_value, CompoundingParameters};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Figures quoted in the chapter prose: (year, simple, compound)
    let quoted = [
        (1u32, 1100.00, 1100.00),
        (2, 1200.00, 1210.00),
        (3, 1300.00, 1331.00),
        (20, 3000.00, 6727.50),
    ];

    let rows = lending_example(20)?;

    println!("Worked example vs computed ($1000 at 10%)");
    println!("{:<6} {:<12} {:<12} {:<12} {:<12} {:<10}",
             "Year", "Simple", "Q_Simple", "Compound", "Q_Compound", "Diff");

    let mut mismatches = 0;
    for (year, q_simple, q_compound) in quoted.iter() {
        let row = row_for_year(&rows, *year)
            .with_context(|| format!("No computed row for year {}", year))?;
        let diff = (row.compound - q_compound).abs() + (row.simple - q_simple).abs();
        if diff > 0.005 {
            mismatches += 1;
        }
        println!("{:<6} {:<12.2} {:<12.2} {:<12.2} {:<12.2} {:<10.4}",
                 year, row.simple, q_simple, row.compound, q_compound, diff);
    }

    // Closed form vs last charted value
    let params = CompoundingParameters::new(1000.0, 0.0, 0.10, 20);
    let closed_form = compute_final_value(&params)?;
    let last = rows.last().context("Lending example produced no rows")?;
    println!("\nClosed form after {} years: {:.6} (chart shows {:.2})",
             last.year, closed_form, last.compound);

    if mismatches > 0 {
        anyhow::bail!("{} worked example(s) disagree with the calculator", mismatches);
    }
    Ok(())
}
