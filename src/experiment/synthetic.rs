use rand::Rng;

use crate::catalog::FoodCatalog;
use crate::error::{ProteinError, Result};
use crate::models::Food;

/// Generate `n` random foods with calories and protein drawn from inclusive ranges.
pub fn synthetic_catalog(
    rng: &mut impl Rng,
    n: usize,
    kcal_range: (u32, u32),
    protein_range: (u32, u32),
) -> Result<FoodCatalog> {
    check_range("calorie", kcal_range)?;
    check_range("protein", protein_range)?;

    let foods = (0..n)
        .map(|i| {
            Food::new(
                format!("Synthetic food #{}", i + 1),
                "1 serving",
                rng.gen_range(10..=500),
                rng.gen_range(kcal_range.0..=kcal_range.1),
                rng.gen_range(protein_range.0..=protein_range.1),
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FoodCatalog::new(foods))
}

fn check_range(name: &str, (lo, hi): (u32, u32)) -> Result<()> {
    if lo > hi {
        return Err(ProteinError::InvalidInput(format!(
            "{} range {}..={} is empty",
            name, lo, hi
        )));
    }
    Ok(())
}
