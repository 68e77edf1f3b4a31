use crate::models::{Food, Totals};

/// Sum calories and protein over `foods`.
///
/// The empty sequence sums to zero.
pub fn aggregate<'a, I>(foods: I) -> Totals
where
    I: IntoIterator<Item = &'a Food>,
{
    foods.into_iter().fold(Totals::default(), |acc, food| Totals {
        kcal: acc.kcal + u64::from(food.kcal()),
        protein_g: acc.protein_g + u64::from(food.protein_g()),
    })
}
