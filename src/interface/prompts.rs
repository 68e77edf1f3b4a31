use dialoguer::Confirm;

use crate::error::{ProteinError, Result};
use crate::optimizer::constants::{EXHAUSTIVE_CONFIRM_THRESHOLD, MAX_EXHAUSTIVE_ITEMS};
use crate::optimizer::Algorithm;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask before an exhaustive search over a large catalog.
///
/// Catalogs the search cannot handle fail with [`ProteinError::CatalogTooLarge`]
/// before any prompt. Returns true without prompting for small catalogs or
/// when `assume_yes` is set.
pub fn confirm_exhaustive(catalog_len: usize, assume_yes: bool) -> Result<bool> {
    if !Algorithm::Exhaustive.supports(catalog_len) {
        return Err(ProteinError::CatalogTooLarge {
            len: catalog_len,
            max: MAX_EXHAUSTIVE_ITEMS,
        });
    }

    if assume_yes || catalog_len <= EXHAUSTIVE_CONFIRM_THRESHOLD {
        return Ok(true);
    }

    prompt_yes_no(
        &format!(
            "Exhaustive search over {} foods tries 2^{} subsets and may take a long time. Continue?",
            catalog_len, catalog_len
        ),
        false,
    )
}
