use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ByteRecord;

use crate::catalog::FoodCatalog;
use crate::error::{ProteinError, Result};
use crate::models::Food;

/// Most fields a record in the ABBREV file may carry.
const MAX_FIELDS: usize = 53;

// Field positions within an ABBREV record.
const DESCRIPTION_FIELD: usize = 1;
const KCAL_FIELD: usize = 3;
const PROTEIN_FIELD: usize = 4;
const AMOUNT_G_FIELD: usize = 48;
const AMOUNT_FIELD: usize = 49;

/// Load all valid foods from a USDA database file in ABBREV format.
pub fn load_usda_abbrev<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = parse_usda_abbrev(file)?;
    log::info!("Loaded {} foods from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Parse ABBREV records: `^`-separated fields with text wrapped in `~`.
///
/// Records missing a description, amount, or numeric value are skipped.
/// A record with too many fields fails the whole load.
pub fn parse_usda_abbrev<R: Read>(reader: R) -> Result<FoodCatalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'^')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut foods = Vec::new();
    let mut skipped = 0usize;

    for record in rdr.byte_records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() > MAX_FIELDS {
            return Err(ProteinError::MalformedRecord {
                line,
                fields: record.len(),
            });
        }

        let Some((description, amount, amount_g, kcal, protein_g)) = parse_record(&record)
        else {
            log::debug!("line {}: incomplete record skipped", line);
            skipped += 1;
            continue;
        };

        match Food::from_measured(description, amount, amount_g, kcal, protein_g) {
            Ok(food) => foods.push(food),
            Err(e) => {
                log::warn!("line {}: {}", line, e);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {} incomplete or invalid records", skipped);
    }

    Ok(FoodCatalog::new(foods))
}

/// Text and numeric fields of one record, or `None` if any is missing.
fn parse_record(record: &ByteRecord) -> Option<(String, String, f64, f64, f64)> {
    let field = |i: usize| record.get(i).map(String::from_utf8_lossy);

    let description = remove_tildes(&field(DESCRIPTION_FIELD)?)?;
    let amount = remove_tildes(&field(AMOUNT_FIELD)?)?;
    let amount_g = parse_number(&field(AMOUNT_G_FIELD)?)?;
    let kcal = parse_number(&field(KCAL_FIELD)?)?;
    let protein_g = parse_number(&field(PROTEIN_FIELD)?)?;
    Some((description, amount, amount_g, kcal, protein_g))
}

/// Strip the surrounding `~` from a text field. Requires a non-empty body.
fn remove_tildes(field: &Cow<'_, str>) -> Option<String> {
    let inner = field.strip_prefix('~')?.strip_suffix('~')?;
    if inner.is_empty() {
        None
    } else {
        Some(inner.to_string())
    }
}

fn parse_number(field: &Cow<'_, str>) -> Option<f64> {
    field.trim().parse().ok()
}
