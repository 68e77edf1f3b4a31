use std::io::Write;

use tempfile::{Builder, NamedTempFile};

use max_protein_rs::catalog::{load_catalog, save_catalog_json, search};
use max_protein_rs::optimizer::{select_exhaustive, select_greedy};

/// One ABBREV line with the fields the loader reads filled in.
fn abbrev_line(id: &str, description: &str, kcal: &str, protein: &str, grams: &str, amount: &str) -> String {
    let mut fields = vec![String::new(); 53];
    fields[0] = format!("~{}~", id);
    fields[1] = format!("~{}~", description);
    fields[2] = "50.0".to_string();
    fields[3] = kcal.to_string();
    fields[4] = protein.to_string();
    fields[48] = grams.to_string();
    fields[49] = format!("~{}~", amount);
    fields.join("^")
}

fn sample_database() -> NamedTempFile {
    let lines = [
        abbrev_line("01001", "BUTTER,WITH SALT", "717", "0.85", "227", "1 cup"),
        abbrev_line("01009", "CHEESE,CHEDDAR", "404", "22.87", "28.35", "1 oz"),
        abbrev_line("05062", "CHICKEN,BROILERS,BREAST,MEAT ONLY,RAW", "120", "22.5", "118", "1 breast"),
        abbrev_line("14555", "WATER,BTLD,GENERIC", "0", "0", "237", "1 cup"),
        abbrev_line("16069", "LENTILS,RAW", "352", "24.63", "192", "1 cup"),
        abbrev_line("20044", "RICE,WHITE,LONG-GRAIN,RAW", "365", "7.13", "185", "1 cup"),
        abbrev_line("04001", "FAT,BEEF TALLOW", "902", "0", "205", "1 cup"),
    ];

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(lines.join("\r\n").as_bytes()).unwrap();
    file
}

#[test]
fn test_load_filter_and_optimize() {
    let database = sample_database();
    let all = load_catalog(database.path()).unwrap();
    assert_eq!(all.len(), 7);

    // Drop water (0 kcal) and tallow (over 900)
    let catalog = all.filter(0, 900, 25);
    assert_eq!(catalog.len(), 5);
    assert!(catalog.iter().all(|f| f.kcal() > 0 && f.kcal() <= 900));

    let budget = 800;
    let greedy = select_greedy(catalog.as_slice(), budget);
    let exhaustive = select_exhaustive(catalog.as_slice(), budget).unwrap();

    assert!(greedy.is_feasible(budget));
    assert!(exhaustive.is_feasible(budget));
    assert!(exhaustive.totals().protein_g >= greedy.totals().protein_g);

    // Lentils first, then cheddar wins the 23 g tie with chicken, which no longer fits
    let names: Vec<&str> = greedy.foods().map(|f| f.description()).collect();
    assert_eq!(names, vec!["LENTILS,RAW", "CHEESE,CHEDDAR"]);
    assert_eq!(exhaustive.totals().protein_g, 48);
}

#[test]
fn test_export_and_reload_json() {
    let database = sample_database();
    let catalog = load_catalog(database.path()).unwrap().filter(0, 2500, 3);

    let out = Builder::new().suffix(".json").tempfile().unwrap();
    save_catalog_json(out.path(), &catalog).unwrap();

    let reloaded = load_catalog(out.path()).unwrap();
    assert_eq!(reloaded, catalog);
}

#[test]
fn test_search_database() {
    let database = sample_database();
    let catalog = load_catalog(database.path()).unwrap();

    let hits = search(&catalog, "cheddar", 5);
    assert_eq!(hits[0].food.description(), "CHEESE,CHEDDAR");
    assert_eq!(hits[0].index, 1);
}

#[test]
fn test_missing_database_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(dir.path().join("ABBREV.txt")).unwrap_err();
    assert!(err.to_string().starts_with("IO error"));
}
