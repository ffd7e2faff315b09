//! Ledger file behaviour: header handling, append order, round trips.

mod common;

use common::{obs, ts};
use price_scout::{Ledger, TrackerError};

#[test]
fn two_appends_write_one_header_and_rows_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("precios.csv"));

    ledger.append(&[obs(ts(1, 9), "Teclado", 199990)]).unwrap();
    ledger.append(&[obs(ts(2, 9), "Teclado", 189990)]).unwrap();

    let content = std::fs::read_to_string(ledger.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "fecha,tienda,producto,precio,url");
    assert_eq!(
        lines[1],
        "2025-01-01 09:00:00,PC Factory,Teclado,199990,https://www.pcfactory.cl/Teclado"
    );
    assert!(lines[2].starts_with("2025-01-02 09:00:00,"));
    assert_eq!(content.matches("fecha,tienda").count(), 1);
}

#[test]
fn load_returns_rows_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("precios.csv"));
    let rows = vec![
        obs(ts(3, 9), "Mouse", 40000),
        obs(ts(1, 9), "Teclado", 1000),
        obs(ts(2, 9), "Mouse", 45000),
    ];
    ledger.append(&rows).unwrap();

    assert_eq!(ledger.load().unwrap(), rows);
}

#[test]
fn existing_rows_are_never_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("precios.csv");
    let original = "fecha,tienda,producto,precio,url\n\
                    2024-12-31 23:59:59,Otra Tienda,Teclado,1,https://old\n";
    std::fs::write(&path, original).unwrap();

    let ledger = Ledger::new(&path);
    ledger.append(&[obs(ts(1, 9), "Teclado", 2)]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(original));
    assert_eq!(ledger.load().unwrap().len(), 2);
}

#[test]
fn names_with_commas_survive_quoting() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("precios.csv"));
    let row = obs(ts(1, 9), "Teclado, Negro", 1000);
    ledger.append(std::slice::from_ref(&row)).unwrap();

    assert_eq!(ledger.load().unwrap(), vec![row]);
}

#[test]
fn missing_ledger_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("nope.csv"));
    match ledger.load() {
        Err(TrackerError::MissingLedger(path)) => assert!(path.ends_with("nope.csv")),
        other => panic!("expected MissingLedger, got {:?}", other),
    }
}
