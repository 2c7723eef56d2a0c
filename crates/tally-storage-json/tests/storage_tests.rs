use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tally_core::{
    FinanceStore, KeyValueStore, LoadStatus, FINANCE_DATA_KEY, THEME_MODE_KEY,
};
use tally_domain::{DebtLoan, FinanceState, Person, Transaction, TransactionKind};
use tally_storage_json::FileKeyValueStore;
use tempfile::tempdir;

fn populated_state() -> FinanceState {
    let date = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let mut state = FinanceState::initial();
    state.people.push(Person::new("Alex"));
    let person_id = state.people[0].id.clone();
    state.transactions.push(
        Transaction::new(50.0, "Groceries", date, "1", TransactionKind::Expense),
    );
    state.transactions.push(
        Transaction::new(200.0, "Borrowed cash", date, "10", TransactionKind::Debt)
            .with_person(person_id.clone()),
    );
    state
        .debts_loans
        .push(DebtLoan::new(person_id, 200.0, "Dinner", date, true));
    state
}

#[test]
fn file_store_round_trips_raw_values() {
    let dir = tempdir().expect("tempdir");
    let storage = FileKeyValueStore::new(dir.path().join("tally")).expect("create storage");

    assert_eq!(storage.get("missing").expect("get"), None);
    storage.set("theme_mode", "dark").expect("set");
    assert_eq!(
        storage.get("theme_mode").expect("get").as_deref(),
        Some("dark")
    );

    storage.set("theme_mode", "light").expect("overwrite");
    assert_eq!(
        storage.get("theme_mode").expect("get").as_deref(),
        Some("light")
    );
}

#[test]
fn set_leaves_no_temporary_files_behind() {
    let dir = tempdir().expect("tempdir");
    let storage = FileKeyValueStore::new(dir.path().to_path_buf()).expect("create storage");

    storage.set(FINANCE_DATA_KEY, "{}").expect("set");

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == "tmp")
                .unwrap_or(false)
        })
        .collect();
    assert!(leftovers.is_empty(), "tmp files left: {leftovers:?}");
    assert!(storage.key_path(FINANCE_DATA_KEY).exists());
}

#[test]
fn keys_are_sanitized_to_filesystem_safe_names() {
    let dir = tempdir().expect("tempdir");
    let storage = FileKeyValueStore::new(dir.path().to_path_buf()).expect("create storage");

    storage.set("Some/Odd Key!", "value").expect("set");
    assert_eq!(
        storage.get("Some/Odd Key!").expect("get").as_deref(),
        Some("value")
    );
    let file_name = storage
        .key_path("Some/Odd Key!")
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .expect("file name");
    assert_eq!(file_name, "some_odd_key_.json");
}

#[test]
fn clear_wipes_every_key_in_the_namespace() {
    let dir = tempdir().expect("tempdir");
    let storage = FileKeyValueStore::new(dir.path().to_path_buf()).expect("create storage");
    storage.set(FINANCE_DATA_KEY, "{}").expect("set finance");
    storage.set(THEME_MODE_KEY, "dark").expect("set theme");

    storage.clear().expect("clear");

    assert_eq!(storage.get(FINANCE_DATA_KEY).expect("get"), None);
    assert_eq!(storage.get(THEME_MODE_KEY).expect("get"), None);
}

#[test]
fn store_seeds_on_first_open_and_reloads_on_the_next() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("tally");
    let storage = Arc::new(FileKeyValueStore::new(root.clone()).expect("create storage"));

    let first = FinanceStore::open(storage.clone());
    assert_eq!(first.load_status(), &LoadStatus::Seeded);
    assert_eq!(first.categories().len(), 10);

    let second = FinanceStore::open(storage);
    assert_eq!(second.load_status(), &LoadStatus::Loaded);
    assert_eq!(second.state(), first.state());
}

#[test]
fn finance_document_round_trips_field_for_field() {
    let dir = tempdir().expect("tempdir");
    let storage = Arc::new(
        FileKeyValueStore::new(dir.path().to_path_buf()).expect("create storage"),
    );
    let state = populated_state();
    storage
        .set(
            FINANCE_DATA_KEY,
            &serde_json::to_string(&state).expect("serialize"),
        )
        .expect("write document");

    let store = FinanceStore::open(storage);

    assert_eq!(store.load_status(), &LoadStatus::Loaded);
    assert_eq!(store.state(), &state);
}

#[test]
fn mutations_reach_the_document_on_disk() {
    let dir = tempdir().expect("tempdir");
    let storage = Arc::new(
        FileKeyValueStore::new(dir.path().to_path_buf()).expect("create storage"),
    );
    let mut store = FinanceStore::open(storage.clone());
    let date = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

    store
        .add_transaction(Transaction::new(
            42.0,
            "Taxi",
            date,
            "2",
            TransactionKind::Expense,
        ))
        .expect("add");

    let raw = storage
        .get(FINANCE_DATA_KEY)
        .expect("get")
        .expect("document present");
    let on_disk: FinanceState = serde_json::from_str(&raw).expect("parse");
    assert_eq!(on_disk, *store.state());
    assert_eq!(on_disk.transactions[0].description, "Taxi");
}

#[test]
fn reset_wipes_the_namespace_and_reseeds_defaults() {
    let dir = tempdir().expect("tempdir");
    let storage = Arc::new(
        FileKeyValueStore::new(dir.path().to_path_buf()).expect("create storage"),
    );
    storage.set(THEME_MODE_KEY, "dark").expect("set theme");
    let mut store = FinanceStore::open(storage.clone());
    store.add_person(Person::new("Alex")).expect("add person");

    store.reset_all().expect("reset");

    assert!(store.people().is_empty());
    assert_eq!(store.load_status(), &LoadStatus::Seeded);
    assert_eq!(storage.get(THEME_MODE_KEY).expect("get"), None);
    let raw = storage
        .get(FINANCE_DATA_KEY)
        .expect("get")
        .expect("reseeded document");
    assert!(raw.contains("Food & Dining"));
}
