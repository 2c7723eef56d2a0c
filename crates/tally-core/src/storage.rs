//! Persistence adapter contract and document-level diagnostics.

use std::collections::HashSet;

use tally_domain::FinanceState;

use crate::CoreError;

/// Storage key for the serialized finance document.
pub const FINANCE_DATA_KEY: &str = "finance_data";

/// Storage key for the persisted theme preference.
pub const THEME_MODE_KEY: &str = "theme_mode";

/// Abstraction over namespaced key/value persistence backends.
///
/// The store keeps the entire document under [`FINANCE_DATA_KEY`] and the
/// theme preference under [`THEME_MODE_KEY`]. `clear` wipes the whole
/// namespace, both keys included.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn clear(&self) -> Result<(), CoreError>;
}

/// Detects dangling references and other anomalies within a state snapshot.
///
/// Creates and updates never cross-check references (that is the caller's
/// contract), so this scan is the way to surface drift after the fact.
pub fn state_warnings(state: &FinanceState) -> Vec<String> {
    let category_ids: HashSet<_> = state.categories.iter().map(|c| c.id.as_str()).collect();
    let person_ids: HashSet<_> = state.people.iter().map(|p| p.id.as_str()).collect();
    let mut warnings = Vec::new();

    for txn in &state.transactions {
        if !category_ids.contains(txn.category_id.as_str()) {
            warnings.push(format!(
                "transaction {} references missing category {}",
                txn.id, txn.category_id
            ));
        }
        if let Some(person_id) = txn.person_id.as_deref() {
            if !person_ids.contains(person_id) {
                warnings.push(format!(
                    "transaction {} references unknown person {}",
                    txn.id, person_id
                ));
            }
        }
    }
    for entry in &state.debts_loans {
        if !person_ids.contains(entry.person_id.as_str()) {
            warnings.push(format!(
                "debt/loan {} references unknown person {}",
                entry.id, entry.person_id
            ));
        }
    }
    warnings
}
