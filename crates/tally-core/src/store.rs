//! The process-wide state holder for the finance document.

use std::sync::Arc;

use tracing::{debug, warn};

use tally_domain::{Category, DebtLoan, FinanceState, Person, Transaction};

use crate::{
    storage::{KeyValueStore, FINANCE_DATA_KEY},
    CoreError,
};

/// Outcome of the most recent run of the load protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// A stored document existed and was adopted verbatim.
    Loaded,
    /// No stored document existed; the initial state was seeded and persisted.
    Seeded,
    /// The stored document was unreadable or unparseable; the session
    /// continues on the in-memory initial state, without retry.
    Fallback(String),
}

/// Holds the single [`FinanceState`] aggregate for the lifetime of a session.
///
/// Every mutation updates the in-memory state first, then persists the full
/// serialized document under one fixed key. A failed persist keeps the
/// in-memory change and returns the error for the caller to surface, so the
/// session can run ahead of what is durably stored until the next successful
/// write or a [`FinanceStore::refresh_data`].
///
/// Mutations take `&mut self`: one writer at a time, enforced by the borrow
/// checker rather than a lock. The store accepts any well-typed record;
/// input validation and referential integrity on create/update are the
/// caller's contract (see [`crate::state_warnings`]).
pub struct FinanceStore {
    storage: Arc<dyn KeyValueStore>,
    state: FinanceState,
    status: LoadStatus,
    is_loading: bool,
}

impl FinanceStore {
    /// Opens a store over `storage`, running the load protocol once.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut store = Self {
            storage,
            state: FinanceState::initial(),
            status: LoadStatus::Seeded,
            is_loading: false,
        };
        store.load();
        store
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    pub fn people(&self) -> &[Person] {
        &self.state.people
    }

    pub fn debts_loans(&self) -> &[DebtLoan] {
        &self.state.debts_loans
    }

    pub fn state(&self) -> &FinanceState {
        &self.state
    }

    /// `true` while the load protocol is running.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.status
    }

    /// Appends a transaction.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), CoreError> {
        self.state.transactions.push(transaction);
        self.persist()
    }

    /// Replaces the transaction with a matching id. An unknown id leaves the
    /// collection unchanged (silent no-op).
    pub fn update_transaction(&mut self, updated: Transaction) -> Result<(), CoreError> {
        if let Some(slot) = self
            .state
            .transactions
            .iter_mut()
            .find(|txn| txn.id == updated.id)
        {
            *slot = updated;
        }
        self.persist()
    }

    /// Removes the transaction with a matching id.
    pub fn delete_transaction(&mut self, id: &str) -> Result<(), CoreError> {
        self.state.transactions.retain(|txn| txn.id != id);
        self.persist()
    }

    /// Appends a category.
    pub fn add_category(&mut self, category: Category) -> Result<(), CoreError> {
        self.state.categories.push(category);
        self.persist()
    }

    /// Replaces the category with a matching id.
    pub fn update_category(&mut self, updated: Category) -> Result<(), CoreError> {
        if let Some(slot) = self
            .state
            .categories
            .iter_mut()
            .find(|category| category.id == updated.id)
        {
            *slot = updated;
        }
        self.persist()
    }

    /// Removes a category. Rejected with [`CoreError::CategoryInUse`] when
    /// any transaction still references it; the state stays untouched so the
    /// caller can ask the user to reassign those transactions first.
    pub fn delete_category(&mut self, id: &str) -> Result<(), CoreError> {
        if self
            .state
            .transactions
            .iter()
            .any(|txn| txn.category_id == id)
        {
            return Err(CoreError::CategoryInUse(id.to_string()));
        }
        self.state.categories.retain(|category| category.id != id);
        self.persist()
    }

    /// Appends a person.
    pub fn add_person(&mut self, person: Person) -> Result<(), CoreError> {
        self.state.people.push(person);
        self.persist()
    }

    /// Replaces the person with a matching id.
    pub fn update_person(&mut self, updated: Person) -> Result<(), CoreError> {
        if let Some(slot) = self
            .state
            .people
            .iter_mut()
            .find(|person| person.id == updated.id)
        {
            *slot = updated;
        }
        self.persist()
    }

    /// Removes a person. Rejected with [`CoreError::PersonInUse`] when any
    /// debt/loan still references them; the state stays untouched.
    pub fn delete_person(&mut self, id: &str) -> Result<(), CoreError> {
        if self
            .state
            .debts_loans
            .iter()
            .any(|entry| entry.person_id == id)
        {
            return Err(CoreError::PersonInUse(id.to_string()));
        }
        self.state.people.retain(|person| person.id != id);
        self.persist()
    }

    /// Appends a debt/loan entry.
    pub fn add_debt_loan(&mut self, entry: DebtLoan) -> Result<(), CoreError> {
        self.state.debts_loans.push(entry);
        self.persist()
    }

    /// Replaces the debt/loan entry with a matching id.
    pub fn update_debt_loan(&mut self, updated: DebtLoan) -> Result<(), CoreError> {
        if let Some(slot) = self
            .state
            .debts_loans
            .iter_mut()
            .find(|entry| entry.id == updated.id)
        {
            *slot = updated;
        }
        self.persist()
    }

    /// Marks a debt/loan entry settled. Re-marking an already-paid entry is
    /// a harmless no-op, as is an unknown id.
    pub fn mark_debt_loan_paid(&mut self, id: &str) -> Result<(), CoreError> {
        if let Some(entry) = self.state.debt_loan_mut(id) {
            entry.mark_paid();
        }
        self.persist()
    }

    /// Removes the debt/loan entry with a matching id.
    pub fn delete_debt_loan(&mut self, id: &str) -> Result<(), CoreError> {
        self.state.debts_loans.retain(|entry| entry.id != id);
        self.persist()
    }

    /// Discards the in-memory state and re-runs the load protocol, picking
    /// up external changes to the stored document. The outcome is reflected
    /// in [`FinanceStore::load_status`].
    pub fn refresh_data(&mut self) {
        self.load();
    }

    /// Wipes the whole storage namespace (finance document and theme
    /// preference alike) and reinitializes to the seeded defaults.
    pub fn reset_all(&mut self) -> Result<(), CoreError> {
        self.storage.clear()?;
        self.load();
        Ok(())
    }

    fn load(&mut self) {
        self.is_loading = true;
        self.status = match self.read_stored() {
            Ok(Some(state)) => {
                self.state = state;
                LoadStatus::Loaded
            }
            Ok(None) => {
                self.state = FinanceState::initial();
                if let Err(err) = self.persist() {
                    warn!("failed to persist seeded state: {err}");
                }
                LoadStatus::Seeded
            }
            Err(err) => {
                warn!("failed to load finance data, continuing on defaults: {err}");
                self.state = FinanceState::initial();
                LoadStatus::Fallback(err.to_string())
            }
        };
        self.is_loading = false;
    }

    fn read_stored(&self) -> Result<Option<FinanceState>, CoreError> {
        let Some(raw) = self.storage.get(FINANCE_DATA_KEY)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn persist(&self) -> Result<(), CoreError> {
        let document = serde_json::to_string(&self.state)?;
        self.storage.set(FINANCE_DATA_KEY, &document)?;
        debug!("persisted finance document");
        Ok(())
    }
}
