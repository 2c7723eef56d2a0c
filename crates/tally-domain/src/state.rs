//! The aggregate document holding every tracked collection.

use serde::{Deserialize, Serialize};

use crate::{
    category::{default_categories, Category},
    common::find_by_id,
    debt_loan::DebtLoan,
    person::Person,
    transaction::Transaction,
};

/// The entire persisted document: four entity collections, written and read
/// as one unit. All four fields are required on the wire; a document missing
/// a collection fails to parse rather than being silently merged with
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinanceState {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub people: Vec<Person>,
    pub debts_loans: Vec<DebtLoan>,
}

impl FinanceState {
    /// Returns the built-in initial state: the default category seed and
    /// empty collections everywhere else.
    pub fn initial() -> Self {
        Self {
            transactions: Vec::new(),
            categories: default_categories(),
            people: Vec::new(),
            debts_loans: Vec::new(),
        }
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        find_by_id(&self.people, id)
    }

    pub fn debt_loan(&self, id: &str) -> Option<&DebtLoan> {
        find_by_id(&self.debts_loans, id)
    }

    pub fn debt_loan_mut(&mut self, id: &str) -> Option<&mut DebtLoan> {
        self.debts_loans.iter_mut().find(|entry| entry.id == id)
    }
}
