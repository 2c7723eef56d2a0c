//! Domain models for recorded transactions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{new_id, Amounted, Identifiable};

/// A single income or expense entry, or the transaction leg of a debt/loan.
///
/// `person_id` is set only for `Debt`/`Loan` entries, by caller contract;
/// the data layer accepts any well-typed record and does not cross-check
/// `category_id` or `person_id` against the other collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub description: String,
    pub date: DateTime<Utc>,
    pub category_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
}

impl Transaction {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        date: DateTime<Utc>,
        category_id: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: new_id(),
            amount,
            description: description.into(),
            date,
            category_id: category_id.into(),
            kind,
            person_id: None,
        }
    }

    pub fn with_person(mut self, person_id: impl Into<String>) -> Self {
        self.person_id = Some(person_id.into());
        self
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the kind of a recorded transaction.
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
    Debt,
    Loan,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Expense => "Expense",
            TransactionKind::Income => "Income",
            TransactionKind::Debt => "Debt",
            TransactionKind::Loan => "Loan",
        };
        f.write_str(label)
    }
}
