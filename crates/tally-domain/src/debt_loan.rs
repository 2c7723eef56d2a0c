//! Domain model for interpersonal debts and loans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{new_id, Amounted, Identifiable};

/// Money owed to or by a tracked person.
///
/// `is_debt = true` means the owner owes `person_id`; `false` means the
/// person owes the owner. `is_paid` marks the record settled. `transactions`
/// lists related transaction ids; it is carried through persistence but no
/// operation currently appends to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtLoan {
    pub id: String,
    pub person_id: String,
    pub amount: f64,
    pub description: String,
    pub date: DateTime<Utc>,
    pub is_debt: bool,
    pub is_paid: bool,
    pub transactions: Vec<String>,
}

impl DebtLoan {
    pub fn new(
        person_id: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        date: DateTime<Utc>,
        is_debt: bool,
    ) -> Self {
        Self {
            id: new_id(),
            person_id: person_id.into(),
            amount,
            description: description.into(),
            date,
            is_debt,
            is_paid: false,
            transactions: Vec::new(),
        }
    }

    pub fn mark_paid(&mut self) {
        self.is_paid = true;
    }

    /// Returns `true` for unsettled records, the ones that count toward
    /// outstanding totals.
    pub fn is_outstanding(&self) -> bool {
        !self.is_paid
    }
}

impl Identifiable for DebtLoan {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for DebtLoan {
    fn amount(&self) -> f64 {
        self.amount
    }
}
