//! Domain type for people referenced by debts and loans.

use serde::{Deserialize, Serialize};

use crate::common::{new_id, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
        }
    }
}

impl Identifiable for Person {
    fn id(&self) -> &str {
        &self.id
    }
}
