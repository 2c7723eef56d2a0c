//! Domain types representing spending categories.

use serde::{Deserialize, Serialize};

use crate::common::{new_id, Identifiable};

/// Categorises transactions for budgeting and reporting.
///
/// `color` is a display hint (hex string) and `icon` a symbolic icon name;
/// both are opaque to the data layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Returns the fixed category seed used when no stored data exists.
pub fn default_categories() -> Vec<Category> {
    let seed = [
        ("1", "Food & Dining", "#FF6B6B", "utensils"),
        ("2", "Transportation", "#4CAF50", "car"),
        ("3", "Shopping", "#9C27B0", "shopping-bag"),
        ("4", "Entertainment", "#FF9800", "film"),
        ("5", "Housing", "#3E7BFA", "home"),
        ("6", "Utilities", "#20D9D2", "plug"),
        ("7", "Health", "#E91E63", "heart"),
        ("8", "Salary", "#4CAF50", "briefcase"),
        ("9", "Gifts", "#9C27B0", "gift"),
        ("10", "Other", "#757575", "more-horizontal"),
    ];
    seed.into_iter()
        .map(|(id, name, color, icon)| Category {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        })
        .collect()
}
