//! tally-domain
//!
//! Pure domain models (FinanceState, Transaction, Category, Person, DebtLoan).
//! No I/O, no storage. Only data types and core enums.

pub mod category;
pub mod common;
pub mod debt_loan;
pub mod person;
pub mod state;
pub mod time;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use debt_loan::*;
pub use person::*;
pub use state::*;
pub use time::*;
pub use transaction::*;
