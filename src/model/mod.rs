//! The domain types the dashboard works with: financial transactions and
//! user tasks, plus the loosely-typed wire records the backend API sends.

mod task;
mod transaction;

pub use task::{Task, TaskBuilder, TaskStatus};
pub use transaction::{
    FALLBACK_CATEGORY, Transaction, TransactionBuilder, TransactionKind, TransactionRecord,
    parse_records,
};
