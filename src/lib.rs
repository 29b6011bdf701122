//! Finia is the core library for a personal-finance dashboard.
//!
//! The dashboard itself is a thin shell: it fetches transactions and tasks
//! from a backend API, hands them to this crate, and renders whatever comes
//! back. This crate owns everything in between:
//!
//! - the typed [model] for transactions and tasks, including the
//!   loosely-typed wire records the backend actually sends,
//! - the pure aggregation functions in [dashboard] that turn a transaction
//!   snapshot into balances, per-category totals and daily chart series,
//! - ECharts option builders for the three dashboard visualisations,
//! - task-list filtering and ordering in [tasks],
//! - the [stores] traits that define the data-fetching collaborator.

#![warn(missing_docs)]

pub mod config;
pub mod dashboard;
pub mod format;
mod logging;
pub mod model;
pub mod stores;
pub mod tasks;
mod timezone;

pub use logging::init_logging;
pub use timezone::{local_date, local_offset};

/// The errors that may occur in the library.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A negative amount was used to create a transaction.
    ///
    /// Transactions are signed by their kind (income or expense), so the
    /// amount itself must not be negative.
    #[error("transaction amounts must not be negative, got {0}")]
    NegativeAmount(f64),

    /// An empty string was used as a transaction description.
    #[error("transaction description cannot be empty")]
    EmptyDescription,

    /// An empty string was used as a task title.
    #[error("task title cannot be empty")]
    EmptyTitle,

    /// A date string from the backend could not be parsed.
    ///
    /// Callers should pass in the original error as a string and the date
    /// string that caused the error.
    #[error("could not parse date-time string \"{1}\": {0}")]
    InvalidDateFormat(String, String),

    /// A chart window length other than the supported ones was requested.
    #[error("{0} is not a supported chart window, expected 7 or 30 days")]
    InvalidChartWindow(u16),

    /// An error occurred while getting the local offset from a canonical
    /// timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Tried to update a transaction that does not exist.
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// Tried to update a task that does not exist.
    #[error("tried to update a task that is not in the store")]
    UpdateMissingTask,

    /// Tried to delete a task that does not exist.
    #[error("tried to delete a task that is not in the store")]
    DeleteMissingTask,
}
