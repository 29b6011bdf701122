//! Defines the transaction store trait.

use crate::{
    Error,
    model::{Transaction, TransactionBuilder},
    stores::Session,
};

/// Handles the retrieval and modification of transactions.
///
/// `list` is the read operation the aggregator depends on; it returns a full
/// snapshot with no pagination or filtering contract. The remaining
/// operations back the CRUD forms.
pub trait TransactionStore {
    /// Retrieve a full snapshot of the user's transactions.
    fn list(&self, session: &Session) -> Result<Vec<Transaction>, Error>;

    /// Create a new transaction in the store.
    fn create(
        &mut self,
        session: &Session,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error>;

    /// Replace the stored transaction that has the same ID as `transaction`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if no such transaction
    /// exists.
    fn update(&mut self, session: &Session, transaction: Transaction)
    -> Result<Transaction, Error>;

    /// Delete the transaction with the given ID.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if no such transaction
    /// exists.
    fn delete(&mut self, session: &Session, id: &str) -> Result<(), Error>;
}
