//! An in-process store holding transactions and tasks in plain vectors.
//!
//! Serves as the reference implementation of the store traits for tests and
//! for embedding applications that want to drive the dashboard from local
//! data instead of a backend API.

use crate::{
    Error,
    model::{Task, TaskBuilder, Transaction, TransactionBuilder},
    stores::{Session, TaskStore, TransactionStore},
};

/// An in-memory implementation of [TransactionStore] and [TaskStore].
///
/// IDs are assigned from a simple counter. The session context is accepted
/// but not checked; authentication belongs to the backend this store stands
/// in for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
    tasks: Vec<Task>,
    next_id: u64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

impl TransactionStore for MemoryStore {
    fn list(&self, _session: &Session) -> Result<Vec<Transaction>, Error> {
        Ok(self.transactions.clone())
    }

    fn create(
        &mut self,
        _session: &Session,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        let id = self.next_id("txn");
        let transaction = builder.finalise(&id)?;
        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn update(
        &mut self,
        _session: &Session,
        transaction: Transaction,
    ) -> Result<Transaction, Error> {
        let stored = self
            .transactions
            .iter_mut()
            .find(|stored| stored.id() == transaction.id())
            .ok_or(Error::UpdateMissingTransaction)?;

        *stored = transaction.clone();

        Ok(transaction)
    }

    fn delete(&mut self, _session: &Session, id: &str) -> Result<(), Error> {
        let index = self
            .transactions
            .iter()
            .position(|stored| stored.id() == id)
            .ok_or(Error::DeleteMissingTransaction)?;

        self.transactions.remove(index);

        Ok(())
    }
}

impl TaskStore for MemoryStore {
    fn list(&self, _session: &Session) -> Result<Vec<Task>, Error> {
        Ok(self.tasks.clone())
    }

    fn create(&mut self, _session: &Session, builder: TaskBuilder) -> Result<Task, Error> {
        let id = self.next_id("task");
        let task = builder.finalise(&id)?;
        self.tasks.push(task.clone());

        Ok(task)
    }

    fn update(&mut self, _session: &Session, task: Task) -> Result<Task, Error> {
        let stored = self
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or(Error::UpdateMissingTask)?;

        *stored = task.clone();

        Ok(task)
    }

    fn delete(&mut self, _session: &Session, id: &str) -> Result<(), Error> {
        let index = self
            .tasks
            .iter()
            .position(|stored| stored.id() == id)
            .ok_or(Error::DeleteMissingTask)?;

        self.tasks.remove(index);

        Ok(())
    }
}
