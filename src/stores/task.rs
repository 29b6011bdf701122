//! Defines the task store trait.

use crate::{
    Error,
    model::{Task, TaskBuilder},
    stores::Session,
};

/// Handles the retrieval and modification of tasks.
pub trait TaskStore {
    /// Retrieve a full snapshot of the user's tasks.
    fn list(&self, session: &Session) -> Result<Vec<Task>, Error>;

    /// Create a new task in the store.
    fn create(&mut self, session: &Session, builder: TaskBuilder) -> Result<Task, Error>;

    /// Replace the stored task that has the same ID as `task`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTask] if no such task exists.
    fn update(&mut self, session: &Session, task: Task) -> Result<Task, Error>;

    /// Delete the task with the given ID.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTask] if no such task exists.
    fn delete(&mut self, session: &Session, id: &str) -> Result<(), Error>;
}
