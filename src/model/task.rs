//! User reminders and to-do items, independent of any financial amounts.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

/// The lifecycle state of a [Task].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// The task still needs doing.
    Pending,
    /// The task has been completed.
    Done,
    /// The task was abandoned without being completed.
    Cancelled,
}

impl TaskStatus {
    /// The status a task moves to when the user taps its checkbox.
    ///
    /// Completing toggles back and forth between pending and done; toggling a
    /// cancelled task revives it.
    pub fn toggled(self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Pending,
            TaskStatus::Cancelled => TaskStatus::Pending,
        }
    }
}

/// A user reminder shown alongside the financial data.
///
/// Tasks are never aggregated numerically, only filtered, sorted and
/// displayed. To create a new `Task`, use [Task::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    status: TaskStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    due_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    created_at: Option<OffsetDateTime>,
}

impl Task {
    /// Create a new task.
    ///
    /// Shortcut for [TaskBuilder::new] for discoverability.
    pub fn build(title: &str) -> TaskBuilder {
        TaskBuilder::new(title)
    }

    /// The ID of the task.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The short label displayed in the task list.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Optional free-form details about the task.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The lifecycle state of the task.
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Set the lifecycle state of the task.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// When the task is due, if a deadline was set.
    pub fn due_date(&self) -> Option<OffsetDateTime> {
        self.due_date
    }

    /// When the backend recorded the task, used as a sorting tiebreaker.
    pub fn created_at(&self) -> Option<OffsetDateTime> {
        self.created_at
    }
}

/// Builds a [Task], enforcing that the title is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBuilder {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: Option<OffsetDateTime>,
    created_at: Option<OffsetDateTime>,
}

impl TaskBuilder {
    /// Create a new task builder for a pending task with no deadline.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: None,
            status: TaskStatus::Pending,
            due_date: None,
            created_at: None,
        }
    }

    /// Set the free-form details of the task.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Set the lifecycle state of the task.
    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the deadline of the task.
    pub fn due_date(mut self, due_date: OffsetDateTime) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set when the backend recorded the task.
    pub fn created_at(mut self, created_at: OffsetDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the task, assigning it `id`.
    ///
    /// # Errors
    /// Returns [Error::EmptyTitle] if the title is empty or whitespace.
    pub fn finalise(self, id: &str) -> Result<Task, Error> {
        if self.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        Ok(Task {
            id: id.to_owned(),
            title: self.title,
            description: self.description,
            status: self.status,
            due_date: self.due_date,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{Task, TaskStatus};
    use crate::Error;

    #[test]
    fn builder_creates_pending_task_by_default() {
        let task = Task::build("Pagar aluguel").finalise("task-1").unwrap();

        assert_eq!(task.status(), TaskStatus::Pending);
        assert_eq!(task.due_date(), None);
    }

    #[test]
    fn builder_rejects_empty_title() {
        let result = Task::build("  ").finalise("task-1");

        assert_eq!(result, Err(Error::EmptyTitle));
    }

    #[test]
    fn toggled_flips_between_pending_and_done() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.toggled(), TaskStatus::Pending);
        assert_eq!(TaskStatus::Cancelled.toggled(), TaskStatus::Pending);
    }

    #[test]
    fn task_parses_wire_format_with_null_due_date() {
        let json = r#"{
            "id": "task-3",
            "title": "Renovar seguro",
            "status": "PENDING",
            "dueDate": null,
            "createdAt": "2024-10-20T10:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.title(), "Renovar seguro");
        assert_eq!(task.due_date(), None);
        assert_eq!(task.created_at(), Some(datetime!(2024-10-20 10:00 UTC)));
    }
}
