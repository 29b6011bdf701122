//! Task-list filtering and ordering.
//!
//! Tasks carry no financial amounts; the dashboard only filters them by
//! status and orders them for display.

use time::OffsetDateTime;

use crate::model::{Task, TaskStatus};

/// Which tasks the list should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show every task regardless of status.
    #[default]
    All,
    /// Show only tasks with the given status.
    Only(TaskStatus),
}

impl StatusFilter {
    fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => task.status() == status,
        }
    }
}

/// Applies the status filter and orders tasks for display.
///
/// Pending tasks come first, cancelled ones in the middle and completed ones
/// last; within the same status, tasks are ordered by creation time with
/// missing timestamps sorting first.
pub fn filter_and_sort(tasks: &[Task], filter: StatusFilter) -> Vec<Task> {
    let mut filtered: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        display_order(a.status())
            .cmp(&display_order(b.status()))
            .then_with(|| creation_time(a).cmp(&creation_time(b)))
    });

    filtered
}

fn display_order(status: TaskStatus) -> u8 {
    match status {
        TaskStatus::Pending => 0,
        TaskStatus::Cancelled => 1,
        TaskStatus::Done => 2,
    }
}

fn creation_time(task: &Task) -> OffsetDateTime {
    task.created_at().unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{StatusFilter, filter_and_sort};
    use crate::model::{Task, TaskStatus};

    fn task(id: &str, status: TaskStatus) -> Task {
        Task::build(id).status(status).finalise(id).unwrap()
    }

    #[test]
    fn all_filter_keeps_every_task() {
        let tasks = vec![
            task("a", TaskStatus::Done),
            task("b", TaskStatus::Pending),
            task("c", TaskStatus::Cancelled),
        ];

        let result = filter_and_sort(&tasks, StatusFilter::All);

        assert_eq!(result.len(), 3);
    }

    #[test]
    fn status_filter_keeps_only_matching_tasks() {
        let tasks = vec![
            task("a", TaskStatus::Done),
            task("b", TaskStatus::Pending),
        ];

        let result = filter_and_sort(&tasks, StatusFilter::Only(TaskStatus::Pending));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), "b");
    }

    #[test]
    fn pending_tasks_sort_first_and_done_last() {
        let tasks = vec![
            task("done", TaskStatus::Done),
            task("pending", TaskStatus::Pending),
            task("cancelled", TaskStatus::Cancelled),
        ];

        let result = filter_and_sort(&tasks, StatusFilter::All);

        assert_eq!(result[0].id(), "pending");
        assert_eq!(result[1].id(), "cancelled");
        assert_eq!(result[2].id(), "done");
    }

    #[test]
    fn same_status_orders_by_creation_time() {
        let older = Task::build("older")
            .created_at(datetime!(2024-10-01 08:00 UTC))
            .finalise("older")
            .unwrap();
        let newer = Task::build("newer")
            .created_at(datetime!(2024-10-02 08:00 UTC))
            .finalise("newer")
            .unwrap();
        let undated = task("undated", TaskStatus::Pending);

        let result = filter_and_sort(&[newer, undated, older], StatusFilter::All);

        assert_eq!(result[0].id(), "undated");
        assert_eq!(result[1].id(), "older");
        assert_eq!(result[2].id(), "newer");
    }
}
