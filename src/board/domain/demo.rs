//! Sample board used to seed a fresh installation.

use super::{Board, Priority, Status, Task, TaskDomainError, TaskDraft};
use chrono::Duration;
use mockable::Clock;

struct Sample {
    title: &'static str,
    description: &'static str,
    priority: Priority,
    status: Status,
    due_in_days: Option<i64>,
    tags: &'static [&'static str],
}

const SAMPLES: [Sample; 6] = [
    Sample {
        title: "Create new design system",
        description: "Implement the new design system for our product",
        priority: Priority::High,
        status: Status::Todo,
        due_in_days: Some(7),
        tags: &["design", "ui"],
    },
    Sample {
        title: "API Integration",
        description: "Integrate the new API endpoints with the frontend",
        priority: Priority::Medium,
        status: Status::InProgress,
        due_in_days: Some(3),
        tags: &["backend", "api"],
    },
    Sample {
        title: "Fix login bug",
        description: "Users cannot login using social providers",
        priority: Priority::High,
        status: Status::InProgress,
        due_in_days: None,
        tags: &["bug", "auth"],
    },
    Sample {
        title: "Write documentation",
        description: "Create comprehensive documentation for devs",
        priority: Priority::Low,
        status: Status::Todo,
        due_in_days: None,
        tags: &["docs"],
    },
    Sample {
        title: "Update dependencies",
        description: "Update all packages to their latest versions",
        priority: Priority::Medium,
        status: Status::Done,
        due_in_days: None,
        tags: &["maintenance"],
    },
    Sample {
        title: "Code review",
        description: "Review PR for new feature implementation",
        priority: Priority::Medium,
        status: Status::Review,
        due_in_days: Some(1),
        tags: &["review"],
    },
];

/// Builds the six-task sample board, with due dates relative to `clock`.
///
/// # Errors
///
/// Returns [`TaskDomainError`] only if a sample fails draft validation.
pub fn demo_board(clock: &impl Clock) -> Result<Board, TaskDomainError> {
    let now = clock.utc();
    let mut board = Board::new();
    for sample in &SAMPLES {
        let mut draft = TaskDraft::new(sample.title, sample.status)?
            .with_description(sample.description)
            .with_priority(sample.priority)
            .with_tags(sample.tags.iter().copied());
        if let Some(days) = sample.due_in_days {
            draft = draft.with_due_date(now + Duration::days(days));
        }
        board = board.with_added(Task::from_draft(draft, clock));
    }
    Ok(board)
}
