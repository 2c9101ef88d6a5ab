//! Task board
//!
//! Planning checklist with due dates. Overdue is judged against a date
//! the caller passes in, so the cutoff is testable.

use crate::storage::PlannerStorage;
use chrono::NaiveDate;
use shared::error::{AppError, AppResult};
use shared::models::{Task, TaskCreate, TaskUpdate};
use shared::util::snowflake_id;
use tracing::info;

pub struct TaskBoard {
    storage: PlannerStorage,
}

impl TaskBoard {
    pub fn new(storage: PlannerStorage) -> Self {
        Self { storage }
    }

    pub fn add(&self, create: TaskCreate) -> AppResult<Task> {
        let title = create.title.trim();
        if title.is_empty() {
            return Err(AppError::required("title"));
        }

        let task = Task {
            id: snowflake_id(),
            title: title.to_string(),
            description: create.description.trim().to_string(),
            due_date: create.due_date,
            completed: false,
            category: create.category.trim().to_string(),
        };
        self.storage.upsert_task(&task)?;
        info!(task_id = task.id, due = %task.due_date, "task added");
        Ok(task)
    }

    pub fn update(&self, id: i64, update: TaskUpdate) -> AppResult<Task> {
        let mut task = self.get(id)?;

        if let Some(title) = update.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(AppError::required("title"));
            }
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = description.trim().to_string();
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = update.completed {
            task.completed = completed;
        }
        if let Some(category) = update.category {
            task.category = category.trim().to_string();
        }

        self.storage.upsert_task(&task)?;
        Ok(task)
    }

    pub fn set_completed(&self, id: i64, completed: bool) -> AppResult<Task> {
        self.update(
            id,
            TaskUpdate {
                completed: Some(completed),
                ..Default::default()
            },
        )
    }

    pub fn remove(&self, id: i64) -> AppResult<()> {
        if !self.storage.remove_task(id)? {
            return Err(AppError::not_found("task").with_detail("task_id", id));
        }
        Ok(())
    }

    pub fn get(&self, id: i64) -> AppResult<Task> {
        self.storage
            .get_task(id)?
            .ok_or_else(|| AppError::not_found("task").with_detail("task_id", id))
    }

    pub fn list(&self) -> AppResult<Vec<Task>> {
        Ok(self.storage.list_tasks()?)
    }

    pub fn pending(&self) -> AppResult<Vec<Task>> {
        Ok(self.list()?.into_iter().filter(|t| !t.completed).collect())
    }

    pub fn completed(&self) -> AppResult<Vec<Task>> {
        Ok(self.list()?.into_iter().filter(|t| t.completed).collect())
    }

    /// Open tasks whose due date has passed as of `today`
    pub fn overdue(&self, today: NaiveDate) -> AppResult<Vec<Task>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|t| !t.completed && t.due_date < today)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn board() -> TaskBoard {
        TaskBoard::new(PlannerStorage::open_in_memory().unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create(title: &str, due: NaiveDate) -> TaskCreate {
        TaskCreate {
            title: title.to_string(),
            description: String::new(),
            due_date: due,
            category: String::new(),
        }
    }

    #[test]
    fn test_add_requires_title() {
        let board = board();
        let err = board.add(create("  ", date(2026, 5, 1))).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_completion_and_overdue() {
        let board = board();
        let early = board.add(create("Book venue", date(2026, 3, 1))).unwrap();
        let late = board.add(create("Send invites", date(2026, 6, 1))).unwrap();

        board.set_completed(early.id, true).unwrap();
        assert_eq!(board.pending().unwrap().len(), 1);
        assert_eq!(board.completed().unwrap().len(), 1);

        // completed tasks are never overdue; open ones are once the due
        // date has passed
        assert!(board.overdue(date(2026, 4, 1)).unwrap().is_empty());
        let overdue = board.overdue(date(2026, 7, 1)).unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, late.id);

        // a task due today is not overdue yet
        assert!(board.overdue(date(2026, 6, 1)).unwrap().is_empty());
    }

    #[test]
    fn test_update_and_remove() {
        let board = board();
        let task = board.add(create("Fittings", date(2026, 5, 1))).unwrap();

        let updated = board
            .update(
                task.id,
                TaskUpdate {
                    due_date: Some(date(2026, 5, 15)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.due_date, date(2026, 5, 15));

        board.remove(task.id).unwrap();
        assert_eq!(board.remove(task.id).unwrap_err().code, ErrorCode::NotFound);
    }
}
