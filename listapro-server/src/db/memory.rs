//! In-memory repositories for handler tests
//!
//! Mirrors the PostgreSQL behaviour the handlers rely on: sequential ids,
//! insertion ordering, the list -> tasks cascade and the foreign key check.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use super::repos::{DbError, ListRepository, Task, TaskList, TaskRepository};
use crate::models::{ListName, RecordId, TaskText};

#[derive(Default)]
struct Tables {
    next_list_id: i64,
    next_task_id: i64,
    lists: BTreeMap<i64, TaskList>,
    tasks: BTreeMap<i64, Task>,
}

/// Shared in-memory store implementing both repository traits.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of repository calls made so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every following call fail with a database error.
    pub(crate) fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn enter(&self) -> Result<MutexGuard<'_, Tables>, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(self.tables.lock().unwrap())
    }
}

impl Tables {
    fn with_tasks(&self, list: &TaskList) -> TaskList {
        let mut list = list.clone();
        list.tasks = self
            .tasks
            .values()
            .filter(|t| t.list_id == list.id)
            .cloned()
            .collect();
        list
    }
}

#[async_trait]
impl ListRepository for MemoryStore {
    async fn create(&self, name: ListName) -> Result<TaskList, DbError> {
        let mut tables = self.enter()?;
        tables.next_list_id += 1;
        let now = Utc::now();
        let list = TaskList {
            id: tables.next_list_id,
            name: name.into_string(),
            created_at: now,
            updated_at: now,
            tasks: Vec::new(),
        };
        tables.lists.insert(list.id, list.clone());
        Ok(list)
    }

    async fn get_all(&self) -> Result<Vec<TaskList>, DbError> {
        let tables = self.enter()?;
        Ok(tables.lists.values().map(|l| tables.with_tasks(l)).collect())
    }

    async fn get_by_id(&self, id: RecordId) -> Result<TaskList, DbError> {
        let tables = self.enter()?;
        tables
            .lists
            .get(&id.get())
            .map(|l| tables.with_tasks(l))
            .ok_or_else(|| DbError::not_found("list", id))
    }

    async fn update(&self, id: RecordId, name: ListName) -> Result<TaskList, DbError> {
        let mut tables = self.enter()?;
        let list = tables
            .lists
            .get_mut(&id.get())
            .ok_or_else(|| DbError::not_found("list", id))?;
        list.name = name.into_string();
        list.updated_at = Utc::now();
        let list = list.clone();
        Ok(tables.with_tasks(&list))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, DbError> {
        let mut tables = self.enter()?;
        let removed = tables.lists.remove(&id.get()).is_some();
        if removed {
            tables.tasks.retain(|_, t| t.list_id != id.get());
        }
        Ok(removed)
    }

    async fn exists(&self, id: RecordId) -> Result<bool, DbError> {
        let tables = self.enter()?;
        Ok(tables.lists.contains_key(&id.get()))
    }
}

#[async_trait]
impl TaskRepository for MemoryStore {
    async fn create(&self, list_id: RecordId, text: TaskText) -> Result<Task, DbError> {
        let mut tables = self.enter()?;
        if !tables.lists.contains_key(&list_id.get()) {
            return Err(DbError::Sqlx(sqlx::Error::Protocol(
                "insert or update on table \"tasks\" violates foreign key constraint".into(),
            )));
        }
        tables.next_task_id += 1;
        let now = Utc::now();
        let task = Task {
            id: tables.next_task_id,
            text: text.into_string(),
            is_completed: false,
            list_id: list_id.get(),
            created_at: now,
            updated_at: now,
        };
        tables.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Task, DbError> {
        let tables = self.enter()?;
        tables
            .tasks
            .get(&id.get())
            .cloned()
            .ok_or_else(|| DbError::not_found("task", id))
    }

    async fn get_all_by_list(&self, list_id: RecordId) -> Result<Vec<Task>, DbError> {
        let tables = self.enter()?;
        Ok(tables
            .tasks
            .values()
            .filter(|t| t.list_id == list_id.get())
            .cloned()
            .collect())
    }

    async fn update(&self, task: Task) -> Result<Task, DbError> {
        let mut tables = self.enter()?;
        let stored = tables.tasks.get_mut(&task.id).ok_or_else(|| DbError::NotFound {
            resource: "task",
            id: task.id.to_string(),
        })?;
        stored.text = task.text;
        stored.is_completed = task.is_completed;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<bool, DbError> {
        let mut tables = self.enter()?;
        Ok(tables.tasks.remove(&id.get()).is_some())
    }

    async fn mark_as_completed(&self, id: RecordId) -> Result<bool, DbError> {
        let mut tables = self.enter()?;
        match tables.tasks.get_mut(&id.get()) {
            Some(task) => {
                task.is_completed = true;
                task.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: i64) -> RecordId {
        RecordId::parse(&raw.to_string()).unwrap()
    }

    #[tokio::test]
    async fn mark_as_completed_keeps_text() {
        let store = MemoryStore::new();
        let lists: &dyn ListRepository = &store;
        let tasks: &dyn TaskRepository = &store;

        let list = lists.create(ListName::new("Casa").unwrap()).await.unwrap();
        let task = tasks
            .create(id(list.id), TaskText::new("Lavar louça").unwrap())
            .await
            .unwrap();

        assert!(tasks.mark_as_completed(id(task.id)).await.unwrap());
        let reloaded = tasks.get_by_id(id(task.id)).await.unwrap();
        assert!(reloaded.is_completed);
        assert_eq!(reloaded.text, "Lavar louça");

        assert!(!tasks.mark_as_completed(id(99)).await.unwrap());
    }

    #[tokio::test]
    async fn delete_list_cascades() {
        let store = MemoryStore::new();
        let lists: &dyn ListRepository = &store;
        let tasks: &dyn TaskRepository = &store;

        let list = lists.create(ListName::new("Casa").unwrap()).await.unwrap();
        let task = tasks
            .create(id(list.id), TaskText::new("x").unwrap())
            .await
            .unwrap();

        assert!(lists.delete(id(list.id)).await.unwrap());
        assert!(tasks.get_by_id(id(task.id)).await.is_err());
        assert!(tasks.get_all_by_list(id(list.id)).await.unwrap().is_empty());
    }
}
