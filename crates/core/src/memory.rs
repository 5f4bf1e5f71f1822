//! In-process [`Store`] implementation.
//!
//! Backs the service and HTTP tests so they run without PostgreSQL. Mirrors
//! the relational store's observable behaviour: ids are assigned in
//! ascending order, lists come back ordered by id, and inserting a question
//! for an unknown category fails validation like a foreign-key violation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::error::CoreError;
use crate::question::{Category, NewQuestion, Question};
use crate::store::{CategoryStore, QuestionStore, Store};
use crate::types::DbId;

#[derive(Default)]
struct Tables {
    categories: BTreeMap<DbId, Category>,
    questions: BTreeMap<DbId, Question>,
    last_category_id: DbId,
    last_question_id: DbId,
}

/// Thread-safe in-memory store.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with categories, assigned ids from 1.
    pub fn with_categories(labels: &[&str]) -> Self {
        let store = Self::new();
        for label in labels {
            store.add_category(label);
        }
        store
    }

    /// Add a category and return it.
    pub fn add_category(&self, label: &str) -> Category {
        let mut tables = self.write();
        tables.last_category_id += 1;
        let category = Category {
            id: tables.last_category_id,
            kind: label.to_string(),
        };
        tables.categories.insert(category.id, category.clone());
        category
    }

    /// Make every subsequent call fail with [`CoreError::Storage`], or
    /// restore normal operation.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), CoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CoreError::Storage("memory store is offline".into()));
        }
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn questions_where(
        &self,
        keep: impl Fn(&Question) -> bool,
    ) -> Result<Vec<Question>, CoreError> {
        self.ensure_online()?;
        Ok(self
            .read()
            .questions
            .values()
            .filter(|q| keep(q))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>, CoreError> {
        self.questions_where(|_| true)
    }

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, CoreError> {
        self.ensure_online()?;
        Ok(self.read().questions.get(&id).cloned())
    }

    async fn list_questions_by_category(
        &self,
        category_id: DbId,
    ) -> Result<Vec<Question>, CoreError> {
        self.questions_where(|q| q.category == category_id)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, CoreError> {
        let needle = term.to_lowercase();
        self.questions_where(|q| q.question.to_lowercase().contains(&needle))
    }

    async fn insert_question(&self, input: &NewQuestion) -> Result<Question, CoreError> {
        self.ensure_online()?;
        let mut tables = self.write();

        if !tables.categories.contains_key(&input.category) {
            return Err(CoreError::Validation(format!(
                "Category {} does not exist",
                input.category
            )));
        }

        tables.last_question_id += 1;
        let question = Question {
            id: tables.last_question_id,
            question: input.question.clone(),
            answer: input.answer.clone(),
            difficulty: input.difficulty,
            category: input.category,
        };
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: DbId) -> Result<bool, CoreError> {
        self.ensure_online()?;
        Ok(self.write().questions.remove(&id).is_some())
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.ensure_online()?;
        Ok(self.read().categories.values().cloned().collect())
    }

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, CoreError> {
        self.ensure_online()?;
        Ok(self.read().categories.get(&id).cloned())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> Result<(), CoreError> {
        self.ensure_online()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
