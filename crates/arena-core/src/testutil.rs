//! Test utilities: mock implementations of core traits.
//!
//! Handwritten mocks for dependency injection in unit tests. Interior
//! mutability via `Arc<Mutex<_>>` so tests can assert on stored state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::token::RefreshToken;
use crate::traits::RefreshTokenStore;

/// In-memory refresh-token store keyed by token value.
#[derive(Clone, Default)]
pub struct MockTokenStore {
    records: Arc<Mutex<HashMap<String, RefreshToken>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `create` always fails with a database error.
    pub fn failing(message: &str) -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            fail_with: Arc::new(Mutex::new(Some(message.to_string()))),
        }
    }

    /// Fetch a stored record directly, bypassing the trait.
    pub fn get(&self, token: &str) -> Option<RefreshToken> {
        self.records.lock().unwrap().get(token).cloned()
    }

    /// Insert a record directly, bypassing the trait. Lets tests plant
    /// already-expired tokens.
    pub fn insert(&self, record: RefreshToken) {
        self.records
            .lock()
            .unwrap()
            .insert(record.token.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RefreshTokenStore for MockTokenStore {
    async fn create(&self, record: &RefreshToken) -> Result<RefreshToken, AppError> {
        if let Some(msg) = self.fail_with.lock().unwrap().clone() {
            return Err(AppError::DatabaseError(msg));
        }

        let mut records = self.records.lock().unwrap();
        if records.contains_key(&record.token) {
            return Err(AppError::DatabaseError(format!(
                "duplicate token: {}",
                record.token
            )));
        }
        records.insert(record.token.clone(), record.clone());
        Ok(record.clone())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, AppError> {
        Ok(self.records.lock().unwrap().get(token).cloned())
    }
}
