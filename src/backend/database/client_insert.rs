use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{AppError, AppResult};
use crate::models::CreateClientRequest;

lazy_static! {
    static ref PESEL_PATTERN: Regex = Regex::new(r"^\d{11}$").expect("valid PESEL pattern");
}

/// Validated client data ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedClientData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    pub pesel: String,
}

/// Database-specific adapter for client INSERT operations
#[async_trait]
pub trait ClientInserter: Send + Sync {
    /// Insert the client and return the generated id
    async fn execute_client_insert(&self, data: &PreparedClientData) -> AppResult<i32>;
}

/// Shared business logic for client INSERT operations
pub struct ClientInsertProcessor;

impl ClientInsertProcessor {
    /// Validate a create request without touching the store.
    ///
    /// Checks run in order and stop at the first failure:
    /// - every field is non-blank
    /// - the PESEL is exactly 11 digits
    pub fn prepare_client_for_insert(
        request: &CreateClientRequest,
    ) -> AppResult<PreparedClientData> {
        let fields = [
            &request.first_name,
            &request.last_name,
            &request.email,
            &request.telephone,
            &request.national_id,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(AppError::Validation("All fields are required.".to_string()));
        }

        if !PESEL_PATTERN.is_match(&request.national_id) {
            return Err(AppError::Validation("Invalid PESEL format.".to_string()));
        }

        Ok(PreparedClientData {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            telephone: request.telephone.clone(),
            pesel: request.national_id.clone(),
        })
    }
}

/// Unified client INSERT operations using the adapter pattern
pub struct UnifiedClientInsertOps<T: ClientInserter> {
    inserter: T,
}

impl<T: ClientInserter> UnifiedClientInsertOps<T> {
    pub fn new(inserter: T) -> Self {
        Self { inserter }
    }

    pub async fn create_client(&self, request: &CreateClientRequest) -> AppResult<i32> {
        let data = ClientInsertProcessor::prepare_client_for_insert(request)?;
        let id = self.inserter.execute_client_insert(&data).await?;

        tracing::info!(client_id = id, "created client");
        Ok(id)
    }
}
