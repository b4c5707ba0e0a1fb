use axum::{http::StatusCode, Json};
use serde_json::json;
use std::fmt;

/// The entity a lookup failed to find
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Client(i32),
    Trip(i32),
    Registration { client_id: i32, trip_id: i32 },
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Client(id) => write!(f, "Client with ID {}", id),
            Entity::Trip(id) => write!(f, "Trip with ID {}", id),
            Entity::Registration { client_id, trip_id } => write!(
                f,
                "Registration of client {} for trip {}",
                client_id, trip_id
            ),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    NotFound(Entity),
    Validation(String),
    CapacityExceeded { trip_id: i32, max_people: i32 },
    DuplicateRegistration { client_id: i32, trip_id: i32 },
    BadRequest(String),
    Database(String),
    Configuration(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(entity) => write!(f, "{} not found.", entity),
            AppError::Validation(e) => write!(f, "{}", e),
            AppError::CapacityExceeded { .. } => {
                write!(f, "Maximum number of participants reached.")
            }
            AppError::DuplicateRegistration { .. } => {
                write!(f, "Client is already registered for this trip.")
            }
            AppError::BadRequest(e) => write!(f, "Bad request: {}", e),
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_)
            | AppError::CapacityExceeded { .. }
            | AppError::DuplicateRegistration { .. }
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert into an HTTP response.
    ///
    /// Server-side failures are logged and replaced by `fallback`, so no
    /// database detail ever reaches the client.
    pub fn to_response(&self, fallback: &str) -> (StatusCode, Json<serde_json::Value>) {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            fallback.to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            AppError::NotFound(Entity::Client(7)).to_string(),
            "Client with ID 7 not found."
        );
        assert_eq!(
            AppError::NotFound(Entity::Trip(3)).to_string(),
            "Trip with ID 3 not found."
        );
        assert_eq!(
            AppError::NotFound(Entity::Registration {
                client_id: 7,
                trip_id: 3
            })
            .to_string(),
            "Registration of client 7 for trip 3 not found."
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound(Entity::Trip(1)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::CapacityExceeded {
                trip_id: 1,
                max_people: 2
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DuplicateRegistration {
                client_id: 1,
                trip_id: 1
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation("All fields are required.".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_hide_details() {
        let (status, Json(body)) = AppError::Database("connection refused on 10.0.0.5".to_string())
            .to_response("An unexpected error occurred.");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An unexpected error occurred.");
    }

    #[test]
    fn test_client_errors_keep_message() {
        let (status, Json(body)) =
            AppError::Validation("Invalid PESEL format.".to_string()).to_response("unused");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid PESEL format.");
    }
}
