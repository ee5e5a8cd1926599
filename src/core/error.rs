//! Typed error handling for the barbershop site
//!
//! Handlers return [`ShopError`] so callers can match on the failure
//! category instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`EntityError`]: lookups of stored records
//! - [`RequestError`]: authentication gate and malformed request parameters
//! - [`ConfigError`]: configuration parsing and catalog seeding
//! - [`StorageError`]: storage backend failures
//! - [`RenderError`]: template rendering failures
//!
//! # Example
//!
//! ```rust,ignore
//! let order = store.orders.get(id).await?.ok_or(EntityError::NotFound {
//!     entity_type: "order".to_string(),
//!     id,
//! })?;
//! ```

use crate::core::entity::EntityId;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the site
#[derive(Debug, Error)]
pub enum ShopError {
    /// Entity lookup errors
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// HTTP/Request errors
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Template rendering errors
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ShopError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShopError::Entity(e) => e.status_code(),
            ShopError::Request(e) => e.status_code(),
            ShopError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShopError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShopError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ShopError::Entity(e) => e.error_code(),
            ShopError::Request(e) => e.error_code(),
            ShopError::Config(_) => "CONFIG_ERROR",
            ShopError::Storage(_) => "STORAGE_ERROR",
            ShopError::Render(_) => "RENDER_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ShopError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id
                }))
            }
            ShopError::Request(RequestError::InvalidParameter { name, value }) => {
                Some(serde_json::json!({ "parameter": name, "value": value }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        if let ShopError::Request(RequestError::LoginRequired { login_url, next }) = &self {
            return Redirect::to(&login_redirect_target(login_url, next)).into_response();
        }

        match &self {
            ShopError::Storage(_) | ShopError::Render(_) => {
                tracing::error!(error = %self, "request failed");
            }
            _ => {}
        }

        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// Result alias used across the site
pub type ShopResult<T> = Result<T, ShopError>;

/// Build `<login_url>?next=<encoded next>`
pub fn login_redirect_target(login_url: &str, next: &str) -> String {
    let separator = if login_url.contains('?') { '&' } else { '?' };
    let next: String = url::form_urlencoded::byte_serialize(next.as_bytes()).collect();
    format!("{}{}next={}", login_url, separator, next)
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookups
#[derive(Debug, Error)]
pub enum EntityError {
    /// Entity was not found
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: EntityId },

    /// Entity already exists (conflict)
    #[error("{entity_type} with id '{id}' already exists")]
    AlreadyExists { entity_type: String, id: EntityId },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::AlreadyExists { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to the incoming request itself
#[derive(Debug, Error)]
pub enum RequestError {
    /// Caller is not authenticated for a staff page
    #[error("Login required to access '{next}'")]
    LoginRequired { login_url: String, next: String },

    /// Caller is authenticated but not allowed
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// A query or path parameter could not be parsed
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: String, value: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::LoginRequired { .. } => StatusCode::SEE_OTHER,
            RequestError::Forbidden { .. } => StatusCode::FORBIDDEN,
            RequestError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::LoginRequired { .. } => "LOGIN_REQUIRED",
            RequestError::Forbidden { .. } => "FORBIDDEN",
            RequestError::InvalidParameter { .. } => "INVALID_PARAMETER",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse a configuration source
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// A seeded master references a service that is not in the catalog
    #[error("Master '{master}' references unknown service '{service}'")]
    UnknownService { master: String, service: String },

    /// An invalid value in an otherwise well-formed configuration
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lock protecting the data was poisoned by a panicking writer
    #[error("Storage lock poisoned for {entity_type}")]
    LockPoisoned { entity_type: String },

    /// Backend operation failed
    #[error("Storage {operation} failed: {message}")]
    OperationFailed { operation: String, message: String },
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors related to template rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template failed to render
    #[error("Failed to render template '{template}': {message}")]
    Template { template: String, message: String },
}
