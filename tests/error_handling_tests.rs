//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Error matching allows callers to handle specific cases

use axum::http::StatusCode;
use axum::response::IntoResponse;
use barbershop::core::error::{
    ConfigError, EntityError, RenderError, RequestError, ShopError, StorageError,
};

fn not_found(id: u64) -> ShopError {
    EntityError::NotFound {
        entity_type: "order".to_string(),
        id,
    }
    .into()
}

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_entity_not_found_returns_404() {
        assert_eq!(not_found(1).status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_entity_already_exists_returns_409() {
        let err = ShopError::Entity(EntityError::AlreadyExists {
            entity_type: "master".to_string(),
            id: 1,
        });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_login_required_returns_303() {
        let err = ShopError::Request(RequestError::LoginRequired {
            login_url: "/login/".to_string(),
            next: "/orders/".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::SEE_OTHER);
    }

    #[test]
    fn test_forbidden_returns_403() {
        let err = ShopError::Request(RequestError::Forbidden {
            message: "not on the desk rota".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_server_side_failures_return_500() {
        let errors = [
            ShopError::Storage(StorageError::LockPoisoned {
                entity_type: "order".to_string(),
            }),
            ShopError::Render(RenderError::Template {
                template: "orders_list.html".to_string(),
                message: "unexpected end".to_string(),
            }),
            ShopError::Config(ConfigError::InvalidValue {
                field: "server.bind".to_string(),
                message: "must not be empty".to_string(),
            }),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(not_found(1).error_code(), "ENTITY_NOT_FOUND");
        assert_eq!(
            ShopError::Request(RequestError::InvalidParameter {
                name: "id".to_string(),
                value: "abc".to_string(),
            })
            .error_code(),
            "INVALID_PARAMETER"
        );
        assert_eq!(
            ShopError::Render(RenderError::Template {
                template: "x".to_string(),
                message: "y".to_string(),
            })
            .error_code(),
            "RENDER_ERROR"
        );
        assert_eq!(
            ShopError::Storage(StorageError::LockPoisoned {
                entity_type: "order".to_string(),
            })
            .error_code(),
            "STORAGE_ERROR"
        );
    }
}

// =============================================================================
// Error Response Tests
// =============================================================================

mod error_response_tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_details_name_the_parameter() {
        let response = ShopError::Request(RequestError::InvalidParameter {
            name: "master_id".to_string(),
            value: "oleg".to_string(),
        })
        .to_response();

        assert_eq!(response.code, "INVALID_PARAMETER");
        assert_eq!(
            response.details,
            Some(serde_json::json!({ "parameter": "master_id", "value": "oleg" }))
        );
    }

    #[test]
    fn test_errors_without_details_omit_the_key() {
        let response = ShopError::Storage(StorageError::OperationFailed {
            operation: "insert".to_string(),
            message: "record has no id".to_string(),
        })
        .to_response();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
        assert_eq!(json["message"], "Storage insert failed: record has no id");
    }
}

// =============================================================================
// Error Conversion Tests
// =============================================================================

mod error_conversion_tests {
    use super::*;

    fn lookup(found: bool) -> Result<u64, ShopError> {
        if found {
            Ok(7)
        } else {
            Err(EntityError::NotFound {
                entity_type: "order".to_string(),
                id: 7,
            })?
        }
    }

    #[test]
    fn test_question_mark_converts_category_errors() {
        assert_eq!(lookup(true).unwrap(), 7);
        assert!(matches!(lookup(false), Err(ShopError::Entity(_))));
    }

    #[test]
    fn test_display_is_transparent() {
        assert_eq!(not_found(3).to_string(), "order with id '3' not found");
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod error_matching_tests {
    use super::*;

    #[test]
    fn test_match_not_found_by_id() {
        match not_found(12) {
            ShopError::Entity(EntityError::NotFound { entity_type, id }) => {
                assert_eq!(entity_type, "order");
                assert_eq!(id, 12);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

// =============================================================================
// IntoResponse Tests
// =============================================================================

mod into_response_tests {
    use super::*;

    #[test]
    fn test_not_found_into_response_status() {
        let response = not_found(5).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_login_required_into_redirect() {
        let response = ShopError::Request(RequestError::LoginRequired {
            login_url: "/login/".to_string(),
            next: "/orders/5/".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()["location"],
            "/login/?next=%2Forders%2F5%2F"
        );
    }

    #[test]
    fn test_forbidden_into_response_status() {
        let response = ShopError::Request(RequestError::Forbidden {
            message: "no".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
