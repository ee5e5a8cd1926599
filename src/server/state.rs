//! Application state shared across handlers

use super::render::Renderer;
use crate::config::SiteConfig;
use crate::core::auth::{AuthContext, AuthPolicy, AuthProvider};
use crate::core::error::{RequestError, ShopError};
use crate::storage::ShopStore;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Uri};
use std::sync::Arc;

/// Everything a handler needs, passed explicitly instead of global state
#[derive(Clone)]
pub struct AppState {
    pub store: ShopStore,
    pub auth: Arc<dyn AuthProvider>,
    /// Policy guarding the order desk
    pub staff_policy: AuthPolicy,
    pub renderer: Arc<Renderer>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    /// Resolve the caller and check them against the staff policy
    ///
    /// Anonymous callers are sent to the login page with `next` set to
    /// the page they asked for.
    pub async fn authorize_staff(
        &self,
        headers: &HeaderMap,
        uri: &Uri,
    ) -> Result<AuthContext, ShopError> {
        let context = self.auth.extract_context(headers).await;
        if self.staff_policy.check(&context) {
            return Ok(context);
        }

        let next = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());
        tracing::warn!(path = %next, user = ?context.username(), "staff access denied");

        match context {
            AuthContext::Anonymous => Err(RequestError::LoginRequired {
                login_url: self.site.login_url.clone(),
                next,
            }
            .into()),
            AuthContext::Staff { username } => Err(RequestError::Forbidden {
                message: format!("'{}' may not open the order desk", username),
            }
            .into()),
        }
    }
}

/// Extractor for handlers reserved to staff
///
/// ```rust,ignore
/// pub async fn orders_list(StaffUser(user): StaffUser, ...) { ... }
/// ```
pub struct StaffUser(pub AuthContext);

impl FromRequestParts<AppState> for StaffUser {
    type Rejection = ShopError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .authorize_staff(&parts.headers, &parts.uri)
            .await
            .map(StaffUser)
    }
}
