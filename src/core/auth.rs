//! Authorization for staff pages
//!
//! The order desk is only for staff. A request is turned into an
//! [`AuthContext`] by an [`AuthProvider`], and each route checks that
//! context against an [`AuthPolicy`].

use async_trait::async_trait;
use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};
use std::collections::HashMap;

/// Name of the cookie carrying a staff token
pub const STAFF_TOKEN_COOKIE: &str = "staff_token";

/// Authorization context extracted from a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    /// Authenticated staff member
    Staff { username: String },

    /// No authentication (public access)
    Anonymous,
}

impl AuthContext {
    /// Check if context represents a logged-in staff member
    pub fn is_staff(&self) -> bool {
        matches!(self, AuthContext::Staff { .. })
    }

    /// Get the username if available
    pub fn username(&self) -> Option<&str> {
        match self {
            AuthContext::Staff { username } => Some(username),
            AuthContext::Anonymous => None,
        }
    }
}

/// Authorization policy for a route
#[derive(Debug, Clone)]
pub enum AuthPolicy {
    /// Public access (no auth required)
    Public,

    /// Any authenticated staff member
    Authenticated,

    /// Only the listed staff members
    Staff(Vec<String>),
}

impl AuthPolicy {
    /// Check if auth context satisfies this policy
    pub fn check(&self, context: &AuthContext) -> bool {
        match self {
            AuthPolicy::Public => true,
            AuthPolicy::Authenticated => context.is_staff(),
            AuthPolicy::Staff(allowed) => context
                .username()
                .is_some_and(|name| allowed.iter().any(|a| a == name)),
        }
    }

    /// Parse policy from string (for YAML config)
    pub fn parse_policy(s: &str) -> Self {
        match s {
            "public" => AuthPolicy::Public,
            "authenticated" => AuthPolicy::Authenticated,
            s if s.starts_with("staff:") => AuthPolicy::Staff(
                s["staff:".len()..]
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect(),
            ),
            _ => AuthPolicy::Authenticated,
        }
    }
}

/// Trait for auth providers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Extract auth context from HTTP request headers
    async fn extract_context(&self, headers: &HeaderMap) -> AuthContext;
}

/// Provider that treats every request as anonymous
pub struct NoAuthProvider;

#[async_trait]
impl AuthProvider for NoAuthProvider {
    async fn extract_context(&self, _headers: &HeaderMap) -> AuthContext {
        AuthContext::Anonymous
    }
}

/// Provider backed by a fixed token → username table
///
/// Accepts `Authorization: Bearer <token>` or a `staff_token` cookie. The
/// first of the two that names a known token wins.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthProvider {
    tokens: HashMap<String, String>,
}

impl StaticTokenAuthProvider {
    /// Create a provider from `(username, token)` pairs
    pub fn new<I, U, T>(staff: I) -> Self
    where
        I: IntoIterator<Item = (U, T)>,
        U: Into<String>,
        T: Into<String>,
    {
        Self {
            tokens: staff
                .into_iter()
                .map(|(username, token)| (token.into(), username.into()))
                .collect(),
        }
    }

    fn bearer_token(headers: &HeaderMap) -> Option<&str> {
        headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
            .map(str::trim)
    }

    fn cookie_token(headers: &HeaderMap) -> Option<&str> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == STAFF_TOKEN_COOKIE)
            .map(|(_, token)| token)
    }
}

#[async_trait]
impl AuthProvider for StaticTokenAuthProvider {
    async fn extract_context(&self, headers: &HeaderMap) -> AuthContext {
        let username = [Self::bearer_token(headers), Self::cookie_token(headers)]
            .into_iter()
            .flatten()
            .find_map(|token| self.tokens.get(token));

        match username {
            Some(username) => AuthContext::Staff {
                username: username.clone(),
            },
            None => AuthContext::Anonymous,
        }
    }
}
