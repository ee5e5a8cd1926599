//! ServerBuilder for fluent API to build the site

use super::render::Renderer;
use super::router::build_routes;
use super::state::AppState;
use crate::config::AppConfig;
use crate::core::auth::{AuthPolicy, AuthProvider, StaticTokenAuthProvider};
use crate::storage::ShopStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder wiring configuration, storage and auth into a router
///
/// # Example
///
/// ```ignore
/// let store = ShopStore::in_memory();
/// store.seed_catalog(&config.catalog).await?;
///
/// ServerBuilder::new()
///     .with_config(config)
///     .with_store(store)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    store: Option<ShopStore>,
    auth: Option<Arc<dyn AuthProvider>>,
    staff_policy: Option<AuthPolicy>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            store: None,
            auth: None,
            staff_policy: None,
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an existing store; a fresh in-memory store is used otherwise
    pub fn with_store(mut self, store: ShopStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the token provider built from `config.staff`
    pub fn with_auth_provider(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth = Some(Arc::new(provider));
        self
    }

    /// Override `site.staff_policy` from the configuration
    pub fn with_staff_policy(mut self, policy: AuthPolicy) -> Self {
        self.staff_policy = Some(policy);
        self
    }

    /// Add routes outside the site's own table, e.g. a login page
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Assemble the shared handler state
    pub fn build_state(&mut self) -> Result<AppState> {
        let renderer = Renderer::new(self.config.site.name.as_str())?;
        let auth: Arc<dyn AuthProvider> = match self.auth.take() {
            Some(provider) => provider,
            None => Arc::new(StaticTokenAuthProvider::new(
                self.config
                    .staff
                    .iter()
                    .map(|a| (a.username.clone(), a.token.clone())),
            )),
        };

        let staff_policy = self
            .staff_policy
            .take()
            .unwrap_or_else(|| AuthPolicy::parse_policy(&self.config.site.staff_policy));

        Ok(AppState {
            store: self.store.take().unwrap_or_default(),
            auth,
            staff_policy,
            renderer: Arc::new(renderer),
            site: Arc::new(self.config.site.clone()),
        })
    }

    /// Build the final router
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state()?;
        let mut app = build_routes(state);
        for routes in std::mem::take(&mut self.custom_routes) {
            app = app.merge(routes);
        }
        Ok(app)
    }

    /// Serve on `config.server.bind` with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.bind.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaffAccount;
    use crate::core::auth::{AuthContext, NoAuthProvider};
    use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
    use axum::routing::get;
    use axum_test::TestServer;

    fn config_with_staff() -> AppConfig {
        AppConfig {
            staff: vec![StaffAccount {
                username: "anna".to_string(),
                token: "secret".to_string(),
            }],
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_default_auth_uses_configured_staff() {
        let state = ServerBuilder::new()
            .with_config(config_with_staff())
            .build_state()
            .unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer secret"));
        assert_eq!(
            state.auth.extract_context(&headers).await,
            AuthContext::Staff {
                username: "anna".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_custom_auth_provider_replaces_staff_tokens() {
        let state = ServerBuilder::new()
            .with_config(config_with_staff())
            .with_auth_provider(NoAuthProvider)
            .build_state()
            .unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer secret"));
        assert_eq!(
            state.auth.extract_context(&headers).await,
            AuthContext::Anonymous
        );
    }

    #[test]
    fn test_site_settings_reach_state() {
        let mut config = AppConfig::default();
        config.site.login_url = "/staff/login/".to_string();

        let state = ServerBuilder::new().with_config(config).build_state().unwrap();
        assert_eq!(state.site.login_url, "/staff/login/");
        assert!(matches!(state.staff_policy, AuthPolicy::Authenticated));
    }

    #[test]
    fn test_staff_policy_from_config() {
        let mut config = config_with_staff();
        config.site.staff_policy = "staff: anna".to_string();

        let state = ServerBuilder::new().with_config(config).build_state().unwrap();
        match state.staff_policy {
            AuthPolicy::Staff(names) => assert_eq!(names, vec!["anna"]),
            other => panic!("Expected Staff, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_staff_policy_wins() {
        let mut config = config_with_staff();
        config.site.staff_policy = "staff: anna".to_string();

        let state = ServerBuilder::new()
            .with_config(config)
            .with_staff_policy(AuthPolicy::Public)
            .build_state()
            .unwrap();
        assert!(matches!(state.staff_policy, AuthPolicy::Public));
    }

    #[test]
    fn test_build_router() {
        assert!(ServerBuilder::new().build().is_ok());
    }

    #[tokio::test]
    async fn test_custom_routes_are_mounted() {
        let login = Router::new().route("/login/", get(|| async { "Staff login" }));
        let app = ServerBuilder::new().with_custom_routes(login).build().unwrap();
        let server = TestServer::new(app);

        let response = server.get("/login/").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "Staff login");

        server.get("/health").await.assert_status_ok();
    }
}
