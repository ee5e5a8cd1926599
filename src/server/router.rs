//! Route table of the site

use super::handlers::{health, public, staff};
use super::state::AppState;
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build every route of the site
///
/// - GET  /                  - landing page
/// - GET  /review/create/    - review form, POST submits it
/// - GET  /order/create/     - booking form, POST submits it
/// - GET  /thanks/           - confirmation page
/// - GET  /orders/           - order desk (staff)
/// - GET  /orders/{id}/      - order details (staff)
/// - GET  /get_services/     - services of a master, as JSON
/// - GET  /health            - liveness probe
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(public::landing))
        .route(
            "/review/create/",
            get(public::review_form).post(public::submit_review),
        )
        .route(
            "/order/create/",
            get(public::order_form).post(public::submit_order),
        )
        .route(public::THANKS_PATH, get(public::thanks))
        .route("/orders/", get(staff::orders_list))
        .route("/orders/{id}/", get(staff::order_detail))
        .route("/get_services/", get(public::get_services))
        .route("/health", get(health))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
