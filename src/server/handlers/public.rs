//! Pages open to every visitor

use crate::core::error::{RequestError, ShopError};
use crate::core::validation::{FieldErrors, OrderInput, ReviewInput, validate_order, validate_review};
use crate::entities::ServiceSummary;
use crate::server::state::AppState;
use axum::{
    Form, Json,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::collections::HashMap;

pub const THANKS_PATH: &str = "/thanks/";

/// Landing page: active masters and the latest published reviews
pub async fn landing(State(state): State<AppState>) -> Result<Html<String>, ShopError> {
    let masters = state.store.active_masters().await?;
    let services = state.store.services.list().await?;
    let reviews = state
        .store
        .published_reviews(state.site.landing_reviews)
        .await?;

    let mut context = state.renderer.context();
    context.insert("masters", &masters);
    context.insert("services", &services);
    context.insert("reviews", &reviews);
    state.renderer.render("landing.html", &context)
}

pub async fn review_form(State(state): State<AppState>) -> Result<Html<String>, ShopError> {
    render_review_form(&state, &ReviewInput::default(), &FieldErrors::new()).await
}

pub async fn submit_review(
    State(state): State<AppState>,
    Form(input): Form<ReviewInput>,
) -> Result<Response, ShopError> {
    let masters = state.store.masters.list().await?;
    match validate_review(&input, &masters) {
        Ok(review) => {
            let review = state.store.reviews.create(review).await?;
            tracing::info!(review_id = review.id, rating = review.rating, "review submitted");
            Ok(Redirect::to(&thanks_url("review")).into_response())
        }
        Err(errors) => {
            tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "review form rejected");
            Ok(render_review_form(&state, &input, &errors)
                .await?
                .into_response())
        }
    }
}

pub async fn order_form(State(state): State<AppState>) -> Result<Html<String>, ShopError> {
    render_order_form(&state, &OrderInput::default(), &FieldErrors::new()).await
}

pub async fn submit_order(
    State(state): State<AppState>,
    Form(input): Form<OrderInput>,
) -> Result<Response, ShopError> {
    let masters = state.store.masters.list().await?;
    let services = state.store.services.list().await?;
    match validate_order(&input, &masters, &services) {
        Ok(order) => {
            let order = state.store.orders.create(order).await?;
            tracing::info!(
                order_id = order.id,
                master_id = order.master_id,
                service_id = order.service_id,
                "order booked"
            );
            Ok(Redirect::to(&thanks_url("order")).into_response())
        }
        Err(errors) => {
            tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "order form rejected");
            Ok(render_order_form(&state, &input, &errors)
                .await?
                .into_response())
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ThanksParams {
    #[serde(default)]
    pub source: Option<String>,
}

/// Confirmation page shown after a successful submission
pub async fn thanks(
    State(state): State<AppState>,
    Query(params): Query<ThanksParams>,
) -> Result<Html<String>, ShopError> {
    let message = match params.source.as_deref() {
        Some("order") => "Thank you! Your booking has been received. We will call you to confirm.",
        Some("review") => "Thank you for your review! It will appear after moderation.",
        _ => "Thank you!",
    };

    let mut context = state.renderer.context();
    context.insert("message", message);
    state.renderer.render("thanks.html", &context)
}

/// `GET /get_services/?master_id=<id>`
///
/// Lists the services a master offers. A missing or unknown master yields
/// an empty list.
pub async fn get_services(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<ServiceSummary>>, ShopError> {
    let Some(raw) = params.get("master_id").map(|v| v.trim()) else {
        return Ok(Json(Vec::new()));
    };
    if raw.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let master_id = raw.parse().map_err(|_| RequestError::InvalidParameter {
        name: "master_id".to_string(),
        value: raw.to_string(),
    })?;

    Ok(Json(state.store.services_for_master(master_id).await?))
}

fn thanks_url(source: &str) -> String {
    format!("{}?source={}", THANKS_PATH, source)
}

async fn render_review_form(
    state: &AppState,
    input: &ReviewInput,
    errors: &FieldErrors,
) -> Result<Html<String>, ShopError> {
    let masters = state.store.active_masters().await?;

    let mut context = state.renderer.context();
    context.insert("form", input);
    context.insert("errors", errors);
    context.insert("masters", &masters);
    state.renderer.render("review_form.html", &context)
}

async fn render_order_form(
    state: &AppState,
    input: &OrderInput,
    errors: &FieldErrors,
) -> Result<Html<String>, ShopError> {
    let masters = state.store.active_masters().await?;
    let services = state.store.services.list().await?;

    let mut context = state.renderer.context();
    context.insert("form", input);
    context.insert("errors", errors);
    context.insert("masters", &masters);
    context.insert("services", &services);
    state.renderer.render("order_form.html", &context)
}
