//! Order desk pages, reserved to staff

use crate::core::error::{RequestError, ShopError};
use crate::core::search::{SearchRequest, filter_orders};
use crate::entities::{Master, Order, Service};
use crate::server::state::{AppState, StaffUser};
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Serialize;
use std::collections::HashMap;

/// An order with the names of its master and service resolved
#[derive(Debug, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub status_label: &'static str,
    pub master_name: Option<String>,
    pub service_name: Option<String>,
}

impl OrderView {
    fn new(order: Order, masters: &[Master], services: &[Service]) -> Self {
        let master_name = order
            .master_id
            .and_then(|id| masters.iter().find(|m| m.id == id))
            .map(|m| m.name.clone());
        let service_name = order
            .service_id
            .and_then(|id| services.iter().find(|s| s.id == id))
            .map(|s| s.name.clone());

        Self {
            status_label: order.status.as_str(),
            order,
            master_name,
            service_name,
        }
    }
}

/// `GET /orders/`: all orders newest first, optionally filtered
///
/// Query parameters: `search`, `name_check`, `phone_check`, `comment_check`.
pub async fn orders_list(
    StaffUser(user): StaffUser,
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, ShopError> {
    let request = SearchRequest::from_params(&params);
    let orders = filter_orders(state.store.orders.list().await?, &request);

    tracing::debug!(
        user = ?user.username(),
        query = %request.trimmed_query(),
        name = request.match_name,
        phone = request.match_phone,
        comment = request.match_comment,
        found = orders.len(),
        "order search"
    );

    let masters = state.store.masters.list().await?;
    let services = state.store.services.list().await?;
    let views: Vec<OrderView> = orders
        .into_iter()
        .map(|order| OrderView::new(order, &masters, &services))
        .collect();

    let mut context = state.renderer.context();
    context.insert("total", &views.len());
    context.insert("orders", &views);
    context.insert("search_query", &request.query);
    context.insert("name_check", &request.match_name);
    context.insert("phone_check", &request.match_phone);
    context.insert("comment_check", &request.match_comment);
    state.renderer.render("orders_list.html", &context)
}

/// `GET /orders/{id}/`
pub async fn order_detail(
    StaffUser(_user): StaffUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, ShopError> {
    let id = raw_id
        .trim()
        .parse()
        .map_err(|_| RequestError::InvalidParameter {
            name: "id".to_string(),
            value: raw_id.clone(),
        })?;

    let order = state.store.find_order(id).await?;
    let masters = state.store.masters.list().await?;
    let services = state.store.services.list().await?;

    let mut context = state.renderer.context();
    context.insert("order", &OrderView::new(order, &masters, &services));
    state.renderer.render("order_detail.html", &context)
}
