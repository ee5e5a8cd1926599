//! Order search for the staff order desk
//!
//! A [`SearchRequest`] holds a free-text query and one selector flag per
//! searchable field. [`filter_orders`] sorts orders newest first and, when
//! the query is not blank, keeps the orders where at least one selected
//! field contains the query case-insensitively.
//!
//! # Example
//! ```rust,ignore
//! // GET /orders/?search=ivan&phone_check=on
//! let request = SearchRequest::from_params(&params);
//! let orders = filter_orders(store.orders.list().await?, &request);
//! ```

use crate::core::entity::Entity;
use serde::Serialize;
use std::collections::HashMap;

/// Query parameter carrying the search text
pub const SEARCH_PARAM: &str = "search";
/// Query parameter selecting the client name field
pub const NAME_CHECK_PARAM: &str = "name_check";
/// Query parameter selecting the phone field
pub const PHONE_CHECK_PARAM: &str = "phone_check";
/// Query parameter selecting the comment field
pub const COMMENT_CHECK_PARAM: &str = "comment_check";

/// A field the order search can look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Phone,
    Comment,
}

/// Records that expose text for each [`SearchField`]
pub trait Searchable: Entity {
    fn search_text(&self, field: SearchField) -> &str;
}

/// One filtering query, built fresh per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub match_name: bool,
    pub match_phone: bool,
    pub match_comment: bool,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            match_name: true,
            match_phone: false,
            match_comment: false,
        }
    }
}

impl SearchRequest {
    /// Search the default field (client name) for `query`
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_fields(mut self, name: bool, phone: bool, comment: bool) -> Self {
        self.match_name = name;
        self.match_phone = phone;
        self.match_comment = comment;
        self
    }

    /// Build a request from raw query parameters
    ///
    /// Every parameter is optional; missing or unrecognised flag values
    /// fall back to that flag's default.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            params
                .get(key)
                .and_then(|value| parse_flag(value))
                .unwrap_or(default)
        };

        Self {
            query: params.get(SEARCH_PARAM).cloned().unwrap_or_default(),
            match_name: flag(NAME_CHECK_PARAM, defaults.match_name),
            match_phone: flag(PHONE_CHECK_PARAM, defaults.match_phone),
            match_comment: flag(COMMENT_CHECK_PARAM, defaults.match_comment),
        }
    }

    /// The query with surrounding whitespace removed; empty means "no filter"
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed_query().is_empty()
    }

    /// Fields whose selector flag is set
    pub fn selected_fields(&self) -> Vec<SearchField> {
        [
            (self.match_name, SearchField::Name),
            (self.match_phone, SearchField::Phone),
            (self.match_comment, SearchField::Comment),
        ]
        .into_iter()
        .filter_map(|(enabled, field)| enabled.then_some(field))
        .collect()
    }

    /// Whether a record passes this search
    ///
    /// A blank query matches everything. Otherwise the trimmed query is
    /// matched case-insensitively against the selected fields, OR-combined,
    /// so selecting no field matches nothing.
    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        if self.is_blank() {
            return true;
        }
        let needle = self.trimmed_query().to_lowercase();
        self.selected_fields()
            .into_iter()
            .any(|field| record.search_text(field).to_lowercase().contains(&needle))
    }
}

/// Parse a checkbox-style flag; `None` for unrecognised values
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Some(true),
        "off" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Sort orders newest first and keep those matching `request`
///
/// Ties on the creation timestamp are broken by the higher identifier
/// first, so the output order never depends on the input order.
pub fn filter_orders<T: Searchable>(orders: Vec<T>, request: &SearchRequest) -> Vec<T> {
    let mut orders: Vec<T> = orders
        .into_iter()
        .filter(|order| request.matches(order))
        .collect();
    orders.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
    orders
}
