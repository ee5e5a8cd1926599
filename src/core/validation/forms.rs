//! Booking and review form validation

use super::filters::{collapse_whitespace, multiline, parse_id, trim};
use super::{FieldErrors, add_error};
use crate::core::entity::EntityId;
use crate::entities::{Master, Order, Review, Service};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationErrors};

/// Accepted appointment date format (matches `<input type="date">`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9][0-9\s\-()]{5,18}[0-9]$").expect("phone pattern is valid")
});

const ORDER_FIELDS: &[&str] = &[
    "client_name",
    "phone",
    "comment",
    "master",
    "service",
    "appointment_date",
];

const REVIEW_FIELDS: &[&str] = &["client_name", "text", "rating", "master"];

/// Raw booking form as submitted
///
/// Every field is kept as text so a bad value is reported on the form
/// instead of rejecting the whole request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderInput {
    pub client_name: String,
    pub phone: String,
    pub comment: String,
    pub master: String,
    pub service: String,
    pub appointment_date: String,
}

/// Raw review form as submitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewInput {
    pub client_name: String,
    pub text: String,
    pub rating: String,
    pub master: String,
}

#[derive(Debug, Validate)]
struct OrderFields {
    #[validate(length(min = 1, max = 100, message = "Enter your name (up to 100 characters)."))]
    client_name: String,
    #[validate(regex(path = *PHONE_REGEX, message = "Enter a phone number such as +7 900 123-45-67."))]
    phone: String,
    #[validate(length(max = 1000, message = "Keep the comment under 1000 characters."))]
    comment: String,
    #[validate(required(message = "Choose a master."))]
    master: Option<EntityId>,
    #[validate(required(message = "Choose a service."))]
    service: Option<EntityId>,
}

#[derive(Debug, Validate)]
struct ReviewFields {
    #[validate(length(min = 1, max = 100, message = "Enter your name (up to 100 characters)."))]
    client_name: String,
    #[validate(length(min = 10, max = 2000, message = "Write between 10 and 2000 characters."))]
    text: String,
    #[validate(
        required(message = "Rate your visit from 1 to 5."),
        range(min = 1, max = 5, message = "Rate your visit from 1 to 5.")
    )]
    rating: Option<i64>,
}

/// Validate a booking form against the current catalog
///
/// On success returns an unsaved [`Order`] stamped with the current time.
pub fn validate_order(
    input: &OrderInput,
    masters: &[Master],
    services: &[Service],
) -> Result<Order, FieldErrors> {
    let fields = OrderFields {
        client_name: collapse_whitespace(&input.client_name),
        phone: trim(&input.phone),
        comment: multiline(&input.comment),
        master: parse_id(&input.master),
        service: parse_id(&input.service),
    };

    let mut errors = collect_errors(fields.validate(), ORDER_FIELDS);

    let appointment_date = match trim(&input.appointment_date) {
        raw if raw.is_empty() => None,
        raw => match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                add_error(&mut errors, "appointment_date", "Use the YYYY-MM-DD date format.");
                None
            }
        },
    };

    let master = fields
        .master
        .and_then(|id| masters.iter().find(|m| m.id == id && m.is_active));
    if fields.master.is_some() && master.is_none() {
        add_error(&mut errors, "master", "Choose a master from the list.");
    }

    if let Some(service_id) = fields.service {
        match services.iter().find(|s| s.id == service_id) {
            None => add_error(&mut errors, "service", "Choose a service from the list."),
            Some(service) => {
                if master.is_some_and(|m| !m.offers(service.id)) {
                    add_error(
                        &mut errors,
                        "service",
                        "The chosen master does not offer this service.",
                    );
                }
            }
        }
    }

    match (fields.master, fields.service) {
        (Some(master_id), Some(service_id)) if errors.is_empty() => {
            let mut order = Order::new(fields.client_name, fields.phone, fields.comment)
                .with_master(master_id)
                .with_service(service_id);
            if let Some(date) = appointment_date {
                order = order.with_appointment_date(date);
            }
            Ok(order)
        }
        _ => Err(ordered(errors, ORDER_FIELDS)),
    }
}

/// Validate a review form
///
/// On success returns an unsaved, unpublished [`Review`].
pub fn validate_review(input: &ReviewInput, masters: &[Master]) -> Result<Review, FieldErrors> {
    let fields = ReviewFields {
        client_name: collapse_whitespace(&input.client_name),
        text: multiline(&input.text),
        rating: input.rating.trim().parse::<i64>().ok(),
    };

    let mut errors = collect_errors(fields.validate(), REVIEW_FIELDS);

    let master_id = match trim(&input.master) {
        raw if raw.is_empty() => None,
        raw => match parse_id(&raw).filter(|id| masters.iter().any(|m| m.id == *id)) {
            Some(id) => Some(id),
            None => {
                add_error(&mut errors, "master", "Choose a master from the list.");
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(ordered(errors, REVIEW_FIELDS));
    }

    let rating = fields
        .rating
        .and_then(|r| u8::try_from(r).ok())
        .unwrap_or_default();
    let mut review = Review::new(fields.client_name, fields.text, rating);
    if let Some(id) = master_id {
        review = review.with_master(id);
    }
    Ok(review)
}

fn collect_errors(result: Result<(), ValidationErrors>, order: &[&str]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let Err(validation) = result else {
        return errors;
    };

    let by_field = validation.field_errors();
    for field in order {
        let Some(failures) = by_field.get(*field) else {
            continue;
        };
        for failure in failures.iter() {
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value ({}).", failure.code));
            if !errors.get(*field).is_some_and(|m| m.contains(&message)) {
                add_error(&mut errors, field, message);
            }
        }
    }
    errors
}

fn ordered(mut errors: FieldErrors, order: &[&str]) -> FieldErrors {
    errors.sort_by_cached_key(|field, _| {
        order
            .iter()
            .position(|f| *f == field.as_str())
            .unwrap_or(order.len())
    });
    errors
}
