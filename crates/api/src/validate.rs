//! Request validation, run before any service is invoked. Violations are
//! collected per field and surface as one 400 response.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use catalog_store::NewProduct;

use crate::auth_handlers::{LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::product_handlers::ProductPayload;

#[derive(Debug, Default)]
struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    fn check(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.0))
        }
    }
}

pub fn register_input(req: &RegisterRequest) -> Result<(String, String), ApiError> {
    let mut errors = FieldErrors::default();

    match req.username.as_deref() {
        None | Some("") => errors.push("username", "Username is required"),
        Some(username) => {
            let len = username.chars().count();
            if !(3..=50).contains(&len) {
                errors.push("username", "Username must be between 3 and 50 characters");
            }
        }
    }

    match req.password.as_deref() {
        None | Some("") => errors.push("password", "Password is required"),
        Some(password) => {
            let len = password.chars().count();
            if !(6..=100).contains(&len) {
                errors.push("password", "Password must be between 6 and 100 characters");
            }
        }
    }

    errors.check()?;
    Ok((
        req.username.clone().unwrap_or_default(),
        req.password.clone().unwrap_or_default(),
    ))
}

pub fn login_input(req: &LoginRequest) -> Result<(String, String), ApiError> {
    let mut errors = FieldErrors::default();

    if req.username.as_deref().is_none_or(str::is_empty) {
        errors.push("username", "Username is required");
    }
    if req.password.as_deref().is_none_or(str::is_empty) {
        errors.push("password", "Password is required");
    }

    errors.check()?;
    Ok((
        req.username.clone().unwrap_or_default(),
        req.password.clone().unwrap_or_default(),
    ))
}

pub fn product_input(req: &ProductPayload) -> Result<NewProduct, ApiError> {
    // NUMERIC(12, 2) upper bound.
    let max_price = Decimal::new(999_999_999_999, 2);
    let mut errors = FieldErrors::default();

    match req.name.as_deref() {
        None | Some("") => errors.push("name", "Name is required"),
        Some(name) => {
            if name.chars().count() > 100 {
                errors.push("name", "Name must be at most 100 characters");
            }
        }
    }

    if let Some(description) = &req.description {
        if description.chars().count() > 500 {
            errors.push("description", "Description must be at most 500 characters");
        }
    }

    match req.price {
        None => errors.push("price", "Price is required"),
        Some(price) => {
            if price.is_sign_negative() && !price.is_zero() {
                errors.push("price", "Price must not be negative");
            } else if price.normalize().scale() > 2 {
                errors.push("price", "Price must have at most two decimal places");
            } else if price > max_price {
                errors.push("price", "Price is too large");
            }
        }
    }

    errors.check()?;
    Ok(NewProduct {
        name: req.name.clone().unwrap_or_default(),
        description: req.description.clone(),
        price: req.price.unwrap_or_default(),
    })
}
