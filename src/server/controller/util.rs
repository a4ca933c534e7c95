//! Request-shape validation shared across controllers.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::error::{catalog::CatalogError, Error};

/// Offset pagination query parameters shared by every list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageParams {
    #[serde(default = "default_page_number")]
    pub page_number: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_number() -> u64 {
    1
}

fn default_page_size() -> u64 {
    25
}

impl PageParams {
    pub fn validate(&self) -> Result<(), Error> {
        if self.page_number < 1 {
            return Err(
                CatalogError::Validation("page_number must be at least 1.".to_string()).into(),
            );
        }
        if self.page_size < 1 || self.page_size > 200 {
            return Err(CatalogError::Validation(
                "page_size must be between 1 and 200.".to_string(),
            )
            .into());
        }

        Ok(())
    }
}

/// Inclusive price bounds for the by-price-range endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PriceRangeParams {
    pub min_price: Decimal,
    pub max_price: Decimal,
}

impl PriceRangeParams {
    pub fn validate(&self) -> Result<(), Error> {
        validate_price_bounds(Some(self.min_price), Some(self.max_price))
    }
}

/// Required name/description plus non-negative price, checked on every item
/// create and update before the repository is called.
pub fn validate_item_fields(name: &str, description: &str, price: Decimal) -> Result<(), Error> {
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err(CatalogError::Validation(
            "Name and description are required fields.".to_string(),
        )
        .into());
    }
    if price < Decimal::ZERO {
        return Err(CatalogError::Validation("Price cannot be negative.".to_string()).into());
    }

    Ok(())
}

/// Items cannot be created as unavailable.
pub fn validate_available_at_creation(availability: bool) -> Result<(), Error> {
    if !availability {
        return Err(CatalogError::Validation(
            "Items must be available at point of creation.".to_string(),
        )
        .into());
    }

    Ok(())
}

/// Optional price bounds as they appear on the structured search filters.
pub fn validate_price_bounds(min: Option<Decimal>, max: Option<Decimal>) -> Result<(), Error> {
    if min.is_some_and(|v| v < Decimal::ZERO) || max.is_some_and(|v| v < Decimal::ZERO) {
        return Err(
            CatalogError::Validation("Price values must be non-negative.".to_string()).into(),
        );
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(CatalogError::Validation(
                "Minimum price cannot be greater than maximum price.".to_string(),
            )
            .into());
        }
    }

    Ok(())
}

/// Series names are required and bounded; descriptions are bounded.
pub fn validate_series_fields(series_name: &str, description: &Option<String>) -> Result<(), Error> {
    if series_name.trim().is_empty() {
        return Err(
            CatalogError::Validation("series_name is a required field.".to_string()).into(),
        );
    }
    if series_name.len() > 100 {
        return Err(CatalogError::Validation(
            "series_name must be at most 100 characters.".to_string(),
        )
        .into());
    }
    if description.as_ref().is_some_and(|d| d.len() > 500) {
        return Err(CatalogError::Validation(
            "description must be at most 500 characters.".to_string(),
        )
        .into());
    }

    Ok(())
}

/// Storage-area names are required and bounded; notes are bounded.
pub fn validate_storage_area_fields(
    storage_area_name: &str,
    storage_area_notes: &Option<String>,
) -> Result<(), Error> {
    if storage_area_name.trim().is_empty() {
        return Err(
            CatalogError::Validation("storage_area_name is a required field.".to_string()).into(),
        );
    }
    if storage_area_name.len() > 50 {
        return Err(CatalogError::Validation(
            "storage_area_name must be at most 50 characters.".to_string(),
        )
        .into());
    }
    if storage_area_notes.as_ref().is_some_and(|n| n.len() > 100) {
        return Err(CatalogError::Validation(
            "storage_area_notes must be at most 100 characters.".to_string(),
        )
        .into());
    }

    Ok(())
}

/// Publication years must fall between year 0 and the current year.
pub fn validate_year(year: Option<i32>, field: &str) -> Result<(), Error> {
    let current_year = chrono::Utc::now().year();
    if year.is_some_and(|y| y < 0 || y > current_year) {
        return Err(CatalogError::Validation(format!(
            "{field} must be between 0 and {current_year}."
        ))
        .into());
    }

    Ok(())
}

pub fn validate_year_order(from: Option<i32>, to: Option<i32>) -> Result<(), Error> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(CatalogError::Validation(
                "Start year cannot be greater than end year.".to_string(),
            )
            .into());
        }
    }

    Ok(())
}
