//! HTTP controllers.
//!
//! Thin request-validation and status-mapping layer over the repositories.
//! Request-shape checks (required fields, non-negative prices, sane ranges)
//! happen here before any store access; state-dependent failures come back
//! from the repositories as typed [`CatalogError`]s and map to status codes
//! through their `IntoResponse` impl.
//!
//! [`CatalogError`]: crate::server::error::catalog::CatalogError

pub mod artifact;
pub mod artifact_series;
pub mod equipment;
pub mod insignia;
pub mod insignia_series;
pub mod literature;
pub mod literature_series;
pub mod mechanical_equipment;
pub mod search;
pub mod storage_area;
pub mod util;
pub mod utilities;
