//! Homebase — catalog management backend for a military collectibles
//! inventory.
//!
//! Five item categories (literature, insignia, artifacts, equipment,
//! mechanical equipment) with CRUD, attribute filtering, structured and
//! free-text search, series grouping, and storage-area assignment, backed by
//! a relational store through sea-orm.

pub mod model;
pub mod server;
