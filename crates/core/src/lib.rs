//! Core business logic for Salesbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `sales` - Sale records, per-client debt aggregation, filtering, and export
//! - `auth` - Password hashing and credential validation
//! - `insights` - AI-generated financial summaries with fixed fallbacks

pub mod auth;
pub mod insights;
pub mod sales;
