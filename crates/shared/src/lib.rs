//! Shared types, errors, and configuration for Salesbook.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management
//! - JWT claims and the token service
//! - The client preferences store

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod preferences;
pub mod types;

#[cfg(test)]
mod auth_tests;
#[cfg(test)]
mod error_tests;

pub use auth::Claims;
pub use config::{AppConfig, GeminiConfig};
pub use error::{AppError, AppResult, FieldError};
pub use jwt::{JwtConfig, JwtError, JwtService};
pub use preferences::{Preferences, PreferencesError, PreferencesStore};
