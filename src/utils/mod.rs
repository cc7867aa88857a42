//! Utility modules
//!
//! This module contains common utilities used throughout the crate,
//! including error handling and small helper functions.

pub mod errors;
pub mod helpers;

pub use errors::{I18nError, Result};
