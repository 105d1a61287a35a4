//! Application state for the Grupo 2S financial engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TaxTableLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded tax tables.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tax tables.
    tax_tables: Arc<TaxTableLoader>,
}

impl AppState {
    /// Creates a new application state with the given tax table loader.
    pub fn new(tax_tables: TaxTableLoader) -> Self {
        Self {
            tax_tables: Arc::new(tax_tables),
        }
    }

    /// Returns a reference to the tax table loader.
    pub fn tax_tables(&self) -> &TaxTableLoader {
        &self.tax_tables
    }
}
