//! Tax table configuration for the financial calculation engine.
//!
//! Bracket values are policy constants that change with legislation, so they
//! live in YAML files rather than code. This module provides the loader and
//! the strongly-typed table structures.
//!
//! # Example
//!
//! ```no_run
//! use grupo2s_engine::config::TaxTableLoader;
//!
//! let loader = TaxTableLoader::load("./config/grupo2s").unwrap();
//! println!("Loaded tables: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::TaxTableLoader;
pub use types::{
    InssBracket, InssCap, InssSection, IrpfBracket, IrpfSection, TableMetadata, TaxTables,
};
