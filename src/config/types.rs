//! Configuration types for tax tables.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML table files under `config/grupo2s/`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the loaded table set.
#[derive(Debug, Clone, Deserialize)]
pub struct TableMetadata {
    /// The human-readable name of the table set.
    pub name: String,
    /// The version or effective year of the table set.
    pub version: String,
    /// URL to the official legislation or reference documentation.
    pub source_url: String,
}

/// A single INSS contribution bracket.
///
/// The matching bracket's rate applies to the WHOLE contribution salary;
/// brackets are not accumulated progressively. Historical payslips were
/// issued this way and the rule must be preserved as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct InssBracket {
    /// The inclusive upper bound of this bracket.
    pub ceiling: Decimal,
    /// The contribution rate applied to the whole salary.
    pub rate: Decimal,
}

/// The INSS contribution cap applied above the last bracket ceiling.
#[derive(Debug, Clone, Deserialize)]
pub struct InssCap {
    /// The contribution salary ceiling.
    pub ceiling: Decimal,
    /// The rate applied to the ceiling to produce the fixed cap.
    pub rate: Decimal,
}

/// The INSS section of a tax table.
#[derive(Debug, Clone, Deserialize)]
pub struct InssSection {
    /// Contribution brackets in ascending ceiling order.
    pub brackets: Vec<InssBracket>,
    /// The cap for salaries above the last bracket ceiling.
    pub cap: InssCap,
}

/// A single IRPF withholding bracket.
///
/// The matching bracket's rate applies to the full calculation base with a
/// flat deduction subtracted once. The final bracket is open-ended
/// (`ceiling: None`).
#[derive(Debug, Clone, Deserialize)]
pub struct IrpfBracket {
    /// The inclusive upper bound of this bracket, `None` for the last one.
    #[serde(default)]
    pub ceiling: Option<Decimal>,
    /// The withholding rate applied to the full calculation base.
    pub rate: Decimal,
    /// The flat deduction subtracted after applying the rate.
    pub deduction: Decimal,
}

/// The IRPF section of a tax table.
#[derive(Debug, Clone, Deserialize)]
pub struct IrpfSection {
    /// Withholding brackets in ascending ceiling order, last one open-ended.
    pub brackets: Vec<IrpfBracket>,
}

/// A complete tax table effective from a given date.
///
/// # Example
///
/// ```no_run
/// use grupo2s_engine::config::TaxTableLoader;
/// use chrono::NaiveDate;
///
/// let loader = TaxTableLoader::load("./config/grupo2s").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let tables = loader.tables_for(date).unwrap();
/// println!("Dependent deduction: {}", tables.dependent_deduction);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTables {
    /// The date from which this table applies.
    pub effective_date: NaiveDate,
    /// The per-dependent deduction used in the IRPF calculation base.
    pub dependent_deduction: Decimal,
    /// INSS contribution brackets and cap.
    pub inss: InssSection,
    /// IRPF withholding brackets.
    pub irpf: IrpfSection,
}
