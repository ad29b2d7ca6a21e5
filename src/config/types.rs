//! Rate dataset types for IRS withholding.
//!
//! This module contains the strongly-typed structures deserialized from the
//! withholding rate dataset document (YAML or JSON, camelCase keys).

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata describing the dataset's scope and validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    /// ISO country code (e.g., "PT").
    pub country: String,
    /// Tax region the tables apply to (e.g., "continente").
    pub region: String,
    /// First day the tables are in force.
    pub valid_from: NaiveDate,
    /// Last day the tables are in force.
    pub valid_to: NaiveDate,
    /// Payment period the amounts refer to (e.g., "monthly").
    pub period: String,
    /// ISO currency code (e.g., "EUR").
    pub currency: String,
}

/// Identifier of a withholding table, I through VII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TableId {
    /// Not married without dependents, or married with two holders.
    I,
    /// Not married with dependents, or married with two holders and dependents.
    II,
    /// Married with a single holder.
    III,
    /// With disability: not married or two holders, without dependents.
    IV,
    /// With disability: not married with dependents.
    V,
    /// With disability: married with two holders and dependents.
    VI,
    /// With disability: married with a single holder.
    VII,
}

impl TableId {
    /// All table identifiers, in order.
    pub const ALL: [TableId; 7] = [
        TableId::I,
        TableId::II,
        TableId::III,
        TableId::IV,
        TableId::V,
        TableId::VI,
        TableId::VII,
    ];

    /// Returns the roman-numeral code used in the dataset.
    pub fn code(self) -> &'static str {
        match self {
            TableId::I => "I",
            TableId::II => "II",
            TableId::III => "III",
            TableId::IV => "IV",
            TableId::V => "V",
            TableId::VI => "VI",
            TableId::VII => "VII",
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which dependents situation a table was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependentsAssumption {
    /// The table assumes no dependents.
    None,
    /// The table assumes at least one dependent.
    OneOrMore,
    /// The table applies regardless of dependents.
    Any,
}

/// The deduction subtracted from `gross × rate` within a band.
///
/// Most bands carry a literal amount. The lower bands smooth the transition
/// out of the exempt band with a formula of the form `a * b * (c - R)`,
/// where `R` is the gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Deduction {
    /// A fixed amount.
    Amount(Decimal),
    /// A parametrized expression evaluated against the gross salary.
    Formula {
        /// The expression text, e.g. `"0.125 * 2.60 * (1273.85 - R)"`.
        formula: String,
    },
}

/// One band of a withholding table.
///
/// Bounded bands carry `up_to` (inclusive). Exactly one band per table is
/// open-ended and carries `over` (exclusive lower bound) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    /// Inclusive upper bound of the band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to: Option<Decimal>,
    /// Exclusive lower bound of the open-ended band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over: Option<Decimal>,
    /// Marginal tax rate as a fraction (e.g., 0.212).
    pub rate: Decimal,
    /// Deduction applied within the band.
    pub deduction: Deduction,
    /// Extra deduction for each dependent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_per_dependent: Option<Decimal>,
}

impl Band {
    /// Returns true if this is the open-ended band.
    pub fn is_open(&self) -> bool {
        self.up_to.is_none()
    }
}

/// A withholding table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    /// Table identifier.
    pub id: TableId,
    /// Official table name.
    pub name: String,
    /// Who the table applies to.
    pub audience: String,
    /// Whether the table is for taxpayers with a disability.
    pub has_disability: bool,
    /// Dependents situation the table assumes.
    pub assumes_dependents: DependentsAssumption,
    /// Bands in document order.
    pub bands: Vec<Band>,
}

/// The complete withholding rate dataset.
///
/// Loaded once and read-only afterwards; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDataset {
    /// Dataset metadata.
    pub meta: DatasetMetadata,
    /// Tables in document order.
    pub tables: Vec<RateTable>,
}

impl RateDataset {
    /// Returns the table with the given id, if present.
    pub fn table(&self, id: TableId) -> Option<&RateTable> {
        self.tables.iter().find(|table| table.id == id)
    }

    /// Returns the dataset metadata.
    pub fn metadata(&self) -> &DatasetMetadata {
        &self.meta
    }
}
