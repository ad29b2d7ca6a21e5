//! Withholding table selection.
//!
//! This module maps a taxpayer profile (marital status, dependents and
//! disability) to one of the seven withholding tables and resolves that
//! table in the dataset.

use crate::config::{RateDataset, RateTable, TableId};
use crate::error::{EngineError, EngineResult};
use crate::models::MaritalStatus;

/// Determines which withholding table applies to a taxpayer profile.
///
/// The mapping is total over the profile space:
///
/// | Disability | Marital status        | Dependents | Table |
/// |------------|-----------------------|------------|-------|
/// | no         | married, one holder   | any        | III   |
/// | no         | single / two holders  | 0          | I     |
/// | no         | single / two holders  | ≥ 1        | II    |
/// | yes        | married, one holder   | any        | VII   |
/// | yes        | married, two holders  | 0 / ≥ 1    | IV / VI |
/// | yes        | single                | 0 / ≥ 1    | IV / V  |
///
/// # Examples
///
/// ```
/// use salary_simulator::calculation::select_table_id;
/// use salary_simulator::config::TableId;
/// use salary_simulator::models::MaritalStatus;
///
/// assert_eq!(select_table_id(MaritalStatus::Single, 2, false), TableId::II);
/// assert_eq!(select_table_id(MaritalStatus::MarriedOneHolder, 0, true), TableId::VII);
/// ```
pub fn select_table_id(
    marital_status: MaritalStatus,
    dependents: u32,
    disability: bool,
) -> TableId {
    let has_dependents = dependents >= 1;

    match (disability, marital_status) {
        (false, MaritalStatus::MarriedOneHolder) => TableId::III,
        (false, _) if has_dependents => TableId::II,
        (false, _) => TableId::I,
        (true, MaritalStatus::MarriedOneHolder) => TableId::VII,
        (true, MaritalStatus::MarriedTwoHolders) if has_dependents => TableId::VI,
        (true, MaritalStatus::Single) if has_dependents => TableId::V,
        (true, _) => TableId::IV,
    }
}

/// Selects the table for a profile and looks it up in the dataset.
///
/// Returns `TableNotFound` when the dataset does not carry the resolved table.
pub fn select_table(
    dataset: &RateDataset,
    marital_status: MaritalStatus,
    dependents: u32,
    disability: bool,
) -> EngineResult<&RateTable> {
    let id = select_table_id(marital_status, dependents, disability);
    dataset
        .table(id)
        .ok_or(EngineError::TableNotFound { table: id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetMetadata;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    const STATUSES: [MaritalStatus; 3] = [
        MaritalStatus::Single,
        MaritalStatus::MarriedOneHolder,
        MaritalStatus::MarriedTwoHolders,
    ];

    #[test]
    fn test_without_disability() {
        assert_eq!(select_table_id(MaritalStatus::Single, 0, false), TableId::I);
        assert_eq!(select_table_id(MaritalStatus::Single, 1, false), TableId::II);
        assert_eq!(
            select_table_id(MaritalStatus::MarriedTwoHolders, 0, false),
            TableId::I
        );
        assert_eq!(
            select_table_id(MaritalStatus::MarriedTwoHolders, 3, false),
            TableId::II
        );
        assert_eq!(
            select_table_id(MaritalStatus::MarriedOneHolder, 0, false),
            TableId::III
        );
        assert_eq!(
            select_table_id(MaritalStatus::MarriedOneHolder, 4, false),
            TableId::III
        );
    }

    #[test]
    fn test_with_disability() {
        assert_eq!(select_table_id(MaritalStatus::Single, 0, true), TableId::IV);
        assert_eq!(select_table_id(MaritalStatus::Single, 2, true), TableId::V);
        assert_eq!(
            select_table_id(MaritalStatus::MarriedTwoHolders, 0, true),
            TableId::IV
        );
        assert_eq!(
            select_table_id(MaritalStatus::MarriedTwoHolders, 1, true),
            TableId::VI
        );
        assert_eq!(
            select_table_id(MaritalStatus::MarriedOneHolder, 0, true),
            TableId::VII
        );
        assert_eq!(
            select_table_id(MaritalStatus::MarriedOneHolder, 5, true),
            TableId::VII
        );
    }

    #[test]
    fn test_mapping_covers_every_table() {
        let mut reached = HashSet::new();
        for status in STATUSES {
            for dependents in [0, 1] {
                for disability in [false, true] {
                    reached.insert(select_table_id(status, dependents, disability));
                }
            }
        }

        assert_eq!(reached.len(), TableId::ALL.len());
    }

    #[test]
    fn test_missing_table_returns_error() {
        let dataset = RateDataset {
            meta: DatasetMetadata {
                country: "PT".to_string(),
                region: "continente".to_string(),
                valid_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                valid_to: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
                period: "monthly".to_string(),
                currency: "EUR".to_string(),
            },
            tables: vec![],
        };

        let result = select_table(&dataset, MaritalStatus::MarriedOneHolder, 0, false);
        assert!(matches!(
            result,
            Err(EngineError::TableNotFound { table: TableId::III })
        ));
    }
}
