//! Property tests for the withholding engine against the 2026 mainland dataset.

use std::sync::OnceLock;

use proptest::prelude::*;
use rust_decimal::Decimal;

use salary_simulator::calculation::{calculate_withholding, select_band, select_table_id};
use salary_simulator::config::{ConfigLoader, RateDataset, TableId};
use salary_simulator::models::{CalculationInput, MaritalStatus};

fn dataset() -> &'static RateDataset {
    static DATASET: OnceLock<RateDataset> = OnceLock::new();
    DATASET.get_or_init(|| {
        ConfigLoader::load("./config/continente-2026.yaml")
            .expect("Failed to load dataset")
            .into_dataset()
    })
}

fn marital_status() -> impl Strategy<Value = MaritalStatus> {
    prop_oneof![
        Just(MaritalStatus::Single),
        Just(MaritalStatus::MarriedOneHolder),
        Just(MaritalStatus::MarriedTwoHolders),
    ]
}

/// Gross salaries from 0.01 to 30 000.00, in cents.
fn gross_salary() -> impl Strategy<Value = Decimal> {
    (1i64..3_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn input(
    gross: Decimal,
    status: MaritalStatus,
    dependents: u32,
    disability: bool,
) -> CalculationInput {
    CalculationInput {
        disability,
        ..CalculationInput::new(gross, status, dependents)
    }
}

proptest! {
    #[test]
    fn withheld_tax_is_never_negative(
        gross in gross_salary(),
        status in marital_status(),
        dependents in 0u32..8,
        disability in any::<bool>(),
    ) {
        let request = input(gross, status, dependents, disability);
        let result = calculate_withholding(&request, dataset()).unwrap();
        prop_assert!(result.withheld_tax >= Decimal::ZERO);
        prop_assert!(result.net_salary <= gross);
    }

    #[test]
    fn net_salary_grows_with_gross_within_a_band(
        euros in 1i64..25_000,
        status in marital_status(),
        dependents in 0u32..4,
        disability in any::<bool>(),
    ) {
        let lower = Decimal::from(euros);
        let upper = lower + Decimal::ONE;
        let table_id = select_table_id(status, dependents, disability);
        let table = dataset().table(table_id).unwrap();
        prop_assume!(select_band(table, lower).unwrap() == select_band(table, upper).unwrap());

        let before = input(lower, status, dependents, disability);
        let after = input(upper, status, dependents, disability);
        let before = calculate_withholding(&before, dataset()).unwrap();
        let after = calculate_withholding(&after, dataset()).unwrap();
        prop_assert!(after.net_salary >= before.net_salary);
    }

    #[test]
    fn calculation_is_deterministic(
        gross in gross_salary(),
        status in marital_status(),
        dependents in 0u32..8,
        disability in any::<bool>(),
    ) {
        let request = input(gross, status, dependents, disability);
        let first = calculate_withholding(&request, dataset()).unwrap();
        let second = calculate_withholding(&request, dataset()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_profile_resolves_to_a_table(
        status in marital_status(),
        dependents in any::<u32>(),
        disability in any::<bool>(),
    ) {
        let table_id = select_table_id(status, dependents, disability);
        prop_assert!(TableId::ALL.contains(&table_id));
        prop_assert!(dataset().table(table_id).is_some());

        let has_disability_table = table_id >= TableId::IV;
        prop_assert_eq!(has_disability_table, disability);
    }
}
