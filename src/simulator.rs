//! The simulator facade.
//!
//! [`Simulator`] owns the active rate dataset and exposes the two entry
//! points callers use: [`Simulator::calculate`] for a single withholding
//! calculation and [`Simulator::get_proposals`] for the reverse sweep.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{calculate_withholding, get_proposals, proposal_for_annual_cost};
use crate::config::RateDataset;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationInput, CalculationProposal, CalculationResult, ReverseCalculationInput,
};

/// Entry point to the withholding engine and reverse solver.
///
/// A simulator starts without a dataset; every calculation fails with
/// `DatasetNotLoaded` until one is supplied. The dataset is held behind an
/// `Arc` and never mutated, so a loaded simulator can be shared freely
/// across threads.
///
/// # Example
///
/// ```no_run
/// use salary_simulator::config::ConfigLoader;
/// use salary_simulator::models::{CalculationInput, MaritalStatus};
/// use salary_simulator::Simulator;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/continente-2026.yaml").unwrap();
/// let simulator = Simulator::with_dataset(loader.into_dataset());
///
/// let input = CalculationInput::new(Decimal::from(1500), MaritalStatus::Single, 1);
/// let result = simulator.calculate(&input).unwrap();
/// println!("Net salary: {}", result.net_salary);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    dataset: Option<Arc<RateDataset>>,
}

impl Simulator {
    /// Creates a simulator with no dataset loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with the given dataset loaded.
    pub fn with_dataset(dataset: RateDataset) -> Self {
        let mut simulator = Self::new();
        simulator.load_dataset(dataset);
        simulator
    }

    /// Supplies the dataset, replacing any previous one for later calls.
    pub fn load_dataset(&mut self, dataset: RateDataset) {
        info!(
            region = %dataset.meta.region,
            valid_from = %dataset.meta.valid_from,
            replaced = self.dataset.is_some(),
            "Activating withholding rate dataset"
        );
        self.dataset = Some(Arc::new(dataset));
    }

    /// Returns the active dataset, or `DatasetNotLoaded`.
    pub fn dataset(&self) -> EngineResult<&RateDataset> {
        self.dataset.as_deref().ok_or(EngineError::DatasetNotLoaded)
    }

    /// Calculates withholding, social security and net salary for one input.
    pub fn calculate(&self, input: &CalculationInput) -> EngineResult<CalculationResult> {
        calculate_withholding(input, self.dataset()?)
    }

    /// Runs the reverse solver across the benefit percentages.
    pub fn get_proposals(
        &self,
        input: &ReverseCalculationInput,
    ) -> EngineResult<Vec<CalculationProposal>> {
        get_proposals(input, self.dataset()?)
    }

    /// Evaluates a known annual employer cost at one benefit percentage.
    pub fn simulate_annual_cost(
        &self,
        input: &ReverseCalculationInput,
        annual_cost: Decimal,
        percentage: u32,
    ) -> EngineResult<CalculationProposal> {
        proposal_for_annual_cost(input, self.dataset()?, annual_cost, percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Band, DatasetMetadata, Deduction, DependentsAssumption, RateTable, TableId,
    };
    use crate::models::MaritalStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn flat_dataset(rate: &str) -> RateDataset {
        RateDataset {
            meta: DatasetMetadata {
                country: "PT".to_string(),
                region: "continente".to_string(),
                valid_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                valid_to: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
                period: "monthly".to_string(),
                currency: "EUR".to_string(),
            },
            tables: vec![RateTable {
                id: TableId::I,
                name: "Flat".to_string(),
                audience: "Tests".to_string(),
                has_disability: false,
                assumes_dependents: DependentsAssumption::None,
                bands: vec![Band {
                    up_to: None,
                    over: Some(Decimal::ZERO),
                    rate: dec(rate),
                    deduction: Deduction::Amount(Decimal::ZERO),
                    additional_per_dependent: None,
                }],
            }],
        }
    }

    #[test]
    fn test_calculate_without_dataset_fails() {
        let simulator = Simulator::new();
        let input = CalculationInput::new(dec("1000"), MaritalStatus::Single, 0);

        assert!(matches!(
            simulator.calculate(&input),
            Err(EngineError::DatasetNotLoaded)
        ));
    }

    #[test]
    fn test_calculate_with_dataset() {
        let simulator = Simulator::with_dataset(flat_dataset("0.1"));
        let input = CalculationInput::new(dec("1000"), MaritalStatus::Single, 0);

        let result = simulator.calculate(&input).unwrap();
        assert_eq!(result.withheld_tax, dec("100.00"));
        assert_eq!(result.net_salary, dec("790.00"));
    }

    #[test]
    fn test_reloading_replaces_dataset_for_later_calls() {
        let mut simulator = Simulator::with_dataset(flat_dataset("0.1"));
        let input = CalculationInput::new(dec("1000"), MaritalStatus::Single, 0);
        let before = simulator.calculate(&input).unwrap();

        simulator.load_dataset(flat_dataset("0.2"));
        let after = simulator.calculate(&input).unwrap();

        assert_eq!(before.withheld_tax, dec("100.00"));
        assert_eq!(after.withheld_tax, dec("200.00"));
    }

    #[test]
    fn test_clones_share_the_dataset() {
        let simulator = Simulator::with_dataset(flat_dataset("0.1"));
        let clone = simulator.clone();

        assert!(std::ptr::eq(
            simulator.dataset().unwrap(),
            clone.dataset().unwrap()
        ));
    }

    #[test]
    fn test_simulator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Simulator>();
    }
}
