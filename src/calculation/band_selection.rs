//! Band lookup within a withholding table.

use rust_decimal::Decimal;

use crate::config::{Band, RateTable};
use crate::error::{EngineError, EngineResult};

/// Finds the band of `table` that covers `gross_salary`.
///
/// Bands are considered in ascending `upTo` order, with the open-ended band
/// last. The first bounded band whose `upTo` is at least the gross salary
/// wins; bounds are inclusive. A salary above every bound falls into the
/// band carrying `over`.
///
/// # Returns
///
/// Returns the matched band, or `BandNotFound` when the table has neither a
/// covering bounded band nor an open-ended band.
pub fn select_band(table: &RateTable, gross_salary: Decimal) -> EngineResult<&Band> {
    let mut bounded: Vec<(&Band, Decimal)> = table
        .bands
        .iter()
        .filter_map(|band| band.up_to.map(|up_to| (band, up_to)))
        .collect();
    bounded.sort_by(|a, b| a.1.cmp(&b.1));

    if let Some((band, _)) = bounded.into_iter().find(|(_, up_to)| *up_to >= gross_salary) {
        return Ok(band);
    }

    table
        .bands
        .iter()
        .find(|band| band.over.is_some())
        .ok_or(EngineError::BandNotFound {
            table: table.id,
            gross_salary,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Deduction, DependentsAssumption, TableId};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bounded(up_to: &str, rate: &str) -> Band {
        Band {
            up_to: Some(dec(up_to)),
            over: None,
            rate: dec(rate),
            deduction: Deduction::Amount(Decimal::ZERO),
            additional_per_dependent: None,
        }
    }

    fn open(over: &str, rate: &str) -> Band {
        Band {
            up_to: None,
            over: Some(dec(over)),
            rate: dec(rate),
            deduction: Deduction::Amount(Decimal::ZERO),
            additional_per_dependent: None,
        }
    }

    fn table(bands: Vec<Band>) -> RateTable {
        RateTable {
            id: TableId::I,
            name: "Test table".to_string(),
            audience: "Tests".to_string(),
            has_disability: false,
            assumes_dependents: DependentsAssumption::None,
            bands,
        }
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        let table = table(vec![
            bounded("920", "0"),
            bounded("1042", "0.125"),
            open("1042", "0.157"),
        ]);

        assert_eq!(select_band(&table, dec("920")).unwrap().rate, dec("0"));
        assert_eq!(select_band(&table, dec("921")).unwrap().rate, dec("0.125"));
        assert_eq!(select_band(&table, dec("1042")).unwrap().rate, dec("0.125"));
    }

    #[test]
    fn test_salary_above_every_bound_uses_open_band() {
        let table = table(vec![
            bounded("920", "0"),
            bounded("1042", "0.125"),
            open("1042", "0.157"),
        ]);

        let band = select_band(&table, dec("1500")).unwrap();
        assert!(band.is_open());
        assert_eq!(band.rate, dec("0.157"));
    }

    #[test]
    fn test_bands_are_sorted_before_scanning() {
        let table = table(vec![
            open("1042", "0.157"),
            bounded("1042", "0.125"),
            bounded("920", "0"),
        ]);

        assert_eq!(select_band(&table, dec("900")).unwrap().rate, dec("0"));
        assert_eq!(select_band(&table, dec("1000")).unwrap().rate, dec("0.125"));
    }

    #[test]
    fn test_no_covering_band_returns_error() {
        let table = table(vec![bounded("920", "0")]);

        match select_band(&table, dec("1000")) {
            Err(EngineError::BandNotFound {
                table,
                gross_salary,
            }) => {
                assert_eq!(table, TableId::I);
                assert_eq!(gross_salary, dec("1000"));
            }
            other => panic!("Expected BandNotFound error, got {:?}", other),
        }
    }
}
