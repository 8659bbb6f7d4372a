use super::{EmissionError, EmissionFactor, EmissionFactorStore, EmissionFactorTableError};
use crate::model::{FuelType, VehicleType};
use itertools::Itertools;
use serde::Deserialize;
use std::{collections::HashMap, io::Read, path::Path};

/// emission factors shipped with this crate, in grams CO2 per km.
const BUNDLED_EMISSION_FACTORS: &str = include_str!("../resources/emission_factors.csv");

/// unit spellings accepted in the optional `unit` column. grams per km is the
/// only canonical unit; tables in other units must be migrated before loading.
const ACCEPTED_UNITS: [&str; 3] = ["g/km", "g_per_km", "grams_per_km"];

/// in-memory emission factor store. at most one factor may be active per
/// (vehicle type, fuel type) key.
#[derive(Clone, Debug)]
pub struct EmissionFactorTable {
    factors: Vec<EmissionFactor>,
    active: HashMap<(VehicleType, FuelType), usize>,
}

#[derive(Deserialize)]
struct EmissionFactorRow {
    vehicle_type: VehicleType,
    fuel_type: FuelType,
    factor_g_per_km: f64,
    is_active: bool,
    #[serde(default)]
    unit: Option<String>,
}

impl EmissionFactorTable {
    pub fn new(
        factors: Vec<EmissionFactor>,
    ) -> Result<EmissionFactorTable, EmissionFactorTableError> {
        let mut active = HashMap::new();
        for (idx, factor) in factors.iter().enumerate() {
            let g = factor.factor_g_per_km;
            if !g.is_finite() || g <= 0.0 {
                return Err(EmissionFactorTableError::NonPositiveFactor(
                    factor.vehicle_type,
                    factor.fuel_type,
                    g,
                ));
            }
            if !factor.is_active {
                continue;
            }
            if active.insert(factor.key(), idx).is_some() {
                return Err(EmissionFactorTableError::DuplicateActiveFactor(
                    factor.vehicle_type,
                    factor.fuel_type,
                ));
            }
        }
        Ok(EmissionFactorTable { factors, active })
    }

    /// reads a table with columns `vehicle_type,fuel_type,factor_g_per_km,is_active`
    /// and an optional `unit` column.
    ///
    /// # Arguments
    ///
    /// * `reader` - CSV source
    /// * `source` - name of the source used in error messages
    pub fn from_csv_reader<R: Read>(
        reader: R,
        source: &str,
    ) -> Result<EmissionFactorTable, EmissionFactorTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let factors = csv_reader
            .deserialize::<EmissionFactorRow>()
            .map(|row| {
                let row =
                    row.map_err(|e| EmissionFactorTableError::CsvReadError(source.to_string(), e))?;
                row_to_factor(row)
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("read {} emission factor rows from {}", factors.len(), source);
        EmissionFactorTable::new(factors)
    }

    pub fn from_csv_file(path: &Path) -> Result<EmissionFactorTable, EmissionFactorTableError> {
        let source = path.to_string_lossy().to_string();
        let file = std::fs::File::open(path).map_err(|e| {
            EmissionFactorTableError::CsvReadError(source.clone(), csv::Error::from(e))
        })?;
        EmissionFactorTable::from_csv_reader(file, &source)
    }

    /// the emission factor table bundled with this crate.
    pub fn bundled() -> Result<EmissionFactorTable, EmissionFactorTableError> {
        EmissionFactorTable::from_csv_reader(BUNDLED_EMISSION_FACTORS.as_bytes(), "<bundled>")
    }

    /// all active factors, ordered by vehicle type and fuel type.
    pub fn active_factors(&self) -> Vec<&EmissionFactor> {
        self.active
            .iter()
            .sorted_by_key(|(key, _)| **key)
            .map(|(_, idx)| &self.factors[*idx])
            .collect_vec()
    }

    /// number of rows, active or not.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl EmissionFactorStore for EmissionFactorTable {
    fn lookup(
        &self,
        vehicle_type: VehicleType,
        fuel_type: FuelType,
    ) -> Result<Option<EmissionFactor>, EmissionError> {
        let found = self
            .active
            .get(&(vehicle_type, fuel_type))
            .map(|idx| self.factors[*idx].clone());
        Ok(found)
    }
}

fn row_to_factor(row: EmissionFactorRow) -> Result<EmissionFactor, EmissionFactorTableError> {
    if let Some(unit) = row.unit.as_ref() {
        let normalized = unit.trim().to_lowercase();
        if !ACCEPTED_UNITS.contains(&normalized.as_str()) {
            return Err(EmissionFactorTableError::UnsupportedUnit(
                row.vehicle_type,
                row.fuel_type,
                unit.clone(),
            ));
        }
    }
    Ok(EmissionFactor::new(
        row.vehicle_type,
        row.fuel_type,
        row.factor_g_per_km,
        row.is_active,
    ))
}
