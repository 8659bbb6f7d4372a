mod emission_error;
mod emission_factor;
mod emission_factor_store;
mod emission_factor_table;
pub mod emission_ops;
mod mode_coefficients;

pub use emission_error::{EmissionError, EmissionFactorTableError};
pub use emission_factor::EmissionFactor;
pub use emission_factor_store::EmissionFactorStore;
pub use emission_factor_table::EmissionFactorTable;
pub use mode_coefficients::{EmissionMode, ModeCoefficients, DEFAULT_MODE_COEFFICIENTS};
