#[derive(thiserror::Error, Debug, Clone)]
pub enum GeocodeError {
    #[error("location not found: '{0}'")]
    LocationNotFound(String),
}
