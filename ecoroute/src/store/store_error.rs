#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failure reading {0}: {1}")]
    ReadFailure(String, String),
    #[error("failure decoding {0}: {1}")]
    DecodeFailure(String, String),
}
