use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown subscale '{subscale_id}' for instrument '{instrument_id}'")]
    UnknownSubscale {
        instrument_id: String,
        subscale_id: String,
    },

    #[error("subscale '{subscale_id}' scored more than once for instrument '{instrument_id}'")]
    DuplicateSubscale {
        instrument_id: String,
        subscale_id: String,
    },

    #[error("risk factor at position {index} is not a number: {value}")]
    NonNumericFactor { index: usize, value: String },
}
