use thiserror::Error;

#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("failed to read reference data {path}: {source}")]
    ReferenceDataLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse reference data {file}: {source}")]
    ReferenceDataParse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("alias '{alias}' maps to both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("interaction references unknown medication: {0}")]
    UnknownMedication(String),
}
