use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("unable to read {path}: {source}")]
    SnapshotRead {
        path: String,
        source: std::io::Error,
    },
    #[error("unable to parse {path}: {source}")]
    SnapshotParse {
        path: String,
        source: serde_json::Error,
    },
    #[error("unable to write {path}: {source}")]
    SnapshotWrite {
        path: String,
        source: std::io::Error,
    },
    #[error("unable to create {path}: {source}")]
    LedgerCreate {
        path: String,
        source: std::io::Error,
    },
    #[error("unable to write ledger row: {0}")]
    LedgerWrite(#[from] csv::Error),
    #[error("unable to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error("unable to query robinhood for {identifier}: {source}")]
    Network {
        identifier: String,
        source: reqwest::Error,
    },
    #[error("unable to parse instrument response for {identifier}: {source}")]
    MalformedResponse {
        identifier: String,
        source: serde_json::Error,
    },
}
