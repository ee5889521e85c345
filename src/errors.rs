use hyper::header::InvalidHeaderValue;
use hyper::http::uri::InvalidUri;
use hyper::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("GitHub token not provided")]
    MissingToken,
    #[error("GitHub repository owner not provided")]
    MissingOwner,
    #[error("GitHub repository not provided")]
    MissingRepository,
    #[error("GitHub token is not a valid header value")]
    InvalidToken(#[source] InvalidHeaderValue),
    #[error("invalid request uri")]
    Uri(#[from] InvalidUri),
    #[error("could not build request")]
    Http(#[from] hyper::http::Error),
    #[error("request failed")]
    Transport(#[from] hyper::Error),
    #[error("request failed with {status}: '{body}'")]
    Request { status: StatusCode, body: String },
    #[error("could not parse response from server")]
    Decode(#[from] serde_json::Error),
    #[error("milestone #{number} has an invalid due date '{value}'")]
    DueDate {
        number: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("could not write report")]
    Io(#[from] std::io::Error),
}
