use crate::{Response, ResponseWriter};
use http::StatusCode;
use serde_json::json;
use std::string::FromUtf8Error;
use thiserror::Error;

/// A template that cannot be compiled. Returned at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("params must be named")]
    UnnamedParam,

    #[error("catch-all segments must be named, for example `*rest`")]
    UnnamedCatchAll,

    #[error("invalid parameter name `{0}`, names may only contain ascii letters, digits and `_`")]
    InvalidName(String),

    #[error("parameter `{0}` appears more than once")]
    DuplicateName(String),

    #[error("catch-all `*{0}` must be the last segment")]
    CatchAllNotLast(String),

    #[error("unsupported token in `{0}`")]
    UnsupportedToken(String),
}

/// A failure inside the router while validating or binding a request.
///
/// Never produced by handler code.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid request path {0:?}")]
    InvalidPath(String),

    #[error("could not decode param `{name}`: {source}")]
    Decode {
        name: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("malformed percent escape in param `{name}`")]
    MalformedEscape { name: String },
}

impl DispatchError {
    /// The 500 response reported in place of a failed dispatch
    pub fn into_response(self) -> Response {
        ResponseWriter::new()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .json(json!({ "error": format!("Router error: {self}") }))
    }
}
