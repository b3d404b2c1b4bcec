use http::{
    header::{CONTENT_TYPE, IntoHeaderName},
    HeaderMap, HeaderValue, StatusCode,
};
use serde::Serialize;
use serde_json::{json, Value};

/// The body of a [`Response`]
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(Value),
    Text(String),
}

/// A finished response, as produced by a handler or by the router itself
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Body,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// the json body, if this is a json response
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            Body::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body == Body::Empty
    }

    /// The body as it would be written to the wire
    pub fn into_bytes(self) -> Vec<u8> {
        match self.body {
            Body::Empty => vec![],
            Body::Json(value) => value.to_string().into_bytes(),
            Body::Text(text) => text.into_bytes(),
        }
    }
}

/// Builds the [`Response`] for one request.
///
/// ```
/// use funcrouter::ResponseWriter;
/// use http::StatusCode;
/// use serde_json::json;
///
/// let response = ResponseWriter::new()
///     .status(StatusCode::NOT_FOUND)
///     .json(json!({ "error": "Not Found" }));
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Default)]
pub struct ResponseWriter {
    status: Option<StatusCode>,
    headers: HeaderMap,
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn header(mut self, name: impl IntoHeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Serializes `body` as json. The status defaults to 200.
    ///
    /// A body that cannot be serialized produces a 500 carrying the
    /// serializer's message instead.
    pub fn json(self, body: impl Serialize) -> Response {
        match serde_json::to_value(body) {
            Ok(value) => self.finish(StatusCode::OK, Body::Json(value)),
            Err(error) => {
                #[cfg(feature = "log")]
                log::error!("could not serialize response body: {error}");
                Self::new().finish(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Body::Json(json!({ "error": error.to_string() })),
                )
            }
        }
    }

    /// A plain text body. The status defaults to 200.
    pub fn text(self, body: impl Into<String>) -> Response {
        self.finish(StatusCode::OK, Body::Text(body.into()))
    }

    /// No body at all. The status defaults to 204.
    pub fn empty(self) -> Response {
        self.finish(StatusCode::NO_CONTENT, Body::Empty)
    }

    fn finish(self, default_status: StatusCode, body: Body) -> Response {
        let mut headers = self.headers;
        let content_type = match &body {
            Body::Empty => None,
            Body::Json(_) => Some("application/json"),
            Body::Text(_) => Some("text/plain; charset=utf-8"),
        };
        if let Some(content_type) = content_type {
            headers
                .entry(CONTENT_TYPE)
                .or_insert(HeaderValue::from_static(content_type));
        }

        Response {
            status: self.status.unwrap_or(default_status),
            headers,
            body,
        }
    }
}
