use crate::Params;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::de::DeserializeOwned;

/// The per-request value handed to a handler.
///
/// Transports build one from whatever they received; the router fills in
/// [`params`](Self::params) after a successful match.
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Vec<u8>,
    params: Params<'static>,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: vec![],
            params: Params::new(),
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// the first value of header `name`, if it is valid visible ascii
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Deserializes the body as json
    pub fn body_json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    /// Parameters bound by the matched route. Empty before dispatch.
    pub fn params(&self) -> &Params<'static> {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub(crate) fn set_params(&mut self, params: Params<'static>) {
        self.params = params;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::CONTENT_TYPE;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Star {
        repo: String,
    }

    #[test]
    fn accessors() {
        let request = RequestContext::new(Method::POST, "/stars")
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(r#"{"repo":"funcrouter"}"#);

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(request.path(), "/stars");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("x-missing"), None);
        assert_eq!(
            request.body_json::<Star>().unwrap(),
            Star {
                repo: "funcrouter".into()
            }
        );
        assert!(request.params().is_empty());
        assert_eq!(request.param("id"), None);
    }
}
