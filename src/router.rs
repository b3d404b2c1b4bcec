use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use crate::{
    path, BoxedHandler, DispatchError, Handler, PatternError, RequestContext, Response,
    ResponseWriter, RouteMethod, RouteTable,
};

/// Collects routes during setup. Call [`build`](Self::build) to freeze them
/// into a [`Router`].
#[derive(Debug, Default)]
pub struct RouterBuilder {
    table: RouteTable<BoxedHandler>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `template` and appends a route for `method`. A malformed
    /// template is reported here, never at dispatch.
    pub fn add(
        &mut self,
        method: RouteMethod,
        template: &str,
        handler: impl Handler,
    ) -> Result<(), PatternError> {
        self.table.add(method, template, Box::new(handler))
    }

    pub fn get(&mut self, template: &str, handler: impl Handler) -> Result<(), PatternError> {
        self.add(RouteMethod::Get, template, handler)
    }

    pub fn post(&mut self, template: &str, handler: impl Handler) -> Result<(), PatternError> {
        self.add(RouteMethod::Post, template, handler)
    }

    pub fn put(&mut self, template: &str, handler: impl Handler) -> Result<(), PatternError> {
        self.add(RouteMethod::Put, template, handler)
    }

    pub fn delete(&mut self, template: &str, handler: impl Handler) -> Result<(), PatternError> {
        self.add(RouteMethod::Delete, template, handler)
    }

    pub fn patch(&mut self, template: &str, handler: impl Handler) -> Result<(), PatternError> {
        self.add(RouteMethod::Patch, template, handler)
    }

    /// a route that accepts every request method
    pub fn all(&mut self, template: &str, handler: impl Handler) -> Result<(), PatternError> {
        self.add(RouteMethod::All, template, handler)
    }

    pub fn build(self) -> Router {
        Router {
            table: Arc::new(self.table),
        }
    }
}

/// A frozen route table that dispatches requests.
///
/// Cloning is cheap and clones share the same table, so a single router
/// can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Router {
    table: Arc<RouteTable<BoxedHandler>>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    pub fn routes(&self) -> &RouteTable<BoxedHandler> {
        &self.table
    }

    /// Runs the first route that fits `request` and returns the handler's
    /// response unchanged, or a 404 when nothing fits.
    ///
    /// Fails only for router-internal problems: an empty or relative
    /// request path, or a parameter that does not decode.
    pub async fn dispatch(&self, mut request: RequestContext) -> Result<Response, DispatchError> {
        Ok(match self.resolve(&mut request)? {
            Some(handler) => handler.call(request, ResponseWriter::new()).await,
            None => not_found(),
        })
    }

    /// [`dispatch`](Self::dispatch), with router errors turned into a 500
    /// `{"error": "Router error: ..."}` response.
    ///
    /// The handler runs outside of this boundary.
    pub async fn handle(&self, mut request: RequestContext) -> Response {
        match self.resolve(&mut request) {
            Ok(Some(handler)) => handler.call(request, ResponseWriter::new()).await,
            Ok(None) => not_found(),
            Err(error) => {
                #[cfg(feature = "log")]
                log::error!("{} {}: {error}", request.method(), request.path());
                error.into_response()
            }
        }
    }

    /// Finds the handler for `request` and binds its params onto it
    fn resolve(&self, request: &mut RequestContext) -> Result<Option<&BoxedHandler>, DispatchError> {
        let path = request.path();
        if !path::is_valid(path) {
            return Err(DispatchError::InvalidPath(path.into()));
        }

        let (handler, params) = match self.table.first_match(request.method(), path) {
            Some(route_match) => {
                #[cfg(feature = "log")]
                log::debug!(
                    "{} {path} -> {} {}",
                    request.method(),
                    route_match.method(),
                    route_match.pattern()
                );
                (route_match.handler(), route_match.params()?.into_owned())
            }

            None => {
                #[cfg(feature = "log")]
                if self.table.matches(path).is_empty() {
                    log::debug!("{} {path} -> not found", request.method());
                } else {
                    log::debug!("{} {path} -> not found, no route accepts this method", request.method());
                }
                return Ok(None);
            }
        };

        request.set_params(params);
        Ok(Some(handler))
    }
}

fn not_found() -> Response {
    ResponseWriter::new()
        .status(StatusCode::NOT_FOUND)
        .json(json!({ "error": "Not Found" }))
}
