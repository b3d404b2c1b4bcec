use crate::{RequestContext, Response, ResponseWriter};
use futures_util::future::{BoxFuture, FutureExt};
use std::future::Future;

/// Something that turns a matched request into a [`Response`].
///
/// Implemented for any `Fn(RequestContext, ResponseWriter) -> impl Future`
/// that is `Send + Sync + 'static`:
///
/// ```
/// use funcrouter::{RequestContext, Response, ResponseWriter, Handler};
/// use serde_json::json;
///
/// async fn ping(_: RequestContext, res: ResponseWriter) -> Response {
///     res.json(json!({ "message": "Pong" }))
/// }
///
/// fn assert_handler(_: impl Handler) {}
/// assert_handler(ping);
/// ```
///
/// Handlers own their failures: anything that goes wrong inside one must
/// be expressed as a response, the router never sees it.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, request: RequestContext, response: ResponseWriter) -> BoxFuture<'static, Response>;
}

impl<F, Fut> Handler for F
where
    F: Fn(RequestContext, ResponseWriter) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn call(&self, request: RequestContext, response: ResponseWriter) -> BoxFuture<'static, Response> {
        self(request, response).boxed()
    }
}

/// The handler type stored by a [`Router`](crate::Router)
pub type BoxedHandler = Box<dyn Handler>;
