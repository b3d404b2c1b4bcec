//! # funcrouter
//!
//! A small first-match request router for serverless function handlers.
//!
//! Routes are registered during setup, in order, as a method, a path
//! template and a handler. Templates are made of `/`-separated sections:
//!
//! * `users` matches the segment `users` exactly
//! * `:id` matches any single segment and binds it as `id`
//! * `*rest` must come last and matches one or more trailing segments,
//!   bound as `rest` joined with `/`
//!
//! Captured values are percent-decoded once before they reach a handler.
//!
//! The first route whose template and method fit a request wins.
//! Registration order is the only precedence rule.
//!
//! ```
//! use funcrouter::{RequestContext, ResponseWriter, Router};
//! use http::{Method, StatusCode};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), funcrouter::PatternError> {
//! let mut builder = Router::builder();
//! builder.get("/ping", |_: RequestContext, res: ResponseWriter| async move {
//!     res.json(json!({ "message": "Pong" }))
//! })?;
//! builder.get("/users/:id", |req: RequestContext, res: ResponseWriter| async move {
//!     let id = req.param("id").unwrap_or_default().to_string();
//!     res.json(json!({ "id": id }))
//! })?;
//! let router = builder.build();
//!
//! let response = futures::executor::block_on(
//!     router.handle(RequestContext::new(Method::GET, "/users/a%2Fb")),
//! );
//! assert_eq!(response.json(), Some(&json!({ "id": "a/b" })));
//!
//! let response = futures::executor::block_on(
//!     router.handle(RequestContext::new(Method::GET, "/nope")),
//! );
//! assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! # Ok(()) }
//! ```
//!
//! Failures inside the router itself (an empty or relative request path, a
//! malformed percent escape, a parameter that does not decode to utf-8) are
//! reported by [`Router::dispatch`] as a [`DispatchError`], or turned into a
//! 500 by [`Router::handle`]. Handlers always produce their own [`Response`].

mod error;
mod handler;
mod method;
mod params;
mod path;
mod pattern;
mod request;
mod response;
mod route;
mod route_match;
mod router;
mod segment;
mod table;

pub use error::{DispatchError, PatternError};
pub use handler::{BoxedHandler, Handler};
pub use method::RouteMethod;
pub use params::{Param, Params};
pub use pattern::PathPattern;
pub use request::RequestContext;
pub use response::{Body, Response, ResponseWriter};
pub use route::Route;
pub use route_match::RouteMatch;
pub use router::{Router, RouterBuilder};
pub use segment::Segment;
pub use table::RouteTable;
