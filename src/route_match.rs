use std::{borrow::Cow, ops::Deref};

use crate::{DispatchError, Params, PathPattern, Route, RouteMethod};

/// This struct represents the output of a successful application of a
/// [`Route`] to a str path, holding the raw captures until they are bound.
/// It dereferences to the contained handler type T
#[derive(Debug)]
pub struct RouteMatch<'router, 'path, T> {
    path: &'path str,
    route: &'router Route<T>,
    captures: Vec<Cow<'path, str>>,
}

impl<'router, 'path, T> RouteMatch<'router, 'path, T> {
    pub(crate) fn new(
        path: &'path str,
        route: &'router Route<T>,
        captures: Vec<Cow<'path, str>>,
    ) -> Self {
        Self {
            path,
            route,
            captures,
        }
    }

    /// Returns a reference to the handler associated with this route
    pub fn handler(&self) -> &'router T {
        self.route.handler()
    }

    pub fn pattern(&self) -> &'router PathPattern {
        self.route.pattern()
    }

    pub fn method(&self) -> RouteMethod {
        self.route.method()
    }

    /// the path this match was made against
    pub fn path(&self) -> &'path str {
        self.path
    }

    /// The undecoded captures, one per named segment
    pub fn captures(&self) -> &[Cow<'path, str>] {
        &self.captures
    }

    /// Percent-decodes the captures and binds them to their names.
    pub fn params(&self) -> Result<Params<'path>, DispatchError> {
        Params::decode(
            self.route.pattern().param_names(),
            self.captures.iter().cloned(),
        )
    }
}

impl<'router, 'path, T> Deref for RouteMatch<'router, 'path, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.route.handler()
    }
}
