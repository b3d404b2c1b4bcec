use crate::{PathPattern, RouteMethod, Segment};
use std::fmt::{self, Debug, Formatter};

/// A compiled [`PathPattern`], the method it accepts, and its handler
pub struct Route<T> {
    method: RouteMethod,
    pattern: PathPattern,
    handler: T,
}

impl<T> Debug for Route<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("Route({} {})", self.method, &self.pattern))
    }
}

impl<T> Route<T> {
    pub(crate) fn new<R>(
        method: RouteMethod,
        pattern: R,
        handler: T,
    ) -> Result<Self, <R as TryInto<PathPattern>>::Error>
    where
        R: TryInto<PathPattern>,
    {
        Ok(Self {
            method,
            pattern: pattern.try_into()?,
            handler,
        })
    }

    pub fn method(&self) -> RouteMethod {
        self.method
    }

    /// the [`PathPattern`] for this [`Route`]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// borrow whatever handler T is contained in this route
    pub fn handler(&self) -> &T {
        &self.handler
    }

    /// a slice of [`PathPattern`] [`Segment`]s that represents this route
    pub fn segments(&self) -> &[Segment] {
        self.pattern.segments()
    }
}
