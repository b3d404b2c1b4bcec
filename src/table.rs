use std::fmt::{self, Debug, Formatter};

use http::Method;

use crate::{path::Path, PathPattern, Route, RouteMatch, RouteMethod};

/// An ordered, append-only list of [`Route`]s.
///
/// Registration order is the only precedence: the first route whose pattern
/// and method both fit a request wins. There is no removal.
pub struct RouteTable<T> {
    routes: Vec<Route<T>>,
}

impl<T> Debug for RouteTable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.routes).finish()
    }
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self { routes: vec![] }
    }
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `pattern` and appends a route. Compilation errors are
    /// returned here and the table is left unchanged.
    pub fn add<R>(
        &mut self,
        method: RouteMethod,
        pattern: R,
        handler: T,
    ) -> Result<(), <R as TryInto<PathPattern>>::Error>
    where
        R: TryInto<PathPattern>,
    {
        let route = Route::new(method, pattern, handler)?;
        #[cfg(feature = "log")]
        log::trace!("registered {route:?} at position {}", self.routes.len());
        self.routes.push(route);
        Ok(())
    }

    /// The first route, in registration order, whose pattern matches `path`
    /// and whose method allows `method`
    pub fn first_match<'a, 'b>(
        &'a self,
        method: &Method,
        path: &'b str,
    ) -> Option<RouteMatch<'a, 'b, T>> {
        let parsed = Path::parse(path)?;
        self.routes.iter().find_map(|route| {
            if !route.method().allows(method) {
                return None;
            }
            let captures = route.pattern().captures_path(&parsed)?;
            #[cfg(feature = "log")]
            log::trace!("{method} {path} matched {route:?}");
            Some(RouteMatch::new(path, route, captures))
        })
    }

    /// Every route whose pattern matches `path`, regardless of method, in
    /// registration order
    pub fn matches<'a, 'b>(&'a self, path: &'b str) -> Vec<RouteMatch<'a, 'b, T>> {
        let Some(parsed) = Path::parse(path) else {
            return vec![];
        };

        self.routes
            .iter()
            .filter_map(|route| {
                route
                    .pattern()
                    .captures_path(&parsed)
                    .map(|captures| RouteMatch::new(path, route, captures))
            })
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route<T>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a RouteTable<T> {
    type Item = &'a Route<T>;
    type IntoIter = std::slice::Iter<'a, Route<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
