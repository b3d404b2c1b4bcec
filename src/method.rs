use http::Method;
use std::fmt::{self, Display, Formatter};

/// The request method a route accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    /// accepts every request method
    All,
}

impl RouteMethod {
    /// whether a request made with `method` may be handled by this route
    pub fn allows(self, method: &Method) -> bool {
        match self {
            RouteMethod::All => true,
            RouteMethod::Get => *method == Method::GET,
            RouteMethod::Post => *method == Method::POST,
            RouteMethod::Put => *method == Method::PUT,
            RouteMethod::Delete => *method == Method::DELETE,
            RouteMethod::Patch => *method == Method::PATCH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
            RouteMethod::Put => "PUT",
            RouteMethod::Delete => "DELETE",
            RouteMethod::Patch => "PATCH",
            RouteMethod::All => "ALL",
        }
    }
}

impl Display for RouteMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows() {
        assert!(RouteMethod::Get.allows(&Method::GET));
        assert!(!RouteMethod::Get.allows(&Method::POST));
        assert!(!RouteMethod::Get.allows(&Method::HEAD));
        assert!(RouteMethod::Patch.allows(&Method::PATCH));
        for method in [Method::GET, Method::OPTIONS, Method::DELETE] {
            assert!(RouteMethod::All.allows(&method));
        }
    }
}
