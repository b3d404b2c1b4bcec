use crate::{path::Path, DispatchError, Params, PatternError, Segment};
use smartstring::alias::String as SmartString;
use std::{
    borrow::Cow,
    collections::HashSet,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Characters that carry meaning in richer template syntaxes and are
/// rejected inside literal sections.
const RESERVED: &[char] = &[':', '*', '(', ')', '{', '}', '?', '+', '\\'];

/// A compiled path template.
///
/// This contains the source template and an ordered sequence of
/// [`Segment`]s. Matching is a pure function of the pattern and the path:
/// compiling the same template twice produces equal patterns.
#[derive(Debug, Clone, Eq)]
pub struct PathPattern {
    source: SmartString,
    segments: Vec<Segment>,
    catch_all: bool,
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Display for PathPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }

        for segment in &self.segments {
            f.write_fmt(format_args!("/{segment}"))?;
        }
        Ok(())
    }
}

impl PathPattern {
    /// The template this pattern was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Slice accessor for the component [`Segment`]s of this pattern
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// names bound by this pattern, left to right
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::name)
    }

    /// Matches `path` and decodes the captured values.
    ///
    /// `Ok(None)` means no match, including for malformed paths (empty or
    /// not starting with `/`). An error is only returned when a captured
    /// value has a malformed escape or does not decode to valid utf-8.
    pub fn matches<'path>(&self, path: &'path str) -> Result<Option<Params<'path>>, DispatchError> {
        match self.captures(path) {
            Some(captures) => Params::decode(self.param_names(), captures).map(Some),
            None => Ok(None),
        }
    }

    /// Returns the raw, undecoded captures for this pattern, one per named
    /// segment
    pub fn captures<'path>(&self, path: &'path str) -> Option<Vec<Cow<'path, str>>> {
        self.captures_path(&Path::parse(path)?)
    }

    pub(crate) fn captures_path<'path>(
        &self,
        path: &Path<'path>,
    ) -> Option<Vec<Cow<'path, str>>> {
        if !self.passes_length_check(path) {
            return None;
        }

        let mut captures = vec![];
        let mut sections = path.segments.iter().enumerate();

        for segment in &self.segments {
            let (index, (_, section)) = sections.next()?;
            match segment {
                Segment::Exact(exact) => {
                    if *section != exact.as_str() {
                        return None;
                    }
                }

                Segment::Param(_) => captures.push(Cow::Borrowed(*section)),

                Segment::CatchAll(_) => {
                    captures.push(path.remainder(index)?);
                    return Some(captures);
                }
            }
        }

        Some(captures)
    }

    #[inline]
    fn passes_length_check(&self, path: &Path<'_>) -> bool {
        if self.catch_all {
            path.len() >= self.segments.len()
        } else {
            path.len() == self.segments.len()
        }
    }
}

fn segment(section: &str) -> Result<Segment, PatternError> {
    match (section.strip_prefix(':'), section.strip_prefix('*')) {
        (Some(""), _) => Err(PatternError::UnnamedParam),
        (Some(param), _) => name(param).map(Segment::Param),
        (_, Some("")) => Err(PatternError::UnnamedCatchAll),
        (_, Some(catch_all)) => name(catch_all).map(Segment::CatchAll),
        _ if section.contains(RESERVED) => Err(PatternError::UnsupportedToken(section.into())),
        _ => Ok(Segment::Exact(section.into())),
    }
}

fn name(name: &str) -> Result<SmartString, PatternError> {
    if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(name.into())
    } else {
        Err(PatternError::InvalidName(name.into()))
    }
}

impl FromStr for PathPattern {
    type Err = PatternError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let segments = source
            .split('/')
            .filter(|section| !section.is_empty())
            .map(segment)
            .collect::<Result<Vec<_>, _>>()?;

        let mut names = HashSet::new();
        for (index, segment) in segments.iter().enumerate() {
            if let Segment::CatchAll(name) = segment {
                if index + 1 != segments.len() {
                    return Err(PatternError::CatchAllNotLast(name.to_string()));
                }
            }

            if let Some(name) = segment.name() {
                if !names.insert(name) {
                    return Err(PatternError::DuplicateName(name.into()));
                }
            }
        }

        Ok(Self {
            source: source.into(),
            catch_all: segments.last().map_or(false, Segment::is_catch_all),
            segments,
        })
    }
}

impl TryFrom<&str> for PathPattern {
    type Error = PatternError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for PathPattern {
    type Error = PatternError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    fn bound(pattern: &str, path: &str) -> Option<Vec<(String, String)>> {
        let pattern: PathPattern = pattern.parse().unwrap();
        pattern.matches(path).unwrap().map(|params| {
            params
                .iter()
                .map(|p| (p.name().to_string(), p.value().to_string()))
                .collect()
        })
    }

    fn pairs(pairs: &[(&str, &str)]) -> Option<Vec<(String, String)>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn parsing() -> Result {
        let pattern: PathPattern = "/users/:id/*rest".parse()?;
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Exact("users".into()),
                Segment::Param("id".into()),
                Segment::CatchAll("rest".into()),
            ]
        );
        assert_eq!(pattern.source(), "/users/:id/*rest");
        assert_eq!(pattern.to_string(), "/users/:id/*rest");
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), ["id", "rest"]);

        assert_eq!("users//:id/".parse::<PathPattern>()?.to_string(), "/users/:id");
        assert_eq!("/".parse::<PathPattern>()?.to_string(), "/");
        Ok(())
    }

    #[test]
    fn errors() {
        let err = |s: &str| s.parse::<PathPattern>().unwrap_err();
        assert_eq!(err("/:"), PatternError::UnnamedParam);
        assert_eq!(err("/files/*"), PatternError::UnnamedCatchAll);
        assert_eq!(err("/:a/:a"), PatternError::DuplicateName("a".into()));
        assert_eq!(err("/:a/*a"), PatternError::DuplicateName("a".into()));
        assert_eq!(err("/*rest/tail"), PatternError::CatchAllNotLast("rest".into()));
        assert_eq!(err("/:user-id"), PatternError::InvalidName("user-id".into()));
        assert_eq!(err("/file.:ext"), PatternError::UnsupportedToken("file.:ext".into()));
        assert_eq!(err("/a{/b}"), PatternError::UnsupportedToken("a{".into()));
        assert_eq!(err("/(.*)"), PatternError::UnsupportedToken("(.*)".into()));
    }

    #[test]
    fn literals() {
        assert_eq!(bound("/ping", "/ping"), pairs(&[]));
        assert_eq!(bound("/ping", "/ping/"), pairs(&[]));
        assert_eq!(bound("/ping", "/Ping"), None);
        assert_eq!(bound("/ping", "/ping/pong"), None);
        assert_eq!(bound("/", "/"), pairs(&[]));
        assert_eq!(bound("/", "/a"), None);
    }

    #[test]
    fn params() {
        assert_eq!(bound("/users/:id", "/users/42"), pairs(&[("id", "42")]));
        assert_eq!(bound("/users/:id", "/users"), None);
        assert_eq!(bound("/users/:id", "/users/42/posts"), None);
        assert_eq!(
            bound("/:a/specific/:b", "/x/specific/y"),
            pairs(&[("a", "x"), ("b", "y")])
        );
        assert_eq!(bound("/:a/specific/:b", "/x/general/y"), None);
    }

    #[test]
    fn catch_all() {
        assert_eq!(bound("/*splat", "/a/b/c"), pairs(&[("splat", "a/b/c")]));
        assert_eq!(bound("/*splat", "/a/b/c/"), pairs(&[("splat", "a/b/c")]));
        assert_eq!(bound("/*splat", "/"), None);
        assert_eq!(bound("/users/*id", "/users/42"), pairs(&[("id", "42")]));
        assert_eq!(bound("/users/*id", "/users"), None);
        assert_eq!(
            bound("/repos/:owner/*path", "/repos/me/src/lib.rs"),
            pairs(&[("owner", "me"), ("path", "src/lib.rs")])
        );
        assert_eq!(bound("/files/*rest", "/files/a//b"), pairs(&[("rest", "a/b")]));
        assert_eq!(bound("/files/*rest", "//files//a//b//"), pairs(&[("rest", "a/b")]));
    }

    #[test]
    fn decoding() {
        assert_eq!(bound("/users/:id", "/users/a%2Fb"), pairs(&[("id", "a/b")]));
        assert_eq!(bound("/users/:id", "/users/%2541"), pairs(&[("id", "%41")]));
        assert_eq!(bound("/*rest", "/a%20b/c"), pairs(&[("rest", "a b/c")]));

        let pattern: PathPattern = "/users/:id".parse().unwrap();
        assert!(pattern.matches("/users/%C3%28").is_err());
        assert!(matches!(
            pattern.matches("/users/%zz"),
            Err(DispatchError::MalformedEscape { .. })
        ));
        assert!(matches!(
            pattern.matches("/users/100%"),
            Err(DispatchError::MalformedEscape { .. })
        ));
    }

    #[test]
    fn literal_segments_are_compared_undecoded() {
        assert_eq!(bound("/a%20b", "/a%20b"), pairs(&[]));
        assert_eq!(bound("/a%20b", "/a b"), None);
    }

    #[test]
    fn malformed_paths_do_not_match() -> Result {
        let pattern: PathPattern = "/*splat".parse()?;
        assert!(pattern.matches("")?.is_none());
        assert!(pattern.matches("a/b")?.is_none());
        assert!(pattern.captures("relative").is_none());
        Ok(())
    }

    #[test]
    fn compiling_is_idempotent() -> Result {
        let first: PathPattern = "/users/:id/*rest".parse()?;
        let second: PathPattern = "/users/:id/*rest".parse()?;
        assert_eq!(first, second);
        for path in ["/users/1/a/b", "/users/x%20y/z", "/users/1", "/nope"] {
            assert_eq!(first.matches(path)?, second.matches(path)?);
        }
        Ok(())
    }
}
