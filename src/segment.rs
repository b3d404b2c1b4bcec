use smartstring::alias::String as SmartString;
use std::fmt::{self, Display, Formatter};

/// One `/`-delimited section of a compiled [`PathPattern`](crate::PathPattern)
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Segment {
    /// matches a path segment verbatim
    Exact(SmartString),

    /// `:name`, matches exactly one non-empty path segment
    Param(SmartString),

    /// `*name`, matches one or more trailing path segments
    CatchAll(SmartString),
}

impl Segment {
    /// the bound name, if this segment captures anything
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Exact(_) => None,
            Segment::Param(name) | Segment::CatchAll(name) => Some(name),
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Segment::CatchAll(_))
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Exact(s) => f.write_str(s),
            Segment::Param(p) => f.write_fmt(format_args!(":{p}")),
            Segment::CatchAll(c) => f.write_fmt(format_args!("*{c}")),
        }
    }
}
