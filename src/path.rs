use std::{borrow::Cow, iter};

/// A request path split into its non-empty segments.
///
/// Each segment keeps its byte offset into `str` so that a catch-all can
/// borrow the remainder of the path when it has no empty segments.
#[derive(Debug)]
pub(crate) struct Path<'a> {
    pub(crate) str: &'a str,
    pub(crate) segments: Vec<(usize, &'a str)>,
}

impl<'a> Path<'a> {
    /// Returns None for paths that cannot match any pattern: empty, or not
    /// starting with `/`.
    pub(crate) fn parse(str: &'a str) -> Option<Self> {
        if !is_valid(str) {
            return None;
        }

        let mut start = 0;
        let segments = slashes(str)
            .chain(iter::once(str.len()))
            .filter_map(|end| {
                let section = (start, &str[start..end]);
                start = end + 1;
                (!section.1.is_empty()).then_some(section)
            })
            .collect();

        Some(Self { str, segments })
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// The segments from `index` on, joined with `/`. Borrowed from the path
    /// unless an empty segment sits inside the range.
    pub(crate) fn remainder(&self, index: usize) -> Option<Cow<'a, str>> {
        let rest = self.segments.get(index..)?;
        let (start, _) = rest.first()?;
        let (last_start, last) = rest.last()?;
        let raw = &self.str[*start..last_start + last.len()];

        if raw.contains("//") {
            Some(Cow::Owned(
                rest.iter().map(|(_, s)| *s).collect::<Vec<_>>().join("/"),
            ))
        } else {
            Some(Cow::Borrowed(raw))
        }
    }
}

/// A request path is usable when it is non-empty and absolute
pub(crate) fn is_valid(path: &str) -> bool {
    path.starts_with('/')
}

#[cfg(feature = "memchr")]
fn slashes(s: &str) -> impl Iterator<Item = usize> + '_ {
    memchr::memchr_iter(b'/', s.as_bytes())
}

#[cfg(not(feature = "memchr"))]
fn slashes(s: &str) -> impl Iterator<Item = usize> + '_ {
    s.match_indices('/').map(|(index, _)| index)
}
