use crate::DispatchError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use smartcow::SmartCow;
use smartstring::alias::String as SmartString;
use std::borrow::Cow;
use std::ops::Deref;

/// A single named binding from a matched path
#[derive(Debug, Clone)]
pub struct Param<'value> {
    name: SmartString,
    value: SmartCow<'value>,
}

impl PartialEq for Param<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.value() == other.value()
    }
}

impl<'value> Param<'value> {
    pub fn new(name: impl Into<SmartString>, value: impl Into<SmartCow<'value>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_owned(self) -> Param<'static> {
        Param {
            name: self.name,
            value: match self.value {
                SmartCow::Borrowed(s) => SmartCow::Owned(SmartString::from(s)),
                SmartCow::Owned(s) => SmartCow::Owned(s),
            },
        }
    }
}

/// Decoded parameters bound by a successful match, in the order they appear
/// in the template.
///
/// Values borrow from the request path unless percent-decoding had to
/// allocate. Serializes as a JSON object.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params<'values> {
    params: Vec<Param<'values>>,
}

impl<'values> Params<'values> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes each raw capture once and pairs it with its name.
    pub(crate) fn decode<'name>(
        names: impl Iterator<Item = &'name str>,
        captures: impl IntoIterator<Item = impl Into<Cow<'values, str>>>,
    ) -> Result<Self, DispatchError> {
        names
            .zip(captures)
            .map(|(name, raw)| Ok(Param::new(name, decode(name, raw.into())?)))
            .collect::<Result<_, _>>()
            .map(|params| Self { params })
    }

    /// returns the value bound to `name`, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find_map(|param| (param.name() == name).then(|| param.value()))
    }

    pub fn into_owned(self) -> Params<'static> {
        Params {
            params: self.params.into_iter().map(Param::into_owned).collect(),
        }
    }
}

fn decode<'a>(name: &str, raw: Cow<'a, str>) -> Result<SmartCow<'a>, DispatchError> {
    if has_malformed_escape(&raw) {
        return Err(DispatchError::MalformedEscape { name: name.into() });
    }

    let decode_error = |source| DispatchError::Decode {
        name: name.into(),
        source,
    };

    match raw {
        Cow::Borrowed(raw) => match urlencoding::decode(raw).map_err(decode_error)? {
            Cow::Borrowed(s) => Ok(SmartCow::Borrowed(s)),
            Cow::Owned(s) => Ok(SmartCow::Owned(SmartString::from(s))),
        },
        Cow::Owned(raw) => {
            let decoded = urlencoding::decode(&raw).map_err(decode_error)?;
            Ok(SmartCow::Owned(SmartString::from(decoded.as_ref())))
        }
    }
}

/// a `%` must be followed by two hex digits
fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().any(|(index, byte)| {
        *byte == b'%'
            && !matches!(
                bytes.get(index + 1..index + 3),
                Some([high, low]) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit()
            )
    })
}

impl<'values> Deref for Params<'values> {
    type Target = [Param<'values>];

    fn deref(&self) -> &Self::Target {
        &self.params
    }
}

impl<'values> FromIterator<(&'values str, &'values str)> for Params<'values> {
    fn from_iter<T: IntoIterator<Item = (&'values str, &'values str)>>(iter: T) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(name, value)| Param::new(name, SmartCow::Borrowed(value)))
                .collect(),
        }
    }
}

impl Serialize for Params<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.params.len()))?;
        for param in &self.params {
            map.serialize_entry(param.name(), param.value())?;
        }
        map.end()
    }
}
