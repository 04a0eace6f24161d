use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_BREAKS_REGEX: Regex = Regex::new(r"[\r\n]+").expect("valid regex");
}

/// An OTL query string with line breaks removed.
///
/// The job engine expects a single-line pipeline, so carriage returns and
/// newlines are dropped rather than replaced. Nothing else is interpreted.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct OtlQuery(String);

impl OtlQuery {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(LINE_BREAKS_REGEX.replace_all(value.as_ref(), "").into_owned())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new query with `fragment` placed in front of this one.
    pub fn prefixed_with(&self, fragment: &str) -> Self {
        Self(format!("{fragment}{}", self.0))
    }
}

impl fmt::Display for OtlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
