use core::{borrow::Borrow, fmt, ops::Deref};
use std::sync::Arc;

/// Immutable, shared JSON string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsString(Arc<str>);

impl JsString {
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        JsString(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for JsString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JsString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for JsString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JsString {
    fn from(value: &str) -> Self {
        JsString(value.into())
    }
}

impl From<String> for JsString {
    fn from(value: String) -> Self {
        JsString(value.into())
    }
}

impl From<Arc<str>> for JsString {
    fn from(value: Arc<str>) -> Self {
        JsString(value)
    }
}

impl PartialEq<str> for JsString {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for JsString {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
