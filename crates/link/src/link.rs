//! Parsed representation of a `Link` header value.
//!
//! A header value is turned into an ordered list of [`Link`]s, one per
//! `<uri>; params...` entry. Each parameter value is wrapped in a [`Param`]
//! which remembers the character encoding and language the parameter declared
//! (see [RFC 2231](https://www.rfc-editor.org/rfc/rfc2231) and
//! [RFC 8187](https://www.rfc-editor.org/rfc/rfc8187)).

use std::collections::HashMap;

/// Encoding label assigned to parameters that do not declare one.
pub const DEFAULT_ENCODING: &str = "us-ascii";

/// Language tag assigned to parameters that do not declare one.
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// A single link-entry of a `Link` header.
///
/// The URI is kept exactly as it appeared between `<` and `>`: it is neither
/// trimmed, decoded nor resolved against any base. Parameter names are unique,
/// when a name is repeated the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    uri: String,
    params: HashMap<String, Param>,
}

impl Link {
    /// Creates a link from its target URI and decoded parameters.
    pub fn new<S: Into<String>>(uri: S, params: HashMap<String, Param>) -> Self {
        Self { uri: uri.into(), params }
    }

    /// Returns the target URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns every parameter of this link keyed by name.
    pub fn params(&self) -> &HashMap<String, Param> {
        &self.params
    }

    /// Returns the parameter with the given name, if present.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.get(name)
    }

    /// Returns the decoded value of the `rel` parameter, if present.
    pub fn rel(&self) -> Option<&str> {
        self.param("rel").map(Param::value)
    }

    /// Consumes the link and returns the URI and the parameters.
    pub fn into_parts(self) -> (String, HashMap<String, Param>) {
        (self.uri, self.params)
    }
}

/// A decoded link parameter value.
///
/// The value is always a displayable UTF-8 string. When a parameter declares an
/// encoding that can't be decoded as UTF-8, the value holds the raw
/// percent-encoded text and [`encoding`](Param::encoding) tells the caller how to
/// interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    value: String,
    encoding: String,
    language: String,
}

impl Param {
    /// Creates a parameter with the default encoding and language.
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self::with_charset(value, DEFAULT_ENCODING, DEFAULT_LANGUAGE)
    }

    /// Creates a parameter carrying an explicit encoding label and language tag.
    pub fn with_charset<V, E, L>(value: V, encoding: E, language: L) -> Self
    where
        V: Into<String>,
        E: Into<String>,
        L: Into<String>,
    {
        Self { value: value.into(), encoding: encoding.into(), language: language.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Consumes the parameter and returns the decoded value.
    pub fn into_value(self) -> String {
        self.value
    }
}

/// An empty value with the default encoding and language, never empty labels.
impl Default for Param {
    fn default() -> Self {
        Self::new(String::new())
    }
}
