//! Common OAuth 2.0 / OIDC types.
//!
//! Implements the `response_type` vocabulary of RFC 6749 §3.1.1 and the
//! multiple-response-type combinations of `OpenID` Connect Core §3.3.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A recognized `response_type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResponseType {
    /// Authorization code.
    #[serde(rename = "code")]
    Code,

    /// Access token returned directly from the authorization endpoint.
    #[serde(rename = "token")]
    Token,

    /// `OpenID` Connect ID token.
    #[serde(rename = "id_token")]
    IdToken,
}

impl ResponseType {
    /// Returns the wire literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Token => "token",
            Self::IdToken => "id_token",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(Self::Code),
            "token" => Ok(Self::Token),
            "id_token" => Ok(Self::IdToken),
            _ => Err(format!("unknown response type: {s}")),
        }
    }
}

/// The set of response types requested by a client.
///
/// Matching is case-sensitive and duplicates collapse. Values outside the
/// known vocabulary are kept in a separate bucket: they never influence
/// classification, but remain available to stricter validators upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseTypeSet {
    known: BTreeSet<ResponseType>,
    unrecognized: BTreeSet<String>,
}

impl ResponseTypeSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw token, sorting it into the known or unrecognized bucket.
    pub fn insert(&mut self, token: &str) {
        match token.parse::<ResponseType>() {
            Ok(known) => {
                self.known.insert(known);
            }
            Err(_) => {
                self.unrecognized.insert(token.to_string());
            }
        }
    }

    /// Returns the set with `response_type` added.
    #[must_use]
    pub fn with(mut self, response_type: ResponseType) -> Self {
        self.known.insert(response_type);
        self
    }

    /// Checks whether a known response type was requested.
    #[must_use]
    pub fn contains(&self, response_type: ResponseType) -> bool {
        self.known.contains(&response_type)
    }

    /// True when no token at all was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.unrecognized.is_empty()
    }

    /// True for the plain `code` request of the RFC 6749 code grant.
    #[must_use]
    pub fn is_code_only(&self) -> bool {
        self.known.len() == 1 && self.contains(ResponseType::Code)
    }

    /// Iterates over the known response types in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = ResponseType> + '_ {
        self.known.iter().copied()
    }

    /// Iterates over tokens outside the known vocabulary.
    pub fn unrecognized(&self) -> impl Iterator<Item = &str> {
        self.unrecognized.iter().map(String::as_str)
    }
}

impl fmt::Display for ResponseTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let known = self.known.iter().map(|t| t.as_str());
        for token in known.chain(self.unrecognized()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for ResponseTypeSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.split_whitespace().collect())
    }
}

impl<S: AsRef<str>> FromIterator<S> for ResponseTypeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for token in iter {
            set.insert(token.as_ref());
        }
        set
    }
}

impl Serialize for ResponseTypeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResponseTypeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.split_whitespace().collect())
    }
}

/// The grant flow an authorization request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrantClassification {
    /// Authorization code grant (RFC 6749 §4.1).
    #[serde(rename = "authorization_code")]
    AuthorizationCode,

    /// Implicit grant (RFC 6749 §4.2).
    #[serde(rename = "implicit")]
    Implicit,
}

impl GrantClassification {
    /// Returns the `grant_type` literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::Implicit => "implicit",
        }
    }
}

impl fmt::Display for GrantClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where authorization response parameters are placed in the redirect URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    /// Query string parameters (plain code flow).
    Query,

    /// Fragment parameters (implicit and hybrid flows).
    Fragment,
}

impl ResponseMode {
    /// The character introducing the parameter block.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Query => '?',
            Self::Fragment => '#',
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Query => "query",
            Self::Fragment => "fragment",
        };
        f.write_str(s)
    }
}

/// Token type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TokenType {
    /// Bearer token (RFC 6750).
    #[serde(rename = "bearer")]
    #[default]
    Bearer,
}

impl TokenType {
    /// Returns the `token_type` literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bearer => "bearer",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authorization response parameter names.
pub mod params {
    /// Token type.
    pub const TOKEN_TYPE: &str = "token_type";
    /// Access token.
    pub const ACCESS_TOKEN: &str = "access_token";
    /// ID token.
    pub const ID_TOKEN: &str = "id_token";
    /// Authorization code.
    pub const CODE: &str = "code";
    /// State.
    pub const STATE: &str = "state";
    /// Seconds until the access token expires.
    pub const EXPIRES_IN: &str = "expires_in";
    /// Granted scope.
    pub const SCOPE: &str = "scope";
    /// OIDC session management state.
    pub const SESSION_STATE: &str = "session_state";
    /// Token identifier, carried as additional information.
    pub const JTI: &str = "jti";

    /// Every name the engine emits itself.
    pub const RESERVED: [&str; 8] = [
        TOKEN_TYPE,
        ACCESS_TOKEN,
        ID_TOKEN,
        CODE,
        STATE,
        EXPIRES_IN,
        SCOPE,
        SESSION_STATE,
    ];
}
