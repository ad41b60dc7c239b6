use std::borrow::Cow;

use compact_str::CompactString;
use derive_more::{Debug, Display};
use documented::Documented;
use lazy_regex::regex_captures;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{ObjectBuilder, Type},
};

use crate::{Argument, Error};

/// Purl types whose names are case sensitive and are never lowercased.
pub const CASE_SENSITIVE_TYPES: &[&str] = &["npm", "nuget"];

/// The name portion of a purl.
///
/// This is everything after `pkg:<type>/`, without the version, qualifiers, or subpath,
/// so it includes the namespace when the purl has one (e.g. `io.prestosql/presto-main`).
/// Names are lowercased unless the purl type is case sensitive (see [`CASE_SENSITIVE_TYPES`]).
///
/// Percent-encoding is left untouched: `pkg:npm/%40babel/core` has the name `%40babel/core`.
#[derive(
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Display,
    Debug,
    Serialize,
    Deserialize,
    Documented,
)]
#[display("{}", self.0)]
#[serde(transparent)]
pub struct PurlName(CompactString);

impl PurlName {
    /// View the item as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty.
    ///
    /// This is possible when the entire name was a suffix, as in `pkg:npm/@1.0.0`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for PurlName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<PurlName> for String {
    fn from(value: PurlName) -> Self {
        value.0.into_string()
    }
}

impl PartialEq<str> for PurlName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for PurlName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialSchema for PurlName {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        ObjectBuilder::new()
            .description(Some(Self::DOCS))
            .examples([json!("io.prestosql/presto-main"), json!("%40babel/Core")])
            .schema_type(Type::String)
            .build()
            .into()
    }
}

impl ToSchema for PurlName {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("PurlName")
    }
}

/// Extract the [`PurlName`] from a purl string.
///
/// ```
/// # use purlutils::extract_name;
/// let name = extract_name("pkg:maven/io.prestosql/Presto-main@v1.0").unwrap();
/// assert_eq!(name.as_str(), "io.prestosql/presto-main");
///
/// let name = extract_name("pkg:npm/%40babel/Core@7.0.0").unwrap();
/// assert_eq!(name.as_str(), "%40babel/Core");
/// ```
#[tracing::instrument(level = "trace")]
pub fn extract_name(purl: &str) -> Result<PurlName, Error> {
    split_type_name(purl).map(|(_, name)| name)
}

/// Split a purl string into its type and [`PurlName`].
pub(crate) fn split_type_name(purl: &str) -> Result<(&str, PurlName), Error> {
    if purl.is_empty() {
        return Err(Error::empty(Argument::Purl));
    }

    let Some((_, purl_type, name)) = regex_captures!(r"^pkg:([0-9A-Za-z_]+)/(.+)$", purl) else {
        tracing::trace!("input does not have the pkg:type/name shape");
        return Err(Error::NoName {
            input: purl.to_string(),
        });
    };

    let name = strip_suffixes(name);
    // Lowercase per character: no context-sensitive mappings like final sigma.
    let name = if CASE_SENSITIVE_TYPES.contains(&purl_type) {
        CompactString::from(name)
    } else {
        name.chars().flat_map(char::to_lowercase).collect()
    };

    Ok((purl_type, PurlName(name)))
}

/// Drop the version, then qualifiers, then subpath.
fn strip_suffixes(name: &str) -> &str {
    ['@', '?', '#']
        .into_iter()
        .fold(name, |name, sep| name.split_once(sep).map_or(name, |(head, _)| head))
}
