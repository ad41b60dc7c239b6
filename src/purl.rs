//! Full decomposition of Package URLs (purls).
//!
//! See the [Package URL specification](https://github.com/package-url/purl-spec).
//!
//! Exposes the [`Purl`] struct, which is a thin wrapper around [`purl::GenericPurl`].
//! Parsing is delegated entirely to the `purl` crate;
//! this module only adds the empty-input check and maps failures into [`Error`].

use std::str::FromStr;

use derive_more::{Deref, Display, From};
use purl::GenericPurl;

use crate::{Argument, Error};

/// A decomposed Package URL (purl).
///
/// Read more about purls in the [spec](https://github.com/package-url/purl-spec).
///
/// This struct is a thin wrapper around [`purl::GenericPurl`], which is an
/// external crate implementation of the purl spec, and may have its own
/// limitations. The parts of the purl are available through [`Deref`](std::ops::Deref):
/// ```rust
/// # use purlutils::Purl;
/// # use std::str::FromStr;
/// let purl = Purl::from_str("pkg:maven/io.prestosql/presto-main@v1.0").unwrap();
/// assert_eq!(purl.package_type(), "maven");
/// assert_eq!(purl.namespace(), Some("io.prestosql"));
/// assert_eq!(purl.name(), "presto-main");
/// assert_eq!(purl.version(), Some("v1.0"));
/// ```
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq, PartialOrd, Ord, Deref, From)]
pub struct Purl(GenericPurl<String>);

impl Purl {
    /// Unwrap the underlying [`purl::GenericPurl`].
    pub fn into_inner(self) -> GenericPurl<String> {
        self.0
    }
}

impl FromStr for Purl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_full(s)
    }
}

/// Parse a purl string into its decomposed parts.
///
/// Empty input is rejected with [`Error::Empty`] before the parser is consulted;
/// anything the `purl` crate refuses is reported as [`Error::Malformed`].
#[tracing::instrument(level = "trace")]
pub fn parse_full(input: &str) -> Result<Purl, Error> {
    if input.is_empty() {
        return Err(Error::empty(Argument::Purl));
    }

    GenericPurl::<String>::from_str(input)
        .map(Purl)
        .map_err(|error| Error::Malformed {
            input: input.to_string(),
            error,
        })
}
