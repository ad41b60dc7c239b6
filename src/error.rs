use miette::Diagnostic;
use strum::{AsRefStr, Display};
use thiserror::Error;

/// Records all errors reported by this library.
#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was empty.
    #[error("no {argument} supplied")]
    Empty {
        /// The argument that was empty.
        argument: Argument,
    },

    /// The input did not conform to the purl syntax.
    #[error("malformed purl '{input}': {error}")]
    Malformed {
        /// The input originally provided.
        #[source_code]
        input: String,

        /// The error reported by the purl parser.
        #[source]
        error: purl::ParseError,
    },

    /// The input did not have the `pkg:type/name` shape.
    #[error("no purl name found in '{input}'")]
    NoName {
        /// The input originally provided.
        input: String,
    },

    /// The purl type has no known project URL.
    #[error("no url prefix found for '{purl_type}': {purl_name}")]
    UnknownType {
        /// The purl type that was looked up.
        purl_type: String,

        /// The purl name the URL was requested for.
        purl_name: String,
    },
}

impl Error {
    /// Create an [`Error::Empty`] error.
    pub(crate) fn empty(argument: Argument) -> Self {
        Self::Empty { argument }
    }
}

/// Names the argument that was missing in an [`Error::Empty`] error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, AsRefStr)]
#[non_exhaustive]
pub enum Argument {
    /// The purl string being parsed.
    #[strum(serialize = "purl string")]
    Purl,

    /// The purl name passed to URL construction.
    #[strum(serialize = "purl name")]
    PurlName,

    /// The purl type passed to URL construction.
    #[strum(serialize = "purl type")]
    PurlType,
}
