#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

mod error;
mod golang;
mod name;
mod project;
pub mod purl;
mod requirement;

pub use crate::purl::{Purl, parse_full};
pub use error::*;
pub use golang::*;
pub use name::{CASE_SENSITIVE_TYPES, PurlName, extract_name};
pub use project::*;
pub use requirement::*;
