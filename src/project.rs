use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::{Argument, Error, convert_go_to_github, name::split_type_name};

/// Package hosts with a browsable project page, identified by purl type.
///
/// Parsing from a purl type is an exact, case sensitive match:
/// ```
/// # use purlutils::ProjectHost;
/// # use std::str::FromStr;
/// assert_eq!(ProjectHost::from_str("npm"), Ok(ProjectHost::Npm));
/// assert!(ProjectHost::from_str("NPM").is_err());
/// ```
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ProjectHost {
    /// Repositories on GitHub.
    #[strum(serialize = "github")]
    Github,

    /// Packages on the NPM registry.
    #[strum(serialize = "npm")]
    Npm,

    /// Artifacts indexed by MVN Repository.
    #[strum(serialize = "maven")]
    Maven,

    /// Gems on RubyGems.
    #[strum(serialize = "gem")]
    Gem,

    /// Projects on PyPI.
    #[strum(serialize = "pypi")]
    Pypi,

    /// Go modules on pkg.go.dev.
    #[strum(serialize = "golang")]
    Golang,

    /// Packages on the NuGet gallery.
    #[strum(serialize = "nuget")]
    Nuget,
}

impl ProjectHost {
    /// The URL that project names are appended to.
    pub fn url_prefix(self) -> &'static str {
        match self {
            ProjectHost::Github => "https://github.com/",
            ProjectHost::Npm => "https://www.npmjs.com/package/",
            ProjectHost::Maven => "https://mvnrepository.com/artifact/",
            ProjectHost::Gem => "https://rubygems.org/gems/",
            ProjectHost::Pypi => "https://pypi.org/project/",
            ProjectHost::Golang => "https://pkg.go.dev/",
            ProjectHost::Nuget => "https://www.nuget.org/packages/",
        }
    }

    /// The project page for `name` on this host.
    ///
    /// The name is not URL encoded.
    pub fn project_url(self, name: &str) -> String {
        format!("{}{name}", self.url_prefix())
    }
}

/// Build a browsable project URL from a purl name and type.
///
/// ```
/// # use purlutils::build_project_url;
/// let url = build_project_url("scanoss/scanoss.py", "github").unwrap();
/// assert_eq!(url, "https://github.com/scanoss/scanoss.py");
/// ```
#[tracing::instrument(level = "trace")]
pub fn build_project_url(purl_name: &str, purl_type: &str) -> Result<String, Error> {
    if purl_name.is_empty() {
        return Err(Error::empty(Argument::PurlName));
    }
    if purl_type.is_empty() {
        return Err(Error::empty(Argument::PurlType));
    }

    let host = purl_type
        .parse::<ProjectHost>()
        .map_err(|_| Error::UnknownType {
            purl_type: purl_type.to_string(),
            purl_name: purl_name.to_string(),
        })?;

    Ok(host.project_url(purl_name))
}

/// Resolve a purl string straight to its project URL.
///
/// Go modules hosted on GitHub resolve to the GitHub repository.
///
/// ```
/// # use purlutils::project_url_for_purl;
/// let url = project_url_for_purl("pkg:golang/github.com/scanoss/papi/v2@v2.1.0").unwrap();
/// assert_eq!(url, "https://github.com/scanoss/papi");
/// ```
#[tracing::instrument(level = "trace")]
pub fn project_url_for_purl(purl: &str) -> Result<String, Error> {
    let purl = convert_go_to_github(purl);
    let (purl_type, purl_name) = split_type_name(&purl)?;
    build_project_url(purl_name.as_str(), purl_type)
}
