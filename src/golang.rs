use std::borrow::Cow;

/// Prefix of Go module purls that are hosted on GitHub.
pub const GOLANG_GITHUB_PREFIX: &str = "pkg:golang/github.com/";

/// Prefix of GitHub purls.
pub const GITHUB_PREFIX: &str = "pkg:github/";

/// Rewrite a Go module purl hosted on GitHub into a GitHub purl.
///
/// Only the `owner/repo` part of the module path is kept,
/// so module version suffixes like `/v2` are dropped.
/// Any other input is returned unchanged.
///
/// ```
/// # use purlutils::convert_go_to_github;
/// assert_eq!(convert_go_to_github("pkg:golang/github.com/scanoss/papi/v2"), "pkg:github/scanoss/papi");
/// assert_eq!(convert_go_to_github("pkg:maven/x/y"), "pkg:maven/x/y");
/// ```
#[tracing::instrument(level = "trace")]
pub fn convert_go_to_github(purl: &str) -> Cow<'_, str> {
    let Some(module) = purl.strip_prefix(GOLANG_GITHUB_PREFIX) else {
        return Cow::Borrowed(purl);
    };

    // Keep `pkg:github/<owner>/<repo>`: everything before the third separator.
    let mut converted = format!("{GITHUB_PREFIX}{module}");
    let third_separator = converted.match_indices('/').nth(2).map(|(at, _)| at);
    if let Some(end) = third_separator {
        converted.truncate(end);
    }

    Cow::Owned(converted)
}
