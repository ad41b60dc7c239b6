use lazy_regex::regex_captures;

/// Extract the version from a requirement that pins an exact version.
///
/// A requirement pins an exact version when it is either a bare version
/// or the version prefixed by `=` or `==`.
/// The version must start with a word character and be at least two characters long.
/// Any other requirement (ranges, operators, whitespace) yields an empty string.
///
/// ```
/// # use purlutils::extract_version;
/// assert_eq!(extract_version("v1.0.0"), "v1.0.0");
/// assert_eq!(extract_version("==1.0.0"), "1.0.0");
/// assert_eq!(extract_version(">1.0.0"), "");
/// ```
#[tracing::instrument(level = "trace")]
pub fn extract_version(requirement: &str) -> &str {
    // Word and whitespace classes are ASCII only.
    match regex_captures!(r"^(?:=|==|)([0-9A-Za-z_]+[^\t\n\f\r ]+)$", requirement) {
        Some((_, version)) => version,
        None => {
            tracing::trace!("requirement does not pin an exact version");
            ""
        }
    }
}
