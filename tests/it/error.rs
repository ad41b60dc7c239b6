use assert_matches::assert_matches;
use color_eyre::{Result, eyre::Context};
use pretty_assertions::assert_eq;
use purlutils::{Argument, Error, build_project_url, extract_name, parse_full};

#[test]
fn error_wrappable_context() -> Result<()> {
    let parsed = parse_full("pkg:npm/lodash@4.17.21").context("can wrap")?;
    assert_eq!(parsed.name(), "lodash");

    let name = extract_name("pkg:npm/lodash@4.17.21").context("can wrap")?;
    assert_eq!(name.as_str(), "lodash");

    let url = build_project_url("lodash", "npm").with_context(|| "can wrap")?;
    assert_eq!(url, "https://www.npmjs.com/package/lodash");

    Ok(())
}

#[test]
fn error_wrapped_keeps_cause() {
    let err = parse_full("rubbish.string")
        .context("parse dependency")
        .expect_err("must fail");
    assert_matches!(err.downcast_ref::<Error>(), Some(Error::Malformed { .. }));
}

#[test]
fn malformed_exposes_parser_source() {
    let err = parse_full("rubbish.string").expect_err("must fail");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn empty_messages_name_the_argument() {
    let render = |argument| Error::Empty { argument }.to_string();
    assert_eq!(render(Argument::Purl), "no purl string supplied");
    assert_eq!(render(Argument::PurlName), "no purl name supplied");
    assert_eq!(render(Argument::PurlType), "no purl type supplied");
}

#[test]
fn messages_include_input() {
    let err = extract_name("rubbish.string").expect_err("must fail");
    assert_eq!(err.to_string(), "no purl name found in 'rubbish.string'");

    let err = build_project_url("x", "rubbish.string").expect_err("must fail");
    assert_eq!(err.to_string(), "no url prefix found for 'rubbish.string': x");
}
