use purlutils::{ProjectHost, build_project_url};
use simple_test_case::test_case;
use strum::IntoEnumIterator;

#[test_case(ProjectHost::Github, "https://github.com/"; "github")]
#[test_case(ProjectHost::Npm, "https://www.npmjs.com/package/"; "npm")]
#[test_case(ProjectHost::Maven, "https://mvnrepository.com/artifact/"; "maven")]
#[test_case(ProjectHost::Gem, "https://rubygems.org/gems/"; "gem")]
#[test_case(ProjectHost::Pypi, "https://pypi.org/project/"; "pypi")]
#[test_case(ProjectHost::Golang, "https://pkg.go.dev/"; "golang")]
#[test_case(ProjectHost::Nuget, "https://www.nuget.org/packages/"; "nuget")]
#[test]
fn url_prefix(host: ProjectHost, target: &str) {
    pretty_assertions::assert_eq!(host.url_prefix(), target, "prefix of {host:?}");
}

#[test]
fn build_matches_host_table() {
    for host in ProjectHost::iter() {
        let url = build_project_url("some/name", host.as_ref()).expect("must build");
        pretty_assertions::assert_eq!(url, host.project_url("some/name"));
    }
}

#[test]
fn name_is_not_encoded() {
    let url = build_project_url("a b/c?d", "github").expect("must build");
    pretty_assertions::assert_eq!(url, "https://github.com/a b/c?d");
}
