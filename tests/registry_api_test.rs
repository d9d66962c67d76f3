//! Integration tests for the registry public API.

use httpmock::prelude::*;
use pip_helpers::registry::{ReleaseClient, ReleaseOrder, ReleaseQuery};
use pip_helpers::{PipConfig, PipError};

const SIX_INDEX: &str = r#"{
  "info": {"name": "six", "version": "1.16.0"},
  "releases": {
    "1.9.0":  [{"filename": "six-1.9.0.tar.gz",  "url": "https://files/six-1.9.0.tar.gz",  "upload_time": "2015-01-02T00:00:00", "packagetype": "sdist"}],
    "1.10.0": [{"filename": "six-1.10.0.tar.gz", "url": "https://files/six-1.10.0.tar.gz", "upload_time": "2015-10-07T00:00:00", "packagetype": "sdist",
                "digests": {"sha256": "105f8d68616f8248e24bf0e9372ef04d3cc10104f1980f54d57b2ce73a5ad56a"}}],
    "1.16.0": [{"filename": "six-1.16.0-py2.py3-none-any.whl", "url": "https://files/six-1.16.0-py2.py3-none-any.whl", "upload_time": "2021-05-05T14:18:17", "packagetype": "bdist_wheel"},
               {"filename": "six-1.16.0.tar.gz", "url": "https://files/six-1.16.0.tar.gz", "upload_time": "2021-05-05T14:18:18", "packagetype": "sdist"}],
    "1.17.0.dev1": [{"filename": "six-1.17.0.dev1.tar.gz", "upload_time": "2022-01-01T00:00:00"}]
  }
}"#;

fn client_for(server: &MockServer) -> ReleaseClient {
    let config = PipConfig::default().with_index_url(server.url("/pypi/{}/json"));
    ReleaseClient::new(&config).unwrap()
}

#[test]
fn fetches_matching_releases() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/pypi/six/json");
        then.status(200)
            .header("content-type", "application/json")
            .body(SIX_INDEX);
    });

    let releases = client_for(&server)
        .fetch_releases("six>=1.10", &ReleaseQuery::default())
        .unwrap();

    mock.assert();
    assert_eq!(releases.name, "six");
    assert_eq!(releases.versions(), vec!["1.10.0", "1.16.0"]);

    let latest = releases.latest().unwrap();
    assert_eq!(latest.file.filename, "six-1.16.0-py2.py3-none-any.whl");
    assert_eq!(latest.file.packagetype.as_deref(), Some("bdist_wheel"));

    let digests = &releases.get("1.10.0").unwrap().file.digests;
    assert!(digests.contains_key("sha256"));
}

#[test]
fn prereleases_are_opt_in() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pypi/six/json");
        then.status(200).body(SIX_INDEX);
    });
    let client = client_for(&server);

    let stable = client
        .fetch_releases("six", &ReleaseQuery::default())
        .unwrap();
    assert!(stable.iter().all(|r| !r.is_prerelease()));

    let query = ReleaseQuery {
        pre: true,
        order: ReleaseOrder::Version,
    };
    let all = client.fetch_releases("six", &query).unwrap();
    assert_eq!(all.latest().unwrap().version, "1.17.0.dev1");
}

#[test]
fn unmatched_constraints_list_available_versions() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pypi/six/json");
        then.status(200).body(SIX_INDEX);
    });

    let err = client_for(&server)
        .fetch_releases("six<1.0", &ReleaseQuery::default())
        .unwrap_err();

    match err {
        PipError::NoMatchingReleases { available, .. } => {
            assert_eq!(available, vec!["1.9.0", "1.10.0", "1.16.0", "1.17.0.dev1"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_package_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pypi/nosuchpkg/json");
        then.status(404).body(r#"{"message": "Not Found"}"#);
    });

    let err = client_for(&server)
        .fetch_releases("nosuchpkg", &ReleaseQuery::default())
        .unwrap_err();

    assert!(matches!(err, PipError::Other(_)));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn invalid_specifier_makes_no_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).body(SIX_INDEX);
    });

    let err = client_for(&server)
        .fetch_releases("six>=", &ReleaseQuery::default())
        .unwrap_err();

    assert!(matches!(err, PipError::InvalidSpecifier { .. }));
    mock.assert_calls(0);
}

#[test]
fn requested_name_is_kept_alongside_index_name() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pypi/SIX/json");
        then.status(200).body(SIX_INDEX);
    });

    let releases = client_for(&server)
        .fetch_releases("SIX==1.16.0", &ReleaseQuery::default())
        .unwrap();

    assert_eq!(releases.name, "SIX");
    assert_eq!(releases.index_name.as_deref(), Some("six"));
    assert_eq!(releases.versions(), vec!["1.16.0"]);
}
