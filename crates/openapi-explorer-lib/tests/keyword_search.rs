mod common;

use openapi_explorer_lib::search::{search, DESCRIPTION_LIMIT};
use openapi_explorer_lib::SearchQuery;

use common::fixture_catalog;

#[test]
fn path_search_only_returns_matching_paths() {
    let catalog = fixture_catalog();
    let query = SearchQuery::new("user").in_description(false);
    let text = catalog.search_by_keyword(&query);

    assert!(text.starts_with("Found 2 API(s) matching the keyword \"user\":"));
    assert!(text.contains("Path: /v1/users"));
    assert!(!text.contains("/v1/login"));
    assert!(!text.contains("/v1/auth/token"));
    assert!(!text.contains("/v1/health"));
}

#[test]
fn no_match_names_the_keyword() {
    let catalog = fixture_catalog();
    let text = catalog.search_by_keyword(&SearchQuery::new("zzz-no-match"));
    assert_eq!(text, "No APIs matched the keyword \"zzz-no-match\".");
}

#[test]
fn disabled_flags_always_yield_no_match() {
    let catalog = fixture_catalog();
    for keyword in ["", "user", "/v1", "token"] {
        let query = SearchQuery::new(keyword)
            .in_path(false)
            .in_description(false);
        assert_eq!(
            catalog.search_by_keyword(&query),
            format!("No APIs matched the keyword \"{keyword}\".")
        );
    }
}

#[test]
fn combined_search_is_superset_of_each_flag() {
    let catalog = fixture_catalog();
    let document = catalog.document();
    for keyword in ["user", "TOKEN", "log", "session", "/v1"] {
        let both = search(document, &SearchQuery::new(keyword));
        let path_only = search(document, &SearchQuery::new(keyword).in_description(false));
        let desc_only = search(document, &SearchQuery::new(keyword).in_path(false));
        for hit in path_only.iter().chain(desc_only.iter()) {
            assert!(both.contains(hit), "{keyword}: missing {hit:?}");
        }
    }
}

#[test]
fn long_descriptions_are_truncated_in_results() {
    let catalog = fixture_catalog();
    let hits = search(catalog.document(), &SearchQuery::new("log in"));
    assert_eq!(hits.len(), 1);

    let original = catalog.document().paths["/v1/login"]
        .operations()
        .next()
        .and_then(|(_, op)| op.description.clone())
        .expect("login has a description");
    assert!(original.chars().count() > DESCRIPTION_LIMIT);

    let expected: String = original.chars().take(DESCRIPTION_LIMIT).collect();
    assert_eq!(hits[0].description, format!("{expected}..."));
    assert_eq!(hits[0].summary, "Log in");
}

#[test]
fn short_descriptions_are_verbatim_and_missing_ones_render_none() {
    let catalog = fixture_catalog();
    let text = catalog.search_by_keyword(&SearchQuery::new("/v1/users"));
    assert!(text.contains("Description: Returns the users registered in the system.\n"));
    assert!(text.contains("Summary: Create account\nDescription: None\n"));
    assert!(text.contains("\n---------\n"));
}
