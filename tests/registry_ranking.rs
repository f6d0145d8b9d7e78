use path_rank_rs::{
    MatcherRegistry, ParamValue, PathOptions, PatternError, RegistryError, RouteRecord,
};
use pretty_assertions::assert_eq;

fn ranked(registry: &MatcherRegistry) -> Vec<String> {
    registry
        .rankings()
        .into_iter()
        .map(|entry| entry.pattern)
        .collect()
}

fn registry_with(patterns: &[&str]) -> MatcherRegistry {
    let mut registry = MatcherRegistry::new(PathOptions::default());
    for pattern in patterns {
        registry.add(pattern, None).expect("pattern should register");
    }
    registry
}

#[test]
fn registry_when_patterns_added_then_orders_by_score() {
    let registry = registry_with(&["/users/:id", "/users/new", "/:catchAll(.*)"]);

    assert_eq!(
        ranked(&registry),
        vec!["/users/new", "/users/:id", "/:catchAll(.*)"]
    );
}

#[test]
fn registry_when_path_matches_several_then_picks_highest_rank() {
    let registry = registry_with(&["/users/:id", "/users/new", "/:catchAll(.*)"]);

    let found = registry.match_path("/users/new").expect("static should match");
    assert_eq!(found.pattern, "/users/new");
    assert!(found.params.is_empty());

    let found = registry.match_path("/users/42").expect("param should match");
    assert_eq!(found.pattern, "/users/:id");
    assert_eq!(found.params.get("id"), Some(&ParamValue::from("42")));

    let found = registry.match_path("/somewhere/else").expect("catch-all should match");
    assert_eq!(found.pattern, "/:catchAll(.*)");
    assert_eq!(
        found.params.get("catchAll").and_then(ParamValue::as_str),
        Some("somewhere/else")
    );
}

#[test]
fn registry_when_scores_tie_then_keeps_insertion_order() {
    let registry = registry_with(&["/a", "/b"]);
    assert_eq!(ranked(&registry), vec!["/a", "/b"]);
    assert_eq!(
        registry.match_path("/a").expect("/a should match").pattern,
        "/a"
    );
    assert_eq!(
        registry.match_path("/b").expect("/b should match").pattern,
        "/b"
    );
    assert!(registry.match_path("/c").is_err());

    let registry = registry_with(&["/b", "/a"]);
    assert_eq!(ranked(&registry), vec!["/b", "/a"]);
    assert_eq!(
        registry.match_path("/a").expect("/a should match").pattern,
        "/a"
    );
}

#[test]
fn registry_when_add_returns_index_then_points_at_position() {
    let mut registry = registry_with(&["/:catchAll(.*)"]);

    let index = registry.add("/about", None).expect("static should register");
    assert_eq!(index, 0);
    assert_eq!(registry.matchers()[index].pattern(), "/about");
}

#[test]
fn registry_when_nothing_matches_then_returns_no_match() {
    let registry = registry_with(&["/about"]);

    match registry.match_path("/contact").expect_err("path should miss") {
        RegistryError::NoMatch { path } => assert_eq!(path, "/contact"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(registry.metrics().snapshot(), (1, 1));
}

#[test]
fn registry_when_empty_then_every_path_misses() {
    let registry = MatcherRegistry::default();

    assert!(registry.is_empty());
    assert!(matches!(
        registry.match_path("/"),
        Err(RegistryError::NoMatch { .. })
    ));
}

#[test]
fn registry_when_pattern_invalid_then_leaves_registry_unchanged() {
    let mut registry = registry_with(&["/users/:id", "/about"]);
    let before = ranked(&registry);

    match registry.add("/users/:id(", None).expect_err("bad pattern should fail") {
        RegistryError::Pattern(PatternError::UnterminatedGroup { .. }) => {}
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(ranked(&registry), before);
    assert_eq!(registry.metrics().total_patterns_registered, 2);
    assert_eq!(registry.metrics().total_patterns_rejected, 1);
}

#[test]
fn registry_when_pattern_options_given_then_override_global() {
    let mut registry = MatcherRegistry::new(PathOptions::default());
    let strict = PathOptions {
        strict: true,
        ..PathOptions::default()
    };
    registry.add("/strict", Some(strict)).expect("pattern should register");
    registry.add("/loose", None).expect("pattern should register");

    assert!(registry.match_path("/strict/").is_err());
    assert!(registry.match_path("/loose/").is_ok());
    assert_eq!(registry.rankings()[0].pattern, "/strict");
}

#[test]
fn registry_when_records_loaded_then_applies_record_options_only_when_flagged() {
    let sensitive = PathOptions {
        sensitive: true,
        ..PathOptions::default()
    };
    let records = [
        RouteRecord::new("/Global"),
        RouteRecord::new("/Own").with_options(sensitive),
        RouteRecord {
            path: "/Ignored".to_string(),
            options: sensitive,
            apply_options: false,
        },
    ];

    let registry = MatcherRegistry::from_records(&records, PathOptions::default())
        .expect("records should load");

    assert!(registry.match_path("/global").is_ok());
    assert!(registry.match_path("/own").is_err());
    assert!(registry.match_path("/Own").is_ok());
    assert!(registry.match_path("/ignored").is_ok());
}

#[test]
fn registry_when_root_registered_then_outranks_static_segments() {
    let registry = registry_with(&["/about", "/", "/:id"]);

    assert_eq!(ranked(&registry), vec!["/", "/about", "/:id"]);
    assert_eq!(
        registry.match_path("/").expect("root should match").pattern,
        "/"
    );
}

#[test]
fn registry_when_match_serialized_then_params_are_plain_json() {
    let registry = registry_with(&["/files/:path+", "/users/:id"]);

    let single = registry.match_path("/users/5").expect("param should match");
    let json = serde_json::to_value(&single).expect("match should serialize");
    assert_eq!(json["params"], serde_json::json!({ "id": "5" }));
    assert_eq!(json["pattern"], "/users/:id");

    let list = registry.match_path("/files/a/b").expect("repeat should match");
    let json = serde_json::to_value(&list).expect("match should serialize");
    assert_eq!(json["params"], serde_json::json!({ "path": ["a", "b"] }));
}
