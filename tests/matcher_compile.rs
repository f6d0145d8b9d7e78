use path_rank_rs::{
    ParamValue, PathMatcher, PathOptions, PatternError, ResolveError, RouteParams, create_matcher,
};
use pretty_assertions::assert_eq;

fn matcher(pattern: &str) -> PathMatcher {
    create_matcher(pattern, PathOptions::default()).expect("pattern should compile")
}

fn params<const N: usize>(pairs: [(&str, ParamValue); N]) -> RouteParams {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

#[test]
fn matcher_when_static_pattern_then_regex_is_anchored() {
    let m = matcher("/about");

    assert_eq!(m.regex().as_str(), "^/about(?:/)?$");
    assert!(m.is_match("/about"));
    assert!(m.is_match("/about/"));
    assert!(!m.is_match("/about/us"));
    assert!(!m.is_match("/aboutus"));
}

#[test]
fn matcher_when_param_pattern_then_lists_names_in_order() {
    let m = matcher("/users/:userId/posts/:postId");

    assert_eq!(m.param_names(), ["userId", "postId"]);
    assert_eq!(m.compiled().param_count(), 2);
}

#[test]
fn matcher_when_path_matches_then_extracts_params() {
    let m = matcher("/users/:id/profile");

    let extracted = m.extract("/users/42/profile").expect("path should match");
    assert_eq!(extracted, params([("id", "42".into())]));
    assert!(m.extract("/users/42").is_none());
}

#[test]
fn matcher_when_not_sensitive_then_ignores_case() {
    let m = matcher("/About");
    assert!(m.is_match("/about"));

    let sensitive = create_matcher(
        "/About",
        PathOptions {
            sensitive: true,
            ..PathOptions::default()
        },
    )
    .expect("pattern should compile");
    assert!(sensitive.is_match("/About"));
    assert!(!sensitive.is_match("/about"));
}

#[test]
fn matcher_when_strict_then_rejects_trailing_delimiter() {
    let strict = create_matcher(
        "/about",
        PathOptions {
            strict: true,
            ..PathOptions::default()
        },
    )
    .expect("pattern should compile");

    assert!(strict.is_match("/about"));
    assert!(!strict.is_match("/about/"));
}

#[test]
fn matcher_when_optional_param_absent_then_omits_it() {
    let m = matcher("/users/:id?");

    assert_eq!(m.extract("/users").expect("bare path should match"), RouteParams::new());
    assert_eq!(
        m.extract("/users/7").expect("path with id should match"),
        params([("id", "7".into())])
    );
}

#[test]
fn matcher_when_repeatable_param_then_extracts_list() {
    let m = matcher("/files/:path+");

    assert_eq!(
        m.extract("/files/a/b/c").expect("nested path should match"),
        params([("path", vec!["a", "b", "c"].into())])
    );
    assert!(m.extract("/files").is_none());

    let any = matcher("/files/:path*");
    assert_eq!(
        any.extract("/files").expect("zero segments should match"),
        RouteParams::new()
    );
}

#[test]
fn matcher_when_custom_regex_then_constrains_value() {
    let m = matcher("/users/:id(\\d+)");

    assert!(m.is_match("/users/123"));
    assert!(!m.is_match("/users/abc"));
}

#[test]
fn matcher_when_wildcard_then_crosses_delimiters() {
    let m = matcher("/:catchAll(.*)");

    assert_eq!(
        m.extract("/a/b/c").expect("wildcard should match"),
        params([("catchAll", "a/b/c".into())])
    );
}

#[test]
fn matcher_when_format_param_then_splits_extension() {
    let m = matcher("/file.:ext");

    assert_eq!(
        m.extract("/file.json").expect("extension should match"),
        params([("ext", "json".into())])
    );
}

#[test]
fn matcher_when_unnamed_group_then_keys_by_index() {
    let m = matcher("/(\\d+)");

    assert_eq!(
        m.extract("/42").expect("digits should match"),
        params([("0", "42".into())])
    );
}

#[test]
fn matcher_when_regex_invalid_then_errors() {
    match create_matcher("/:id([)", PathOptions::default()).expect_err("bad regex should fail") {
        PatternError::RegexInvalid { .. } => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn resolver_when_params_given_then_builds_path() {
    let m = matcher("/users/:id/posts/:postId");

    let path = m
        .resolve(&params([("id", "7".into()), ("postId", "99".into())]))
        .expect("all params given");
    assert_eq!(path, "/users/7/posts/99");
}

#[test]
fn resolver_when_optional_missing_then_drops_prefix() {
    let m = matcher("/users/:id?");

    assert_eq!(m.resolve(&RouteParams::new()).expect("optional may be absent"), "/users");
}

#[test]
fn resolver_when_list_given_then_joins_with_separator() {
    let m = matcher("/files/:path+");

    let path = m
        .resolve(&params([("path", vec!["a", "b"].into())]))
        .expect("list should resolve");
    assert_eq!(path, "/files/a/b");
}

#[test]
fn resolver_when_required_missing_then_errors() {
    let m = matcher("/users/:id");

    assert_eq!(
        m.resolve(&RouteParams::new()),
        Err(ResolveError::MissingParam {
            name: "id".to_string()
        })
    );
}

#[test]
fn resolver_when_value_breaks_pattern_then_errors() {
    let m = matcher("/users/:id(\\d+)");

    match m
        .resolve(&params([("id", "abc".into())]))
        .expect_err("non-digits should fail")
    {
        ResolveError::ValueMismatch { name, value, .. } => {
            assert_eq!(name, "id");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn resolver_when_list_for_single_param_then_errors() {
    let m = matcher("/users/:id");

    assert!(matches!(
        m.resolve(&params([("id", vec!["1", "2"].into())])),
        Err(ResolveError::UnexpectedList { .. })
    ));
}

#[test]
fn resolver_when_required_list_empty_then_errors() {
    let m = matcher("/files/:path+");

    assert!(matches!(
        m.resolve(&params([("path", ParamValue::List(Vec::new()))])),
        Err(ResolveError::EmptyList { .. })
    ));
}

#[test]
fn resolver_when_extracted_params_fed_back_then_rebuilds_path() {
    for (pattern, path) in [
        ("/users/:id/profile", "/users/42/profile"),
        ("/files/:path+", "/files/a/b/c"),
        ("/file.:ext", "/file.json"),
        ("/users/:id?", "/users"),
    ] {
        let m = matcher(pattern);
        let extracted = m.extract(path).expect("path should match");
        assert_eq!(m.resolve(&extracted).expect("extracted params resolve"), path);
    }
}
