use super::*;

#[test]
fn protected_paths_classify_as_protected() {
    for path in [
        HOME_PATH,
        ALL_JOBS_PATH,
        CREATE_JOB_PATH,
        MY_JOBS_PATH,
        "/jobs/64f1c2e9a1",
        "/jobs/edit/64f1c2e9a1",
        // Detail route with id "edit", as the router resolves it.
        "/jobs/edit",
    ] {
        assert_eq!(classify(path), RouteAccess::Protected, "{path}");
    }
}

#[test]
fn public_paths_classify_as_public() {
    for path in [LOGIN_PATH, REGISTER_PATH, ABOUT_PATH] {
        assert_eq!(classify(path), RouteAccess::Public, "{path}");
    }
}

#[test]
fn unknown_paths_classify_as_unknown() {
    assert_eq!(classify("/nope"), RouteAccess::Unknown);
    assert_eq!(classify("/jobs"), RouteAccess::Unknown);
    assert_eq!(classify("/jobs/edit/1/extra"), RouteAccess::Unknown);
}

#[test]
fn classify_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(classify("/login/"), RouteAccess::Public);
    assert_eq!(classify("/about?ref=nav"), RouteAccess::Public);
    assert_eq!(classify("/jobs/my-jobs#top"), RouteAccess::Protected);
}

#[test]
fn job_paths_embed_id() {
    assert_eq!(job_detail_path("abc"), "/jobs/abc");
    assert_eq!(job_edit_path("abc"), "/jobs/edit/abc");
}
