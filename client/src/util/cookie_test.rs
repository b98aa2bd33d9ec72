use super::*;

#[test]
fn find_cookie_picks_named_value_among_several() {
    let cookies = "sessionid=abc; csrftoken=Tok3n; theme=dark";
    assert_eq!(find_cookie(cookies, CSRF_COOKIE), Some("Tok3n"));
    assert_eq!(find_cookie(cookies, "theme"), Some("dark"));
}

#[test]
fn find_cookie_requires_exact_name() {
    let cookies = "xcsrftoken=nope; csrftoken_old=stale";
    assert_eq!(find_cookie(cookies, CSRF_COOKIE), None);
}

#[test]
fn find_cookie_keeps_equals_signs_in_value() {
    assert_eq!(find_cookie("csrftoken=a=b==", CSRF_COOKIE), Some("a=b=="));
}

#[test]
fn find_cookie_handles_empty_and_malformed_input() {
    assert_eq!(find_cookie("", CSRF_COOKIE), None);
    assert_eq!(find_cookie("garbage; ;", CSRF_COOKIE), None);
    assert_eq!(find_cookie("csrftoken=", CSRF_COOKIE), Some(""));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_cookie_is_none_outside_browser() {
    assert_eq!(read_cookie(CSRF_COOKIE), None);
}
