//! `document.cookie` lookup, used to echo the CSRF token on POSTs.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Cookie the hosting server sets with the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Find the raw value of cookie `name` in a `document.cookie` style string
/// (`a=1; b=2`). Values are returned undecoded.
#[must_use]
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Read and URI-decode cookie `name` from the current document.
/// Returns `None` outside the browser or when the cookie is not set.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = document.cookie().ok()?;
        let raw = find_cookie(&cookies, name)?;
        js_sys::decode_uri_component(raw).ok().map(String::from)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}
