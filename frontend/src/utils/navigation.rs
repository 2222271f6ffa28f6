use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/leave-requests";

pub fn is_login_path(path: &str) -> bool {
    matches!(path, "/" | "" | LOGIN_PATH)
}

/// Login URL that brings the user back to `path` after signing in.
pub fn login_url_for(path: &str) -> String {
    if is_login_path(path) {
        LOGIN_PATH.to_string()
    } else {
        format!(
            "{}?redirect={}",
            LOGIN_PATH,
            utf8_percent_encode(path, NON_ALPHANUMERIC)
        )
    }
}

/// Browsers read a backslash as `/` and drop tabs and newlines, so either can turn a
/// path into a protocol-relative URL.
fn is_in_app_path(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/')
        && !matches!(chars.next(), Some('/') | Some('\\'))
        && !path.chars().any(|c| c == '\\' || c.is_ascii_control())
}

/// Only in-app absolute paths are honored; anything else lands on the request list.
pub fn safe_redirect_target(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if is_in_app_path(path) && !is_login_path(path) => path.to_string(),
        _ => HOME_PATH.to_string(),
    }
}

pub fn redirect_to_login_if_needed() {
    let path = current_path();
    if is_login_path(&path) {
        return;
    }
    redirect_to(&login_url_for(&path));
}

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub fn redirect_to(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(url) {
            log::error!("Failed to navigate to {}: {:?}", url, err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static CURRENT_PATH: std::cell::RefCell<String> = std::cell::RefCell::new("/".to_string());
    static LAST_REDIRECT: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> String {
    CURRENT_PATH.with(|path| path.borrow().clone())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(url: &str) {
    let path = url.split('?').next().unwrap_or(url).to_string();
    CURRENT_PATH.with(|current| *current.borrow_mut() = path);
    LAST_REDIRECT.with(|last| *last.borrow_mut() = Some(url.to_string()));
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn set_current_path(path: &str) {
    CURRENT_PATH.with(|current| *current.borrow_mut() = path.to_string());
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn take_last_redirect() -> Option<String> {
    LAST_REDIRECT.with(|last| last.borrow_mut().take())
}
