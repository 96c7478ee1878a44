//! Cookie string lookup

/// Cookie carrying the anti-forgery token for mutating requests
pub const CSRF_COOKIE: &str = "csrftoken";

/// Read a named cookie from a `name=value; name2=value2` cookie string.
///
/// Returns `None` when the cookie is missing or appears more than once.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    let value = format!("; {cookies}");
    let needle = format!("; {name}=");
    let parts: Vec<&str> = value.split(needle.as_str()).collect();
    if parts.len() != 2 {
        return None;
    }
    parts[1].split(';').next().map(str::to_string)
}
