use std::sync::LazyLock;

use regex::Regex;

static DATA_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|localhost",
        r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)\n?\z",
    ))
    .expect("data URL pattern is valid")
});

/// Syntax-only check of an external data URL.
///
/// An empty string means "not provided" and is accepted. Otherwise the URL
/// must use `http`, `https`, `ftp` or `ftps` and name a dotted hostname,
/// `localhost`, or a dotted-quad address, with optional port and path.
/// A single trailing newline is tolerated.
pub fn is_valid_url(url: &str) -> bool {
    url.is_empty() || DATA_URL.is_match(url)
}
