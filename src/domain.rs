/// Returns the authority segment of a `scheme://domain/path` URL: the third
/// `/`-delimited segment, provided a `/` terminates it.
///
/// `http://nodomain` has no terminating slash and yields `None`, as does
/// anything with fewer segments. Callers treat `None` as a per-line condition.
pub fn extract_domain(raw_url: &str) -> Option<&str> {
    let mut segments = raw_url.splitn(4, '/');
    let domain = segments.nth(2)?;
    segments.next().map(|_| domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_authority() {
        assert_eq!(extract_domain("http://a.com/x"), Some("a.com"));
        assert_eq!(extract_domain("https://b.org/"), Some("b.org"));
        assert_eq!(extract_domain("http://c.net/a/b/c?d=e"), Some("c.net"));
    }

    #[test]
    fn keeps_port_and_userinfo_verbatim() {
        assert_eq!(
            extract_domain("http://user@host.io:8080/p/q"),
            Some("user@host.io:8080")
        );
    }

    #[test]
    fn missing_terminating_slash_is_none() {
        assert_eq!(extract_domain("http://nodomain"), None);
        assert_eq!(extract_domain("http:nodomain"), None);
        assert_eq!(extract_domain("a/b"), None);
        assert_eq!(extract_domain(""), None);
    }

    #[test]
    fn empty_authority_is_still_a_domain() {
        assert_eq!(extract_domain("a///"), Some(""));
        assert_eq!(extract_domain("file:///etc/passwd"), Some(""));
    }
}
