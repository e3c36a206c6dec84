//! Host extraction for website, apply-URL, and email comparison.
//!
//! Employer records mix full URLs (`https://www.acme.com/careers`) with
//! bare domains (`acme.com`), and listing records carry third-party apply
//! URLs. All comparisons happen on a normalized host: lowercase, with a
//! single leading `www.` stripped. Malformed input normalizes to an empty
//! host, which every caller treats as "absent" rather than an error.

use url::Url;

/// Extract the normalized host from a URL or bare domain.
#[must_use]
pub fn normalize_host(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    // Bare domains carry no scheme, so a failed parse is retried with one.
    let mut host = host_of(trimmed);
    if host.is_none() && !trimmed.contains("://") {
        host = host_of(&format!("https://{trimmed}"));
    }
    match host {
        Some(h) => {
            let h = h.to_ascii_lowercase();
            h.strip_prefix("www.").unwrap_or(&h).to_string()
        }
        None => String::new(),
    }
}

fn host_of(candidate: &str) -> Option<String> {
    let url = Url::parse(candidate).ok()?;
    url.host_str().map(str::to_string)
}

/// Whether `candidate` is the same host as `base` or a subdomain of it.
///
/// Both inputs are raw; empty normalized hosts never match anything.
#[must_use]
pub fn host_matches(candidate: &str, base: &str) -> bool {
    let candidate = normalize_host(candidate);
    let base = normalize_host(base);
    if candidate.is_empty() || base.is_empty() {
        return false;
    }
    candidate == base || candidate.ends_with(&format!(".{base}"))
}

/// The normalized domain of an email address, or an empty string when the
/// input does not look like a mailbox.
#[must_use]
pub fn email_domain(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() => normalize_host(domain),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url_host() {
        assert_eq!(normalize_host("https://www.acme.com/careers"), "acme.com");
        assert_eq!(normalize_host("http://Acme.COM"), "acme.com");
    }

    #[test]
    fn test_bare_domain_host() {
        assert_eq!(normalize_host("acme.com"), "acme.com");
        assert_eq!(normalize_host("  jobs.acme.com  "), "jobs.acme.com");
    }

    #[test]
    fn test_malformed_url_is_empty_host() {
        assert_eq!(normalize_host(""), "");
        assert_eq!(normalize_host("not a url at all"), "");
        assert_eq!(normalize_host("https://"), "");
    }

    #[test]
    fn test_subdomain_matches_base() {
        assert!(host_matches("https://jobs.acme.com/listing/1", "acme.com"));
        assert!(host_matches("acme.com", "https://www.acme.com"));
        assert!(!host_matches("https://jobs.otherco.com", "acme.com"));
    }

    #[test]
    fn test_suffix_without_dot_boundary_is_not_a_subdomain() {
        assert!(!host_matches("notacme.com", "acme.com"));
    }

    #[test]
    fn test_empty_hosts_never_match() {
        assert!(!host_matches("", "acme.com"));
        assert!(!host_matches("acme.com", "???"));
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain("recruiting@Acme.com"), "acme.com");
        assert_eq!(email_domain("a@b@jobs.acme.com"), "jobs.acme.com");
        assert_eq!(email_domain("no-at-sign"), "");
        assert_eq!(email_domain("@acme.com"), "");
    }
}
