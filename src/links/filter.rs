use url::{ParseError, Url};

use crate::errors::{FinderError, FinderResult};

const OPERATION: &str = "keepSameRootDomainLink";

/// Hostless schemes that never name a page on the site
const FOREIGN_SCHEMES: &[&str] = &[
    "about",
    "blob",
    "data",
    "file",
    "javascript",
    "mailto",
    "sms",
    "tel",
];

/// Keep the links that live on the root URL's host, making relative ones
/// absolute.
///
/// Links without a host are rewritten to
/// `{root scheme}://{root host}/{link}`. Links whose host differs from the
/// root host (subdomains included) are dropped, as are empty values,
/// `mailto:`-style links and anything the URL parser rejects. Other hostless
/// values, such as `page:2`, are treated as paths on the root host.
/// Relative order of the kept links is preserved.
pub fn filter_same_domain<S>(root_url: &str, urls: &[S]) -> FinderResult<Vec<String>>
where
    S: AsRef<str>,
{
    if root_url.is_empty() {
        return Err(FinderError::NoRootUrl);
    }
    if urls.is_empty() {
        return Err(FinderError::NoUrls);
    }

    let root = Url::parse(root_url).map_err(|_| FinderError::InvalidParams(OPERATION))?;
    let domain = root
        .host_str()
        .ok_or(FinderError::InvalidParams(OPERATION))?;
    let scheme = root.scheme();

    Ok(urls
        .iter()
        .filter_map(|url| normalize(url.as_ref(), scheme, domain))
        .collect())
}

fn normalize(raw: &str, scheme: &str, domain: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    // Scheme-relative links borrow the root scheme.
    let absolute = if value.starts_with("//") && !value.starts_with("///") {
        format!("{}:{}", scheme, value)
    } else {
        value.to_string()
    };

    match Url::parse(&absolute) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if host == domain => Some(absolute),
            Some(_) => None,
            None if FOREIGN_SCHEMES.contains(&parsed.scheme()) => None,
            None => Some(on_root(value, scheme, domain)),
        },
        Err(ParseError::RelativeUrlWithoutBase) => Some(on_root(value, scheme, domain)),
        Err(_) => None,
    }
}

fn on_root(path: &str, scheme: &str, domain: &str) -> String {
    format!("{}://{}/{}", scheme, domain, path.trim_start_matches('/'))
}
