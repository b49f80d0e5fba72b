use url::Url;

/// Resolve an href against a base URL, returning an absolute URL string
pub fn resolve_href(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(|resolved| resolved.to_string())
}

/// Reduce a URL to its origin, dropping path, query and fragment
pub fn site_origin(url: &str) -> Result<Url, url::ParseError> {
    let mut origin = Url::parse(url)?;
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    Ok(origin)
}

/// Truncate a string to at most `max` characters for log output
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}
