//! Article link and image attributes.

/// Absolute links inside the article.
pub const EXTERNAL_LINK_SELECTOR: &str = "article a[href^=\"http\"]";

/// Article images without an explicit loading strategy.
pub const LAZY_IMAGE_SELECTOR: &str = "article img:not([loading])";

/// Attributes set on external links.
pub const EXTERNAL_LINK_ATTRIBUTES: [(&str, &str); 2] =
    [("target", "_blank"), ("rel", "noopener noreferrer")];

/// Whether a link leaves the current site.
///
/// A link is internal when its hostname contains the page hostname, so
/// subdomains of the page host count as internal. Pages served without a
/// hostname (e.g. `file:`) treat every link as internal.
pub fn is_external(link_hostname: &str, page_hostname: &str) -> bool {
    !link_hostname.contains(page_hostname)
}
