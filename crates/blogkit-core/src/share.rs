//! Share link construction.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped inside a URL query component, matching
/// `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Tweet intent URL sharing `page_url` with `title` as text.
pub fn twitter_intent_url(intent_base: &str, title: &str, page_url: &str) -> String {
    format!(
        "{intent_base}?text={}&url={}",
        encode_component(title),
        encode_component(page_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_component("keep-_.!~*'()"), "keep-_.!~*'()");
        assert_eq!(encode_component("https://x.io/?q=1"), "https%3A%2F%2Fx.io%2F%3Fq%3D1");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_twitter_intent_url() {
        let url = twitter_intent_url(
            "https://twitter.com/intent/tweet",
            "UAC Bypass & DLLs",
            "https://blog.example/posts/a b.html",
        );
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=UAC%20Bypass%20%26%20DLLs\
             &url=https%3A%2F%2Fblog.example%2Fposts%2Fa%20b.html"
        );
    }
}
