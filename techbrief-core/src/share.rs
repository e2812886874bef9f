//! Social share links for the article header.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    LinkedIn,
}

impl SharePlatform {
    pub fn label(self) -> &'static str {
        match self {
            SharePlatform::Twitter => "X (Twitter)",
            SharePlatform::LinkedIn => "LinkedIn",
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SharePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(SharePlatform::Twitter),
            "linkedin" => Ok(SharePlatform::LinkedIn),
            other => Err(format!("unknown platform '{other}' (expected twitter or linkedin)")),
        }
    }
}

/// Build the share-intent URL for `platform`.
pub fn share_url(platform: SharePlatform, title: &str, page_url: &str) -> String {
    let url = encode_uri_component(page_url);
    match platform {
        SharePlatform::Twitter => {
            let text = encode_uri_component(&format!("{title}\n\nRead more:"));
            format!("https://twitter.com/intent/tweet?text={text}&url={url}")
        }
        SharePlatform::LinkedIn => {
            format!("https://www.linkedin.com/sharing/share-offsite/?url={url}")
        }
    }
}

/// Percent-encode everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`,
/// byte-wise over UTF-8.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("x\ny"), "x%0Ay");
        assert_eq!(
            encode_uri_component("https://example.com/a?b=c&d"),
            "https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc%26d"
        );
        assert_eq!(encode_uri_component("(it's)~*!"), "(it's)~*!");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn twitter_url() {
        let url = share_url(SharePlatform::Twitter, "Hi there", "https://t.io/x");
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=Hi%20there%0A%0ARead%20more%3A&url=https%3A%2F%2Ft.io%2Fx"
        );
    }

    #[test]
    fn linkedin_url_ignores_title() {
        let url = share_url(SharePlatform::LinkedIn, "ignored", "https://t.io/x");
        assert_eq!(
            url,
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Ft.io%2Fx"
        );
    }

    #[test]
    fn platform_parse() {
        assert_eq!("X".parse::<SharePlatform>().unwrap(), SharePlatform::Twitter);
        assert_eq!("linkedin".parse::<SharePlatform>().unwrap(), SharePlatform::LinkedIn);
        assert!("myspace".parse::<SharePlatform>().is_err());
    }
}
