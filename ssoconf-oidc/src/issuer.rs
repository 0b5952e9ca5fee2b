use std::fmt;
use std::str::FromStr;

use url::Url;

/// Characters RFC 3986 allows outside of percent-encoding.
const SUB_DELIMS: &str = "!$&'()*+,;=";
const GEN_DELIMS: &str = ":/?#[]@";

/// Why an issuer URI was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssuerUriError {
    /// A character outside the URI character set.
    InvalidCharacter { ch: char, position: usize },
    /// A `%` not followed by two hex digits.
    InvalidPercentEncoding { position: usize },
    /// A relative reference whose first path segment contains `:`.
    ColonInFirstSegment,
    /// An absolute URI the URL parser rejected.
    Url(url::ParseError),
}

impl fmt::Display for IssuerUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssuerUriError::InvalidCharacter { ch, position } => {
                write!(f, "invalid character {ch:?} at position {position}")
            }
            IssuerUriError::InvalidPercentEncoding { position } => {
                write!(f, "invalid percent-encoding at position {position}")
            }
            IssuerUriError::ColonInFirstSegment => {
                write!(f, "first path segment in relative reference contains ':'")
            }
            IssuerUriError::Url(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for IssuerUriError {}

/// OpenID Connect issuer URI.
///
/// Holds the configured text unchanged; the issuer is compared verbatim
/// against `iss` claims, so it is never normalised. Absolute URIs are also
/// available as a parsed [`Url`].
///
/// The zero value (`IssuerUri::default()`) stands for "no issuer" and
/// renders as an empty string. It is what callers get both when no issuer
/// is configured and when the configured value does not parse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IssuerUri {
    raw: String,
    url: Option<Url>,
}

impl IssuerUri {
    /// Parse an RFC 3986 URI reference. Empty input yields the zero value.
    pub fn parse(raw: &str) -> Result<Self, IssuerUriError> {
        if raw.is_empty() {
            return Ok(Self::default());
        }
        check_characters(raw)?;

        let url = match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let first_segment = raw.split(['/', '?', '#']).next().unwrap_or_default();
                if first_segment.contains(':') {
                    return Err(IssuerUriError::ColonInFirstSegment);
                }
                None
            }
            Err(err) => return Err(IssuerUriError::Url(err)),
        };

        Ok(IssuerUri {
            raw: raw.to_string(),
            url,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether the URI has a scheme.
    pub fn is_absolute(&self) -> bool {
        self.url.is_some()
    }

    /// Parsed form of an absolute URI. Its serialisation may differ from
    /// [`as_str`](Self::as_str), e.g. by a trailing `/`.
    pub fn as_url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Path component as written, empty for the zero value.
    pub fn path(&self) -> &str {
        let end = self.raw.find(['?', '#']).unwrap_or(self.raw.len());
        let mut rest = &self.raw[..end];
        if self.url.is_some() {
            if let Some((_, after_scheme)) = rest.split_once(':') {
                rest = after_scheme;
            }
        }
        if let Some(after_slashes) = rest.strip_prefix("//") {
            rest = after_slashes
                .find('/')
                .map_or("", |slash| &after_slashes[slash..]);
        }
        rest
    }

    /// String form as configured, empty for the zero value.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn check_characters(raw: &str) -> Result<(), IssuerUriError> {
    let bytes = raw.as_bytes();
    let mut fragment_started = false;
    for (position, ch) in raw.char_indices() {
        match ch {
            '%' => {
                let hex = bytes.get(position + 1..position + 3);
                if !hex.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)) {
                    return Err(IssuerUriError::InvalidPercentEncoding { position });
                }
            }
            '#' if fragment_started => {
                return Err(IssuerUriError::InvalidCharacter { ch, position });
            }
            '#' => fragment_started = true,
            c if c.is_ascii_alphanumeric()
                || "-._~".contains(c)
                || SUB_DELIMS.contains(c)
                || GEN_DELIMS.contains(c) => {}
            _ => return Err(IssuerUriError::InvalidCharacter { ch, position }),
        }
    }
    Ok(())
}

impl fmt::Display for IssuerUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssuerUri {
    type Err = IssuerUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Url> for IssuerUri {
    fn from(url: Url) -> Self {
        IssuerUri {
            raw: url.as_str().to_string(),
            url: Some(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_value_is_empty() {
        let uri = IssuerUri::default();
        assert!(uri.is_empty());
        assert_eq!(uri.to_string(), "");
        assert_eq!(uri.path(), "");
        assert!(uri.as_url().is_none());
    }

    #[test]
    fn empty_input_parses_to_zero_value() {
        assert_eq!(IssuerUri::parse("").unwrap(), IssuerUri::default());
    }

    #[test]
    fn absolute_uri_is_kept_verbatim() {
        let uri: IssuerUri = "https://idp.example.com".parse().unwrap();
        assert_eq!(uri.to_string(), "https://idp.example.com");
        assert_eq!(uri.path(), "");
        assert!(uri.is_absolute());
        assert_eq!(uri.as_url().and_then(Url::host_str), Some("idp.example.com"));
    }

    #[test]
    fn absolute_uri_path_as_written() {
        let uri = IssuerUri::parse("https://idp.example.com/realms/photos?x=1#top").unwrap();
        assert_eq!(uri.path(), "/realms/photos");
        assert_eq!(uri.as_str(), "https://idp.example.com/realms/photos?x=1#top");
    }

    #[test]
    fn relative_reference_is_accepted() {
        let uri = IssuerUri::parse("test").unwrap();
        assert!(!uri.is_empty());
        assert!(!uri.is_absolute());
        assert_eq!(uri.path(), "test");
        assert_eq!(uri.to_string(), "test");

        assert_eq!(IssuerUri::parse("/realms/photos?x").unwrap().path(), "/realms/photos");
        assert_eq!(IssuerUri::parse("//idp.example.com/a").unwrap().path(), "/a");
    }

    #[test]
    fn invalid_references_are_rejected() {
        assert_eq!(
            IssuerUri::parse("not a valid uri???::"),
            Err(IssuerUriError::InvalidCharacter { ch: ' ', position: 3 })
        );
        assert_eq!(
            IssuerUri::parse("::bad::"),
            Err(IssuerUriError::ColonInFirstSegment)
        );
        assert_eq!(
            IssuerUri::parse("a%2"),
            Err(IssuerUriError::InvalidPercentEncoding { position: 1 })
        );
        assert!(matches!(IssuerUri::parse("https://"), Err(IssuerUriError::Url(_))));
        assert!(IssuerUri::parse("a#b#c").is_err());
    }
}
