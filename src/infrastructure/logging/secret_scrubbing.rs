use regex::Regex;
use std::fmt;

/// Scrubs credentials from log messages before they are emitted
#[derive(Clone)]
pub struct SecretScrubber {
    basic_pattern: Regex,
    bearer_pattern: Regex,
    password_pattern: Regex,
    url_userinfo_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new secret scrubber
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            // Match Basic credentials in Authorization headers
            basic_pattern: Regex::new(r"Basic\s+[A-Za-z0-9+/=]+")?,
            // Match Bearer tokens in Authorization headers
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+")?,
            // Match password fields
            password_pattern: Regex::new(r#"["']?password["']?\s*[:=]\s*["']?([^"'\s,}]+)["']?"#)?,
            // Match user:pass@ in URLs
            url_userinfo_pattern: Regex::new(r"(https?://)[^/\s:@]+:[^/\s@]+@")?,
        })
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let mut scrubbed = self
            .basic_pattern
            .replace_all(message, "Basic [CREDENTIALS_REDACTED]")
            .to_string();
        scrubbed = self
            .bearer_pattern
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .to_string();
        scrubbed = self
            .password_pattern
            .replace_all(&scrubbed, "password=[REDACTED]")
            .to_string();
        scrubbed = self
            .url_userinfo_pattern
            .replace_all(&scrubbed, "${1}[REDACTED]@")
            .to_string();
        scrubbed
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
