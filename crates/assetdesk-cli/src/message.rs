//! Reading request text from files, stdin, and raw email messages.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole input; `-` means stdin.
pub fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read request from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input)
        .with_context(|| format!("failed to read request {}", input.display()))
}

fn looks_like_header(line: &str) -> bool {
    let Some((name, _)) = line.split_once(':') else {
        return false;
    };
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Body of an RFC 822 style message.
///
/// When the text starts with a header block, everything up to the first blank
/// line is dropped. Text without headers is returned unchanged.
pub fn message_body(raw: &str) -> &str {
    let first = raw.lines().next().unwrap_or("");
    if !looks_like_header(first) {
        return raw;
    }

    for sep in ["\r\n\r\n", "\n\n"] {
        if let Some(idx) = raw.find(sep) {
            return &raw[idx + sep.len()..];
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_header_block() {
        let raw = "From: jane@example.com\nSubject: New laptop\n\nHello IT,\nI need a laptop.";
        assert_eq!(message_body(raw), "Hello IT,\nI need a laptop.");
    }

    #[test]
    fn test_crlf_messages_are_supported() {
        let raw = "Subject: hi\r\nTo: it@example.com\r\n\r\nBody here";
        assert_eq!(message_body(raw), "Body here");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let raw = "Hello IT Support,\n\nI need a Dell Latitude.";
        assert_eq!(message_body(raw), raw);
    }

    #[test]
    fn test_headers_without_body_give_empty_text() {
        assert_eq!(message_body("Subject: empty"), "");
    }
}
