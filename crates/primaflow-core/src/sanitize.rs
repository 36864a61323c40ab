//! Input sanitization for visitor-provided free text.
//!
//! Free-text answers are echoed back in follow-up emails and the CRM, so
//! they are escaped and stripped before they ever leave the client.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap()
});

static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)on\w+\s*=\s*["']?[^"']*["']?"#).unwrap()
});

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-\+\(\)]{10,}$").unwrap());

static PHONE_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d\s\-\+\(\)]").unwrap());

/// Sanitize user-provided text: truncate, escape HTML entities, then strip
/// script tags and inline event handlers that survived escaping.
pub fn sanitize_text(text: &str, max_length: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let truncated: String = text.chars().take(max_length).collect();
    let escaped = escape_html(&truncated);
    let no_scripts = SCRIPT_TAG.replace_all(&escaped, "");
    let cleaned = EVENT_HANDLER.replace_all(&no_scripts, "");
    cleaned.trim().to_string()
}

/// Lowercase, trim, decode HTML entities, and shape-check an email
/// address. Returns an empty string when the input does not look like an
/// email at all.
pub fn sanitize_email(email: &str) -> String {
    let email = unescape_html(&email.trim().to_lowercase());
    if EMAIL_SHAPE.is_match(&email) { email } else { String::new() }
}

/// Strip a phone number down to digit-class characters. Returns `None`
/// when nothing usable remains.
pub fn sanitize_phone(phone: &str) -> Option<String> {
    let stripped = PHONE_STRIP.replace_all(phone, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_SHAPE.is_match(phone)
}

// Inverse of `escape_html`. `&amp;` goes last so already-decoded
// entities are not decoded twice.
fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}
