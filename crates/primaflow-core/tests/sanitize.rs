use primaflow_core::sanitize::{
    sanitize_email, sanitize_phone, sanitize_text,
};

#[test]
fn escapes_html_entities() {
    let out = sanitize_text("<b>bold</b> & \"quoted\"", 1000);
    assert_eq!(out, "&lt;b&gt;bold&lt;/b&gt; &amp; &quot;quoted&quot;");
}

#[test]
fn strips_event_handlers() {
    let out = sanitize_text("hello onclick=\"alert(1)\" world", 1000);
    assert!(!out.to_lowercase().contains("onclick"));
    assert!(out.contains("hello"));
}

#[test]
fn truncates_to_max_length() {
    let long = "a".repeat(2000);
    let out = sanitize_text(&long, 1000);
    assert_eq!(out.len(), 1000);
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(sanitize_text("", 1000), "");
}

#[test]
fn email_is_lowercased_and_shape_checked() {
    assert_eq!(sanitize_email("  Jamie@Example.COM "), "jamie@example.com");
    assert_eq!(sanitize_email("nonsense"), "");
    assert_eq!(sanitize_email("a b@example.com"), "");
}

#[test]
fn email_entities_are_decoded_before_the_shape_check() {
    assert_eq!(
        sanitize_email("Jamie&amp;Co@example.com"),
        "jamie&co@example.com"
    );
    assert_eq!(
        sanitize_email("o&#x27;brien@example.com"),
        "o'brien@example.com"
    );
}

#[test]
fn phone_keeps_digit_class_characters_only() {
    assert_eq!(
        sanitize_phone("(555) 010-0199 ext<script>").as_deref(),
        Some("(555) 010-0199")
    );
    assert_eq!(sanitize_phone("abc"), None);
}
