use super::*;

// =============================================================================
// screen
// =============================================================================

#[test]
fn screen_matches_vietnamese_phrase() {
    assert_eq!(screen("Tôi chán sống quá"), Some("chán sống"));
}

#[test]
fn screen_ignores_neutral_text() {
    assert_eq!(screen("hôm nay đẹp trời"), None);
}

#[test]
fn screen_empty_text_is_none() {
    assert_eq!(screen(""), None);
}

#[test]
fn screen_is_case_insensitive() {
    assert_eq!(screen("I want to END MY LIFE"), Some("end my life"));
    assert_eq!(screen("Suicide"), Some("suicide"));
    assert_eq!(screen("TÔI MUỐN TỰ TỬ"), Some("tự tử"));
}

#[test]
fn screen_matches_inside_words() {
    assert_eq!(screen("antisuicidebook"), Some("suicide"));
}

#[test]
fn screen_prefers_list_order_over_position() {
    // "suicide" appears first in the text, "chán sống" first in the list.
    assert_eq!(screen("suicide... chán sống"), Some("chán sống"));
}

#[test]
fn screen_finds_every_keyword() {
    for keyword in CRISIS_KEYWORDS {
        let text = format!("xx {keyword} yy");
        assert!(screen(&text).is_some(), "{keyword} not detected");
    }
}

#[test]
fn screen_does_not_normalize_spacing() {
    assert_eq!(screen("chán  sống"), None);
    assert_eq!(screen("kill  myself"), None);
}

#[test]
fn screen_is_stateless() {
    assert!(screen("tự làm đau").is_some());
    assert!(screen("bình thường").is_none());
    assert!(screen("tự làm đau").is_some());
}

// =============================================================================
// CrisisAlert
// =============================================================================

#[test]
fn alert_starts_hidden() {
    assert!(!CrisisAlert::new().is_visible());
}

#[test]
fn alert_shows_on_match() {
    let mut alert = CrisisAlert::new();
    assert_eq!(alert.observe("Tôi chán sống quá"), Some("chán sống"));
    assert!(alert.is_visible());
}

#[test]
fn alert_stays_hidden_without_match() {
    let mut alert = CrisisAlert::new();
    assert_eq!(alert.observe("hôm nay đẹp trời"), None);
    assert!(!alert.is_visible());
}

#[test]
fn alert_non_matching_input_does_not_hide() {
    let mut alert = CrisisAlert::new();
    alert.observe("suicide");
    alert.observe("ok");
    assert!(alert.is_visible());
}

#[test]
fn dismiss_does_not_suppress_future_detection() {
    let mut alert = CrisisAlert::new();
    alert.observe("kill myself");
    alert.dismiss();
    assert!(!alert.is_visible());
    alert.observe("kill myself");
    assert!(alert.is_visible());
}

// =============================================================================
// CRISIS_NOTICE
// =============================================================================

#[test]
fn notice_mentions_emergency_number() {
    assert!(CRISIS_NOTICE.message.contains("115"));
    assert_eq!(CRISIS_NOTICE.resources.len(), 3);
}
