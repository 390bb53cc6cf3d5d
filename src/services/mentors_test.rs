use super::*;

#[test]
fn mailto_uses_contact() {
    assert_eq!(MENTORS[0].mailto(), "mailto:co.h@example.edu");
}

#[test]
fn blank_query_lists_everyone() {
    assert_eq!(mentors_for_topic("  ").len(), MENTORS.len());
}

#[test]
fn topic_filter_is_case_insensitive_substring() {
    let found = mentors_for_topic("cntt");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].contact, "anh.t@company.com");

    let found = mentors_for_topic("THI CỬ");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].office, "Phòng Tư vấn");
}

#[test]
fn unknown_topic_matches_nobody() {
    assert!(mentors_for_topic("thiên văn").is_empty());
}
