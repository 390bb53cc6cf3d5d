use super::*;
use crate::store::MemoryStore;

#[test]
fn palette_has_seven_distinct_emoji() {
    let emoji: std::collections::HashSet<&str> = Mood::PALETTE.iter().map(|m| m.emoji()).collect();
    assert_eq!(emoji.len(), 7);
    assert_eq!(Mood::PALETTE[0].emoji(), "😄");
    assert_eq!(Mood::PALETTE[6].emoji(), "😴");
}

#[test]
fn from_str_accepts_emoji_and_name() {
    assert_eq!("😢".parse::<Mood>(), Ok(Mood::Sad));
    assert_eq!("Tired".parse::<Mood>(), Ok(Mood::Tired));
    assert_eq!(" neutral ".parse::<Mood>(), Ok(Mood::Neutral));
    assert!("🤖".parse::<Mood>().is_err());
}

#[test]
fn record_prepends_sample() {
    let mut board = MoodBoard::open(Arc::new(MemoryStore::new()));
    assert!(board.samples().is_empty());
    board.record(Mood::Joyful);
    board.record(Mood::Sad);
    let moods: Vec<Mood> = board.samples().iter().map(|s| s.mood).collect();
    assert_eq!(moods, vec![Mood::Sad, Mood::Joyful]);
}

#[test]
fn samples_use_short_wire_names() {
    let store = Arc::new(MemoryStore::new());
    MoodBoard::open(store.clone()).record(Mood::Content);
    let raw = store.get("ss_mood").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["m"], "🙂");
    assert!(json[0]["t"].is_string());
}

#[test]
fn reads_stored_samples() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            "ss_mood",
            r#"[{"id":"0b6f8d2c-3a41-4f7e-8c55-1e2d3c4b5a69","m":"😤","t":"2024-10-01T12:00:00.000Z"}]"#,
        )
        .unwrap();
    let board = MoodBoard::open(store);
    assert_eq!(board.samples()[0].mood, Mood::Frustrated);
}
