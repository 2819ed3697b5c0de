use ytsubs::application::services::{Selection, SelectionRule, select_track};
use ytsubs::domain::{CaptionTrack, CaptionTrackMap};

fn tracks(codes: &[&str]) -> CaptionTrackMap {
    codes
        .iter()
        .map(|code| CaptionTrack::new(*code, *code, format!("https://example.com/{}", code)))
        .collect()
}

fn selected(selection: Selection<'_>) -> (String, SelectionRule) {
    match selection {
        Selection::Found { track, rule } => (track.code.clone(), rule),
        other => panic!("expected a track, got {:?}", other),
    }
}

#[test]
fn given_exact_code_when_selecting_then_returns_exact_track() {
    let map = tracks(&["en", "uk", "a.uk"]);
    assert_eq!(
        selected(select_track(&map, "uk")),
        ("uk".to_string(), SelectionRule::Exact)
    );
}

#[test]
fn given_only_auto_generated_variant_when_selecting_then_returns_it() {
    let map = tracks(&["a.uk"]);
    assert_eq!(
        selected(select_track(&map, "uk")),
        ("a.uk".to_string(), SelectionRule::AutoGenerated)
    );
}

#[test]
fn given_auto_generated_variant_and_english_when_selecting_then_prefers_variant() {
    let map = tracks(&["en", "a.uk"]);
    assert_eq!(selected(select_track(&map, "uk")).0, "a.uk");
}

#[test]
fn given_requested_language_missing_when_selecting_then_falls_back_to_english() {
    let map = tracks(&["en"]);
    assert_eq!(
        selected(select_track(&map, "uk")),
        ("en".to_string(), SelectionRule::EnglishFallback)
    );
}

#[test]
fn given_only_auto_generated_english_when_selecting_then_falls_back_to_it() {
    let map = tracks(&["de", "a.en"]);
    assert_eq!(
        selected(select_track(&map, "uk")),
        ("a.en".to_string(), SelectionRule::AutoGeneratedEnglishFallback)
    );
}

#[test]
fn given_english_and_auto_english_when_falling_back_then_prefers_uploaded_english() {
    let map = tracks(&["a.en", "en"]);
    assert_eq!(selected(select_track(&map, "fr")).0, "en");
}

#[test]
fn given_auto_sentinel_when_selecting_then_returns_some_track() {
    let map = tracks(&["de", "fr"]);
    let (code, rule) = selected(select_track(&map, "auto"));
    assert!(map.get(&code).is_some());
    assert_eq!(rule, SelectionRule::AnyTrack);
}

#[test]
fn given_track_coded_auto_when_selecting_auto_then_exact_match_wins() {
    let map = tracks(&["de", "auto"]);
    assert_eq!(
        selected(select_track(&map, "auto")),
        ("auto".to_string(), SelectionRule::Exact)
    );
}

#[test]
fn given_no_match_when_selecting_then_not_found_lists_available_codes() {
    let map = tracks(&["de", "a.fr"]);
    assert_eq!(
        select_track(&map, "uk"),
        Selection::NotFound {
            available: vec!["de".to_string(), "a.fr".to_string()],
        }
    );
}

#[test]
fn given_empty_map_when_selecting_then_unavailable() {
    let map = CaptionTrackMap::new();
    assert_eq!(select_track(&map, "uk"), Selection::Unavailable);
}

#[test]
fn given_empty_map_when_selecting_auto_then_unavailable_not_not_found() {
    let map = CaptionTrackMap::new();
    assert_eq!(select_track(&map, "auto"), Selection::Unavailable);
}
