use crate::domain::{AUTO_GENERATED_PREFIX, CaptionTrack, CaptionTrackMap};

/// Requested language that accepts whichever track the video has.
pub const ANY_LANGUAGE: &str = "auto";

const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    Exact,
    AutoGenerated,
    AnyTrack,
    EnglishFallback,
    AutoGeneratedEnglishFallback,
}

impl SelectionRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionRule::Exact => "exact",
            SelectionRule::AutoGenerated => "auto_generated",
            SelectionRule::AnyTrack => "any_track",
            SelectionRule::EnglishFallback => "english_fallback",
            SelectionRule::AutoGeneratedEnglishFallback => "auto_generated_english_fallback",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    Found {
        track: &'a CaptionTrack,
        rule: SelectionRule,
    },
    /// The video has no caption tracks at all.
    Unavailable,
    NotFound { available: Vec<String> },
}

/// Picks the track to serve for `language`.
///
/// Rules are tried in order: the exact code, its auto-generated variant, any
/// track when `language` is `auto`, then `en` and `a.en`.
pub fn select_track<'a>(captions: &'a CaptionTrackMap, language: &str) -> Selection<'a> {
    if captions.is_empty() {
        return Selection::Unavailable;
    }

    let auto_generated = format!("{AUTO_GENERATED_PREFIX}{language}");
    let auto_generated_fallback = format!("{AUTO_GENERATED_PREFIX}{FALLBACK_LANGUAGE}");

    let rules = [
        (SelectionRule::Exact, captions.get(language)),
        (SelectionRule::AutoGenerated, captions.get(&auto_generated)),
        (
            SelectionRule::AnyTrack,
            (language == ANY_LANGUAGE)
                .then(|| captions.first())
                .flatten(),
        ),
        (SelectionRule::EnglishFallback, captions.get(FALLBACK_LANGUAGE)),
        (
            SelectionRule::AutoGeneratedEnglishFallback,
            captions.get(&auto_generated_fallback),
        ),
    ];

    rules
        .into_iter()
        .find_map(|(rule, track)| track.map(|track| Selection::Found { track, rule }))
        .unwrap_or_else(|| Selection::NotFound {
            available: captions.codes(),
        })
}
