use std::sync::LazyLock;

use regex::Regex;

const TIMING_SEPARATOR: &str = "-->";

static SEQUENCE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CleanError {
    #[error("no extractable text in subtitles")]
    NoExtractableText,
}

/// Flattens SRT text into the spoken words, one space between cue lines.
pub fn clean_srt(srt: &str) -> Result<String, CleanError> {
    let text = srt
        .lines()
        .map(str::trim)
        .filter(|line| is_spoken_text(line))
        .collect::<Vec<_>>()
        .join(" ");

    if text.trim().is_empty() {
        return Err(CleanError::NoExtractableText);
    }

    Ok(text)
}

fn is_spoken_text(line: &str) -> bool {
    !line.is_empty() && !SEQUENCE_NUMBER.is_match(line) && !line.contains(TIMING_SEPARATOR)
}
