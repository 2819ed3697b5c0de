use std::sync::LazyLock;

use regex::Regex;

use crate::application::ports::CaptionSourceError;

static SRV3_CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p\b([^>]*)>(.*?)</p>").unwrap());
static LEGACY_CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text\b([^>]*)>(.*?)</text>").unwrap());
static INLINE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z]+)="([^"]*)""#).unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub start_ms: u64,
    pub duration_ms: u64,
    pub text: String,
}

impl Cue {
    /// Saturates instead of overflowing on absurd upstream timings.
    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }
}

/// Forces the `srv3` timed-text format on a track URL.
pub fn srv3_url(source_url: &str) -> Result<reqwest::Url, CaptionSourceError> {
    let mut url = reqwest::Url::parse(source_url)
        .map_err(|e| CaptionSourceError::MalformedResponse(format!("track url: {}", e)))?;

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "fmt")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(&pairs)
        .append_pair("fmt", "srv3");

    Ok(url)
}

/// Parses a timed-text document into cues.
///
/// Both the `format="3"` body (`<p t="ms" d="ms">`) and the legacy transcript
/// body (`<text start="s" dur="s">`) are accepted. Cues without text are dropped.
pub fn parse_timed_text(xml: &str) -> Result<Vec<Cue>, CaptionSourceError> {
    if xml.contains("<timedtext") && SRV3_CUE.is_match(xml) {
        return collect_cues(&SRV3_CUE, xml, srv3_timing);
    }
    if xml.contains("<transcript") {
        return collect_cues(&LEGACY_CUE, xml, legacy_timing);
    }
    if xml.contains("<timedtext") {
        return Ok(Vec::new());
    }
    Err(CaptionSourceError::TimedTextParse(
        "document is neither timedtext nor transcript".to_string(),
    ))
}

pub fn to_srt(cues: &[Cue]) -> String {
    let mut srt = String::new();
    for (index, cue) in cues.iter().enumerate() {
        srt.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            format_timestamp(cue.start_ms),
            format_timestamp(cue.end_ms()),
            cue.text
        ));
    }
    srt
}

pub fn render_srt(xml: &str) -> Result<String, CaptionSourceError> {
    Ok(to_srt(&parse_timed_text(xml)?))
}

/// `HH:MM:SS,mmm`
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = ms % 3_600_000 / 60_000;
    let seconds = ms % 60_000 / 1_000;
    let millis = ms % 1_000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

fn collect_cues(
    pattern: &Regex,
    xml: &str,
    timing: fn(&str) -> Result<(u64, u64), CaptionSourceError>,
) -> Result<Vec<Cue>, CaptionSourceError> {
    let mut cues = Vec::new();
    for caps in pattern.captures_iter(xml) {
        let text = cue_text(&caps[2]);
        if text.is_empty() {
            continue;
        }
        let (start_ms, duration_ms) = timing(&caps[1])?;
        cues.push(Cue {
            start_ms,
            duration_ms,
            text,
        });
    }
    Ok(cues)
}

fn cue_text(raw: &str) -> String {
    let stripped = INLINE_TAG.replace_all(raw, "");
    html_escape::decode_html_entities(&stripped)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn attribute<'a>(attributes: &'a str, name: &str) -> Option<&'a str> {
    ATTRIBUTE
        .captures_iter(attributes)
        .find(|caps| &caps[1] == name)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

fn srv3_timing(attributes: &str) -> Result<(u64, u64), CaptionSourceError> {
    let start = required(attributes, "t").and_then(|v| parse_millis(v, "t"))?;
    let duration = optional(attributes, "d", parse_millis)?;
    Ok((start, duration))
}

fn legacy_timing(attributes: &str) -> Result<(u64, u64), CaptionSourceError> {
    let start = required(attributes, "start").and_then(|v| parse_seconds(v, "start"))?;
    let duration = optional(attributes, "dur", parse_seconds)?;
    Ok((start, duration))
}

fn required<'a>(attributes: &'a str, name: &str) -> Result<&'a str, CaptionSourceError> {
    attribute(attributes, name)
        .ok_or_else(|| CaptionSourceError::TimedTextParse(format!("missing '{}'", name)))
}

fn optional(
    attributes: &str,
    name: &str,
    parse: fn(&str, &str) -> Result<u64, CaptionSourceError>,
) -> Result<u64, CaptionSourceError> {
    attribute(attributes, name)
        .map(|value| parse(value, name))
        .transpose()
        .map(Option::unwrap_or_default)
}

fn parse_millis(value: &str, name: &str) -> Result<u64, CaptionSourceError> {
    value
        .parse()
        .map_err(|_| CaptionSourceError::TimedTextParse(format!("bad '{}': {}", name, value)))
}

fn parse_seconds(value: &str, name: &str) -> Result<u64, CaptionSourceError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(|secs| (secs * 1000.0).round() as u64)
        .ok_or_else(|| CaptionSourceError::TimedTextParse(format!("bad '{}': {}", name, value)))
}
