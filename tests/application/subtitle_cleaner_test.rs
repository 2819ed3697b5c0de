use ytsubs::application::services::{CleanError, clean_srt};

#[test]
fn given_two_cue_srt_when_cleaning_then_joins_text_with_space() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\nHello\n\n2\n00:00:02,000 --> 00:00:04,000\nworld\n";
    assert_eq!(clean_srt(srt).unwrap(), "Hello world");
}

#[test]
fn given_multi_line_cue_when_cleaning_then_keeps_every_text_line() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\nfirst line\nsecond line\n\n";
    assert_eq!(clean_srt(srt).unwrap(), "first line second line");
}

#[test]
fn given_padded_lines_when_cleaning_then_trims_each_line() {
    let srt = "  1  \n 00:00:00,000 --> 00:00:02,000 \n   padded text   \r\n\n";
    assert_eq!(clean_srt(srt).unwrap(), "padded text");
}

#[test]
fn given_numeric_text_line_when_cleaning_then_drops_it() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\n2024\nyear\n\n";
    assert_eq!(clean_srt(srt).unwrap(), "year");
}

#[test]
fn given_text_containing_digits_when_cleaning_then_keeps_it() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\n3 apples\n\n";
    assert_eq!(clean_srt(srt).unwrap(), "3 apples");
}

#[test]
fn given_text_containing_arrow_when_cleaning_then_drops_it() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\nleft --> right\nkept\n\n";
    assert_eq!(clean_srt(srt).unwrap(), "kept");
}

#[test]
fn given_only_index_and_timing_lines_when_cleaning_then_no_extractable_text() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\n\n2\n00:00:02,000 --> 00:00:04,000\n\n";
    assert_eq!(clean_srt(srt), Err(CleanError::NoExtractableText));
}

#[test]
fn given_empty_input_when_cleaning_then_no_extractable_text() {
    assert_eq!(clean_srt(""), Err(CleanError::NoExtractableText));
}
