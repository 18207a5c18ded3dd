/*!
 * Tests for the timestamp codec and SRT parsing functionality
 */

use std::fmt::Write;
use anyhow::Result;
use rand::Rng;
use subtidy::subtitle_processor::{SrtParser, SubtitleCollection, SubtitleEntry};
use crate::common;

/// Test timestamp formatting from milliseconds
#[test]
fn test_formatTimestamp_withVariousValues_shouldZeroPad() {
    assert_eq!(SubtitleEntry::format_timestamp(0), "00:00:00,000");
    assert_eq!(SubtitleEntry::format_timestamp(5_025_678), "01:23:45,678");
    assert_eq!(SubtitleEntry::format_timestamp(61_234), "00:01:01,234");
}

/// Hours are not wrapped at 24
#[test]
fn test_formatTimestamp_withMoreThanADay_shouldNotWrapHours() {
    // 25 hours
    assert_eq!(SubtitleEntry::format_timestamp(25 * 3_600_000), "25:00:00,000");
}

#[test]
fn test_secondsToMs_withFraction_shouldTruncateNotRound() {
    assert_eq!(SubtitleEntry::seconds_to_ms(1.9999), 1999);
    assert_eq!(SubtitleEntry::seconds_to_ms(0.0005), 0);
    assert_eq!(SubtitleEntry::seconds_to_ms(2.5), 2500);
}

#[test]
fn test_secondsToMs_withNegativeInput_shouldClampToZero() {
    assert_eq!(SubtitleEntry::seconds_to_ms(-3.2), 0);
}

#[test]
fn test_formatSeconds_withFractionalSeconds_shouldRenderTimestamp() {
    assert_eq!(SubtitleEntry::format_seconds(4.5004), "00:00:04,500");
    assert_eq!(SubtitleEntry::format_seconds(3661.25), "01:01:01,250");
}

/// Test timestamp range parsing with the exact expected shape
#[test]
fn test_parseTimestampRange_withValidLine_shouldReturnBothTimes() {
    let range = SubtitleEntry::parse_timestamp_range("00:00:01,000 --> 00:00:04,500");
    assert_eq!(range, Some((1000, 4500)));
}

/// Anything looser than the exact pattern is rejected
#[test]
fn test_parseTimestampRange_withLenientVariants_shouldReturnNone() {
    // Missing zero padding
    assert_eq!(SubtitleEntry::parse_timestamp_range("0:00:01,000 --> 00:00:04,500"), None);
    // Double space around the arrow
    assert_eq!(SubtitleEntry::parse_timestamp_range("00:00:01,000  -->  00:00:04,500"), None);
    // Dot instead of comma
    assert_eq!(SubtitleEntry::parse_timestamp_range("00:00:01.000 --> 00:00:04.500"), None);
    // Trailing garbage
    assert_eq!(SubtitleEntry::parse_timestamp_range("00:00:01,000 --> 00:00:04,500 X1"), None);
    // Not a range at all
    assert_eq!(SubtitleEntry::parse_timestamp_range("hello"), None);
    assert_eq!(SubtitleEntry::parse_timestamp_range(""), None);
}

/// Round-trip: a range line built from two formatted values parses back to
/// the same millisecond values
#[test]
fn test_parseTimestampRange_withFormattedValues_shouldRoundTrip() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        // Keep below 100 hours so the fixed-width 2-digit hour field holds
        let start: f64 = rng.random_range(0.0..359_999.0);
        let end: f64 = rng.random_range(0.0..359_999.0);

        let line = format!(
            "{} --> {}",
            SubtitleEntry::format_seconds(start),
            SubtitleEntry::format_seconds(end)
        );

        let parsed = SubtitleEntry::parse_timestamp_range(&line)
            .expect("formatted range line should parse");
        assert_eq!(parsed.0, SubtitleEntry::seconds_to_ms(start));
        assert_eq!(parsed.1, SubtitleEntry::seconds_to_ms(end));
    }
}

/// Test subtitle entry display formatting
#[test]
fn test_subtitleEntryDisplay_withValidEntry_shouldRenderCanonicalBlock() {
    let entry = SubtitleEntry::new(1, 5000, 10000, "Test subtitle".to_string());
    let mut output = String::new();
    write!(output, "{}", entry).unwrap();

    assert_eq!(output, "1\n00:00:05,000 --> 00:00:10,000\nTest subtitle\n\n");
}

#[test]
fn test_parseSrtString_withWellFormedBlocks_shouldParseAll() -> Result<()> {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:02,000 --> 00:00:03,000\nworld\n";

    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "Hello");
    assert_eq!(entries[0].start_time_ms, 1000);
    assert_eq!(entries[0].end_time_ms, 2000);
    assert_eq!(entries[1].text, "world");
    Ok(())
}

/// Input sequence numbers are discarded; output is renumbered from 1
#[test]
fn test_parseSrtString_withArbitraryIndices_shouldRenumber() -> Result<()> {
    let content = "17\n00:00:01,000 --> 00:00:02,000\nA\n\n4\n00:00:02,000 --> 00:00:03,000\nB\n";

    let entries = SubtitleCollection::parse_srt_string(content)?;

    let seq_nums: Vec<usize> = entries.iter().map(|e| e.seq_num).collect();
    assert_eq!(seq_nums, vec![1, 2]);
    Ok(())
}

/// A dangling index line with no timestamp after it produces no record
#[test]
fn test_parseSrtString_withTruncatedTrailingBlock_shouldDropIt() -> Result<()> {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n";

    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Hello");
    Ok(())
}

/// An index followed by something that is not a range aborts that block; the
/// offending line is re-examined as the start of the next block
#[test]
fn test_parseSrtString_withIndexNotFollowedByRange_shouldResyncOnNextBlock() -> Result<()> {
    let content = "1\n2\n00:00:02,000 --> 00:00:03,000\nRecovered\n";

    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Recovered");
    Ok(())
}

/// Only the first text line of a block is captured
#[test]
fn test_parseSrtString_withMultipleTextLines_shouldKeepOnlyFirst() -> Result<()> {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nfirst line\nsecond line\n\n2\n00:00:02,000 --> 00:00:03,000\nnext\n";

    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "first line");
    assert_eq!(entries[1].text, "next");
    Ok(())
}

/// Empty input is valid and parses to an empty collection
#[test]
fn test_parseSrtString_withEmptyInput_shouldReturnEmpty() -> Result<()> {
    assert!(SubtitleCollection::parse_srt_string("")?.is_empty());
    assert!(SubtitleCollection::parse_srt_string("\n\n\n")?.is_empty());
    assert!(SubtitleCollection::parse_srt_string("no srt content here")?.is_empty());
    Ok(())
}

/// Reversed time ranges pass through unvalidated
#[test]
fn test_parseSrtString_withEndBeforeStart_shouldPassThrough() -> Result<()> {
    let content = "1\n00:00:05,000 --> 00:00:02,000\nbackwards\n";

    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].start_time_ms, 5000);
    assert_eq!(entries[0].end_time_ms, 2000);
    Ok(())
}

/// The lazy parser works over any in-memory line sequence and counts
/// skipped blocks
#[test]
fn test_srtParser_withOwnedLines_shouldParseAndCountSkipped() {
    let lines: Vec<String> = vec![
        "1".to_string(),
        "00:00:01,000 --> 00:00:02,000".to_string(),
        "Hello".to_string(),
        "".to_string(),
        "2".to_string(),
        "not a timestamp".to_string(),
    ];

    let mut parser = SrtParser::new(lines.into_iter());
    let entries: Vec<SubtitleEntry> = parser.by_ref().collect();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Hello");
    assert_eq!(parser.skipped_blocks(), 1);
}

/// Parse and serialize a file through the collection API
#[test]
fn test_subtitleCollection_fileRoundTrip_shouldPreserveBlocks() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_word_level_subtitle(&temp_dir.path().to_path_buf(), "words.srt")?;

    let collection = SubtitleCollection::from_srt_file(&input)?;
    assert_eq!(collection.entries.len(), 5);
    assert_eq!(collection.source_file, input);

    let output_path = temp_dir.path().join("copy.srt");
    collection.write_to_srt(&output_path)?;

    let reparsed = SubtitleCollection::from_srt_file(&output_path)?;
    assert_eq!(reparsed.entries, collection.entries);
    Ok(())
}

#[test]
fn test_toSrtString_withEntries_shouldConcatenateBlocks() {
    let mut collection = SubtitleCollection::new("mem.srt".into());
    collection.entries.push(SubtitleEntry::new(1, 0, 1000, "one".to_string()));
    collection.entries.push(SubtitleEntry::new(2, 1000, 2000, "two".to_string()));

    let srt = collection.to_srt_string();

    assert_eq!(srt, "1\n00:00:00,000 --> 00:00:01,000\none\n\n2\n00:00:01,000 --> 00:00:02,000\ntwo\n\n");
}
