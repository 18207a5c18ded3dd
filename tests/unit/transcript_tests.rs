/*!
 * Tests for the word-timing input path
 */

use anyhow::Result;
use subtidy::subtitle_processor::SubtitleCollection;
use subtidy::transcript::{words_to_entries, words_to_srt, write_words_to_srt, TimedWord};
use crate::common;

fn sample_words() -> Vec<TimedWord> {
    vec![
        TimedWord::new(1.0, 2.0, "I go"),
        TimedWord::new(2.0, 3.0, "I go"),
        TimedWord::new(3.0, 4.5, "home."),
    ]
}

#[test]
fn test_wordsToEntries_withSeconds_shouldTruncateToMilliseconds() {
    let words = vec![TimedWord::new(0.1239, 0.9996, "hi")];

    let entries = words_to_entries(&words);

    assert_eq!(entries[0].start_time_ms, 123);
    assert_eq!(entries[0].end_time_ms, 999);
}

#[test]
fn test_wordsToSrt_withSampleWords_shouldRenderBlocks() {
    let srt = words_to_srt(&sample_words());

    assert!(srt.starts_with("1\n00:00:01,000 --> 00:00:02,000\nI go\n\n"));
    assert!(srt.contains("3\n00:00:03,000 --> 00:00:04,500\nhome.\n\n"));
}

/// The textual and structured paths must produce identical entries for the
/// same logical data
#[test]
fn test_textualAndStructuredPaths_withSameWords_shouldAgree() -> Result<()> {
    let words = sample_words();

    let textual = SubtitleCollection::parse_srt_string(&words_to_srt(&words))?;
    let structured = words_to_entries(&words);

    assert_eq!(textual, structured);
    Ok(())
}

/// Blank words are dropped on both paths, keeping them in agreement
#[test]
fn test_bothPaths_withBlankWords_shouldDropAndStillAgree() -> Result<()> {
    let words = vec![
        TimedWord::new(0.0, 0.5, "   "),
        TimedWord::new(0.5, 1.0, "kept"),
        TimedWord::new(1.0, 1.5, ""),
    ];

    let textual = SubtitleCollection::parse_srt_string(&words_to_srt(&words))?;
    let structured = words_to_entries(&words);

    assert_eq!(structured.len(), 1);
    assert_eq!(textual, structured);
    Ok(())
}

#[test]
fn test_writeWordsToSrt_withTempDir_shouldWriteParseableFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("words.srt");

    write_words_to_srt(&sample_words(), &path)?;

    let collection = SubtitleCollection::from_srt_file(&path)?;
    assert_eq!(collection.entries, words_to_entries(&sample_words()));
    Ok(())
}
