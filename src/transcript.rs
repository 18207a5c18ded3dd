/*!
 * Word-timing input path.
 *
 * A transcription engine hands over one timed word at a time as seconds-based
 * floats. This module turns such a stream into subtitle entries, either as
 * structured values or as rendered SRT text. Both paths yield the same
 * captions for the same input.
 */

use std::path::Path;
use anyhow::{Result, Context};
use log::debug;

use crate::subtitle_processor::SubtitleEntry;

/// One timed word from a transcription engine
#[derive(Debug, Clone, PartialEq)]
pub struct TimedWord {
    /// Start offset in seconds
    pub start: f64,
    /// End offset in seconds
    pub end: f64,
    /// The recognized word
    pub text: String,
}

impl TimedWord {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        TimedWord { start, end, text: text.into() }
    }
}

/// Convert timed words directly into subtitle entries.
///
/// Words that are empty after trimming are dropped; entries are renumbered
/// from 1 over the words that remain.
pub fn words_to_entries(words: &[TimedWord]) -> Vec<SubtitleEntry> {
    let mut entries = Vec::with_capacity(words.len());

    for word in words {
        let text = word.text.trim();
        if text.is_empty() {
            continue;
        }
        entries.push(SubtitleEntry::new(
            entries.len() + 1,
            SubtitleEntry::seconds_to_ms(word.start),
            SubtitleEntry::seconds_to_ms(word.end),
            text.to_string(),
        ));
    }

    entries
}

/// Render timed words as word-level SRT text
pub fn words_to_srt(words: &[TimedWord]) -> String {
    let mut output = String::new();
    let mut index = 1;

    for word in words {
        let text = word.text.trim();
        if text.is_empty() {
            continue;
        }
        output.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index,
            SubtitleEntry::format_seconds(word.start),
            SubtitleEntry::format_seconds(word.end),
            text
        ));
        index += 1;
    }

    output
}

/// Write timed words to a word-level SRT file
pub fn write_words_to_srt<P: AsRef<Path>>(words: &[TimedWord], path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} timed word(s) to {}", words.len(), path.display());

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, words_to_srt(words))
        .with_context(|| format!("Failed to write subtitle file: {}", path.display()))
}
