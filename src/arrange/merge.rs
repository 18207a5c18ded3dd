/*!
 * Merging of caption fragments into complete sentences.
 *
 * Word-level captions carry one or two words each. Consecutive fragments are
 * folded into a single caption until the accumulated text ends with a
 * sentence-terminal marker. Besides ASCII terminal punctuation the marker set
 * contains Korean sentence-final verb suffixes, since spoken Korean often
 * closes a sentence without punctuation. The set is a practical proxy, not a
 * parser: text in languages it does not cover simply under-merges.
 */

use crate::subtitle_processor::SubtitleEntry;

/// Sentence-terminal markers, matched as suffixes of the trimmed text
const SENTENCE_ENDINGS: [&str; 10] = [
    ".", "!", "?", "니다", "어요", "에요", "예요", "구요", "고요", "죠",
];

/// Whether the text reads as a complete sentence
pub fn is_complete_sentence(text: &str) -> bool {
    let trimmed = text.trim_end();
    SENTENCE_ENDINGS.iter().any(|ending| trimmed.ends_with(ending))
}

/// Fold consecutive entries into sentence-sized entries.
///
/// The accumulator is flushed before consuming an entry whenever its text
/// already forms a complete sentence. Fragment texts are joined with a single
/// space; a merged entry spans from the first constituent's start time to the
/// last constituent's end time. A trailing unterminated accumulator is
/// flushed as-is at end of input. Output entries are renumbered from 1.
pub fn merge_into_sentences(entries: &[SubtitleEntry]) -> Vec<SubtitleEntry> {
    let mut merged: Vec<SubtitleEntry> = Vec::new();
    let mut text = String::new();
    let mut start_ms: Option<u64> = None;
    let mut end_ms: u64 = 0;

    for entry in entries {
        if !text.is_empty() && is_complete_sentence(&text) {
            merged.push(SubtitleEntry::new(
                merged.len() + 1,
                start_ms.unwrap_or(0),
                end_ms,
                std::mem::take(&mut text),
            ));
            start_ms = None;
        }

        if start_ms.is_none() {
            start_ms = Some(entry.start_time_ms);
        }
        end_ms = entry.end_time_ms;

        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(entry.text.trim());
    }

    if !text.is_empty() {
        merged.push(SubtitleEntry::new(
            merged.len() + 1,
            start_ms.unwrap_or(0),
            end_ms,
            text,
        ));
    }

    merged
}
