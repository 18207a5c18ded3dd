/*!
 * Removal of consecutively repeated captions.
 *
 * Word-timestamped transcription tends to emit the same caption text several
 * times in a row when a word is held or repeated by the model. Only the first
 * entry of such a run is worth keeping.
 */

use crate::subtitle_processor::SubtitleEntry;

/// Drop entries whose trimmed text equals the text of the previously kept
/// entry. Comparison is exact and case-sensitive. The kept entry retains its
/// own start and end times; the run is not widened to cover dropped entries.
/// Duplicates separated by a different caption are all kept. Output entries
/// are renumbered from 1.
pub fn remove_repeated(entries: &[SubtitleEntry]) -> Vec<SubtitleEntry> {
    let mut kept: Vec<SubtitleEntry> = Vec::with_capacity(entries.len());
    let mut previous_text: Option<&str> = None;

    for entry in entries {
        let text = entry.text.trim();
        if previous_text == Some(text) {
            continue;
        }
        previous_text = Some(text);

        let mut entry = entry.clone();
        entry.seq_num = kept.len() + 1;
        kept.push(entry);
    }

    kept
}
