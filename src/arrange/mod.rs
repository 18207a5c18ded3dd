/*!
 * Subtitle arrangement pipeline.
 *
 * Turns raw word-level captions into readable subtitles in two independently
 * toggleable stages:
 * - `dedup`: drop consecutively repeated captions
 * - `merge`: fold caption fragments into complete sentences
 *
 * Deduplication always runs before merging. The order matters: merging first
 * would join repeated fragments into one caption and hide the adjacency the
 * deduplicator relies on.
 */

pub mod dedup;
pub mod merge;

pub use dedup::remove_repeated;
pub use merge::{is_complete_sentence, merge_into_sentences};

use log::debug;

use crate::app_config::ArrangeConfig;
use crate::subtitle_processor::SubtitleEntry;

/// Apply the arrangement stages selected in `options` to `entries`.
///
/// A disabled stage is the identity transform. The returned entries are
/// renumbered from 1 regardless of which stages ran.
pub fn arrange(entries: Vec<SubtitleEntry>, options: ArrangeConfig) -> Vec<SubtitleEntry> {
    let mut arranged = entries;

    if options.remove_repeated {
        let before = arranged.len();
        arranged = dedup::remove_repeated(&arranged);
        debug!("Removed {} repeated caption(s)", before - arranged.len());
    }

    if options.merge {
        let before = arranged.len();
        arranged = merge_into_sentences(&arranged);
        debug!("Merged {} fragments into {} sentence(s)", before, arranged.len());
    }

    for (i, entry) in arranged.iter_mut().enumerate() {
        entry.seq_num = i + 1;
    }

    arranged
}
