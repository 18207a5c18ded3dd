/*!
 * # subtidy - word-level subtitle arranger
 *
 * A Rust library for turning word-level speech-transcription timing output
 * into clean, human-readable SRT subtitle files.
 *
 * ## Features
 *
 * - Parse word-level SRT files with lenient handling of malformed blocks
 * - Remove consecutively repeated captions
 * - Merge caption fragments into complete sentences using terminal
 *   punctuation and Korean sentence-final suffixes
 * - Convert timed words from a transcription engine straight into SRT
 * - Batch processing of subtitle folders
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Timestamp codec, SRT parsing and serialization
 * - `arrange`: The arrangement pipeline:
 *   - `arrange::dedup`: Removal of consecutively repeated captions
 *   - `arrange::merge`: Sentence merging
 * - `transcript`: Word-timing input from a transcription engine
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod arrange;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod transcript;

// Re-export main types for easier usage
pub use app_config::{ArrangeConfig, Config};
pub use app_controller::Controller;
pub use arrange::{arrange, merge_into_sentences, remove_repeated};
pub use errors::{AppError, SubtitleError};
pub use subtitle_processor::{SrtParser, SubtitleCollection, SubtitleEntry};
pub use transcript::TimedWord;
