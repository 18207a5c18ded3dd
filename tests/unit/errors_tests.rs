/*!
 * Tests for error types and conversions
 */

use subtidy::errors::{AppError, SubtitleError};

#[test]
fn test_subtitleError_unsupportedFormat_shouldDisplayCorrectly() {
    let error = SubtitleError::UnsupportedFormat { path: "movie.mkv".to_string() };
    let display = format!("{}", error);
    assert!(display.contains("Unsupported subtitle format"));
    assert!(display.contains("movie.mkv"));
}

#[test]
fn test_subtitleError_invalidTimestamp_shouldDisplayCorrectly() {
    let error = SubtitleError::InvalidTimestamp { line: "00:00 -> 00:01".to_string() };
    let display = format!("{}", error);
    assert!(display.contains("Invalid timestamp range"));
    assert!(display.contains("00:00 -> 00:01"));
}

#[test]
fn test_appError_fromSubtitleError_shouldWrapCorrectly() {
    let subtitle_error = SubtitleError::UnsupportedFormat { path: "x.bin".to_string() };
    let app_error: AppError = subtitle_error.into();

    let display = format!("{}", app_error);
    assert!(display.contains("Subtitle error"));
    assert!(display.contains("x.bin"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app_error: AppError = io_error.into();

    assert!(matches!(app_error, AppError::File(_)));
    assert!(format!("{}", app_error).contains("gone"));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let error = anyhow::anyhow!("something odd");
    let app_error: AppError = error.into();

    assert!(matches!(app_error, AppError::Unknown(_)));
    assert!(format!("{}", app_error).contains("something odd"));
}
