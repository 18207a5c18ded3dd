use std::fmt;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::{Result, Context};
use log::warn;

// @module: Subtitle parsing, timestamp codec and SRT serialization

// @const: Anchored SRT timestamp range regex (2-digit H/M/S, 3-digit ms)
static TIMESTAMP_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Sequence number, 1-based, renumbered on output
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Subtitle text, trimmed, single line
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm).
    /// Hours are not wrapped at 24.
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }

    /// Convert a seconds value to milliseconds, truncating (not rounding) the
    /// sub-millisecond fraction. Negative input clamps to zero.
    pub fn seconds_to_ms(seconds: f64) -> u64 {
        if seconds <= 0.0 {
            return 0;
        }
        let whole = seconds.trunc() as u64;
        let millis = ((seconds - seconds.trunc()) * 1000.0) as u64;
        whole * 1000 + millis.min(999)
    }

    /// Format a seconds value directly to an SRT timestamp
    pub fn format_seconds(seconds: f64) -> String {
        Self::format_timestamp(Self::seconds_to_ms(seconds))
    }

    /// Parse an SRT timestamp range line (`HH:MM:SS,mmm --> HH:MM:SS,mmm`)
    /// into start and end milliseconds. The pattern must cover the whole
    /// trimmed line; anything looser returns None.
    pub fn parse_timestamp_range(line: &str) -> Option<(u64, u64)> {
        let caps = TIMESTAMP_RANGE_REGEX.captures(line.trim())?;
        Some((Self::capture_to_ms(&caps, 1), Self::capture_to_ms(&caps, 5)))
    }

    fn capture_to_ms(caps: &regex::Captures, start_idx: usize) -> u64 {
        let hours: u64 = caps.get(start_idx)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let minutes: u64 = caps.get(start_idx + 1)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let seconds: u64 = caps.get(start_idx + 2)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let millis: u64 = caps.get(start_idx + 3)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));

        (hours * 3600 + minutes * 60 + seconds) * 1000 + millis
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Lazy single-pass parser over a sequence of SRT lines.
///
/// A block is recognized as a digits-only line, immediately followed by a
/// timestamp range line, immediately followed by one non-blank text line.
/// Blocks that break that shape are skipped without error; the line that
/// broke a block is re-examined as the start of the next one. Input sequence
/// numbers are discarded and entries are renumbered from 1 in emission order.
///
/// Only the first text line of a block is captured; additional text lines
/// before the blank separator are dropped.
pub struct SrtParser<I, S> {
    lines: I,
    pending: Option<S>,
    next_seq: usize,
    skipped: usize,
}

impl<I, S> SrtParser<I, S>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        SrtParser {
            lines,
            pending: None,
            next_seq: 1,
            skipped: 0,
        }
    }

    /// Number of blocks that started with an index line but never matched
    /// the expected shape
    pub fn skipped_blocks(&self) -> usize {
        self.skipped
    }

    fn next_line(&mut self) -> Option<S> {
        self.pending.take().or_else(|| self.lines.next())
    }
}

impl<I, S> Iterator for SrtParser<I, S>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = SubtitleEntry;

    fn next(&mut self) -> Option<SubtitleEntry> {
        loop {
            // Expect index: a line of nothing but digits opens a block.
            // Blank lines and stray text are skipped here, which also
            // consumes block separators and extra text lines.
            let line = self.next_line()?;
            let index = line.as_ref().trim();
            if index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }

            // Expect range
            let Some(range_line) = self.lines.next() else {
                self.skipped += 1;
                return None;
            };
            let Some((start_ms, end_ms)) = SubtitleEntry::parse_timestamp_range(range_line.as_ref())
            else {
                // Not a range; the line may itself open the next block
                self.skipped += 1;
                self.pending = Some(range_line);
                continue;
            };

            // Expect text
            let Some(text_line) = self.lines.next() else {
                self.skipped += 1;
                return None;
            };
            let text = text_line.as_ref().trim();
            if text.is_empty() {
                self.skipped += 1;
                continue;
            }

            let seq_num = self.next_seq;
            self.next_seq += 1;
            return Some(SubtitleEntry::new(seq_num, start_ms, end_ms, text.to_string()));
        }
    }
}

/// Collection of subtitle entries tied to a source file
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// List of subtitle entries
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Create a new empty subtitle collection
    pub fn new(source_file: PathBuf) -> Self {
        SubtitleCollection {
            source_file,
            entries: Vec::new(),
        }
    }

    /// Read and parse an SRT file
    pub fn from_srt_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;

        let entries = Self::parse_srt_string(&content)?;
        Ok(SubtitleCollection {
            source_file: path.to_path_buf(),
            entries,
        })
    }

    /// Parse SRT format string into subtitle entries.
    ///
    /// Malformed blocks are dropped, not errors; input with no valid block
    /// parses to an empty vector. Entries are renumbered from 1.
    pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>> {
        let mut parser = SrtParser::new(content.lines());
        let entries: Vec<SubtitleEntry> = parser.by_ref().collect();

        if parser.skipped_blocks() > 0 {
            warn!("Skipped {} malformed subtitle block(s)", parser.skipped_blocks());
        }

        let reversed = entries.iter()
            .filter(|e| e.end_time_ms < e.start_time_ms)
            .count();
        if reversed > 0 {
            warn!("Found {} entries with end time before start time", reversed);
        }

        Ok(entries)
    }

    /// Render the collection back to SRT text
    pub fn to_srt_string(&self) -> String {
        let mut output = String::new();
        for entry in &self.entries {
            output.push_str(&entry.to_string());
        }
        output
    }

    /// Write subtitles to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

        for entry in &self.entries {
            write!(file, "{}", entry)?;
        }

        Ok(())
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
