use anyhow::{Result, anyhow};
use log::{error, warn, info};
use std::path::{Path, PathBuf};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::arrange;
use crate::file_utils::{FileManager, FileType};
use crate::subtitle_processor::SubtitleCollection;

// @module: Application controller for subtitle arrangement

/// Outcome of processing a single file
enum FileOutcome {
    Processed,
    Skipped,
}

/// Main application controller for subtitle arrangement
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the arrangement workflow for a single subtitle file
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if let FileOutcome::Processed = self.arrange_file(&input_file, &output_dir, force_overwrite).await? {
            info!("Arrangement completed in {}.", Self::format_duration(start_time.elapsed()));
        }

        Ok(())
    }

    /// Arrange one subtitle file and write the result next to it
    async fn arrange_file(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<FileOutcome> {
        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        // Ensure the output directory exists
        FileManager::ensure_dir(output_dir)?;

        // Check if arranged output already exists
        let output_path = FileManager::generate_output_path(
            input_file,
            output_dir,
            &self.config.output.suffix,
            "srt",
        );
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, arranged output already exists (use -f to force overwrite)", input_file);
            return Ok(FileOutcome::Skipped);
        }

        // Only SRT input is supported
        if FileManager::detect_file_type(input_file)? != FileType::Subtitle {
            return Err(anyhow!("Not a subtitle file: {:?}", input_file));
        }

        let collection = SubtitleCollection::from_srt_file(input_file)?;
        let parsed_count = collection.entries.len();
        if parsed_count == 0 {
            warn!("No subtitle entries found in {:?}", input_file);
        }

        let arranged = arrange::arrange(collection.entries, self.config.arrange);
        info!("Arranged {} caption(s) into {}", parsed_count, arranged.len());

        let output = SubtitleCollection {
            source_file: input_file.to_path_buf(),
            entries: arranged,
        };
        output.write_to_srt(&output_path)?;

        info!("Success: {}", output_path.display());
        Ok(FileOutcome::Processed)
    }

    /// Run the workflow in folder mode, processing all SRT files in a
    /// directory. Files already carrying the output suffix are skipped, as
    /// are files whose arranged output exists (without -f). Independent files
    /// are processed concurrently; each file's pipeline runs as one ordered
    /// sequence.
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_dir.exists() {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Find all SRT files in the directory (recursive), leaving out our
        // own previous outputs
        let output_marker = format!(".{}.srt", self.config.output.suffix);
        let srt_files: Vec<PathBuf> = FileManager::find_files(&input_dir, "srt")?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .map(|name| !name.to_string_lossy().ends_with(&output_marker))
                    .unwrap_or(false)
            })
            .collect();

        if srt_files.is_empty() {
            return Err(anyhow!("No subtitle files found in directory: {:?}", input_dir));
        }

        // Create a progress bar for folder processing
        let folder_pb = ProgressBar::new(srt_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Arranging files");

        // Process files concurrently, capped by config
        let results: Vec<(PathBuf, Result<FileOutcome>)> = stream::iter(srt_files)
            .map(|file| {
                let pb = folder_pb.clone();
                async move {
                    let output_dir = file
                        .parent()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| PathBuf::from("."));
                    let result = self.arrange_file(&file, &output_dir, force_overwrite).await;
                    pb.inc(1);
                    (file, result)
                }
            })
            .buffer_unordered(self.config.concurrent_files)
            .collect()
            .await;

        folder_pb.finish_with_message("Folder processing complete");

        // Track success and failure counts
        let mut success_count = 0;
        let mut skip_count = 0;
        let mut error_count = 0;

        for (file, result) in results {
            match result {
                Ok(FileOutcome::Processed) => success_count += 1,
                Ok(FileOutcome::Skipped) => skip_count += 1,
                Err(e) => {
                    error!("Error processing file {:?}: {}", file, e);
                    error_count += 1;
                }
            }
        }

        // Give summary results - important for batch operations
        let duration = start_time.elapsed();
        info!(
            "Folder processing completed: {} processed, {} skipped, {} errors - Duration: {}",
            success_count, skip_count, error_count,
            Self::format_duration(duration)
        );

        Ok(())
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
