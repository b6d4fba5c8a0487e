//! Foreach: run a remote method on every file in a folder
//!
//! For each input file, one request goes to the method URL, a fresh
//! `<stem><suffix>` folder is created under the output folder, and every
//! result link (except the service's log file) is downloaded into it.
//!
//! Files are processed one at a time. The first error ends the run and
//! leaves whatever was already written in place.

use crate::config::ForeachConfig;
use crate::errors::{Result, StepError};
use crate::files::{list_files, split_extension, FileEntry, MatchPattern};
use crate::remote::{MethodExecutor, MethodParameters, MethodRequest, MethodResponse, ResultSaver};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Inputs for one foreach run
#[derive(Debug, Clone)]
pub struct ForeachJob {
    pub input_folder: PathBuf,
    pub method_url: String,
    pub parameters: Option<MethodParameters>,
    pub collection_name: String,
    pub output_folder: PathBuf,
    pub settings: ForeachConfig,
}

/// Progress notifications emitted during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForeachEvent {
    /// Listing done; `total` includes files that will be skipped
    Started { total: usize },
    InputSkipped { file: String },
    FileProcessed { file: String, saved: usize },
}

/// Outcome for one processed input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub input: String,
    pub output_folder: PathBuf,
    pub saved: Vec<PathBuf>,
    pub skipped_results: usize,
}

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForeachReport {
    pub processed: Vec<ProcessedFile>,
    pub skipped_inputs: Vec<String>,
}

impl ForeachReport {
    pub fn saved_count(&self) -> usize {
        self.processed.iter().map(|p| p.saved.len()).sum()
    }
}

impl ForeachJob {
    /// Collection-relative reference sent as `inputImage`
    pub fn input_reference(&self, file_name: &str) -> String {
        format!("{}/{}", self.collection_name, file_name)
    }

    /// Per-file output folder, e.g. `img1.png` -> `<output>/img1_result`
    pub fn result_folder_for(&self, file_name: &str) -> PathBuf {
        let (stem, _) = split_extension(file_name);
        self.output_folder
            .join(format!("{}{}", stem, self.settings.result_folder_suffix))
    }

    pub fn build_request(&self, file_name: &str) -> MethodRequest {
        MethodRequest::for_file(self.parameters.as_ref(), &self.collection_name, file_name)
    }

    /// Run over the whole input folder
    pub async fn run(
        &self,
        executor: &dyn MethodExecutor,
        saver: &dyn ResultSaver,
    ) -> Result<ForeachReport> {
        self.run_with_progress(executor, saver, |_| {}).await
    }

    /// Run over the whole input folder, reporting progress to `on_event`
    pub async fn run_with_progress<F>(
        &self,
        executor: &dyn MethodExecutor,
        saver: &dyn ResultSaver,
        mut on_event: F,
    ) -> Result<ForeachReport>
    where
        F: FnMut(&ForeachEvent),
    {
        let files = list_files(&self.input_folder)?;
        on_event(&ForeachEvent::Started { total: files.len() });

        let input_skip = MatchPattern::new(self.settings.input_skip_marker.as_str());
        let mut report = ForeachReport::default();

        for file in files.into_iter().map(FileEntry::into_name) {
            if input_skip.matches(&file) {
                warn!(file = %file, "skipping log file");
                on_event(&ForeachEvent::InputSkipped { file: file.clone() });
                report.skipped_inputs.push(file);
                continue;
            }

            let processed = self.process_file(&file, executor, saver).await?;
            on_event(&ForeachEvent::FileProcessed {
                file: file.clone(),
                saved: processed.saved.len(),
            });
            report.processed.push(processed);
        }

        info!(
            processed = report.processed.len(),
            saved = report.saved_count(),
            "foreach run complete"
        );
        Ok(report)
    }

    async fn process_file(
        &self,
        file: &str,
        executor: &dyn MethodExecutor,
        saver: &dyn ResultSaver,
    ) -> Result<ProcessedFile> {
        let request = self.build_request(file);
        let raw = executor.execute(&self.method_url, &request).await?;
        // Parsed before the result folder exists
        let response = MethodResponse::from_value(raw)?;

        let folder = self.result_folder_for(file);
        fs::create_dir(&folder).map_err(|e| StepError::io(&folder, e))?;

        let result_skip = MatchPattern::new(self.settings.result_skip_marker.as_str());
        let mut saved = Vec::new();
        let mut skipped_results = 0;

        for link in response.result_links() {
            if result_skip.matches(link) {
                skipped_results += 1;
                continue;
            }
            saved.push(saver.save(link, &folder).await?);
        }

        info!(
            file,
            folder = %folder.display(),
            saved = saved.len(),
            "processed input file"
        );

        Ok(ProcessedFile {
            input: file.to_string(),
            output_folder: folder,
            saved,
            skipped_results,
        })
    }
}
