//! flowstep - workflow step utilities
//!
//! Building blocks for two batch-workflow binaries:
//!
//! - **file_picker**: copy the first file whose name contains a literal
//!   pattern to `outputFile<ext>`
//! - **foreach**: call a remote processing method for every file in a
//!   folder and download the result files into `<stem>_result` folders

pub mod errors;
pub use errors::{Result, StepError};

pub mod cli;
pub mod config;
pub mod logging;

pub mod files;
pub mod remote;

pub mod foreach;
pub mod picker;

pub use config::Config;
pub use foreach::{ForeachEvent, ForeachJob, ForeachReport};
pub use picker::{pick_file, PickOutcome, PickRequest};
