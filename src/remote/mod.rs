//! Remote processing service access
//!
//! This module provides the pieces that talk to a processing service:
//! - Request / response payload types
//! - Method execution (POST JSON, parse JSON)
//! - Result file downloads

pub mod executor;
pub mod payload;
pub mod saver;

pub use executor::{build_client, HttpExecutor, MethodExecutor};
pub use payload::{parse_parameters, MethodParameters, MethodRequest, MethodResponse};
pub use saver::{file_name_from_url, HttpSaver, ResultSaver};
