//! Wire types for the remote processing API
//!
//! Request: `{"parameters": {...}, "data": [{"inputImage": "<collection>/<file>"}]}`
//! Response: `{"output": [{"file": {"url": "..."}}, ...]}`

use crate::errors::{Result, StepError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Method parameters, always a JSON object on the wire
pub type MethodParameters = Map<String, Value>;

/// Parse `--method_parameters` into a JSON object
pub fn parse_parameters(raw: &str) -> Result<MethodParameters> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        StepError::InvalidArgument(format!("method parameters are not valid JSON: {}", e))
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(StepError::InvalidArgument(format!(
            "method parameters must be a JSON object, got: {}",
            other
        ))),
    }
}

/// Payload sent to a method URL for one input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRequest {
    pub parameters: MethodParameters,
    pub data: Vec<DataEntry>,
}

/// One input reference in the `data` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    #[serde(rename = "inputImage")]
    pub input_image: String,
}

impl MethodRequest {
    /// Build the request for `<collection>/<file_name>`
    pub fn for_file(
        parameters: Option<&MethodParameters>,
        collection: &str,
        file_name: &str,
    ) -> Self {
        Self {
            parameters: parameters.cloned().unwrap_or_default(),
            data: vec![DataEntry {
                input_image: format!("{}/{}", collection, file_name),
            }],
        }
    }
}

/// Response returned by a method
#[derive(Debug, Clone, Deserialize)]
pub struct MethodResponse {
    pub output: Vec<OutputEntry>,
}

/// One result in the `output` sequence
#[derive(Debug, Clone, Deserialize)]
pub struct OutputEntry {
    pub file: ResultFile,
}

/// Link to a result file
#[derive(Debug, Clone, Deserialize)]
pub struct ResultFile {
    pub url: String,
}

impl MethodResponse {
    /// Interpret a raw JSON response; missing keys are a parse error
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| StepError::ParseError(format!("unexpected method response: {}", e)))
    }

    /// Result links in response order
    pub fn result_links(&self) -> impl Iterator<Item = &str> {
        self.output.iter().map(|entry| entry.file.url.as_str())
    }
}
