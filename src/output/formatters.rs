//! Output formatting functionality
//!
//! This module provides the JSON and CSV serializations of scan results.
//! HTML has its own renderer in [`super::html`].

use crate::error::{DocError, Result, ResultExt};
use crate::models::doc::DocResults;
use csv;
use serde_json;

/// Format scan results as JSON
pub fn format_results_json(results: &DocResults, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(results)?
    } else {
        serde_json::to_string(results)?
    };
    Ok(json)
}

/// Format scan results as CSV, one row per function in tree order
pub fn format_results_csv(results: &DocResults) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["Directory", "File", "Function", "Parameters", "Docstring"])?;

    for directory in &results.directories {
        for (file, function) in directory
            .files
            .iter()
            .flat_map(|file| file.functions.iter().map(move |f| (file, f)))
        {
            writer.write_record([
                directory.name.as_str(),
                &file.relative_path.display().to_string(),
                function.name.as_str(),
                &function.parameter_list(),
                function.docstring_text(),
            ])?;
        }
    }

    writer.flush().with_context(|| "failed to flush CSV output")?;
    let data = writer.into_inner().map_err(|e| DocError::Generation {
        message: format!("failed to finalize CSV output: {}", e.error()),
    })?;
    String::from_utf8(data).with_context(|| "CSV output was not valid UTF-8")
}
