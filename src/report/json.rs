// src/report/json.rs
use super::ReportError;
use crate::health::CheckResult;
use std::io::Write;

/// Write results as a single JSON array, without a trailing newline.
pub fn render_json<W: Write>(results: &[CheckResult], out: &mut W) -> Result<(), ReportError> {
    serde_json::to_writer(&mut *out, results)?;
    out.flush()?;
    Ok(())
}
