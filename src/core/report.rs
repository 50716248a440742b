use crate::core::{OutputFormat, ProbeOutcome, ProbeReport};
use crate::utils::error::Result;
use std::io::Write;

pub fn render<W: Write>(outcome: &ProbeOutcome, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(outcome, out),
        OutputFormat::Json => render_json(outcome, out),
    }
}

fn render_text<W: Write>(outcome: &ProbeOutcome, out: &mut W) -> Result<()> {
    match outcome {
        ProbeOutcome::Response(report) => write_response_text(report, out)?,
        ProbeOutcome::Failed { message, .. } => writeln!(out, "An error occurred: {}", message)?,
    }
    out.flush()?;
    Ok(())
}

fn write_response_text<W: Write>(report: &ProbeReport, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "GET Response (Status Code: {}):", report.status)?;
    writeln!(out, "{}", report.body)?;
    writeln!(out)?;
    writeln!(out, "Headers:")?;
    for header in &report.headers {
        writeln!(out, "{}: {}", header.name, header.value)?;
    }
    Ok(())
}

fn render_json<W: Write>(outcome: &ProbeOutcome, out: &mut W) -> Result<()> {
    match outcome {
        ProbeOutcome::Response(report) => serde_json::to_writer_pretty(&mut *out, report)?,
        ProbeOutcome::Failed { url, message } => serde_json::to_writer_pretty(
            &mut *out,
            &serde_json::json!({ "url": url, "error": message }),
        )?,
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
