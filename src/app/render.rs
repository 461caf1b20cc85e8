use linkscanner::config::OutputFormat;
use linkscanner::links::{Extraction, IndexedLink};
use serde::Serialize;
use std::io::{self, Write};

/// How a single result renders in text output.
pub trait TextLine {
    fn text_line(&self) -> String;
}

impl TextLine for String {
    fn text_line(&self) -> String {
        self.clone()
    }
}

impl TextLine for IndexedLink {
    fn text_line(&self) -> String {
        format!("{}\t{}", self.position, self.link)
    }
}

#[derive(Serialize)]
struct JsonError<'a> {
    link: &'a str,
    reason: String,
}

#[derive(Serialize)]
struct JsonReport<'a, T> {
    links: &'a [T],
    errors: Vec<JsonError<'a>>,
}

/// Write results to `out`. In text mode parse errors go to `diag` as
/// warnings; in JSON mode they are part of the document.
pub fn render<T, O, D>(
    extraction: &Extraction<T>,
    format: OutputFormat,
    out: &mut O,
    diag: &mut D,
) -> io::Result<()>
where
    T: Serialize + TextLine,
    O: Write,
    D: Write,
{
    match format {
        OutputFormat::Text => {
            for link in &extraction.links {
                writeln!(out, "{}", link.text_line())?;
            }
            for err in &extraction.errors {
                writeln!(diag, "warning: {}", err.detail())?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                links: &extraction.links,
                errors: extraction
                    .errors
                    .iter()
                    .map(|err| JsonError {
                        link: &err.link,
                        reason: err.source.to_string(),
                    })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
