use anyhow::{Context, Result};
use std::io::Write;

use crate::pipeline::{CorpusReport, DocumentReport};

/// How a report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Document: <label>` followed by one `term: score` line per term
    Text,
    /// A single pretty-printed JSON object
    Json,
}

impl OutputFormat {
    /// Case-insensitive name lookup, used for environment values.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

fn write_document<W: Write>(out: &mut W, document: &DocumentReport) -> std::io::Result<()> {
    writeln!(out, "Document: {}", document.label)?;
    for ranked in &document.terms {
        writeln!(out, "{}: {:?}", ranked.term, ranked.score)?;
    }
    writeln!(out)
}

/// Plain-text rendering. Skipped sources are not part of it; they are logged.
pub fn render_text<W: Write>(out: &mut W, report: &CorpusReport) -> Result<()> {
    for document in &report.documents {
        write_document(out, document)
            .with_context(|| format!("Failed to write results for '{}'", document.label))?;
    }
    Ok(())
}

pub fn render_json<W: Write>(out: &mut W, report: &CorpusReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize report")?;
    writeln!(out).context("Failed to write report")?;
    Ok(())
}

pub fn render<W: Write>(out: &mut W, report: &CorpusReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(out, report),
        OutputFormat::Json => render_json(out, report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{RankedTerm, SkippedSource};

    fn sample_report() -> CorpusReport {
        CorpusReport {
            documents: vec![
                DocumentReport {
                    label: "a.txt".to_string(),
                    terms: vec![
                        RankedTerm {
                            term: "cat".to_string(),
                            score: 0.0,
                        },
                        RankedTerm {
                            term: "sat".to_string(),
                            score: -0.25,
                        },
                    ],
                },
                DocumentReport {
                    label: "empty.txt".to_string(),
                    terms: vec![],
                },
            ],
            skipped: vec![SkippedSource {
                label: "gone.txt".to_string(),
                reason: "No such file or directory (os error 2)".to_string(),
            }],
        }
    }

    #[test]
    fn test_text_output() {
        let mut buf = Vec::new();
        render(&mut buf, &sample_report(), OutputFormat::Text).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Document: a.txt\ncat: 0.0\nsat: -0.25\n\nDocument: empty.txt\n\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        render(&mut buf, &sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["documents"][0]["label"], "a.txt");
        assert_eq!(value["documents"][0]["terms"][1]["term"], "sat");
        assert_eq!(value["documents"][0]["terms"][1]["score"], -0.25);
        assert_eq!(value["documents"][1]["terms"].as_array().unwrap().len(), 0);
        assert_eq!(value["skipped"][0]["label"], "gone.txt");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("Text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse(" json "), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }
}
