use crate::Opt;
use dnascan::{validate, AnalysisReport, Analyzer, InputFormat, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// One thing to analyze, as given on the command line.
#[derive(Debug, Clone)]
pub enum Input {
    Text(String),
    File(PathBuf),
}

impl Input {
    /// Label identifying the input in the output.
    fn label(&self, idx: usize) -> String {
        match self {
            Input::Text(_) => format!("sequence_{}", idx + 1),
            Input::File(path) => path.display().to_string(),
        }
    }
}

/// A single entry to write to the output stream.
/// Links an input to either its report or the reason it failed.
#[derive(Debug, Serialize)]
struct WriteEntry {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn analyze_input(analyzer: &Analyzer, input: &Input, format: Option<InputFormat>) -> Result<AnalysisReport> {
    match input {
        Input::Text(text) => analyzer.analyze(&validate::sequence(text)?),
        Input::File(path) => {
            validate::extension(path)?;
            match format {
                Some(format) => analyzer.analyze_file_as(path, format),
                None => analyzer.analyze_file(path),
            }
        }
    }
}

/// Analyzes every input and writes the reports as one JSON array, in input order.
/// Returns how many inputs failed.
pub fn run(opt: &Opt, analyzer: &Analyzer) -> io::Result<usize> {
    let inputs = opt
        .sequences
        .iter()
        .cloned()
        .map(Input::Text)
        .chain(opt.files.iter().cloned().map(Input::File))
        .collect::<Vec<_>>();

    // Inputs are independent, so they are analyzed in parallel; collect keeps the order.
    let entries = inputs
        .par_iter()
        .enumerate()
        .map(|(idx, input)| {
            let label = input.label(idx);
            match analyze_input(analyzer, input, opt.format) {
                Ok(report) => WriteEntry {
                    input: label,
                    report: Some(report),
                    error: None,
                },
                Err(err) => {
                    log::error!("{}: {}", label, err);
                    WriteEntry {
                        input: label,
                        report: None,
                        error: Some(err.to_string()),
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    let failed = entries.iter().filter(|entry| entry.error.is_some()).count();

    let mut out = BufWriter::new(io::stdout());
    if opt.pretty {
        serde_json::to_writer_pretty(&mut out, &entries)?;
    } else {
        serde_json::to_writer(&mut out, &entries)?;
    }
    writeln!(out)?;
    out.flush()?;

    Ok(failed)
}
