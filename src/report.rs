//! One run: read the input, tally words, rank them, write the report.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, WordCountError};
use crate::frequency::FrequencyTable;
use crate::rank::rank;
use crate::render::{render, write_lines};
use crate::tokenize::tokenize;

pub const DEFAULT_INPUT_PATH: &str = "input.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Where to read and where to write the report.
#[derive(Debug, Clone)]
pub struct ReportJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ReportJob {
    /// Read `input`, write to the fixed `output.txt`.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Default for ReportJob {
    fn default() -> Self {
        Self::for_input(DEFAULT_INPUT_PATH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub distinct_words: usize,
    pub total_tokens: u64,
}

/// Tally every word of `path`. Any read error aborts and the partial table is dropped.
pub fn count_file(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|e| WordCountError::read(path, e))?;
    let mut table = FrequencyTable::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| WordCountError::read(path, e))?;
        table.extend(tokenize(&line));
    }
    Ok(table)
}

/// Run the whole pipeline. The output file is only created once the input is fully counted.
pub fn run(job: &ReportJob) -> Result<RunSummary> {
    let table = count_file(&job.input)?;
    let summary = RunSummary {
        distinct_words: table.len(),
        total_tokens: table.total(),
    };
    let ranked = rank(table.entries());

    let file = File::create(&job.output).map_err(|e| WordCountError::write(&job.output, e))?;
    let mut out = BufWriter::new(file);
    write_lines(&mut out, &ranked, render)
        .and_then(|()| out.flush())
        .map_err(|e| WordCountError::write(&job.output, e))?;

    Ok(summary)
}
