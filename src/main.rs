//! word-histogram: count the words of a text file and write a ranked histogram to output.txt.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use word_histogram::report::DEFAULT_INPUT_PATH;
use word_histogram::ReportJob;

#[derive(Parser)]
#[command(name = "word-histogram")]
#[command(about = "Count word occurrences in a text file and write a ranked histogram to output.txt")]
struct Cli {
    /// Text file to read.
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let job = ReportJob::for_input(cli.input);
    match word_histogram::run(&job) {
        Ok(summary) => {
            println!("Word counts written to {}...", job.output.display());
            println!(
                "{} distinct words, {} tokens",
                summary.distinct_words, summary.total_tokens
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
