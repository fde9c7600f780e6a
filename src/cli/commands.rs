//! Command implementations for the Prosa CLI.

use std::fs;

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::args::*;
use crate::cli::output::output_result;
use crate::engine::TextAnalyzer;
use crate::error::{ProsaError, Result};

/// Execute a CLI command.
pub fn execute_command(args: ProsaArgs) -> Result<()> {
    let analyzer = TextAnalyzer::new()?;

    match &args.command {
        Command::Analyze(analyze_args) => {
            let top_words = analyze_args.top_words;
            run_over_inputs(&analyze_args.input, &args, "Text Analysis Results", |text| {
                analyzer.analyze_with_top_words(text, top_words)
            })
        }
        Command::Stats(input) => run_over_inputs(input, &args, "Basic Statistics", |text| {
            analyzer.basic_statistics(text)
        }),
        Command::Readability(input) => {
            run_over_inputs(input, &args, "Readability Analysis", |text| {
                analyzer.readability(text)
            })
        }
        Command::Frequency(frequency_args) => {
            let top_words = frequency_args.top_words;
            run_over_inputs(&frequency_args.input, &args, "Word Frequency", |text| {
                analyzer.word_frequency_top_n(text, top_words)
            })
        }
        Command::Sentiment(input) => {
            run_over_inputs(input, &args, "Sentiment Analysis", |text| {
                analyzer.sentiment(text)
            })
        }
        Command::Complexity(input) => {
            run_over_inputs(input, &args, "Complexity Analysis", |text| {
                analyzer.complexity(text)
            })
        }
    }
}

/// One resolved input: a display label and the text to analyze.
#[derive(Debug)]
struct Input {
    label: String,
    text: String,
}

/// Resolve the input arguments into labeled texts.
///
/// `--text` wins when given; otherwise each file is read whole. Providing
/// neither is an error.
fn collect_inputs(input: &InputArgs) -> Result<Vec<Input>> {
    if let Some(text) = &input.text {
        return Ok(vec![Input {
            label: "<text>".to_string(),
            text: text.clone(),
        }]);
    }

    if input.files.is_empty() {
        return Err(ProsaError::invalid_operation(
            "No input provided. Pass one or more files or use --text.",
        ));
    }

    input
        .files
        .iter()
        .map(|path| {
            debug!("reading input file: {}", path.display());
            let text = fs::read_to_string(path)?;
            Ok(Input {
                label: path.display().to_string(),
                text,
            })
        })
        .collect()
}

/// Run one analysis over every resolved input and print the results.
///
/// Multiple inputs are analyzed in parallel; the engine is stateless, so
/// sharing it across rayon workers needs no locking. Output is printed in
/// input order regardless of completion order.
fn run_over_inputs<T, F>(input: &InputArgs, cli_args: &ProsaArgs, title: &str, f: F) -> Result<()>
where
    T: Serialize + Send,
    F: Fn(&str) -> Result<T> + Sync,
{
    let inputs = collect_inputs(input)?;
    let multiple = inputs.len() > 1;

    debug!("analyzing {} input(s)", inputs.len());

    let reports: Vec<(String, T)> = if multiple {
        inputs
            .into_par_iter()
            .map(|input| f(&input.text).map(|report| (input.label, report)))
            .collect::<Result<Vec<_>>>()?
    } else {
        inputs
            .into_iter()
            .map(|input| f(&input.text).map(|report| (input.label, report)))
            .collect::<Result<Vec<_>>>()?
    };

    for (label, report) in &reports {
        if multiple && cli_args.verbosity() > 0 {
            println!("### {label}");
        }
        output_result(title, report, cli_args)?;
    }

    Ok(())
}
