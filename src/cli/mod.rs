// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the arguments, hands the request to Layer 2 and writes
// the single result line to stdout. Nothing else is ever
// written to stdout; diagnostics and logs go to stderr.
//
// Errors are returned, not printed: main is the one place that
// turns a failure into a message and an exit status.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use commands::{Commands, RegistryKind};

use crate::application::formatter::{render_disease_registry, render_symptom_registry};
use crate::application::predict_use_case::{OutputMode, PredictConfig, PredictInput, PredictUseCase};
use crate::domain::registry::{DiseaseRegistry, SymptomRegistry};

#[derive(Parser, Debug)]
#[command(
    name = "symptom-bridge",
    version,
    about = "Feed symptoms or a feature vector to a pretrained classifier and print the prediction."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Symptoms(args) => run_predict((&args).into(), args.output.into()),
            Commands::Vector(args)   => run_predict((&args).into(), args.output.into()),
            Commands::Registry(args) => run_registry(args.which),
        }
    }
}

fn run_predict(input: PredictInput, output: OutputMode) -> Result<()> {
    let config = PredictConfig::new(output);
    tracing::debug!(
        model = %config.model_path.display(),
        output = ?config.output,
        "starting prediction"
    );

    let use_case = PredictUseCase::new(&config);
    let result   = use_case.execute(&input)?;
    emit(&result.render()?)
}

fn run_registry(which: RegistryKind) -> Result<()> {
    let line = match which {
        RegistryKind::Symptoms => render_symptom_registry(SymptomRegistry::builtin())?,
        RegistryKind::Diseases => render_disease_registry(DiseaseRegistry::builtin())?,
    };
    emit(&line)
}

/// Write the one result line and flush it.
fn emit(line: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use super::commands::OutputArg;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_symptoms_default_to_labeled() {
        let cli = Cli::try_parse_from(["symptom-bridge", "symptoms", r#"["headache"]"#]).unwrap();
        match cli.command {
            Commands::Symptoms(args) => {
                assert_eq!(args.output, OutputArg::Labeled);
                assert_eq!(PredictInput::from(&args), PredictInput::Symptoms(r#"["headache"]"#.into()));
            }
            other => panic!("parsed as {other:?}"),
        }
    }

    #[test]
    fn test_vector_defaults_to_raw_and_keeps_negatives() {
        let cli = Cli::try_parse_from(["symptom-bridge", "vector", "-1.5", "2", "3.3"]).unwrap();
        match cli.command {
            Commands::Vector(args) => {
                assert_eq!(args.output, OutputArg::Raw);
                assert_eq!(args.values, vec!["-1.5", "2", "3.3"]);
            }
            other => panic!("parsed as {other:?}"),
        }
    }

    #[test]
    fn test_output_override() {
        let cli = Cli::try_parse_from(["symptom-bridge", "vector", "--output", "labeled", "-1.0"]).unwrap();
        match cli.command {
            Commands::Vector(args) => {
                assert_eq!(OutputMode::from(args.output), OutputMode::Labeled);
                assert_eq!(args.values, vec!["-1.0"]);
            }
            other => panic!("parsed as {other:?}"),
        }
    }

    fn vector_values(args: &[&str]) -> Vec<String> {
        let argv = ["symptom-bridge", "vector"].iter().chain(args).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Vector(args) => args.values,
            other => panic!("parsed as {other:?}"),
        }
    }

    #[test]
    fn test_hyphen_leading_values_reach_the_parser() {
        // none of these may become a clap usage error
        assert_eq!(vector_values(&["-abc"]), vec!["-abc"]);
        assert_eq!(vector_values(&["-.5"]), vec!["-.5"]);
        assert_eq!(vector_values(&["-1.5,2"]), vec!["-1.5,2"]);
        assert_eq!(vector_values(&["1.0", "-x"]), vec!["1.0", "-x"]);
    }

    #[test]
    fn test_flag_after_values_is_a_value() {
        let values = vector_values(&["1.0", "--output", "labeled"]);
        assert_eq!(values, vec!["1.0", "--output", "labeled"]);
    }

    #[test]
    fn test_non_numeric_value_reaches_the_parser() {
        // "abc" must not be a clap error; the data layer reports it
        let cli = Cli::try_parse_from(["symptom-bridge", "vector", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::Vector(_)));
    }

    #[test]
    fn test_vector_requires_a_value() {
        assert!(Cli::try_parse_from(["symptom-bridge", "vector"]).is_err());
    }
}
