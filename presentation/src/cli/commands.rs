//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use synth_domain::{PremiseGroup, PremiseRelation};

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable answers with their relations
    Text,
    /// JSON output (one object per line in batch mode)
    Json,
}

impl From<OutputFormat> for synth_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => synth_domain::OutputFormat::Text,
            OutputFormat::Json => synth_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for answer-synth
#[derive(Parser, Debug)]
#[command(name = "answer-synth")]
#[command(author, version, about = "Synthesize answers to a question from ranked premises")]
#[command(long_about = r#"
answer-synth builds the answers for a question from premises a retriever has
already ranked by relation score.

For each premise a strategy selector decides how to answer:
  yes/no     score the premise and emit the localized yes/no token, then stop
  span copy  copy a span out of the premise
  sequence   generate an answer from the premise words
Duplicate answers keep the relation of the premise that produced them first.

Configuration files are loaded from (in priority order):
1. ANSWER_SYNTH_<SECTION>__<KEY>              Environment
2. --config <path>                            Explicit config file
3. ./answer-synth.toml                        Project-level config
4. ~/.config/answer-synth/config.toml         Global config

Example:
  answer-synth "What is the capital of France?" -p "Paris is the capital of France."
  answer-synth "Are cats mammals?" -p "Cats are mammals." -r 0.9 --output json
  answer-synth --batch requests.jsonl --answer-log answers.jsonl
"#)]
pub struct Cli {
    /// The question to answer (not required in batch mode)
    #[arg(required_unless_present_any = ["batch", "show_config", "show_embedding_paths"])]
    pub question: Option<String>,

    /// Premise text, one group per flag, in ranked order (can be specified multiple times)
    #[arg(short, long, value_name = "TEXT")]
    pub premise: Vec<String>,

    /// Relation score for the premise at the same position (defaults to 1.0 each)
    #[arg(short, long, value_name = "SCORE", allow_negative_numbers = true)]
    pub relation: Vec<f64>,

    /// Answer every request in a JSONL file
    #[arg(short, long, value_name = "PATH", conflicts_with = "question")]
    pub batch: Option<PathBuf>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Directory holding the model manifests (overrides [models] directory)
    #[arg(long, value_name = "DIR")]
    pub models: Option<PathBuf>,

    /// Append answer events to this JSONL file (overrides [log] answer_log)
    #[arg(long, value_name = "PATH")]
    pub answer_log: Option<PathBuf>,

    /// Also write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print answers, no headers or config warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print the embedding files the models declare and exit
    #[arg(long)]
    pub show_embedding_paths: bool,
}

impl Cli {
    /// Premise groups and relations for a single question.
    ///
    /// Each `--premise` becomes its own group. Without premises the question
    /// runs against one empty group. Relations default to 1.0 per group only
    /// when none are given; otherwise they are passed through as-is, so a
    /// count mismatch surfaces as a contract error.
    pub fn premise_input(&self) -> (Vec<PremiseGroup>, Vec<PremiseRelation>) {
        let groups: Vec<PremiseGroup> = if self.premise.is_empty() {
            vec![PremiseGroup::empty()]
        } else {
            self.premise
                .iter()
                .map(|p| PremiseGroup::single(p.as_str()))
                .collect()
        };

        let relations = if self.relation.is_empty() {
            vec![PremiseRelation(1.0); groups.len()]
        } else {
            self.relation.iter().copied().map(PremiseRelation).collect()
        };

        (groups, relations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("answer-synth").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_single_question_with_premises() {
        let cli = parse(&["Who?", "-p", "Alice did it.", "-p", "Bob", "-r", "0.9", "-r", "0.4"]);
        let (groups, relations) = cli.premise_input();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].premise_text(), "Alice did it.");
        assert_eq!(relations, vec![PremiseRelation(0.9), PremiseRelation(0.4)]);
    }

    #[test]
    fn test_no_premise_runs_empty_group() {
        let cli = parse(&["What is the capital of France?"]);
        let (groups, relations) = cli.premise_input();
        assert_eq!(groups, vec![PremiseGroup::empty()]);
        assert_eq!(relations, vec![PremiseRelation(1.0)]);
    }

    #[test]
    fn test_relation_mismatch_passed_through() {
        let cli = parse(&["Who?", "-p", "a", "-p", "b", "-r", "0.5"]);
        let (groups, relations) = cli.premise_input();
        assert_eq!(groups.len(), 2);
        assert_eq!(relations.len(), 1);
    }

    #[test]
    fn test_question_required_without_batch() {
        assert!(Cli::try_parse_from(["answer-synth"]).is_err());
        let cli = parse(&["--batch", "requests.jsonl", "--output", "json"]);
        assert_eq!(cli.batch, Some(PathBuf::from("requests.jsonl")));
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_verbose_count() {
        let cli = parse(&["-vv", "Who?"]);
        assert_eq!(cli.verbose, 2);
    }
}
