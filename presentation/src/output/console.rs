//! Console output formatter for answer sets

use colored::Colorize;
use serde_json::json;
use std::fmt::Display;
use synth_domain::{AnswerSet, Question};

/// Formats answer sets for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a complete answer set with its question
    pub fn format(question: &Question, answers: &AnswerSet) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Q:".cyan().bold(), question));

        if answers.is_empty() {
            output.push_str(&format!("  {}\n", "(no answer)".dimmed()));
            return output;
        }

        for (rank, (answer, relation)) in answers.iter().enumerate() {
            let shown = if answer.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                answer.green().bold().to_string()
            };
            output.push_str(&format!(
                "  {}. {} {}\n",
                rank + 1,
                shown,
                format!("[{}]", relation).dimmed()
            ));
        }

        output
    }

    /// One answer per line, nothing else
    pub fn format_answers_only(answers: &AnswerSet) -> String {
        answers
            .answers()
            .iter()
            .map(|a| format!("{}\n", a))
            .collect()
    }

    /// Format as a single-line JSON object
    pub fn format_json(question: &Question, answers: &AnswerSet) -> String {
        json!({
            "question": question,
            "answers": answers.answers(),
            "relations": answers.relations(),
        })
        .to_string()
    }

    /// Format a failed request
    pub fn format_error(question: &Question, error: &dyn Display) -> String {
        format!(
            "{} {}\n  {} {}\n",
            "Q:".cyan().bold(),
            question,
            "Error:".red().bold(),
            error
        )
    }

    /// Format a failed request as a single-line JSON object
    pub fn format_json_error(question: &Question, error: &dyn Display) -> String {
        json!({
            "question": question,
            "error": error.to_string(),
        })
        .to_string()
    }
}
