//! Answer Batch use case.
//!
//! Answers many independent requests against one shared model set. Each
//! request is a synchronous [`AnswerAggregator::build_answer`] call run on
//! tokio's blocking pool; at most `max_concurrency` run at once and results
//! come back in request order.

use crate::ports::services::{EmbeddingServices, TextServices};
use crate::use_cases::build_answer::AnswerAggregator;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use synth_domain::{AnswerSet, DomainError, PremiseGroup, PremiseRelation, Question};
use thiserror::Error;
use tracing::{info, warn};

/// Errors for a single batch item
#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Contract(#[from] DomainError),

    #[error("Answer worker failed: {0}")]
    Worker(String),
}

/// One answer call's input.
///
/// Deserializes from `{"question": "...", "premises": [["..."], []],
/// "relations": [1.0, 0.5]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub question: Question,
    #[serde(default)]
    pub premises: Vec<PremiseGroup>,
    #[serde(default)]
    pub relations: Vec<PremiseRelation>,
}

impl AnswerRequest {
    pub fn new(
        question: impl Into<Question>,
        premises: Vec<PremiseGroup>,
        relations: Vec<PremiseRelation>,
    ) -> Self {
        Self {
            question: question.into(),
            premises,
            relations,
        }
    }
}

/// Use case for answering a batch of requests concurrently.
pub struct AnswerBatchUseCase {
    aggregator: AnswerAggregator,
    text: Arc<dyn TextServices>,
    embeddings: Arc<dyn EmbeddingServices>,
    max_concurrency: usize,
}

impl AnswerBatchUseCase {
    pub fn new(
        aggregator: AnswerAggregator,
        text: Arc<dyn TextServices>,
        embeddings: Arc<dyn EmbeddingServices>,
    ) -> Self {
        Self {
            aggregator,
            text,
            embeddings,
            max_concurrency: 1,
        }
    }

    /// Set the number of requests answered at once (minimum 1).
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Answer every request, returning one result per request in input order.
    pub async fn execute(&self, requests: Vec<AnswerRequest>) -> Vec<Result<AnswerSet, BatchError>> {
        let total = requests.len();
        info!(
            "Answering {} request(s), up to {} at a time",
            total, self.max_concurrency
        );

        let results: Vec<Result<AnswerSet, BatchError>> = futures::stream::iter(requests)
            .map(|request| {
                let aggregator = self.aggregator.clone();
                let text = self.text.clone();
                let embeddings = self.embeddings.clone();
                tokio::task::spawn_blocking(move || {
                    aggregator.build_answer(
                        &request.premises,
                        &request.relations,
                        &request.question,
                        text.as_ref(),
                        embeddings.as_ref(),
                    )
                })
            })
            .buffered(self.max_concurrency)
            .map(|joined| match joined {
                Ok(result) => result.map_err(BatchError::from),
                Err(e) => Err(BatchError::Worker(e.to_string())),
            })
            .collect()
            .await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!("{}/{} batch request(s) failed", failed, total);
        }

        results
    }
}
