// src/executor.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::errors::{PracticeError, Result};
use crate::language::Language;

/// User code plus the list it must sort. Built per submit, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub code: String,
    pub language: Language,
    pub test_array: Vec<i64>,
}

/// What the execution service claims the code produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOutput {
    pub sorted_array: Vec<i64>,
    pub execution_time_ms: Option<f64>,
}

#[derive(Deserialize)]
struct ExecutionResponse {
    #[serde(rename = "sortedArray")]
    sorted_array: Option<Vec<i64>>,
    #[serde(rename = "executionTime")]
    execution_time: Option<f64>,
}

#[derive(Deserialize)]
struct ExecutionErrorBody {
    message: Option<String>,
}

/// Runs a submission somewhere and reports the returned array.
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    async fn execute(&self, submission: &Submission) -> Result<ExecutionOutput>;
}

/// Executor that posts submissions to a remote HTTP endpoint.
pub struct RemoteExecutor {
    client: Client,
    endpoint: String,
}

impl RemoteExecutor {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CodeExecutor for RemoteExecutor {
    async fn execute(&self, submission: &Submission) -> Result<ExecutionOutput> {
        log::info!(
            "Submitting {} code ({} elements) to {}",
            submission.language,
            submission.test_array.len(),
            self.endpoint
        );

        let start = Instant::now();

        let resp = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(submission)
            .send()
            .await?;

        let status = resp.status();
        let round_trip_ms = start.elapsed().as_millis() as u64;
        log::info!("Execution service responded {} ({}ms)", status, round_trip_ms);

        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ExecutionErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);
            return Err(PracticeError::ApiError {
                status: status.as_u16(),
                body: message,
            });
        }

        let parsed: ExecutionResponse = serde_json::from_str(&body)?;
        let sorted_array = parsed
            .sorted_array
            .ok_or_else(|| PracticeError::UnexpectedResponse(body.clone()))?;

        Ok(ExecutionOutput {
            sorted_array,
            execution_time_ms: parsed.execution_time,
        })
    }
}
