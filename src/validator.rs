// src/validator.rs
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::executor::{CodeExecutor, ExecutionOutput, Submission};

/// Outcome of one submission as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub sorted_array: Option<Vec<i64>>,
    pub execution_time_ms: Option<f64>,
    pub success: bool,
    pub submitted_at: String,
}

impl SubmissionResult {
    pub fn failed() -> Self {
        Self {
            sorted_array: None,
            execution_time_ms: None,
            success: false,
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn success_label(&self) -> &'static str {
        if self.success { "Yes" } else { "No" }
    }

    pub fn execution_time_label(&self) -> String {
        match self.execution_time_ms {
            Some(ms) => format!("{} ms", ms),
            None => "N/A".to_string(),
        }
    }
}

/// True when every element is no smaller than the one before it.
pub fn is_non_decreasing(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Turns an execution attempt into a result.
///
/// Only the ordering of the returned array is checked, not that it holds the
/// same elements as the input. Every failure collapses into an unsuccessful
/// result.
pub fn validate(outcome: Result<ExecutionOutput>) -> SubmissionResult {
    match outcome {
        Ok(output) => {
            let success = is_non_decreasing(&output.sorted_array);
            SubmissionResult {
                sorted_array: Some(output.sorted_array),
                execution_time_ms: output.execution_time_ms,
                success,
                submitted_at: chrono::Utc::now().to_rfc3339(),
            }
        }
        Err(e) => {
            log::warn!("Submission failed: {}", e);
            SubmissionResult::failed()
        }
    }
}

/// Sends a submission through `executor` and validates what comes back.
pub async fn submit(executor: &dyn CodeExecutor, submission: &Submission) -> SubmissionResult {
    validate(executor.execute(submission).await)
}
