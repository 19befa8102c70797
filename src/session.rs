// src/session.rs
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::SessionDefaults;
use crate::errors::{PracticeError, Result};
use crate::executor::Submission;
use crate::generator::{self, Range, RandomSource};
use crate::language::Language;
use crate::validator::SubmissionResult;

/// Partial settings update. Absent fields are left alone.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SettingsPatch {
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub list_length: Option<usize>,
    pub language: Option<Language>,
}

/// State of one user's practice page.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    pub min_value: i64,
    pub max_value: i64,
    pub list_length: usize,
    pub language: Language,
    pub code: String,
    pub problem_started: bool,
    pub unsorted_list: Vec<i64>,
    pub result: Option<SubmissionResult>,
    pub is_submitting: bool,
    pub last_touched: DateTime<Utc>,
    max_list_length: usize,
}

impl PracticeSession {
    pub fn new(defaults: &SessionDefaults, max_list_length: usize) -> Self {
        Self {
            min_value: defaults.min_value,
            max_value: defaults.max_value,
            list_length: defaults.list_length,
            language: defaults.language,
            code: defaults.language.template().to_string(),
            problem_started: false,
            unsorted_list: Vec::new(),
            result: None,
            is_submitting: false,
            last_touched: Utc::now(),
            max_list_length,
        }
    }

    pub fn max_list_length(&self) -> usize {
        self.max_list_length
    }

    /// Apply a settings patch. Switching language swaps in that language's template.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<()> {
        if let Some(length) = patch.list_length {
            if length == 0 || length > self.max_list_length {
                return Err(PracticeError::InvalidListLength {
                    length,
                    max: self.max_list_length,
                });
            }
        }

        if let Some(min) = patch.min_value {
            self.min_value = min;
        }
        if let Some(max) = patch.max_value {
            self.max_value = max;
        }
        if let Some(length) = patch.list_length {
            self.list_length = length;
        }
        if let Some(language) = patch.language {
            if language != self.language {
                self.language = language;
                self.code = language.template().to_string();
            }
        }
        Ok(())
    }

    /// Record activity so the idle sweep leaves this session alone.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_touched = now;
    }

    /// A session with a submission in flight is never idle.
    pub fn is_idle(&self, now: DateTime<Utc>, max_idle: chrono::Duration) -> bool {
        !self.is_submitting && now - self.last_touched > max_idle
    }

    pub fn can_start(&self) -> bool {
        Range::can_start(self.min_value, self.max_value)
    }

    /// Generate a fresh problem and reset the editor and last result.
    pub fn start(&mut self, rng: &dyn RandomSource) -> Result<()> {
        if self.is_submitting {
            return Err(PracticeError::SubmissionInFlight);
        }
        self.unsorted_list = self.generate(rng)?;
        self.code = self.language.template().to_string();
        self.result = None;
        self.problem_started = true;
        Ok(())
    }

    /// Replace the list of a running problem, keeping code and result.
    pub fn randomize(&mut self, rng: &dyn RandomSource) -> Result<()> {
        if !self.problem_started {
            return Err(PracticeError::ProblemNotStarted);
        }
        if self.is_submitting {
            return Err(PracticeError::SubmissionInFlight);
        }
        self.unsorted_list = self.generate(rng)?;
        Ok(())
    }

    /// Back to the setup screen.
    pub fn change_settings(&mut self) {
        self.problem_started = false;
    }

    pub fn set_code(&mut self, code: String) {
        self.code = code;
    }

    /// Builds the submission for the current problem and marks it in flight.
    ///
    /// `code` replaces the stored code only once the submission is accepted.
    pub fn begin_submission(&mut self, code: Option<String>) -> Result<Submission> {
        if !self.problem_started {
            return Err(PracticeError::ProblemNotStarted);
        }
        if self.is_submitting {
            return Err(PracticeError::SubmissionInFlight);
        }
        if let Some(code) = code {
            self.code = code;
        }
        self.is_submitting = true;
        self.result = None;
        Ok(Submission {
            code: self.code.clone(),
            language: self.language,
            test_array: self.unsorted_list.clone(),
        })
    }

    pub fn finish_submission(&mut self, result: SubmissionResult) {
        self.result = Some(result);
        self.is_submitting = false;
    }

    fn generate(&self, rng: &dyn RandomSource) -> Result<Vec<i64>> {
        let range = Range::new(self.min_value, self.max_value)?;
        generator::generate_unsorted_list(range, self.list_length, rng)
    }
}
