// src/models.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::Language;
use crate::session::PracticeSession;
use crate::validator::SubmissionResult;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiError {
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LanguageInfo {
    pub id: Language,
    pub name: String,
    pub editor_language: Option<String>,
    pub template: String,
}

impl From<Language> for LanguageInfo {
    fn from(lang: Language) -> Self {
        Self {
            id: lang,
            name: lang.display_name().to_string(),
            editor_language: lang.editor_language().map(str::to_string),
            template: lang.template().to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct CodeRequest {
    pub code: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct SubmitRequest {
    #[serde(default)]
    pub code: Option<String>,
}

/// Everything the page needs to render one session.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub min_value: i64,
    pub max_value: i64,
    pub list_length: usize,
    pub max_list_length: usize,
    pub language: Language,
    pub editor_language: Option<String>,
    pub code: String,
    pub can_start: bool,
    pub problem_started: bool,
    pub unsorted_list: Vec<i64>,
    pub is_submitting: bool,
    pub result: Option<SubmissionResult>,
    pub success_label: String,
    pub execution_time_label: String,
}

impl SessionSnapshot {
    pub fn new(id: Uuid, session: &PracticeSession) -> Self {
        let (success_label, execution_time_label) = match &session.result {
            Some(result) => (
                result.success_label().to_string(),
                result.execution_time_label(),
            ),
            None => ("No".to_string(), "N/A".to_string()),
        };
        Self {
            id,
            min_value: session.min_value,
            max_value: session.max_value,
            list_length: session.list_length,
            max_list_length: session.max_list_length(),
            language: session.language,
            editor_language: session.language.editor_language().map(str::to_string),
            code: session.code.clone(),
            can_start: session.can_start(),
            problem_started: session.problem_started,
            unsorted_list: session.unsorted_list.clone(),
            is_submitting: session.is_submitting,
            result: session.result.clone(),
            success_label,
            execution_time_label,
        }
    }
}
