// src/api/handlers/languages.rs
use actix_web::{HttpResponse, Result};
use serde::Serialize;
use crate::language::Language;
use crate::models::LanguageInfo;

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
}

pub async fn get_languages() -> Result<HttpResponse> {
    let languages = Language::all().into_iter().map(LanguageInfo::from).collect();
    Ok(HttpResponse::Ok().json(LanguagesResponse { languages }))
}
