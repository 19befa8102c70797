// src/api/handlers/sessions.rs
use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use uuid::Uuid;

use crate::api::AppState;
use crate::errors::PracticeError;
use crate::models::{ApiError, CodeRequest, SessionSnapshot, SubmitRequest};
use crate::session::{PracticeSession, SettingsPatch};
use crate::validator;

fn error_response(e: &PracticeError) -> HttpResponse {
    let body = ApiError { error: e.to_string() };
    match e {
        PracticeError::SessionNotFound(_) => HttpResponse::NotFound().json(body),
        PracticeError::InvalidRange { .. }
        | PracticeError::InvalidListLength { .. }
        | PracticeError::EmptyList
        | PracticeError::UnknownLanguage(_)
        | PracticeError::ProblemNotStarted => HttpResponse::BadRequest().json(body),
        PracticeError::SubmissionInFlight => HttpResponse::Conflict().json(body),
        _ => {
            log::error!("Request failed: {}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Runs `action` against one session under the write lock and renders the result.
async fn with_session<F>(state: &AppState, id: Uuid, action: F) -> HttpResponse
where
    F: FnOnce(&mut PracticeSession, &AppState) -> crate::errors::Result<()>,
{
    let mut sessions = state.sessions.write().await;
    let Some(session) = sessions.get_mut(&id) else {
        return error_response(&PracticeError::SessionNotFound(id));
    };
    session.touch(Utc::now());
    match action(session, state) {
        Ok(()) => HttpResponse::Ok().json(SessionSnapshot::new(id, session)),
        Err(e) => error_response(&e),
    }
}

pub async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse> {
    let id = Uuid::new_v4();
    let session = PracticeSession::new(&state.config.defaults, state.config.max_list_length);
    let snapshot = SessionSnapshot::new(id, &session);
    state.sessions.write().await.insert(id, session);
    log::info!("Created session {}", id);
    Ok(HttpResponse::Created().json(snapshot))
}

pub async fn get_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let mut sessions = state.sessions.write().await;
    Ok(match sessions.get_mut(&id) {
        Some(session) => {
            session.touch(Utc::now());
            HttpResponse::Ok().json(SessionSnapshot::new(id, session))
        }
        None => error_response(&PracticeError::SessionNotFound(id)),
    })
}

pub async fn delete_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    Ok(match state.sessions.write().await.remove(&id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => error_response(&PracticeError::SessionNotFound(id)),
    })
}

pub async fn update_settings(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SettingsPatch>,
) -> Result<HttpResponse> {
    let patch = req.into_inner();
    Ok(with_session(&state, path.into_inner(), |session, _| session.update_settings(patch)).await)
}

pub async fn change_settings(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    Ok(with_session(&state, path.into_inner(), |session, _| {
        session.change_settings();
        Ok(())
    })
    .await)
}

pub async fn update_code(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<CodeRequest>,
) -> Result<HttpResponse> {
    let code = req.into_inner().code;
    Ok(with_session(&state, path.into_inner(), |session, _| {
        session.set_code(code);
        Ok(())
    })
    .await)
}

pub async fn start_problem(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    Ok(with_session(&state, path.into_inner(), |session, state| {
        session.start(state.rng.as_ref())
    })
    .await)
}

pub async fn randomize_problem(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    Ok(with_session(&state, path.into_inner(), |session, state| {
        session.randomize(state.rng.as_ref())
    })
    .await)
}

/// Sends the session's code to the execution service.
///
/// The remote call and the bookkeeping after it run in their own task, so a
/// dropped request still clears the in-flight flag. The session lock is
/// released while the remote call runs. Remote failures come back as an
/// unsuccessful result with status 200.
pub async fn submit_code(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: Option<web::Json<SubmitRequest>>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let code = req.and_then(|r| r.into_inner().code);

    let submission = {
        let mut sessions = state.sessions.write().await;
        let Some(session) = sessions.get_mut(&id) else {
            return Ok(error_response(&PracticeError::SessionNotFound(id)));
        };
        session.touch(Utc::now());
        match session.begin_submission(code) {
            Ok(submission) => submission,
            Err(e) => return Ok(error_response(&e)),
        }
    };

    let state = state.get_ref().clone();
    let task = actix_rt::spawn(async move {
        let result = validator::submit(state.executor.as_ref(), &submission).await;
        log::info!(
            "Session {} submission finished: success={} time={}",
            id,
            result.success,
            result.execution_time_label()
        );

        let mut sessions = state.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.finish_submission(result);
        session.touch(Utc::now());
        Some(SessionSnapshot::new(id, session))
    });

    Ok(match task.await {
        Ok(Some(snapshot)) => HttpResponse::Ok().json(snapshot),
        Ok(None) => error_response(&PracticeError::SessionNotFound(id)),
        Err(e) => {
            log::error!("Submission task for session {} failed: {}", id, e);
            HttpResponse::InternalServerError().json(ApiError {
                error: "Submission task failed".to_string(),
            })
        }
    })
}
