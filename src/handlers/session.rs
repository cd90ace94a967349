// src/handlers/session.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        result::SubmissionResponse,
        session::{AnswersResponse, RecordAnswerRequest, TestView},
        user::UserInfo,
    },
    quiz::{RegistryError, SessionRegistry},
};

/// Where a client without a session should start over.
pub const TEST_ENTRY: &str = "/api/signup";

fn session_error(err: RegistryError) -> AppError {
    match err {
        RegistryError::NotFound => AppError::NotFound("Test session not found".to_string()),
        RegistryError::AlreadySubmitted => {
            AppError::Conflict("Test has already been submitted".to_string())
        }
        RegistryError::NotSubmitted => AppError::Conflict("Test is still running".to_string()),
        RegistryError::Pending => {
            AppError::Conflict("Result is still being processed".to_string())
        }
        RegistryError::Poisoned => {
            AppError::InternalServerError("session state lock poisoned".to_string())
        }
    }
}

/// Signs a candidate up and starts their test.
///
/// Every missing field is reported at once. The question set is fetched
/// here, once; if that fails the session still opens and its view carries
/// a loading message.
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = UserInfo,
    responses(
        (status = 201, description = "Test started", body = TestView),
        (status = 400, description = "Missing or invalid signup fields")
    ),
    tag = "test"
)]
pub async fn signup(
    State(sessions): State<SessionRegistry>,
    Json(payload): Json<UserInfo>,
) -> Result<impl IntoResponse, AppError> {
    let user_info = payload.sanitized();
    user_info.validate()?;

    let view = sessions
        .start(user_info)
        .await
        .map_err(session_error)?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// Current state of a test: time left, questions, selections.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session id returned by signup")),
    responses(
        (status = 200, description = "Test state", body = TestView),
        (status = 404, description = "Unknown session")
    ),
    tag = "test"
)]
pub async fn get_session(
    State(sessions): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Json<TestView>, AppError> {
    sessions.view(id).map(Json).map_err(session_error)
}

/// Records (or replaces) the selected option for one question.
#[utoipa::path(
    put,
    path = "/api/sessions/{id}/answers",
    params(("id" = Uuid, Path, description = "Session id")),
    request_body = RecordAnswerRequest,
    responses(
        (status = 200, description = "All answers so far", body = AnswersResponse),
        (status = 404, description = "Unknown session"),
        (status = 409, description = "Test already submitted")
    ),
    tag = "test"
)]
pub async fn record_answer(
    State(sessions): State<SessionRegistry>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RecordAnswerRequest>,
) -> Result<Json<AnswersResponse>, AppError> {
    let answers = sessions
        .record_answer(id, payload.question_id, payload.answer)
        .map_err(session_error)?;

    Ok(Json(AnswersResponse { answers }))
}

/// Submits the test before the clock runs out.
///
/// The result comes back even when it could not be saved; `notice` then
/// says so.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/submit",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 200, description = "Scored result", body = SubmissionResponse),
        (status = 404, description = "Unknown session"),
        (status = 409, description = "Already submitted (manually or on expiry)")
    ),
    tag = "test"
)]
pub async fn submit(
    State(sessions): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let response = sessions.submit(id).await.map_err(session_error)?;
    Ok(Json(response))
}

/// The result page.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/result",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 200, description = "Scored result", body = SubmissionResponse),
        (status = 404, description = "No submitted test for this id; follow `redirect`"),
        (status = 409, description = "Result is still being saved")
    ),
    tag = "test"
)]
pub async fn get_result(
    State(sessions): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmissionResponse>, AppError> {
    match sessions.result(id) {
        Ok(response) => Ok(Json(response)),
        Err(RegistryError::NotFound) | Err(RegistryError::NotSubmitted) => {
            Err(AppError::MissingContext {
                message: "User information or test score is missing. Please try again."
                    .to_string(),
                redirect: TEST_ENTRY.to_string(),
            })
        }
        Err(e) => Err(session_error(e)),
    }
}

/// Starts a new test for the same candidate once the previous one is submitted.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/retry",
    params(("id" = Uuid, Path, description = "Session id of the previous attempt")),
    responses(
        (status = 201, description = "New test started", body = TestView),
        (status = 404, description = "Unknown session"),
        (status = 409, description = "Previous attempt is still running")
    ),
    tag = "test"
)]
pub async fn retry(
    State(sessions): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = sessions.retry(id).await.map_err(session_error)?;
    Ok((StatusCode::CREATED, Json(view)))
}
