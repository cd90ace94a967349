// src/docs.rs

use utoipa::OpenApi;

use crate::{
    handlers::{admin, auth, enquiry, session},
    models::{
        answer::Answer,
        enquiry::EnquiryCreated,
        question::PublicQuestion,
        result::{AdminResultEntry, QuestionReview, ResultView, SubmissionResponse},
        session::{AnswersResponse, RecordAnswerRequest, SessionStatus, TestView},
        user::{LoginRequest, TokenResponse, UserInfo},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        session::signup,
        session::get_session,
        session::record_answer,
        session::submit,
        session::get_result,
        session::retry,
        enquiry::create_enquiry,
        auth::login,
        admin::list_results,
        admin::delete_result,
    ),
    components(schemas(
        UserInfo,
        PublicQuestion,
        Answer,
        TestView,
        SessionStatus,
        RecordAnswerRequest,
        AnswersResponse,
        ResultView,
        QuestionReview,
        SubmissionResponse,
        AdminResultEntry,
        EnquiryCreated,
        LoginRequest,
        TokenResponse,
    )),
    tags(
        (name = "test", description = "Signup, timed test and result"),
        (name = "admin", description = "Stored results (bearer token required)"),
        (name = "auth", description = "Administrator login"),
        (name = "enquiry", description = "Contact form")
    )
)]
pub struct ApiDoc;
