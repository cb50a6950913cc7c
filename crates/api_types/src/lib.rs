//! Wire types shared with the kkomason backend.
//!
//! Field names follow the backend's JSON contract exactly: request and
//! response bodies use camelCase keys, while quiz rows arrive in the
//! snake_case shape the question table uses. Keep renames here rather
//! than at call sites so the contract stays visible in one place.

use serde::{Deserialize, Serialize};

/// Credential login body for `POST /api/members/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub login_id: String,
    pub password: String,
}

/// Successful login payload: the display name plus the bearer token
/// every authenticated call carries afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub nickname: String,
    pub access_token: String,
}

/// One quiz question from `GET /api/tests/getTestList`.
///
/// `answers` holds the four presented choices; the first entry is the
/// canonical correct answer, though scoring happens server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignQuestion {
    pub sl_id: i64,
    pub meaning: String,
    pub video_path: String,
    pub answers: Vec<String>,
}

/// A single chosen answer inside a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAnswer {
    pub question_id: i64,
    pub choose_answer: String,
}

/// Submission envelope for `POST /api/tests/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSubmitRequest {
    pub answers: Vec<TestAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
}

/// Server-computed grading summary returned by the submit endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSubmitResponse {
    pub message: String,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub score: f64,
}
