//! Quiz retrieval and submission.

use api_types::{SignQuestion, TestAnswer, TestSubmitRequest, TestSubmitResponse};

use super::ServiceError;
use crate::api::ApiClient;

const TEST_LIST_PATH: &str = "/api/tests/getTestList";
const SUBMIT_PATH: &str = "/api/tests/submit";

const LIST_FAILED: &str = "문제 목록을 불러오지 못했습니다.";
const SUBMIT_FAILED: &str = "테스트 제출에 실패했습니다.";

/// Question list and grading endpoints.
pub struct TestService {
    client: ApiClient,
}

impl TestService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the question set for one quiz run.
    pub async fn get_test_list(&self) -> Result<Vec<SignQuestion>, ServiceError> {
        self.client
            .get_json(TEST_LIST_PATH)
            .await
            .map_err(|error| ServiceError::from_api(error, LIST_FAILED))
    }

    /// Sends the chosen answers up for grading.
    pub async fn submit_test(
        &self,
        answers: Vec<TestAnswer>,
        group_id: Option<i64>,
    ) -> Result<TestSubmitResponse, ServiceError> {
        let request = TestSubmitRequest { answers, group_id };
        self.client
            .post_json(SUBMIT_PATH, &request)
            .await
            .map_err(|error| ServiceError::from_api(error, SUBMIT_FAILED))
    }
}
