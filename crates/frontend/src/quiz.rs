//! Quiz attempt state.
//!
//! [`QuizFlow`] is a plain value driven through [`QuizAction`]s; the
//! page dispatches actions and renders whatever falls out. Every rule
//! lives here where it runs without a browser: write-through answer
//! saving, the completeness gate, and the single in-flight submission.

use std::collections::HashMap;
use std::rc::Rc;

use api_types::{SignQuestion, TestAnswer, TestSubmitResponse};
use yew::Reducible;

/// Group submitted with every attempt until group selection ships.
pub const DEFAULT_GROUP_ID: i64 = 1;

const INCOMPLETE: &str = "모든 문제에 답변을 선택해주세요.";

/// Where the attempt currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizPhase {
    InProgress,
    Submitting,
    Completed(TestSubmitResponse),
}

/// Everything that can happen to an attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizAction {
    Select(String),
    Previous,
    Next,
    RequestSubmit,
    SubmitSucceeded(TestSubmitResponse),
    SubmitFailed(String),
}

/// One quiz attempt over a fixed question sequence.
///
/// Positions are 1-based to match what the learner sees; `answers`
/// maps a position to the chosen option.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizFlow {
    questions: Rc<Vec<SignQuestion>>,
    current: usize,
    selected: Option<String>,
    answers: HashMap<usize, String>,
    phase: QuizPhase,
    error: Option<String>,
}

impl QuizFlow {
    pub fn new(questions: Vec<SignQuestion>) -> Self {
        Self {
            questions: Rc::new(questions),
            current: 1,
            selected: None,
            answers: HashMap::new(),
            phase: QuizPhase::InProgress,
            error: None,
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// 1-based position shown to the learner.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &SignQuestion {
        &self.questions[self.current - 1]
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_first(&self) -> bool {
        self.current <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current >= self.total()
    }

    /// Payload for the in-flight submission, in question order.
    /// `None` unless the attempt is in [`QuizPhase::Submitting`].
    pub fn submission(&self) -> Option<Vec<TestAnswer>> {
        if self.phase != QuizPhase::Submitting {
            return None;
        }
        let answers = self
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| TestAnswer {
                question_id: question.sl_id,
                choose_answer: self.answers.get(&(index + 1)).cloned().unwrap_or_default(),
            })
            .collect();
        Some(answers)
    }

    fn apply(&mut self, action: QuizAction) {
        match action {
            QuizAction::Select(option) => self.select(option),
            QuizAction::Previous => self.step_back(),
            QuizAction::Next => self.step_forward(),
            QuizAction::RequestSubmit => self.request_submit(),
            QuizAction::SubmitSucceeded(result) => self.submit_succeeded(result),
            QuizAction::SubmitFailed(message) => self.submit_failed(message),
        }
    }

    /// Selection writes through to the answer map immediately; moving
    /// away and back must not lose it.
    fn select(&mut self, option: String) {
        if self.phase != QuizPhase::InProgress {
            return;
        }
        self.error = None;
        self.answers.insert(self.current, option.clone());
        self.selected = Some(option);
    }

    fn step_back(&mut self) {
        if self.phase != QuizPhase::InProgress || self.is_first() {
            return;
        }
        self.stash_selection();
        self.current -= 1;
        self.restore_selection();
    }

    fn step_forward(&mut self) {
        if self.phase != QuizPhase::InProgress || self.is_last() {
            return;
        }
        self.stash_selection();
        self.current += 1;
        self.restore_selection();
    }

    fn stash_selection(&mut self) {
        if let Some(selected) = self.selected.clone() {
            self.answers.insert(self.current, selected);
        }
    }

    fn restore_selection(&mut self) {
        self.selected = self.answers.get(&self.current).cloned();
    }

    /// The gate: every question needs a non-empty answer before the
    /// phase may move to [`QuizPhase::Submitting`].
    fn request_submit(&mut self) {
        if self.phase != QuizPhase::InProgress {
            return;
        }
        self.stash_selection();
        let unanswered = (1..=self.total())
            .any(|index| self.answers.get(&index).is_none_or(|answer| answer.is_empty()));
        if unanswered {
            self.error = Some(INCOMPLETE.to_string());
            return;
        }
        self.error = None;
        self.phase = QuizPhase::Submitting;
    }

    fn submit_succeeded(&mut self, result: TestSubmitResponse) {
        if self.phase == QuizPhase::Submitting {
            self.error = None;
            self.phase = QuizPhase::Completed(result);
        }
    }

    /// A failed submission returns to [`QuizPhase::InProgress`] with
    /// every answer intact so the learner can try again.
    fn submit_failed(&mut self, message: String) {
        if self.phase == QuizPhase::Submitting {
            self.error = Some(message);
            self.phase = QuizPhase::InProgress;
        }
    }
}

impl Reducible for QuizFlow {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, meaning: &str) -> SignQuestion {
        SignQuestion {
            sl_id: id,
            meaning: meaning.to_string(),
            video_path: format!("/videos/{id}.mp4"),
            answers: vec![
                meaning.to_string(),
                "보기2".to_string(),
                "보기3".to_string(),
                "보기4".to_string(),
            ],
        }
    }

    fn flow() -> QuizFlow {
        let questions = (1..=5)
            .map(|n| question(n * 10, &format!("단어{n}")))
            .collect();
        QuizFlow::new(questions)
    }

    fn answer_all(flow: &mut QuizFlow) {
        for n in 1..=5 {
            flow.apply(QuizAction::Select(format!("답{n}")));
            flow.apply(QuizAction::Next);
        }
    }

    #[test]
    fn starts_at_the_first_question() {
        let flow = flow();
        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.total(), 5);
        assert!(flow.is_first());
        assert_eq!(flow.phase(), &QuizPhase::InProgress);
        assert_eq!(flow.selected(), None);
    }

    #[test]
    fn selection_survives_a_navigation_round_trip() {
        let mut flow = flow();
        flow.apply(QuizAction::Select("단어1".to_string()));
        flow.apply(QuizAction::Next);
        assert_eq!(flow.selected(), None);

        flow.apply(QuizAction::Previous);
        assert_eq!(flow.selected(), Some("단어1"));
    }

    #[test]
    fn reselecting_overwrites_the_same_slot() {
        let mut flow = flow();
        flow.apply(QuizAction::Select("보기2".to_string()));
        flow.apply(QuizAction::Select("보기3".to_string()));
        flow.apply(QuizAction::Next);
        flow.apply(QuizAction::Previous);

        assert_eq!(flow.selected(), Some("보기3"));
        assert_eq!(flow.answers.len(), 1);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut flow = flow();
        flow.apply(QuizAction::Previous);
        assert_eq!(flow.current_index(), 1);

        for _ in 0..10 {
            flow.apply(QuizAction::Next);
        }
        assert_eq!(flow.current_index(), 5);
        assert!(flow.is_last());
    }

    #[test]
    fn submit_gate_blocks_an_incomplete_attempt() {
        let mut flow = flow();
        flow.apply(QuizAction::Select("보기2".to_string()));
        flow.apply(QuizAction::RequestSubmit);

        assert_eq!(flow.phase(), &QuizPhase::InProgress);
        assert_eq!(flow.error(), Some("모든 문제에 답변을 선택해주세요."));
        assert_eq!(flow.submission(), None);
    }

    #[test]
    fn complete_attempt_submits_an_ordered_payload() {
        let mut flow = flow();
        answer_all(&mut flow);
        flow.apply(QuizAction::RequestSubmit);
        assert_eq!(flow.phase(), &QuizPhase::Submitting);

        let payload = flow.submission().unwrap();
        assert_eq!(payload.len(), 5);
        assert_eq!(payload[0].question_id, 10);
        assert_eq!(payload[0].choose_answer, "답1");
        assert_eq!(payload[4].question_id, 50);
        assert_eq!(payload[4].choose_answer, "답5");
    }

    #[test]
    fn submitting_ignores_further_input() {
        let mut flow = flow();
        answer_all(&mut flow);
        flow.apply(QuizAction::RequestSubmit);

        flow.apply(QuizAction::Select("바뀐답".to_string()));
        flow.apply(QuizAction::Previous);
        flow.apply(QuizAction::RequestSubmit);

        assert_eq!(flow.phase(), &QuizPhase::Submitting);
        assert_eq!(flow.current_index(), 5);
        assert_eq!(flow.submission().unwrap()[4].choose_answer, "답5");
    }

    #[test]
    fn failed_submission_keeps_answers_and_reports_the_message() {
        let mut flow = flow();
        answer_all(&mut flow);
        flow.apply(QuizAction::RequestSubmit);
        flow.apply(QuizAction::SubmitFailed(
            "테스트 제출에 실패했습니다.".to_string(),
        ));

        assert_eq!(flow.phase(), &QuizPhase::InProgress);
        assert_eq!(flow.error(), Some("테스트 제출에 실패했습니다."));

        flow.apply(QuizAction::RequestSubmit);
        assert_eq!(flow.phase(), &QuizPhase::Submitting);
        assert_eq!(flow.submission().unwrap()[0].choose_answer, "답1");
    }

    #[test]
    fn successful_submission_completes_the_attempt() {
        let mut flow = flow();
        answer_all(&mut flow);
        flow.apply(QuizAction::RequestSubmit);

        let result = TestSubmitResponse {
            message: "채점이 완료되었습니다.".to_string(),
            total_questions: 5,
            correct_answers: 4,
            score: 80.0,
        };
        flow.apply(QuizAction::SubmitSucceeded(result.clone()));
        assert_eq!(flow.phase(), &QuizPhase::Completed(result));
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn selecting_clears_a_stale_validation_error() {
        let mut flow = flow();
        flow.apply(QuizAction::RequestSubmit);
        assert!(flow.error().is_some());

        flow.apply(QuizAction::Select("보기2".to_string()));
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn reduce_returns_an_updated_copy() {
        let flow = Rc::new(flow());
        let next = Rc::clone(&flow).reduce(QuizAction::Select("보기2".to_string()));
        assert_eq!(next.selected(), Some("보기2"));
        assert_eq!(flow.selected(), None);
    }
}
