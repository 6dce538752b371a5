//! Integration tests for the assessment lifecycle.
//!
//! These tests verify the end-to-end flow:
//! 1. An admin edits the live rubric
//! 2. A user fills in answers, scoring them live along the way
//! 3. The completed assessment is submitted and stored with its rubric snapshot
//! 4. Later rubric edits do not change the stored result
//! 5. History is listed newest first and pruned
//!
//! Uses the in-memory and file adapters, no external services.

use std::sync::Arc;

use tempfile::TempDir;

use burhan_scale::adapters::{FileAssessmentRepository, FileFeedbackRepository, FileRubricStore};
use burhan_scale::application::{PostFeedbackCommand, ScoreAnswersQuery, SubmitAssessmentCommand};
use burhan_scale::bootstrap::Services;
use burhan_scale::domain::assessment::ProjectInfo;
use burhan_scale::domain::feedback::FeedbackRole;
use burhan_scale::domain::foundation::ErrorCode;
use burhan_scale::domain::rubric::{Rubric, RubricEdit};
use burhan_scale::domain::scoring::{AnswerValue, Answers, MaturityTier, PositionalAnswers};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn project_info(name: &str) -> ProjectInfo {
    ProjectInfo {
        user_name: "ليلى".to_string(),
        project_name: name.to_string(),
        organization: "أمانة المنطقة".to_string(),
        email: "laila@example.sa".to_string(),
        phone: "+966555555555".to_string(),
    }
}

fn uniform(rubric: &Rubric, rung: u8) -> PositionalAnswers {
    Answers::uniform(rubric, AnswerValue::rung(rung).unwrap()).to_positional(rubric)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn answering_then_submitting_stores_a_reproducible_record() {
    let services = Services::in_memory();
    let rubric = services.rubric_admin_handler().current().await.unwrap();

    // Live scoring of a blank sheet
    let blank = services
        .score_handler()
        .handle(ScoreAnswersQuery {
            answers: Answers::new().to_positional(&rubric),
        })
        .await
        .unwrap();
    assert_eq!(blank.score.percentage.value(), 0);
    assert_eq!(blank.completion.answered, 0);

    // Submit a full sheet
    let result = services
        .submit_handler()
        .handle(SubmitAssessmentCommand {
            project_info: project_info("بوابة"),
            answers: uniform(&rubric, 4),
        })
        .await
        .unwrap();

    assert_eq!(result.record.percentage().value(), 75);
    assert_eq!(result.record.classification(), MaturityTier::Advanced);
    assert_eq!(result.record.max_score(), 175.0);
    assert_eq!(result.plan.priority.len(), 7);

    let stored = services
        .history_handler()
        .get(result.record.id())
        .await
        .unwrap();
    assert_eq!(stored, result.record);
    let rescored = stored.rescore().unwrap();
    assert_eq!(rescored.percentage, stored.percentage());
    assert_eq!(rescored.classification, stored.classification());
}

#[tokio::test]
async fn incomplete_submission_is_refused() {
    let services = Services::in_memory();
    let rubric = services.rubric_admin_handler().current().await.unwrap();
    let mut answers = uniform(&rubric, 5);
    let last_domain = rubric.domains().last().unwrap();
    answers.get_mut(&last_domain.key).unwrap()[0] = None;

    let err = services
        .submit_handler()
        .handle(SubmitAssessmentCommand {
            project_info: project_info("ناقص"),
            answers,
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::IncompleteAssessment);
    assert!(services.history_handler().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn rubric_edits_after_submission_do_not_change_stored_results() {
    let services = Services::in_memory();
    let admin = services.rubric_admin_handler();
    let rubric = admin.current().await.unwrap();

    let submitted = services
        .submit_handler()
        .handle(SubmitAssessmentCommand {
            project_info: project_info("قبل التعديل"),
            answers: uniform(&rubric, 5),
        })
        .await
        .unwrap()
        .record;

    admin
        .apply_all(vec![
            RubricEdit::RemoveDomain { domain: 0 },
            RubricEdit::AddQuestion { domain: 0 },
            RubricEdit::MoveQuestion {
                domain: 1,
                from: 0,
                to: 2,
            },
        ])
        .await
        .unwrap();

    let history = services.history_handler();
    let snapshot = history.rescore(submitted.id()).await.unwrap();
    let live = history.rescore_against_live(submitted.id()).await.unwrap();

    assert_eq!(snapshot.percentage.value(), 100);
    assert_eq!(snapshot.per_domain.len(), 7);
    assert_eq!(live.per_domain.len(), 6);
    // the added question is unanswered, the moved one kept its answer
    assert!(live.per_domain[0].score < 25.0);
    assert_eq!(live.per_domain[1].score, 25.0);
}

#[tokio::test]
async fn answers_follow_the_rubric_they_were_positioned_against() {
    let services = Services::in_memory();
    let admin = services.rubric_admin_handler();
    let rubric = admin
        .apply(RubricEdit::UpdateWeight {
            domain: 0,
            question: 0,
            weight: 2.0,
        })
        .await
        .unwrap();

    let domain = &rubric.domains()[0];
    let mut answers = Answers::uniform(&rubric, AnswerValue::NotApplicable);
    answers.set(&domain.key, &domain.questions[0].id, AnswerValue::rung(5).unwrap());

    let result = services
        .score_handler()
        .handle(ScoreAnswersQuery {
            answers: answers.to_positional(&rubric),
        })
        .await
        .unwrap();

    assert!(result.completion.is_complete());
    let first = result.score.domain(&domain.key).unwrap();
    assert!(first.score > 0.0);
    assert!(result.score.per_domain[1..].iter().all(|d| d.score == 0.0));
}

#[tokio::test]
async fn history_lists_newest_first_and_clears() {
    let services = Services::in_memory();
    let rubric = services.rubric_admin_handler().current().await.unwrap();
    let submit = services.submit_handler();

    let mut ids = Vec::new();
    for (i, rung) in [1u8, 3, 5].into_iter().enumerate() {
        let record = submit
            .handle(SubmitAssessmentCommand {
                project_info: project_info(&format!("مشروع {i}")),
                answers: uniform(&rubric, rung),
            })
            .await
            .unwrap()
            .record;
        ids.push(*record.id());
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let history = services.history_handler();
    let listed: Vec<_> = history.list().await.unwrap().iter().map(|r| *r.id()).collect();
    ids.reverse();
    assert_eq!(listed, ids);

    let overview = history.overview().await.unwrap();
    assert_eq!(overview.total, 3);
    assert_eq!(overview.latest, Some(ids[0]));
    assert_eq!(overview.tier_counts[&MaturityTier::Pioneer], 1);

    assert_eq!(history.delete_all().await.unwrap(), 3);
    assert_eq!(history.overview().await.unwrap().total, 0);
}

#[tokio::test]
async fn file_backed_services_survive_restart() {
    let dir = TempDir::new().unwrap();
    let make = || Services {
        rubric_store: Arc::new(FileRubricStore::new(dir.path())),
        repository: Arc::new(FileAssessmentRepository::new(dir.path().join("assessments"))),
        feedback: Arc::new(FileFeedbackRepository::new(dir.path().join("feedback"))),
    };

    let first = make();
    let rubric = first
        .rubric_admin_handler()
        .apply(RubricEdit::RenameDomain {
            domain: 0,
            title: "الحوكمة الرقمية".to_string(),
        })
        .await
        .unwrap();
    let record = first
        .submit_handler()
        .handle(SubmitAssessmentCommand {
            project_info: project_info("دائم"),
            answers: uniform(&rubric, 2),
        })
        .await
        .unwrap()
        .record;
    first
        .feedback_handler()
        .post(PostFeedbackCommand {
            name: "سارة".to_string(),
            message: "التقييم واضح".to_string(),
            role: FeedbackRole::User,
        })
        .await
        .unwrap();

    let second = make();
    let current = second.rubric_admin_handler().current().await.unwrap();
    assert_eq!(current.domains()[0].title, "الحوكمة الرقمية");

    let loaded = second.history_handler().get(record.id()).await.unwrap();
    assert_eq!(loaded.percentage(), record.percentage());
    assert_eq!(loaded.rubric(), &rubric);

    let board = second.feedback_handler().list().await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].message(), "التقييم واضح");

    let plan = second.history_handler().plan(record.id()).await.unwrap();
    assert_eq!(plan.urgent.len(), rubric.domains().len());
}
