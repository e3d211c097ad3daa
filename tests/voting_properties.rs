//! Property-based tests for the publish-window predicates and the vote
//! upsert.

use std::collections::HashMap;
use std::sync::Arc;

use proptest::prelude::*;

use polls::adapters::storage::InMemoryPollStore;
use polls::application::{CastVoteCommand, CastVoteHandler};
use polls::domain::foundation::{Timestamp, UserId};
use polls::domain::poll::{Choice, Question, VoteOutcome};
use polls::ports::{QuestionRepository, VoteRepository};

const DAY_SECS: i64 = 24 * 60 * 60;

fn base() -> Timestamp {
    Timestamp::now()
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

// ============================================================================
// Publish window predicates
// ============================================================================

proptest! {
    /// A question is published exactly from its pub_date onwards.
    #[test]
    fn prop_is_published_iff_now_not_before_pub_date(offset in -10 * DAY_SECS..10 * DAY_SECS) {
        let now = base();
        let question = Question::new("Q?", now.plus_secs(offset), None).unwrap();

        prop_assert_eq!(question.is_published(&now), offset <= 0);
    }

    /// Without an end date, voting is open whenever the question is published.
    #[test]
    fn prop_open_ended_can_vote_matches_is_published(
        pub_offset in -10 * DAY_SECS..10 * DAY_SECS,
        now_offset in -10 * DAY_SECS..10 * DAY_SECS,
    ) {
        let origin = base();
        let question = Question::new("Q?", origin.plus_secs(pub_offset), None).unwrap();
        let now = origin.plus_secs(now_offset);

        prop_assert_eq!(question.can_vote(&now), question.is_published(&now));
    }

    /// With an end date, voting is open only inside the inclusive window.
    #[test]
    fn prop_can_vote_iff_inside_window(
        pub_offset in -10 * DAY_SECS..10 * DAY_SECS,
        length in 0..5 * DAY_SECS,
        now_offset in -20 * DAY_SECS..20 * DAY_SECS,
    ) {
        let origin = base();
        let pub_date = origin.plus_secs(pub_offset);
        let end_date = pub_date.plus_secs(length);
        let question = Question::new("Q?", pub_date, Some(end_date)).unwrap();
        let now = origin.plus_secs(now_offset);

        let inside = now_offset >= pub_offset && now_offset <= pub_offset + length;
        prop_assert_eq!(question.can_vote(&now), inside);
    }

    /// Recent means published within the last day, never in the future.
    #[test]
    fn prop_recently_published_iff_within_last_day(offset in -3 * DAY_SECS..3 * DAY_SECS) {
        let now = base();
        let question = Question::new("Q?", now.plus_secs(offset), None).unwrap();

        let expected = (-DAY_SECS..=0).contains(&offset);
        prop_assert_eq!(question.was_published_recently(&now), expected);
    }

    /// An end date before the pub date is never accepted.
    #[test]
    fn prop_end_before_pub_rejected(gap in 1..10 * DAY_SECS) {
        let pub_date = base();
        let end_date = pub_date.plus_secs(-gap);

        prop_assert!(Question::new("Q?", pub_date, Some(end_date)).is_err());
    }
}

// ============================================================================
// Vote upsert
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any sequence of (user, choice) votes on one open question:
    /// each user holds exactly one vote, pointing at their last choice,
    /// the first vote per user is Created and the rest are Updated.
    #[test]
    fn prop_vote_sequence_keeps_one_vote_per_user(
        votes in prop::collection::vec((0usize..4, 0usize..3), 1..40)
    ) {
        runtime().block_on(async {
            let store = Arc::new(InMemoryPollStore::new());
            let question = Question::new("Q?", base().minus_days(1), None).unwrap();
            let choices: Vec<Choice> = (0..3)
                .map(|i| Choice::new(*question.id(), format!("choice {}", i)).unwrap())
                .collect();
            store.save(&question, &choices).await.unwrap();

            let handler = CastVoteHandler::new(store.clone(), store.clone(), store.clone());
            let mut last_choice: HashMap<usize, usize> = HashMap::new();

            for (user, choice) in &votes {
                let outcome = handler
                    .handle(CastVoteCommand {
                        question_id: *question.id(),
                        user_id: UserId::new(format!("user-{}", user)).unwrap(),
                        choice_id: Some(*choices[*choice].id()),
                        now: Timestamp::now(),
                    })
                    .await
                    .unwrap();

                let first_vote = last_choice.insert(*user, *choice).is_none();
                match outcome {
                    VoteOutcome::Created { choice_id } => {
                        prop_assert!(first_vote);
                        prop_assert_eq!(&choice_id, choices[*choice].id());
                    }
                    VoteOutcome::Updated { new_choice_id, .. } => {
                        prop_assert!(!first_vote);
                        prop_assert_eq!(&new_choice_id, choices[*choice].id());
                    }
                    VoteOutcome::Rejected { .. } => prop_assert!(false, "open question rejected a vote"),
                }
            }

            prop_assert_eq!(store.vote_count().await, last_choice.len());

            for (user, choice) in &last_choice {
                let user_id = UserId::new(format!("user-{}", user)).unwrap();
                prop_assert_eq!(store.votes_for(&user_id, question.id()).await, 1);
                let vote = store
                    .find_by_user_and_question(&user_id, question.id())
                    .await
                    .unwrap()
                    .unwrap();
                prop_assert_eq!(vote.choice_id(), choices[*choice].id());
            }

            for (index, choice) in choices.iter().enumerate() {
                let expected = last_choice.values().filter(|c| **c == index).count() as u64;
                prop_assert_eq!(store.count_by_choice(choice.id()).await.unwrap(), expected);
            }

            Ok::<(), TestCaseError>(())
        })?;
    }
}
