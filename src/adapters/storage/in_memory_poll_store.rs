//! In-Memory Poll Store Adapter
//!
//! Implements every persistence port over a single set of in-memory
//! tables. Useful for testing and development.
//!
//! All tables sit behind one lock, so cascades and the one-vote-per-
//! (user, question) check happen atomically with the write they guard.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    ChoiceId, DomainError, ErrorCode, QuestionId, Timestamp, UserId,
};
use crate::domain::poll::{Choice, ChoiceTally, Question, Vote};
use crate::ports::{ChoiceRepository, PollReader, QuestionRepository, VoteRepository};

#[derive(Debug, Default)]
struct Tables {
    questions: Vec<Question>,
    choices: Vec<Choice>,
    votes: Vec<Vote>,
}

impl Tables {
    fn question_exists(&self, id: &QuestionId) -> bool {
        self.questions.iter().any(|q| q.id() == id)
    }
}

/// In-memory storage for questions, choices and votes
#[derive(Debug, Clone, Default)]
pub struct InMemoryPollStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryPollStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored votes
    pub async fn vote_count(&self) -> usize {
        self.tables.read().await.votes.len()
    }

    /// Number of vote rows a user holds on a question
    pub async fn votes_for(&self, user_id: &UserId, question_id: &QuestionId) -> usize {
        self.tables
            .read()
            .await
            .votes
            .iter()
            .filter(|v| v.user_id() == user_id && v.question_id() == question_id)
            .count()
    }

    /// Number of stored choices
    pub async fn choice_count(&self) -> usize {
        self.tables.read().await.choices.len()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryPollStore {
    async fn save(&self, question: &Question, choices: &[Choice]) -> Result<(), DomainError> {
        if let Some(stray) = choices.iter().find(|c| !c.belongs_to(question.id())) {
            return Err(DomainError::validation(
                "choices",
                format!("Choice {} belongs to another question", stray.id()),
            ));
        }

        let mut tables = self.tables.write().await;
        if tables.question_exists(question.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Question already exists: {}", question.id()),
            ));
        }

        tables.questions.push(question.clone());
        tables.choices.extend(choices.iter().cloned());
        Ok(())
    }

    async fn update(&self, question: &Question) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.questions.iter_mut().find(|q| q.id() == question.id()) {
            Some(stored) => {
                *stored = question.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question not found: {}", question.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.questions.iter().find(|q| q.id() == id).cloned())
    }

    async fn delete(&self, id: &QuestionId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.question_exists(id) {
            return Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question not found: {}", id),
            ));
        }

        tables.questions.retain(|q| q.id() != id);
        tables.choices.retain(|c| !c.belongs_to(id));
        tables.votes.retain(|v| v.question_id() != id);
        Ok(())
    }
}

#[async_trait]
impl ChoiceRepository for InMemoryPollStore {
    async fn add(&self, choice: &Choice) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.question_exists(choice.question_id()) {
            return Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question not found: {}", choice.question_id()),
            ));
        }
        tables.choices.push(choice.clone());
        Ok(())
    }

    async fn find_for_question(
        &self,
        question_id: &QuestionId,
        choice_id: &ChoiceId,
    ) -> Result<Option<Choice>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .choices
            .iter()
            .find(|c| c.id() == choice_id && c.belongs_to(question_id))
            .cloned())
    }

    async fn list_by_question(&self, question_id: &QuestionId) -> Result<Vec<Choice>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .choices
            .iter()
            .filter(|c| c.belongs_to(question_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl VoteRepository for InMemoryPollStore {
    async fn find_by_user_and_question(
        &self,
        user_id: &UserId,
        question_id: &QuestionId,
    ) -> Result<Option<Vote>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .votes
            .iter()
            .find(|v| v.user_id() == user_id && v.question_id() == question_id)
            .cloned())
    }

    async fn insert(&self, vote: &Vote) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        let choice_matches = tables
            .choices
            .iter()
            .any(|c| c.id() == vote.choice_id() && c.belongs_to(vote.question_id()));
        if !choice_matches {
            return Err(DomainError::new(
                ErrorCode::InvalidChoice,
                format!("Choice {} is not part of question {}", vote.choice_id(), vote.question_id()),
            ));
        }

        let duplicate = tables
            .votes
            .iter()
            .any(|v| v.user_id() == vote.user_id() && v.question_id() == vote.question_id());
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::VoteConflict,
                format!("User {} already voted on question {}", vote.user_id(), vote.question_id()),
            ));
        }

        tables.votes.push(vote.clone());
        Ok(())
    }

    async fn update(&self, vote: &Vote) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.votes.iter_mut().find(|v| v.id() == vote.id()) {
            Some(stored) => {
                *stored = vote.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::VoteNotFound,
                format!("Vote not found: {}", vote.id()),
            )),
        }
    }

    async fn count_by_choice(&self, choice_id: &ChoiceId) -> Result<u64, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.votes.iter().filter(|v| v.choice_id() == choice_id).count() as u64)
    }
}

#[async_trait]
impl PollReader for InMemoryPollStore {
    async fn list_published(&self, now: &Timestamp, limit: u32) -> Result<Vec<Question>, DomainError> {
        let tables = self.tables.read().await;
        let mut published: Vec<Question> = tables
            .questions
            .iter()
            .filter(|q| q.is_published(now))
            .cloned()
            .collect();
        published.sort_by_key(|q| Reverse(*q.pub_date()));
        published.truncate(limit as usize);
        Ok(published)
    }

    async fn find_published(
        &self,
        id: &QuestionId,
        now: &Timestamp,
    ) -> Result<Option<Question>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .find(|q| q.id() == id && q.is_published(now))
            .cloned())
    }

    async fn tallies(&self, question_id: &QuestionId) -> Result<Vec<ChoiceTally>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .choices
            .iter()
            .filter(|c| c.belongs_to(question_id))
            .map(|c| ChoiceTally {
                choice: c.clone(),
                votes: tables.votes.iter().filter(|v| v.choice_id() == c.id()).count() as u64,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (InMemoryPollStore, Question, Vec<Choice>) {
        let store = InMemoryPollStore::new();
        let question = Question::new("Best colour?", Timestamp::now().minus_days(1), None).unwrap();
        let choices = vec![
            Choice::new(*question.id(), "Red").unwrap(),
            Choice::new(*question.id(), "Blue").unwrap(),
        ];
        store.save(&question, &choices).await.unwrap();
        (store, question, choices)
    }

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn save_rejects_foreign_choice() {
        let store = InMemoryPollStore::new();
        let question = Question::published_now("Q?").unwrap();
        let foreign = Choice::new(QuestionId::new(), "x").unwrap();

        let result = store.save(&question, &[foreign]).await;

        assert_eq!(result.unwrap_err().code, ErrorCode::ValidationFailed);
        assert!(QuestionRepository::find_by_id(&store, question.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_for_question_is_scoped() {
        let (store, question, choices) = seeded().await;
        let other = Question::published_now("Other?").unwrap();
        store.save(&other, &[]).await.unwrap();

        let hit = store.find_for_question(question.id(), choices[0].id()).await.unwrap();
        let miss = store.find_for_question(other.id(), choices[0].id()).await.unwrap();

        assert!(hit.is_some());
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn insert_rejects_second_vote_for_same_question() {
        let (store, question, choices) = seeded().await;
        let now = Timestamp::now();
        store
            .insert(&Vote::new(user("u1"), *question.id(), *choices[0].id(), now))
            .await
            .unwrap();

        let result = store
            .insert(&Vote::new(user("u1"), *question.id(), *choices[1].id(), now))
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::VoteConflict);
        assert_eq!(store.votes_for(&user("u1"), question.id()).await, 1);
    }

    #[tokio::test]
    async fn insert_rejects_choice_of_other_question() {
        let (store, question, _) = seeded().await;
        let other = Question::published_now("Other?").unwrap();
        let other_choice = Choice::new(*other.id(), "Maybe").unwrap();
        store.save(&other, std::slice::from_ref(&other_choice)).await.unwrap();

        let result = store
            .insert(&Vote::new(user("u1"), *question.id(), *other_choice.id(), Timestamp::now()))
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::InvalidChoice);
        assert_eq!(store.vote_count().await, 0);
    }

    #[tokio::test]
    async fn delete_cascades_to_choices_and_votes() {
        let (store, question, choices) = seeded().await;
        store
            .insert(&Vote::new(user("u1"), *question.id(), *choices[0].id(), Timestamp::now()))
            .await
            .unwrap();

        QuestionRepository::delete(&store, question.id()).await.unwrap();

        assert_eq!(store.choice_count().await, 0);
        assert_eq!(store.vote_count().await, 0);
        let again = QuestionRepository::delete(&store, question.id()).await;
        assert_eq!(again.unwrap_err().code, ErrorCode::QuestionNotFound);
    }

    #[tokio::test]
    async fn list_published_orders_newest_first_and_limits() {
        let store = InMemoryPollStore::new();
        let now = Timestamp::now();
        for days in [30, 5, 1, 10, 2, 20] {
            let q = Question::new(format!("{} days ago", days), now.minus_days(days), None).unwrap();
            store.save(&q, &[]).await.unwrap();
        }
        let future = Question::new("Future", now.plus_days(3), None).unwrap();
        store.save(&future, &[]).await.unwrap();

        let listed = store.list_published(&now, 5).await.unwrap();

        let texts: Vec<&str> = listed.iter().map(|q| q.question_text()).collect();
        assert_eq!(
            texts,
            vec!["1 days ago", "2 days ago", "5 days ago", "10 days ago", "20 days ago"]
        );
    }

    #[tokio::test]
    async fn find_published_hides_future_questions() {
        let store = InMemoryPollStore::new();
        let now = Timestamp::now();
        let future = Question::new("Future", now.plus_days(5), None).unwrap();
        store.save(&future, &[]).await.unwrap();

        assert!(store.find_published(future.id(), &now).await.unwrap().is_none());
        assert!(store
            .find_published(future.id(), &now.plus_days(5))
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn tallies_follow_reassigned_votes() {
        let (store, question, choices) = seeded().await;
        let now = Timestamp::now();
        let mut vote = Vote::new(user("u1"), *question.id(), *choices[0].id(), now);
        store.insert(&vote).await.unwrap();
        vote.reassign(*choices[1].id(), now);
        VoteRepository::update(&store, &vote).await.unwrap();

        let tallies = store.tallies(question.id()).await.unwrap();

        assert_eq!(tallies[0].votes, 0);
        assert_eq!(tallies[1].votes, 1);
        assert_eq!(store.count_by_choice(choices[1].id()).await.unwrap(), 1);
    }
}
