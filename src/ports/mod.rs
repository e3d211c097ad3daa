//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `QuestionRepository` - Questions and the choices they own
//! - `ChoiceRepository` - Question-scoped choice lookups
//! - `VoteRepository` - One vote per (user, question)
//! - `PollReader` - Published-only queries and tallies
//!
//! ## Identity Ports
//!
//! - `SessionValidator` - Bearer token validation
//! - `AuthEventObserver` - Login/logout notifications

mod auth_observer;
mod choice_repository;
mod poll_reader;
mod question_repository;
mod session_validator;
mod vote_repository;

pub use auth_observer::AuthEventObserver;
pub use choice_repository::ChoiceRepository;
pub use poll_reader::PollReader;
pub use question_repository::QuestionRepository;
pub use session_validator::SessionValidator;
pub use vote_repository::VoteRepository;
