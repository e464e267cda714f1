//! VerificaBC Core
//!
//! Shared data model and presentation logic for the "valores a receber" URL
//! checker: verdict classification, score normalization, the session-scoped
//! history and the submission controller that drives one check at a time.

pub mod content;
pub mod datetime;
pub mod history;
pub mod model;
pub mod navigation;
pub mod report;
pub mod score;
pub mod session;
pub mod stats;
pub mod validation;
pub mod verdict;

use async_trait::async_trait;
use thiserror::Error;

pub use history::{History, HISTORY_CAPACITY};
pub use model::{CheckRequest, CheckResult, InputType};
pub use navigation::{Tab, Theme};
pub use score::normalize_score;
pub use session::{Session, SubmissionState};
pub use stats::RiskStats;
pub use validation::validate_url;
pub use verdict::{classify, Tone, VerdictClass, VerdictPresentation};

/// Message shown for every request failure, whatever the cause.
pub const REQUEST_FAILED_MESSAGE: &str =
    "Não foi possível concluir a análise no momento. Tente novamente em instantes.";

/// Input rejected before any request is issued
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor, insira uma URL para análise.")]
    Empty,

    #[error("A URL deve começar com http:// ou https://")]
    MissingScheme,
}

/// Why a submission did not produce a result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a check is already in progress")]
    Busy,

    #[error("{0}")]
    Invalid(#[from] ValidationError),

    #[error("{}", REQUEST_FAILED_MESSAGE)]
    Request,
}

pub type SubmitResult<T> = Result<T, SubmitError>;

/// The analysis backend as seen by the client.
///
/// Futures are not required to be `Send` so a browser fetch can back it.
#[async_trait(?Send)]
pub trait CheckApi {
    type Error: std::error::Error;

    /// Submit one check and return the backend's parsed response
    async fn check(&self, request: &CheckRequest) -> Result<CheckResult, Self::Error>;
}
