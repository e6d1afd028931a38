//! Test generators — deterministic `TextGenerator` implementations.

use async_trait::async_trait;
use slop_content::Modifier;
use slop_core::error::DomainError;
use slop_generation::TextGenerator;

/// A generator that tags its inputs so tests can assert which call
/// produced a given piece of text.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoGenerator;

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn degrade(&self, text: &str, modifier: &Modifier) -> Result<String, DomainError> {
        Ok(format!("[{}] {text}", modifier.id))
    }

    async fn react(&self, _text: &str, opponent: &str, score: u8) -> Result<String, DomainError> {
        Ok(format!("{opponent} rates this {score}/100."))
    }
}

/// A generator that always fails, for exercising the fallback path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn degrade(&self, _text: &str, _modifier: &Modifier) -> Result<String, DomainError> {
        Err(DomainError::Generation("backend unreachable".to_owned()))
    }

    async fn react(
        &self,
        _text: &str,
        _opponent: &str,
        _score: u8,
    ) -> Result<String, DomainError> {
        Err(DomainError::Generation("backend unreachable".to_owned()))
    }
}
