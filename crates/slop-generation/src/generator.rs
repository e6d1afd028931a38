//! The collaborator trait and the offline implementation.

use async_trait::async_trait;
use slop_content::Modifier;
use slop_core::error::DomainError;

use crate::fallback;

/// Opaque asynchronous text-generation collaborator.
///
/// Both operations may fail (network, auth); the engine recovers every
/// failure with the deterministic templates in [`crate::fallback`] and
/// never treats a rejection as fatal. Calls are awaited serially per
/// scene; the engine enforces this, implementations need not.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Degrades `text` according to the modifier's transform instruction.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Generation` when the collaborator is
    /// unreachable or rejects the request.
    async fn degrade(&self, text: &str, modifier: &Modifier) -> Result<String, DomainError>;

    /// Produces the opponent's reaction to a submission scored `score`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Generation` when the collaborator is
    /// unreachable or rejects the request.
    async fn react(&self, text: &str, opponent: &str, score: u8) -> Result<String, DomainError>;
}

/// A collaborator built entirely from the fallback templates.
///
/// Used when no generation backend is configured; the session plays out
/// with deterministic text.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn degrade(&self, text: &str, modifier: &Modifier) -> Result<String, DomainError> {
        Ok(fallback::degraded(text, modifier.category))
    }

    async fn react(&self, _text: &str, opponent: &str, score: u8) -> Result<String, DomainError> {
        Ok(fallback::reaction(opponent, score))
    }
}

#[cfg(test)]
mod tests {
    use slop_content::ContentRegistry;

    use super::*;

    #[tokio::test]
    async fn test_offline_generator_degrades_with_category_template() {
        let registry = ContentRegistry::builtin();
        let modifier = registry.modifier("add_brainrot").unwrap();

        let out = OfflineGenerator
            .degrade("The plan is sound.", modifier)
            .await
            .unwrap();

        assert!(out.contains("The plan is sound."));
        assert_ne!(out, "The plan is sound.");
    }

    #[tokio::test]
    async fn test_offline_generator_reaction_keys_on_score() {
        let low = OfflineGenerator.react("x", "Kyle", 10).await.unwrap();
        let high = OfflineGenerator.react("x", "Kyle", 90).await.unwrap();

        assert!(low.contains("Kyle"));
        assert_ne!(low, high);
    }
}
