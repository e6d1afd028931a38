//! The content registry: immutable tables plus lookup.

use sha2::{Digest, Sha256};
use slop_core::error::DomainError;

use crate::types::{AdSpot, Modifier, Scene, ScriptLine, TherapyScript, ThesisOption};

/// Immutable content tables consumed by the session engine.
///
/// Constructed once at startup, either from the shipped campaign
/// ([`ContentRegistry::builtin`]) or from YAML, and validated before use.
/// The engine never mutates it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContentRegistry {
    pub(crate) scenes: Vec<Scene>,
    pub(crate) modifiers: Vec<Modifier>,
    pub(crate) theses: Vec<ThesisOption>,
    pub(crate) prologue: Vec<ScriptLine>,
    pub(crate) ad_spots: Vec<AdSpot>,
    pub(crate) therapy: TherapyScript,
}

impl ContentRegistry {
    /// The shipped campaign.
    ///
    /// # Panics
    ///
    /// Panics if the built-in tables fail validation, which would be a
    /// defect in this crate.
    #[must_use]
    pub fn builtin() -> Self {
        let registry = crate::builtin::campaign();
        registry
            .validate()
            .expect("built-in campaign must validate");
        registry
    }

    /// Parses and validates a registry from YAML.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the YAML is malformed or the
    /// parsed tables violate a structural rule.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DomainError> {
        let registry: Self = serde_yaml::from_str(yaml)
            .map_err(|e| DomainError::Validation(format!("content YAML parse failed: {e}")))?;
        registry.validate()?;
        Ok(registry)
    }

    /// Checks the structural rules every campaign must satisfy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first violated rule.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.scenes.is_empty() {
            return Err(DomainError::Validation("campaign has no scenes".to_owned()));
        }
        check_unique("scene", self.scenes.iter().map(|s| s.id.as_str()))?;
        check_unique("modifier", self.modifiers.iter().map(|m| m.id.as_str()))?;
        check_unique("thesis", self.theses.iter().map(|t| t.id.as_str()))?;

        for scene in &self.scenes {
            if scene.required_slop_score == 0 || scene.required_slop_score > 100 {
                return Err(DomainError::Validation(format!(
                    "scene {} required_slop_score must be in 1..=100",
                    scene.id
                )));
            }
        }
        for modifier in &self.modifiers {
            if modifier.slop_impact > 100 {
                return Err(DomainError::Validation(format!(
                    "modifier {} slop_impact must be at most 100",
                    modifier.id
                )));
            }
        }
        for thesis in &self.theses {
            if thesis.sanity_penalty < 1.0 {
                return Err(DomainError::Validation(format!(
                    "thesis {} sanity_penalty must be at least 1.0",
                    thesis.id
                )));
            }
            if thesis.clout_multiplier <= 0.0 {
                return Err(DomainError::Validation(format!(
                    "thesis {} clout_multiplier must be positive",
                    thesis.id
                )));
            }
            for scene in &self.scenes {
                if !thesis.scenes.contains_key(&scene.id) {
                    return Err(DomainError::Validation(format!(
                        "thesis {} has no content for scene {}",
                        thesis.id, scene.id
                    )));
                }
            }
        }
        if self
            .prologue
            .windows(2)
            .any(|pair| pair[1].delay_ms < pair[0].delay_ms)
        {
            return Err(DomainError::Validation(
                "prologue delays must be non-decreasing".to_owned(),
            ));
        }
        if self.ad_spots.is_empty() {
            return Err(DomainError::Validation(
                "campaign has no ad spots".to_owned(),
            ));
        }
        if self.therapy.choices.is_empty() {
            return Err(DomainError::Validation(
                "therapy script has no choices".to_owned(),
            ));
        }
        Ok(())
    }

    /// SHA-256 fingerprint of the canonical JSON form, for startup logging
    /// and campaign identification.
    ///
    /// # Panics
    ///
    /// Panics if serialization fails, which cannot happen for these
    /// derived types.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use std::fmt::Write;

        let canonical =
            serde_json::to_vec(self).expect("registry serialization is infallible");
        let digest = Sha256::digest(&canonical);
        let mut out = String::with_capacity(digest.len() * 2);
        for byte in digest {
            write!(out, "{byte:02x}").expect("writing to a String is infallible");
        }
        out
    }

    /// All scenes, in playthrough order.
    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// The scene at `index`, if any.
    #[must_use]
    pub fn scene(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// Number of scenes in the campaign.
    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// All modifiers.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Looks up a modifier by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownContent` if no modifier has the id.
    pub fn modifier(&self, id: &str) -> Result<&Modifier, DomainError> {
        self.modifiers
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| DomainError::UnknownContent(format!("modifier {id}")))
    }

    /// All thesis options, locked ones included.
    #[must_use]
    pub fn theses(&self) -> &[ThesisOption] {
        &self.theses
    }

    /// Looks up a thesis option by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownContent` if no thesis has the id.
    pub fn thesis(&self, id: &str) -> Result<&ThesisOption, DomainError> {
        self.theses
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::UnknownContent(format!("thesis {id}")))
    }

    /// The prologue script.
    #[must_use]
    pub fn prologue(&self) -> &[ScriptLine] {
        &self.prologue
    }

    /// The interruption-overlay content table.
    #[must_use]
    pub fn ad_spots(&self) -> &[AdSpot] {
        &self.ad_spots
    }

    /// The therapy interstitial script.
    #[must_use]
    pub fn therapy(&self) -> &TherapyScript {
        &self.therapy
    }
}

fn check_unique<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DomainError> {
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::Validation(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(())
}
