//! Deterministic fallback templates.
//!
//! When the collaborator fails, the engine substitutes these so the
//! session never blocks. Templates are keyed by modifier category for
//! degradation and by the score threshold for reactions.

use slop_content::ModifierCategory;

/// Score above which the fallback reaction approves of the submission.
pub const APPROVAL_THRESHOLD: u8 = 50;

/// Degrades `text` with the template for `category`.
#[must_use]
pub fn degraded(text: &str, category: ModifierCategory) -> String {
    match category {
        ModifierCategory::Emotion => {
            format!("I'm literally shaking rn but... {text} It reminds me of my trauma.")
        }
        ModifierCategory::Tribalism => {
            format!("{text} AND IT'S ALL THE EAST SECTOR'S FAULT!!")
        }
        ModifierCategory::Brainrot => {
            format!("Skibidi dop dop yes yes! {text} GYATT!!")
        }
        ModifierCategory::Inefficiency => {
            format!("Umm, so like... {text}... if that makes sense?")
        }
    }
}

/// The opponent's templated reaction, keyed on whether `score` clears the
/// approval threshold.
#[must_use]
pub fn reaction(opponent: &str, score: u8) -> String {
    let verdict = if score > APPROVAL_THRESHOLD {
        "Valid vibes."
    } else {
        "Sus."
    };
    format!("{opponent}: \"Hmm... {verdict}\"")
}
