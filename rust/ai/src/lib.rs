//! # casino-ai: Scripted Opponents
//!
//! Decision policies for the non-human seats. Every policy implements the
//! engine's [`OpponentPolicy`] trait, so the betting state machine never
//! depends on this crate and policies can be swapped freely.
//!
//! ## AI Types
//!
//! - `"baseline"` - strength threshold per stage, random folds and raises
//! - `"passive"` - always checks or calls
//!
//! ```rust
//! use casino_ai::create_ai;
//!
//! let ai = create_ai("baseline").expect("known policy");
//! assert_eq!(ai.name(), "baseline");
//! assert!(create_ai("shark").is_none());
//! ```

use casino_engine::policy::OpponentPolicy;

pub mod baseline;

pub use baseline::{BaselineAI, PassiveAI};

/// Names accepted by [`create_ai`].
pub const AI_TYPES: [&str; 2] = ["baseline", "passive"];

/// Builds an opponent policy by name; `None` for an unknown name.
pub fn create_ai(ai_type: &str) -> Option<Box<dyn OpponentPolicy>> {
    match ai_type.trim().to_ascii_lowercase().as_str() {
        "baseline" => Some(Box::new(BaselineAI::new())),
        "passive" => Some(Box::new(PassiveAI)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_can_be_created() {
        for name in AI_TYPES {
            let ai = create_ai(name).unwrap();
            assert_eq!(ai.name(), name);
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        assert!(create_ai(" Baseline ").is_some());
        assert!(create_ai("unknown").is_none());
    }
}
