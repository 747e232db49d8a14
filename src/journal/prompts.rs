//! Prompt pools
//!
//! Each category owns a fixed list of prompts. Drawing picks uniformly at
//! random from the pool and may repeat the prompt already on screen.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::JournalError;

const GRATITUDE_PROMPTS: [&str; 5] = [
    "List three things you're grateful for today and why.",
    "Describe a person who had a positive impact on your life recently.",
    "What's something you take for granted that you're actually thankful for?",
    "Write about a challenge that ended up being a blessing in disguise.",
    "What's something in nature that brings you joy?",
];

const REFLECTION_PROMPTS: [&str; 5] = [
    "What emotions have been most present for you today? What triggered them?",
    "Describe a moment today when you felt fully present.",
    "What's been occupying your thoughts lately?",
    "How are you different today than you were a year ago?",
    "What have you been avoiding dealing with? Why?",
];

const GROWTH_PROMPTS: [&str; 5] = [
    "What's one thing you'd like to improve about yourself? What's a small step you can take?",
    "Describe a recent mistake and what you learned from it.",
    "What limiting belief is holding you back? How can you challenge it?",
    "Write about a time you stepped outside your comfort zone. How did it feel?",
    "What does success mean to you right now?",
];

/// Journal prompt category
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    #[default]
    Gratitude,
    Reflection,
    Growth,
}

impl PromptCategory {
    pub fn all() -> &'static [PromptCategory] {
        &[
            PromptCategory::Gratitude,
            PromptCategory::Reflection,
            PromptCategory::Growth,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptCategory::Gratitude => "gratitude",
            PromptCategory::Reflection => "reflection",
            PromptCategory::Growth => "growth",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            PromptCategory::Gratitude => "Gratitude",
            PromptCategory::Reflection => "Reflection",
            PromptCategory::Growth => "Growth",
        }
    }

    /// The fixed prompt list for this category
    pub fn pool(&self) -> &'static [&'static str] {
        match self {
            PromptCategory::Gratitude => &GRATITUDE_PROMPTS,
            PromptCategory::Reflection => &REFLECTION_PROMPTS,
            PromptCategory::Growth => &GROWTH_PROMPTS,
        }
    }

    /// First prompt in the pool
    pub fn first_prompt(&self) -> &'static str {
        self.pool()[0]
    }

    /// Draw a prompt uniformly at random from the pool
    pub fn random_prompt<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.pool()
            .choose(rng)
            .copied()
            .unwrap_or_else(|| self.first_prompt())
    }
}

impl std::fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptCategory {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gratitude" => Ok(PromptCategory::Gratitude),
            "reflection" => Ok(PromptCategory::Reflection),
            "growth" => Ok(PromptCategory::Growth),
            _ => Err(JournalError::UnknownCategory(s.to_string())),
        }
    }
}
