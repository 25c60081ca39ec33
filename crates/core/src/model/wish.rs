use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WishDraftError {
    #[error("a name is required")]
    EmptyName,
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    #[default]
    Friend,
    Partner,
    Family,
    Colleague,
}

impl Relationship {
    pub const ALL: [Relationship; 4] = [
        Relationship::Friend,
        Relationship::Partner,
        Relationship::Family,
        Relationship::Colleague,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Relationship::Friend => "Friend",
            Relationship::Partner => "Partner",
            Relationship::Family => "Family",
            Relationship::Colleague => "Colleague",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WishTone {
    #[default]
    Heartfelt,
    Funny,
    Poetic,
    #[serde(rename = "Short & Sweet")]
    ShortAndSweet,
}

impl WishTone {
    pub const ALL: [WishTone; 4] = [
        WishTone::Heartfelt,
        WishTone::Funny,
        WishTone::Poetic,
        WishTone::ShortAndSweet,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            WishTone::Heartfelt => "Heartfelt",
            WishTone::Funny => "Funny",
            WishTone::Poetic => "Poetic",
            WishTone::ShortAndSweet => "Short & Sweet",
        }
    }
}

macro_rules! label_impls {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = WishDraftError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| WishDraftError::UnknownOption(s.to_string()))
            }
        }
    };
}

label_impls!(Relationship);
label_impls!(WishTone);

/// A validated request for a generated birthday wish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishRequest {
    pub name: String,
    pub relationship: Relationship,
    pub tone: WishTone,
    pub hobbies: Option<String>,
}

impl WishRequest {
    /// Build a request, rejecting a blank name and dropping blank hobbies.
    ///
    /// # Errors
    ///
    /// Returns `WishDraftError::EmptyName` if `name` is blank.
    pub fn new(
        name: impl Into<String>,
        relationship: Relationship,
        tone: WishTone,
        hobbies: Option<String>,
    ) -> Result<Self, WishDraftError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(WishDraftError::EmptyName);
        }
        let hobbies = hobbies
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());
        Ok(Self {
            name,
            relationship,
            tone,
            hobbies,
        })
    }

    /// Prompt sent to the text-generation model. The 50-word cap is only asked for.
    #[must_use]
    pub fn prompt(&self) -> String {
        let mut prompt = format!(
            "Write a {} birthday wish for {}.\nRelationship: {}.\n",
            self.tone.label().to_lowercase(),
            self.name,
            self.relationship,
        );
        if let Some(hobbies) = &self.hobbies {
            prompt.push_str(&format!("Hobbies/Interests: {hobbies}.\n"));
        }
        prompt.push_str("Keep it engaging, warm, and appropriate for a birthday card.\n");
        prompt.push_str("Max length: 50 words.");
        prompt
    }
}

/// Identifies one generate call so late responses can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WishTicket(u64);

/// Editable state of the wish form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishDraft {
    pub name: String,
    pub relationship: Relationship,
    pub tone: WishTone,
    pub hobbies: String,
    pending: Option<WishTicket>,
    issued: u64,
    generated: Option<String>,
    copied: bool,
}

impl WishDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.pending.is_none() && !self.name.trim().is_empty()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    #[must_use]
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Validate the form and enter the pending state.
    ///
    /// # Errors
    ///
    /// Returns `WishDraftError::EmptyName` if the name is blank. Nothing changes
    /// in that case.
    pub fn begin(&mut self) -> Result<(WishTicket, WishRequest), WishDraftError> {
        let hobbies = Some(self.hobbies.clone());
        let request = WishRequest::new(self.name.clone(), self.relationship, self.tone, hobbies)?;
        self.issued += 1;
        let ticket = WishTicket(self.issued);
        self.pending = Some(ticket);
        Ok((ticket, request))
    }

    /// Apply a response. Responses for any ticket but the pending one are dropped.
    pub fn complete(&mut self, ticket: WishTicket, text: String) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.generated = Some(text);
        self.copied = false;
        true
    }

    /// Abandon the pending call; its response will be discarded.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn mark_copied(&mut self) -> bool {
        if self.generated.is_none() {
            return false;
        }
        self.copied = true;
        true
    }

    pub fn clear_copied(&mut self) {
        self.copied = false;
    }
}
