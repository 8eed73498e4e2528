use chrono::{DateTime, TimeDelta, Utc};

use crate::{
    client::{PollOptionPayload, PollPayload},
    geometry::BoundingBox,
    ids::PlayerId,
    MAX_POLL_OPTIONS, MIN_POLL_OPTIONS,
};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PollError {
    #[error("a poll needs a prompt")]
    MissingPrompt,

    #[error("a poll needs at least {} options, got {}", MIN_POLL_OPTIONS, _0)]
    NotEnoughOptions(usize),

    #[error("a poll takes at most {} options, got {}", MAX_POLL_OPTIONS, _0)]
    TooManyOptions(usize),
}

/// The three poll lengths the form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollDuration {
    #[default]
    OneMinute,
    ThreeMinutes,
    FiveMinutes,
}

impl PollDuration {
    pub fn as_secs(self) -> u64 {
        match self {
            PollDuration::OneMinute => 60,
            PollDuration::ThreeMinutes => 180,
            PollDuration::FiveMinutes => 300,
        }
    }
}

/// One selectable choice in a conversation poll. Participants vote by
/// standing inside `location`; the voter list records them in vote order.
#[derive(Debug, Clone, PartialEq)]
pub struct PollOption {
    pub location: BoundingBox,
    text: String,
    voters: Vec<PlayerId>,
}

impl PollOption {
    pub fn new(text: impl Into<String>, location: BoundingBox) -> Self {
        PollOption {
            location,
            text: text.into(),
            voters: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Voters in the order they voted.
    pub fn voters(&self) -> &[PlayerId] {
        &self.voters
    }

    pub fn has_voter(&self, voter: &PlayerId) -> bool {
        self.voters.contains(voter)
    }

    /// Appends a voter. Nothing here deduplicates; callers add a participant
    /// once per entry into the region.
    pub fn add_voter(&mut self, voter: PlayerId) {
        self.voters.push(voter);
    }

    /// Removes the earliest entry for `voter`, if any. Unknown voters are
    /// ignored.
    pub fn remove_voter(&mut self, voter: &PlayerId) {
        if let Some(index) = self.voters.iter().position(|v| v == voter) {
            self.voters.remove(index);
        }
    }

    pub fn to_payload(&self) -> PollOptionPayload {
        PollOptionPayload {
            location: self.location,
            text: self.text.clone(),
            voters: self.voters.clone(),
        }
    }
}

/// A poll over a conversation area. Each option is mapped onto its own
/// column of the poll region, left to right in option order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationPoll {
    prompt: String,
    location: BoundingBox,
    creator: PlayerId,
    options: Vec<PollOption>,
    duration: PollDuration,
    created_at: DateTime<Utc>,
}

impl ConversationPoll {
    pub fn new(
        prompt: impl Into<String>,
        location: BoundingBox,
        creator: PlayerId,
        option_texts: Vec<String>,
        duration: PollDuration,
    ) -> Result<Self, PollError> {
        let prompt = prompt.into();
        if prompt.is_empty() {
            return Err(PollError::MissingPrompt);
        }
        if option_texts.len() < MIN_POLL_OPTIONS {
            return Err(PollError::NotEnoughOptions(option_texts.len()));
        }
        if option_texts.len() > MAX_POLL_OPTIONS {
            return Err(PollError::TooManyOptions(option_texts.len()));
        }

        let regions = location.split_columns(option_texts.len());
        let options = option_texts
            .into_iter()
            .zip(regions)
            .map(|(text, region)| PollOption::new(text, region))
            .collect();

        Ok(ConversationPoll {
            prompt,
            location,
            creator,
            options,
            duration,
            created_at: Utc::now(),
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn location(&self) -> BoundingBox {
        self.location
    }

    pub fn creator(&self) -> &PlayerId {
        &self.creator
    }

    pub fn duration(&self) -> PollDuration {
        self.duration
    }

    pub fn options(&self) -> &[PollOption] {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut [PollOption] {
        &mut self.options
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the poll runs out. Nothing in this crate enforces it; the owner
    /// of the poll lifecycle does.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + TimeDelta::seconds(self.duration.as_secs() as i64)
    }

    pub fn to_payload(&self) -> PollPayload {
        PollPayload {
            prompt: self.prompt.clone(),
            location: self.location,
            creator_id: self.creator.clone(),
            options: self.options.iter().map(PollOption::to_payload).collect(),
            duration: self.duration.as_secs(),
        }
    }
}
