pub mod actions;
pub mod client;
pub mod conversation;
pub mod data;
pub mod form;
pub mod geometry;
pub mod ids;
pub mod models;
pub mod notice;
pub mod poll;

pub use client::TownsServiceClient;
pub use conversation::ConversationArea;
pub use form::PollForm;
pub use geometry::{BoundingBox, Point};
pub use ids::{PlayerId, TownId};
pub use poll::{ConversationPoll, PollDuration, PollOption};

/// A poll offers at least two choices.
pub const MIN_POLL_OPTIONS: usize = 2;

/// The form has four option slots, so a poll never carries more than four.
pub const MAX_POLL_OPTIONS: usize = 4;
