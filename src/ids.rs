use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

/// Identifier of a town participant, as issued by the towns service.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Display, From, AsRef, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId(id.to_owned())
    }
}

/// Identifier of the town a session is connected to.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Display, From, AsRef, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TownId(String);

impl TownId {
    pub fn new(id: impl Into<String>) -> Self {
        TownId(id.into())
    }
}

impl From<&str> for TownId {
    fn from(id: &str) -> Self {
        TownId(id.to_owned())
    }
}
