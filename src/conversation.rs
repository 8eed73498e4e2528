use crate::{
    client::ConversationAreaPayload, geometry::BoundingBox, ids::PlayerId,
    poll::ConversationPoll,
};

/// The slice of a conversation area the poll flow works with. Occupancy and
/// topic changes are driven by the world layer; polls only read them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationArea {
    pub label: String,
    pub topic: Option<String>,
    bounding_box: BoundingBox,
    pub occupants: Vec<PlayerId>,
    active_poll: Option<ConversationPoll>,
}

impl ConversationArea {
    pub fn new(label: impl Into<String>, bounding_box: BoundingBox) -> Self {
        ConversationArea {
            label: label.into(),
            topic: None,
            bounding_box,
            occupants: Vec::new(),
            active_poll: None,
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn active_poll(&self) -> Option<&ConversationPoll> {
        self.active_poll.as_ref()
    }

    pub fn active_poll_mut(&mut self) -> Option<&mut ConversationPoll> {
        self.active_poll.as_mut()
    }

    /// Installs `poll` as the area's active poll, replacing any previous one.
    pub fn start_poll(&mut self, poll: ConversationPoll) {
        self.active_poll = Some(poll);
    }

    /// Ends the active poll. The poll and its votes are dropped unless the
    /// caller keeps the returned value.
    pub fn end_poll(&mut self) -> Option<ConversationPoll> {
        self.active_poll.take()
    }

    pub fn to_payload(&self) -> ConversationAreaPayload {
        ConversationAreaPayload {
            label: self.label.clone(),
            topic: self.topic.clone(),
            occupants_by_id: self.occupants.clone(),
            bounding_box: self.bounding_box,
        }
    }
}
