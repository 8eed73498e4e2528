use {
    crate::{conversation::ConversationArea, ids::TownId},
    tokio::sync::Mutex,
};

/// Session-wide state the poll flows work against: the credentials for the
/// towns service and the conversation area currently on screen.
pub struct Data {
    pub session_token: String,
    pub town_id: TownId,
    pub conversation: Mutex<ConversationArea>,
}

impl Data {
    pub fn new(
        session_token: impl Into<String>,
        town_id: TownId,
        conversation: ConversationArea,
    ) -> Self {
        Data {
            session_token: session_token.into(),
            town_id,
            conversation: Mutex::new(conversation),
        }
    }
}
