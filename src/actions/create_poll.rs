use crate::{
    client::{ClientError, CreatePollRequest, TownsServiceClient},
    data::Data,
    form::PollForm,
    ids::PlayerId,
    poll::{ConversationPoll, PollError},
};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CreatePollError {
    /// The submit control should have been disabled.
    #[error("the form is missing a prompt or its two required options")]
    FormIncomplete,

    #[error(transparent)]
    Invalid(#[from] PollError),

    #[error(transparent)]
    Service(#[from] ClientError),
}

/// Submits the form as a new poll for the conversation area in `data`.
///
/// The poll is built locally and sent to the towns service first; only an
/// acknowledged request installs it as the area's active poll, so a failed
/// submission leaves the area exactly as it was.
pub async fn create_conversation_poll(
    data: &Data,
    client: &TownsServiceClient,
    form: &PollForm,
    creator: PlayerId,
) -> Result<(), CreatePollError> {
    if !form.can_submit() {
        return Err(CreatePollError::FormIncomplete);
    }

    // Snapshot the area under the lock, but never hold it across the
    // network call.
    let (conversation_area, bounds) = {
        let conversation = data.conversation.lock().await;
        (conversation.to_payload(), conversation.bounding_box())
    };

    let poll = ConversationPoll::new(
        form.prompt(),
        bounds,
        creator,
        form.option_texts(),
        form.duration(),
    )?;

    let request = CreatePollRequest {
        session_token: data.session_token.clone(),
        town_id: data.town_id.clone(),
        conversation_area,
        poll: poll.to_payload(),
    };

    client.create_poll(&request).await?;

    // Commit only after the service accepted the poll.
    let mut conversation = data.conversation.lock().await;
    tracing::info!(
        conversation = %conversation.label,
        prompt = %poll.prompt(),
        options = poll.options().len(),
        "conversation poll created"
    );
    conversation.start_poll(poll);

    Ok(())
}
