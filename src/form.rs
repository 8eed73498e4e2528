use crate::{poll::PollDuration, MAX_POLL_OPTIONS};

#[derive(Debug, thiserror::Error)]
#[error("no option slot {0}")]
pub struct NoSuchSlot(pub usize);

/// In-progress input for the poll-creation form: a prompt, four option
/// slots, and a duration choice.
///
/// The prompt and the first two slots are required; the submit control stays
/// disabled until they hold text. Blank slots are dropped when the form is
/// collapsed into option texts, so a filled fourth slot next to a blank
/// third still counts.
#[derive(Debug, Clone, Default)]
pub struct PollForm {
    prompt: String,
    options: [String; MAX_POLL_OPTIONS],
    duration: PollDuration,
}

impl PollForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn duration(&self) -> PollDuration {
        self.duration
    }

    pub fn set_duration(&mut self, duration: PollDuration) {
        self.duration = duration;
    }

    pub fn option(&self, slot: usize) -> Option<&str> {
        self.options.get(slot).map(String::as_str)
    }

    pub fn set_option(
        &mut self,
        slot: usize,
        text: impl Into<String>,
    ) -> Result<(), NoSuchSlot> {
        let slot = self.options.get_mut(slot).ok_or(NoSuchSlot(slot))?;
        *slot = text.into();
        Ok(())
    }

    /// Mirrors the submit control: enabled once the prompt and the two
    /// required option slots hold text. The duration always has a value, so
    /// it never blocks submission.
    pub fn can_submit(&self) -> bool {
        !self.prompt.is_empty() && !self.options[0].is_empty() && !self.options[1].is_empty()
    }

    /// The filled slots in slot order. Between two and four entries whenever
    /// `can_submit` holds.
    pub fn option_texts(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|text| !text.is_empty())
            .cloned()
            .collect()
    }
}
