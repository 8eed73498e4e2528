use std::fmt;

use itertools::Itertools;

use crate::poll::ConversationPoll;

/// Renders who is standing where: one aligned line per option, voters in
/// vote order.
pub struct VoteSummary<'a>(&'a ConversationPoll);

impl<'a> VoteSummary<'a> {
    pub fn new(poll: &'a ConversationPoll) -> Self {
        VoteSummary(poll)
    }
}

impl fmt::Display for VoteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .0
            .options()
            .iter()
            .map(|option| option.text().len())
            .max()
            .unwrap_or(0);

        for option in self.0.options() {
            writeln!(
                f,
                "{:<width$} -> {}",
                option.text(),
                option.voters().iter().join(", "),
            )?;
        }

        Ok(())
    }
}
