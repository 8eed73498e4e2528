use crate::{geometry::Point, ids::PlayerId, poll::ConversationPoll};

/// Re-seats `player` in the poll after a move to `position`.
///
/// Voting is positional: stepping into an option's region casts a vote for
/// it and stepping out withdraws it. Only transitions touch the voter lists,
/// so a participant idling inside a region stays recorded once no matter how
/// many movement updates arrive.
pub fn apply_movement(poll: &mut ConversationPoll, player: &PlayerId, position: Point) {
    for option in poll.options_mut() {
        let inside = option.location.contains(position);
        let listed = option.has_voter(player);

        match (inside, listed) {
            (true, false) => option.add_voter(player.clone()),
            (false, true) => option.remove_voter(player),
            _ => (),
        }
    }
}

/// Withdraws every vote `player` holds, for participants leaving the
/// conversation area entirely.
pub fn withdraw_votes(poll: &mut ConversationPoll, player: &PlayerId) {
    for option in poll.options_mut() {
        option.remove_voter(player);
    }
}
