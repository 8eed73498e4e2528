pub mod create_poll;
pub mod movement;
