pub mod vote_summary;
