pub mod layout;
pub mod matches;
pub mod player_details;
pub mod players;
pub mod rankings;
