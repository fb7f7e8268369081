pub mod authority;
pub mod game_actions;
pub mod game_creator;
pub mod registry;
