pub mod game_completions;

pub use game_completions::Entity as GameCompletions;
