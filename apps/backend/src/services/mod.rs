pub mod completions;
pub mod sessions;
