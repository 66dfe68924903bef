pub mod completion_id;
pub mod validated_json;

pub use completion_id::CompletionId;
pub use validated_json::ValidatedJson;
