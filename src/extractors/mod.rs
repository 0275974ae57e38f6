pub mod inline_script;
pub mod meta;
pub mod player_response;

pub use inline_script::InlineScriptStrategy;
pub use meta::{MetaKeywordsStrategy, OgVideoTagStrategy};
pub use player_response::PlayerResponseStrategy;
