pub mod prompts;
pub mod translations;

pub use translations::Translations;
