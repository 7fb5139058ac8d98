//! Core functionality for BeatFlow
//!
//! Everything below the HTTP layer: locale handling, translation, the
//! generation pipeline, audio processing and the clip library.

pub mod audio;
pub mod library;
pub mod locale;
pub mod music;
pub mod translation;

pub use library::{LibraryEntry, list_library};
pub use music::{GenerationError, MusicService};
pub use translation::{TranslationError, Translator};
