//! HTTP request handlers
//!
//! - `api` - Health check and landing page
//! - `transcribe` - Speech-to-text relay
//! - `speak` - Text-to-speech relay

pub mod api;
pub mod speak;
pub mod transcribe;

pub use speak::speak_handler;
pub use transcribe::transcribe_handler;
