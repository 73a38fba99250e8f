pub mod email_capture;
pub mod fade_in;
pub mod text_reveal;
pub mod typography;

pub use email_capture::EmailCapture;
pub use fade_in::FadeIn;
pub use text_reveal::TextReveal;
pub use typography::{Overline, PillLink};
