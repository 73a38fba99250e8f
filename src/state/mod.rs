pub mod accordion;
pub mod email;
pub mod nav;
pub mod reel;

pub use accordion::Accordion;
pub use email::EmailForm;
pub use nav::NavState;
pub use reel::{Reel, REEL_FADE_MS};
