pub mod easing;
pub mod looping;
pub mod reveal;
pub mod stagger;
pub mod variant;

pub use easing::Easing;
pub use looping::{phased_css, Cue, Entrance, LoopPhase};
pub use reveal::RevealTiming;
pub use stagger::Stagger;
pub use variant::{EnterAnimation, Variant};
