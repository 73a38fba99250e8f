pub mod carousel;
pub mod entry;
pub mod frame;
pub mod geometry;

pub use carousel::{focus_weight, CarouselIndex, PinnedTrack, TrackLayout};
pub use entry::{EntryDetector, IntersectionSample, Transition};
pub use frame::{BrowserFrames, FrameSlot};
pub use geometry::recession;
