pub mod approach;
pub mod baseline;
pub mod coverage;
pub mod cta;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod labs;
pub mod nav;
pub mod principles;
pub mod signal;
pub mod trust;

pub use approach::Approach;
pub use baseline::Baseline;
pub use coverage::Coverage;
pub use cta::Cta;
pub use faq::FaqSection;
pub use footer::Footer;
pub use hero::Hero;
pub use labs::Labs;
pub use nav::Nav;
pub use principles::Principles;
pub use signal::Signal;
pub use trust::Trust;
