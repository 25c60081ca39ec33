#![forbid(unsafe_code)]

pub mod error;
pub mod experience;
pub mod timers;
pub mod wish_generator;

pub use error::WishGenError;
pub use experience::Experience;
pub use timers::ScreenTimers;
pub use wish_generator::{
    EMPTY_RESPONSE_WISH, FALLBACK_WISH, GeminiBackend, WishBackend, WishConfig, WishGenerator,
};
