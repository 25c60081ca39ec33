#![forbid(unsafe_code)]

pub mod model;
pub mod time;

pub use model::{AuthError, Screen, ScreenAction, ScreenState, Session, WishDraftError};
pub use time::{TimerKind, TimerRequest, TimerSpec, TimerToken};
