pub mod appreciation;
pub mod card;
pub mod content;
mod credentials;
pub mod gallery;
pub mod music;
pub mod note;
pub mod quiz;
mod screen;
mod session;
pub mod wish;

pub use credentials::{AuthError, CredentialGate};
pub use screen::Screen;
pub use session::{DEFAULT_CAPTION, ScreenAction, ScreenState, Session};
pub use wish::{Relationship, WishDraft, WishDraftError, WishRequest, WishTicket, WishTone};
