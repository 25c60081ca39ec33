//! Static copy and media shown on the card's screens.

pub mod media;
pub mod text;

pub use media::{GALLERY_KEYWORDS, GALLERY_PHOTOS, POLAROID_IMAGE, Photo, gallery_rows};
pub use text::{CLOSING, ClosingCopy, LETTER, Letter, POEM, Poem};
