use crate::model::content::GALLERY_PHOTOS;

/// Hover state of the gallery. The gallery gates nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    hovered: Option<usize>,
}

impl GalleryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn hovered_caption(&self) -> Option<&'static str> {
        self.hovered
            .and_then(|idx| GALLERY_PHOTOS.get(idx))
            .map(|photo| photo.caption)
    }

    pub fn hover(&mut self, photo: Option<usize>) -> bool {
        let photo = photo.filter(|idx| *idx < GALLERY_PHOTOS.len());
        if self.hovered == photo {
            return false;
        }
        self.hovered = photo;
        true
    }
}

/// The closing screen's only local state: whether the ending was revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosingState {
    end_revealed: bool,
}

impl ClosingState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn end_revealed(&self) -> bool {
        self.end_revealed
    }

    pub fn reveal_end(&mut self) -> bool {
        !std::mem::replace(&mut self.end_revealed, true)
    }
}
