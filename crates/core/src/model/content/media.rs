/// A captioned photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub id: &'static str,
    pub src: &'static str,
    pub caption: &'static str,
}

const fn photo(id: &'static str, src: &'static str, caption: &'static str) -> Photo {
    Photo { id, src, caption }
}

pub const POLAROID_IMAGE: &str =
    "https://ik.imagekit.io/fcuinpkmj/8eea877d-9f14-4ec3-8cf9-76b03ad9e4ee.JPG";

/// Photos per marquee row in the gallery.
pub const GALLERY_ROW_LEN: usize = 5;

pub static GALLERY_PHOTOS: [Photo; 15] = [
    photo(
        "img-1",
        "https://ik.imagekit.io/fcuinpkmj/IMG_3997.HEIC?updatedAt=1769871118601&tr=f-auto",
        "Firs Time we Meet. \u{2728}",
    ),
    photo(
        "img-2",
        "https://ik.imagekit.io/fcuinpkmj/b25ccb4c-517e-4a94-a0e0-eeffd7e46b4a.JPG?updatedAt=1769870923798&tr=f-auto",
        "First PAP. \u{2764}\u{fe0f}",
    ),
    photo(
        "img-3",
        "https://ik.imagekit.io/fcuinpkmj/IMG_5322.PNG?updatedAt=1769871117880&tr=f-auto",
        "First Photobooth Together. \u{1f338}",
    ),
    photo(
        "img-4",
        "https://ik.imagekit.io/fcuinpkmj/IMG_7075.HEIC?updatedAt=1769871118844&tr=f-auto",
        "First Time ditinggalin keluar kota :(",
    ),
    photo(
        "img-5",
        "https://ik.imagekit.io/fcuinpkmj/IMG_0030.JPG?updatedAt=1769871117211&tr=f-auto",
        "My favorite view. \u{1f3e0}",
    ),
    photo(
        "img-6",
        "https://ik.imagekit.io/fcuinpkmj/IMG_9112.HEIC?updatedAt=1769871118610&tr=f-auto",
        "Semangat Belajar nya CANTIKKKK. \u{1f90d}",
    ),
    photo(
        "img-7",
        "https://ik.imagekit.io/fcuinpkmj/IMG_7111.JPG?updatedAt=1769871117164&tr=f-auto",
        "dari AI semoga jadi kenyataan akan jd Mimpi aku. \u{2600}\u{fe0f}",
    ),
    photo(
        "img-8",
        "https://ik.imagekit.io/fcuinpkmj/Screenshot%202026-01-02%20at%2018.24.28.jpg?updatedAt=1769870811770&tr=f-auto",
        "Aamiin ya beb semoga dunia baik sama kamu. \u{1f30e}",
    ),
    photo(
        "img-9",
        "https://ik.imagekit.io/fcuinpkmj/f2c01f05-0324-4a1b-b833-9d6a105f6c95.JPG?updatedAt=1769870857106&tr=f-auto",
        "That smile is everything. \u{1f4ab}",
    ),
    photo(
        "img-10",
        "https://ik.imagekit.io/fcuinpkmj/IMG_9627.jpg?tr=f-auto",
        "Just perfect. \u{1f496}",
    ),
    photo(
        "img-11",
        "https://ik.imagekit.io/fcuinpkmj/IMG_9625.JPG?updatedAt=1769871117355&tr=f-auto",
        "Last Photobooth. \u{2728}",
    ),
    photo(
        "img-12",
        "https://ik.imagekit.io/fcuinpkmj/IMG_0103.JPG?updatedAt=1769871117365&tr=f-auto",
        "A core memory. \u{1f3b5}",
    ),
    photo(
        "img-13",
        "https://ik.imagekit.io/fcuinpkmj/IMG_0136.JPG?updatedAt=1769871117335&tr=f-auto",
        "NINDIKKKK. \u{1f49d}",
    ),
    photo(
        "img-14",
        "https://ik.imagekit.io/fcuinpkmj/IMG_0105.JPG?updatedAt=1769871117007&tr=f-auto",
        "Keep smiling. \u{1f60a}",
    ),
    photo(
        "img-15",
        "https://ik.imagekit.io/fcuinpkmj/IMG_0143.JPG?updatedAt=1769871116208&tr=f-auto",
        "Ultah dengan perempuan terbaik. \u{1f339}",
    ),
];

pub const GALLERY_KEYWORDS: [&str; 6] = ["Beautiful", "Smart", "Kind", "Honest", "Patient", "Perfect"];

/// Split the gallery into marquee rows, tagging each photo with its global index.
#[must_use]
pub fn gallery_rows() -> Vec<Vec<(usize, &'static Photo)>> {
    let photos: &'static [Photo] = &GALLERY_PHOTOS;
    photos
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .chunks(GALLERY_ROW_LEN)
        .map(<[_]>::to_vec)
        .collect()
}
