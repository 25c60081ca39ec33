use crate::model::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub url: &'static str,
    pub start_secs: u32,
}

const CARD_TRACK: Track = Track {
    title: "Selamat Ulang Tahun",
    artist: "Jamrud",
    url: "https://ik.imagekit.io/fcuinpkmj/Jamrud-Selamat-Ulang-Tahun-Offic.mp3",
    start_secs: 8,
};

const TRACKS: [(Screen, Track); 6] = [
    (Screen::Card, CARD_TRACK),
    (
        Screen::Note,
        Track {
            title: "Wiseman",
            artist: "Frank Ocean",
            url: "https://ik.imagekit.io/fcuinpkmj/Frank-Ocean-Wiseman-Lyrics.mp3",
            start_secs: 69,
        },
    ),
    (
        Screen::Appreciation,
        Track {
            title: "So Glad That I Found You",
            artist: "Jalen Ngonda",
            url: "https://ik.imagekit.io/fcuinpkmj/Jalen-Ngonda-So-Glad-I-Found-You.mp3",
            start_secs: 44,
        },
    ),
    (
        Screen::Quiz,
        Track {
            title: "Funky Beat",
            artist: "Quiz Time",
            url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-8.mp3",
            start_secs: 0,
        },
    ),
    (
        Screen::Gallery,
        Track {
            title: "Love Me Not",
            artist: "Ravyn Lenae",
            url: "https://ik.imagekit.io/fcuinpkmj/Ravyn-Lenae-Love-Me-Not.mp3",
            start_secs: 15,
        },
    ),
    (
        Screen::Closing,
        Track {
            title: "Get You",
            artist: "Daniel Caesar",
            url: "https://ik.imagekit.io/fcuinpkmj/Get-You-feat-Kali-Uchis.mp3",
            start_secs: 196,
        },
    ),
];

/// Track for `screen`, falling back to the card's track when none is listed.
#[must_use]
pub fn track_for(screen: Screen) -> &'static Track {
    let tracks: &'static [(Screen, Track)] = &TRACKS;
    tracks
        .iter()
        .find(|(s, _)| *s == screen)
        .map_or(&CARD_TRACK, |(_, track)| track)
}

/// What the audio element has to do after the screen changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Load `track`, seek to its start offset, and resume if playing.
    Load { track: &'static Track, resume: bool },
    Keep,
}

/// Playback state of the background music.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicState {
    loaded_url: Option<&'static str>,
    playing: bool,
}

impl MusicState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The player stays hidden behind the login gate.
    #[must_use]
    pub fn is_visible(screen: Screen) -> bool {
        screen != Screen::Login
    }

    /// Autoplay is attempted only when past the gate and not already playing.
    #[must_use]
    pub fn wants_autoplay(&self, screen: Screen) -> bool {
        Self::is_visible(screen) && !self.playing
    }

    /// Resolve the track for `screen`. Only a change of URL reloads the source.
    pub fn sync(&mut self, screen: Screen) -> PlayerCommand {
        let track = track_for(screen);
        if self.loaded_url == Some(track.url) {
            return PlayerCommand::Keep;
        }
        self.loaded_url = Some(track.url);
        PlayerCommand::Load {
            track,
            resume: self.playing && Self::is_visible(screen),
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Flip play/pause; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }
}
