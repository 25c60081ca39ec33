use dioxus::document::eval;
use dioxus::prelude::*;
use keepsake_core::Screen;
use keepsake_core::model::music::{MusicState, PlayerCommand, track_for};
use keepsake_core::time::AUTOPLAY_DELAY;

use super::scripts::{AUDIO_ID, load_track_script, pause_script, play_script};
use super::use_experience;
use crate::context::AppContext;

/// Looping background music that follows the current screen.
#[component]
pub fn MusicPlayer() -> Element {
    let start_muted = use_context::<AppContext>().start_muted();
    let experience = use_experience();
    let screen = use_memo(move || experience.read().screen());
    let mut music = use_signal(MusicState::new);

    use_effect(move || {
        let screen = screen();
        let command = music.write().sync(screen);
        if let PlayerCommand::Load { track, resume } = command {
            tracing::debug!(title = track.title, artist = track.artist, "switching track");
            let _ = eval(&load_track_script(track.url, track.start_secs, resume));
        }
    });

    use_effect(move || {
        let screen = screen();
        if start_muted || !music.peek().wants_autoplay(screen) {
            return;
        }
        spawn(async move {
            tokio::time::sleep(AUTOPLAY_DELAY).await;
            if experience.peek().screen() != screen || music.peek().is_playing() {
                return;
            }
            let mut attempt = eval(&play_script(track_for(screen).start_secs));
            match attempt.recv::<bool>().await {
                Ok(true) => music.write().set_playing(true),
                _ => tracing::info!("autoplay blocked, waiting for interaction"),
            }
        });
    });

    let on_toggle = move |_: MouseEvent| {
        let playing = music.write().toggle();
        let js = if playing {
            play_script(track_for(screen()).start_secs)
        } else {
            pause_script()
        };
        let _ = eval(&js);
    };

    let current = screen();
    let track = track_for(current);
    let playing = music.read().is_playing();

    rsx! {
        audio { id: AUDIO_ID, r#loop: true }
        if MusicState::is_visible(current) {
            div { class: if current == Screen::Closing { "music-player corner" } else { "music-player" },
                div { class: if playing { "disc spinning" } else { "disc" }, "\u{266b}" }
                div { class: "track-info",
                    span { class: "track-title", "{track.title}" }
                    span { class: "track-artist", "{track.artist}" }
                }
                button {
                    id: "music-toggle",
                    class: "play-toggle",
                    aria_label: if playing { "Pause" } else { "Play" },
                    onclick: on_toggle,
                    if playing { "\u{23f8}" } else { "\u{25b6}" }
                }
            }
        }
    }
}
