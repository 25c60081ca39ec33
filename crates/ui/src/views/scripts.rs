pub(super) const AUDIO_ID: &str = "keepsake-audio";
pub(super) const POEM_SCROLL_ID: &str = "poem-scroll";

/// Sends `[scrollTop, scrollHeight, clientHeight]` of `id`, or `null`.
pub(super) fn scroll_metrics_script(id: &str) -> String {
    format!(
        r"(function() {{
            const el = document.getElementById({id:?});
            dioxus.send(el ? [el.scrollTop, el.scrollHeight, el.clientHeight] : null);
        }})();"
    )
}

/// Swap the audio source, seek to `start_secs` once metadata is in, and
/// resume if asked.
pub(super) fn load_track_script(url: &str, start_secs: u32, resume: bool) -> String {
    format!(
        r"(function() {{
            const audio = document.getElementById({AUDIO_ID:?});
            if (!audio) return;
            audio.pause();
            audio.src = {url:?};
            audio.addEventListener('loadedmetadata', function seek() {{
                audio.currentTime = {start_secs};
                audio.removeEventListener('loadedmetadata', seek);
            }});
            audio.load();
            if ({resume}) {{
                audio.play().catch(function(err) {{
                    console.log('Auto-play blocked on track change', err);
                }});
            }}
        }})();"
    )
}

/// Try to start playback; sends whether the browser allowed it.
pub(super) fn play_script(start_secs: u32) -> String {
    format!(
        r"(function() {{
            const audio = document.getElementById({AUDIO_ID:?});
            if (!audio) {{ dioxus.send(false); return; }}
            if (audio.currentTime === 0 && {start_secs} > 0) {{
                audio.currentTime = {start_secs};
            }}
            audio.play()
                .then(function() {{ dioxus.send(true); }})
                .catch(function() {{ dioxus.send(false); }});
        }})();"
    )
}

pub(super) fn pause_script() -> String {
    format!(
        r"(function() {{
            const audio = document.getElementById({AUDIO_ID:?});
            if (audio) audio.pause();
        }})();"
    )
}

pub(super) fn copy_to_clipboard_script(text: &str) -> String {
    format!(
        r"(function() {{
            if (navigator.clipboard) navigator.clipboard.writeText({text:?});
        }})();"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_script_embeds_source_and_offset() {
        let js = load_track_script("https://example.com/a.mp3", 69, true);
        assert!(js.contains("\"https://example.com/a.mp3\""));
        assert!(js.contains("audio.currentTime = 69;"));
        assert!(js.contains("if (true)"));
    }

    #[test]
    fn clipboard_script_quotes_text() {
        let js = copy_to_clipboard_script("say \"hi\"");
        assert!(js.contains(r#"writeText("say \"hi\"")"#));
    }
}
