//! Speech markup helpers.
//!
//! Small SSML builders shared by every spoken response. Narratives are
//! composed from plain text plus these markers, then wrapped in a single
//! `<speak>` root by the response renderer.

/// Default gap between spoken sentences, in milliseconds.
pub const DEFAULT_PAUSE_MS: u32 = 1000;

/// Wrap finished narrative text in the `<speak>` root element.
pub fn speak(text: &str) -> String {
    format!("<speak>{}</speak>", text)
}

/// Escape markup characters in text destined for a speech document.
///
/// Applied to feed-supplied values before they are interpolated between
/// markers, so a stray `&` or `<` in a service name cannot break the
/// document. Ampersand goes first.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Pause marker with an explicit duration.
pub fn pause_ms(duration_ms: u32) -> String {
    format!("<break time=\"{}ms\"/>", duration_ms)
}

/// Pause marker with the default sentence gap.
pub fn pause() -> String {
    pause_ms(DEFAULT_PAUSE_MS)
}

/// Interpretation hint, e.g. `say_as("date", "20260826")`.
pub fn say_as(interpret_as: &str, text: &str) -> String {
    format!("<say-as interpret-as=\"{}\">{}</say-as>", interpret_as, text)
}

/// Embedded audio clip reference.
pub fn audio(url: &str) -> String {
    format!("<audio src=\"{}\"/>", url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speak_wraps_text() {
        assert_eq!(speak("hello"), "<speak>hello</speak>");
        assert_eq!(speak(""), "<speak></speak>");
    }

    #[test]
    fn test_pause_markers() {
        assert_eq!(pause(), "<break time=\"1000ms\"/>");
        assert_eq!(pause_ms(250), "<break time=\"250ms\"/>");
    }

    #[test]
    fn test_escape_markup_characters() {
        assert_eq!(escape("Sync & Archive <EU>"), "Sync &amp; Archive &lt;EU&gt;");
        assert_eq!(escape("plain name"), "plain name");
        assert_eq!(escape("a && b"), "a &amp;&amp; b");
    }

    #[test]
    fn test_say_as_hint() {
        assert_eq!(
            say_as("date", "20260826"),
            "<say-as interpret-as=\"date\">20260826</say-as>"
        );
    }

    #[test]
    fn test_audio_reference() {
        assert_eq!(
            audio("https://cdn.meridian.com/chime.mp3"),
            "<audio src=\"https://cdn.meridian.com/chime.mp3\"/>"
        );
    }
}
