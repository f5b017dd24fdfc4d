//! Splits answer text into request-sized pieces for the TTS endpoint.
//!
//! The Google Translate TTS endpoint rejects `q` values longer than 100
//! characters, so long answers are packed word-by-word into chunks no longer
//! than [`MAX_CHUNK_CHARS`].  A single word longer than the limit is split on
//! character boundaries.

/// Maximum characters per TTS request.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Split `text` into whitespace-normalised chunks of at most `max_chars`
/// characters.  Returns an empty vector for blank input.
///
/// ```
/// use faq_responder::speech::split_for_tts;
///
/// let chunks = split_for_tts("Admissions open in June.", 10);
/// assert_eq!(chunks, ["Admissions", "open in", "June."]);
/// ```
pub fn split_for_tts(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
