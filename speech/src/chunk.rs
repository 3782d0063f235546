//! Sentence-boundary chunking for provider input limits.
//!
//! Cloud TTS rejects requests over 5000 characters, so oversized text is
//! pre-chunked into pieces of at most [`MAX_CHUNK_CHARS`] characters before
//! synthesis. Chunks break only between sentences; a single sentence longer
//! than the limit is passed through whole.

/// Maximum characters per chunk, kept under the provider's 5000 hard limit.
pub const MAX_CHUNK_CHARS: usize = 4500;

/// Splits text into sentence-aligned chunks of at most `max_chars`
/// characters each.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for sentence in split_sentences(text) {
        let sentence_len = sentence.chars().count();
        // +1 for the joining space.
        let joined_len = if current.is_empty() {
            sentence_len
        } else {
            current_len + 1 + sentence_len
        };

        if joined_len <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(sentence);
            current_len = joined_len;
        } else {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            current.push_str(sentence);
            current_len = sentence_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Splits text into sentences on `.`, `!` or `?` followed by whitespace,
/// keeping the punctuation with its sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(next_idx, next)) = chars.peek() {
                if next.is_whitespace() {
                    let sentence = text[start..next_idx].trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence);
                    }
                    start = next_idx;
                }
            }
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

#[cfg(test)]
mod chunk_tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunks = chunk_text("Hello there. How are you?", MAX_CHUNK_CHARS);
        assert_eq!(chunks, vec!["Hello there. How are you?"]);
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("One. Two! Three? Four");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?", "Four"]);
    }

    #[test]
    fn test_punctuation_without_space_not_split() {
        // A version number must not open a new sentence.
        let sentences = split_sentences("Release 2.5 shipped. Done");
        assert_eq!(sentences, vec!["Release 2.5 shipped.", "Done"]);
    }

    #[test]
    fn test_chunks_respect_limit_and_boundaries() {
        let sentence = format!("{}.", "a".repeat(99));
        let text = std::iter::repeat(sentence.as_str())
            .take(100)
            .collect::<Vec<_>>()
            .join(" ");
        let chunks = chunk_text(&text, 450);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 450);
            // Every chunk ends on a sentence boundary.
            assert!(chunk.ends_with('.'));
        }
        // No text lost.
        let total: usize = chunks.iter().map(|c| c.chars().count()).sum();
        let separators = chunks.len() - 1;
        assert_eq!(total + separators, text.chars().count());
    }

    #[test]
    fn test_oversized_sentence_stays_whole() {
        let long = "a".repeat(600);
        let chunks = chunk_text(&format!("{}. Short one.", long), 450);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], format!("{}.", long));
        assert_eq!(chunks[1], "Short one.");
    }

    #[test]
    fn test_order_preserved() {
        let text = format!("{} one. {} two. {} three.", "x".repeat(400), "y".repeat(400), "z".repeat(400));
        let chunks = chunk_text(&text, 450);
        let rejoined = chunks.join(" ");
        assert!(rejoined.find("one.").unwrap() < rejoined.find("two.").unwrap());
        assert!(rejoined.find("two.").unwrap() < rejoined.find("three.").unwrap());
    }
}
