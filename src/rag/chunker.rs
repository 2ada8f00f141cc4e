use crate::types::{Chunk, Document};

/// Splits documents into overlapping character windows.
///
/// Windows are capped at `chunk_size` characters; each window after the
/// first starts `chunk_overlap` characters before the previous window's
/// end, so neighbors share a trailing/leading region. Window ends prefer
/// paragraph, then sentence, then word boundaries over hard cuts.
pub struct TextChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextChunker {
    /// Create a chunker. `chunk_overlap` must be smaller than `chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be > 0");
        assert!(
            chunk_overlap < chunk_size,
            "chunk_overlap must be smaller than chunk_size"
        );
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Split documents into chunks, preserving document order and recording
    /// each chunk's source and running position. Blank documents yield no
    /// chunks. Pure function of the input and the configured sizes.
    pub fn split(&self, documents: &[Document]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        for doc in documents {
            for (position, text) in self.split_text(&doc.text).into_iter().enumerate() {
                chunks.push(Chunk {
                    source: doc.source.clone(),
                    position,
                    text,
                });
            }
        }
        chunks
    }

    fn split_text(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let mut out = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let hard_end = (start + self.chunk_size).min(chars.len());
            let end = if hard_end == chars.len() {
                hard_end
            } else {
                self.window_end(&chars, start, hard_end)
            };

            out.push(chars[start..end].iter().collect());

            if end == chars.len() {
                break;
            }
            start = end - self.chunk_overlap;
        }

        out
    }

    /// Pick the end of the window starting at `start`, preferring a
    /// paragraph break, then a sentence break, then a word break, scanning
    /// backwards from the hard cut. A boundary is only usable if the next
    /// window (which steps back by the overlap) still lands strictly ahead
    /// of this one; otherwise fall back to the hard cut.
    fn window_end(&self, chars: &[char], start: usize, hard_end: usize) -> usize {
        let floor = start + self.chunk_overlap + 1;

        for i in (floor..=hard_end.saturating_sub(1)).rev() {
            if chars[i] == '\n' && chars[i - 1] == '\n' {
                return i + 1;
            }
        }

        for i in (floor..hard_end.saturating_sub(1)).rev() {
            if matches!(chars[i], '.' | '!' | '?') && chars[i + 1].is_whitespace() {
                return i + 1;
            }
        }

        for i in (floor..=hard_end.saturating_sub(1)).rev() {
            if chars[i].is_whitespace() {
                return i + 1;
            }
        }

        hard_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn boundary_free(len: usize) -> String {
        // No whitespace or punctuation, so every cut is a hard cut.
        (0..len)
            .map(|i| char::from(b'a' + (i % 26) as u8))
            .collect()
    }

    #[rstest]
    #[case(500, 1)]
    #[case(1000, 1)]
    #[case(1001, 2)]
    #[case(1800, 2)]
    #[case(1801, 3)]
    #[case(5000, 6)]
    fn test_chunk_count_formula(#[case] len: usize, #[case] expected: usize) {
        // ceil((L - O) / (M - O)) with M = 1000, O = 200, or 1 when L <= M.
        let chunker = TextChunker::new(1000, 200);
        let docs = [Document::new("doc", boundary_free(len))];
        assert_eq!(chunker.split(&docs).len(), expected);
    }

    #[test]
    fn test_chunks_bounded_and_overlapping() {
        let chunker = TextChunker::new(100, 20);
        let docs = [Document::new("doc", boundary_free(450))];
        let chunks = chunker.split(&docs);

        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 100);
        }
        for pair in chunks.windows(2) {
            let tail: String = pair[0].text.chars().rev().take(20).collect();
            let head: String = pair[1].text.chars().take(20).collect();
            let tail: String = tail.chars().rev().collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_positions_run_per_document() {
        let chunker = TextChunker::new(100, 20);
        let docs = [
            Document::new("a", boundary_free(250)),
            Document::new("b", boundary_free(50)),
        ];
        let chunks = chunker.split(&docs);

        let a: Vec<_> = chunks.iter().filter(|c| c.source == "a").collect();
        let b: Vec<_> = chunks.iter().filter(|c| c.source == "b").collect();
        assert!(a.len() > 1);
        assert_eq!(b.len(), 1);
        for (i, chunk) in a.iter().enumerate() {
            assert_eq!(chunk.position, i);
        }
        assert_eq!(b[0].position, 0);
    }

    #[test]
    fn test_blank_documents_yield_no_chunks() {
        let chunker = TextChunker::new(100, 20);
        let docs = [
            Document::new("empty", ""),
            Document::new("blank", "   \n\t  "),
        ];
        assert!(chunker.split(&docs).is_empty());
    }

    #[test]
    fn test_prefers_sentence_boundary() {
        let chunker = TextChunker::new(50, 10);
        let text = format!("{}. {}", boundary_free(30), boundary_free(40));
        let docs = [Document::new("doc", text)];
        let chunks = chunker.split(&docs);

        // The first window could hold 50 chars but should close after the
        // sentence instead of cutting the second sentence mid-word.
        assert!(chunks[0].text.ends_with('.'));
    }

    #[test]
    fn test_prefers_paragraph_boundary() {
        let chunker = TextChunker::new(60, 10);
        let text = format!("{}\n\n{}", boundary_free(40), boundary_free(50));
        let docs = [Document::new("doc", text)];
        let chunks = chunker.split(&docs);

        assert!(chunks[0].text.ends_with('\n'));
    }

    #[test]
    fn test_short_document_single_chunk() {
        let chunker = TextChunker::new(1000, 200);
        let docs = [Document::new("doc", "The capital of France is Paris.")];
        let chunks = chunker.split(&docs);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "The capital of France is Paris.");
    }

    #[test]
    fn test_multibyte_text_is_char_safe() {
        let chunker = TextChunker::new(10, 2);
        let docs = [Document::new("doc", "日本語のテキストを分割する試験です")];
        let chunks = chunker.split(&docs);

        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 10);
        }
    }
}
