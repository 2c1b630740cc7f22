//! Deterministic text chunking on sentence boundaries

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Chunk, ChunkSource, Document};

/// Text chunker with fixed target size and overlap, measured in tokens
/// (whitespace-delimited words).
///
/// Whole sentences are accumulated until the target size would be exceeded;
/// a sentence longer than the target on its own is hard-split on word
/// boundaries. Consecutive chunks share the trailing `overlap` tokens of the
/// previous chunk.
pub struct TextChunker {
    /// Target chunk size in tokens
    chunk_size: usize,
    /// Overlap between consecutive chunks in tokens
    overlap: usize,
}

impl TextChunker {
    /// Create a new chunker. Overlap larger than the chunk size is clamped.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            overlap: overlap.min(chunk_size / 2),
        }
    }

    /// Chunk a document's text, attaching source metadata and ordinals
    pub fn chunk_document(&self, doc: &Document, content: &str) -> Vec<Chunk> {
        let source = ChunkSource {
            filename: doc.filename.clone(),
            file_type: doc.file_type,
        };

        self.split(content)
            .into_iter()
            .enumerate()
            .map(|(i, text)| Chunk::new(doc.id, text, source.clone(), i as u32))
            .collect()
    }

    /// Split text into overlapping chunk strings
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        // Current chunk as a token list; overlap carry-over stays word-exact.
        let mut current: Vec<String> = Vec::new();

        for sentence in text.split_sentence_bounds() {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }

            if words.len() > self.chunk_size {
                // Sentence alone exceeds the target: flush and hard-split it.
                self.flush(&mut chunks, &mut current);
                for window in Self::word_windows(&words, self.chunk_size, self.overlap) {
                    chunks.push(window.join(" "));
                }
                continue;
            }

            if !current.is_empty() && current.len() + words.len() > self.chunk_size {
                self.flush(&mut chunks, &mut current);
            }

            current.extend(words.iter().map(|w| w.to_string()));
        }

        if !current.is_empty() {
            chunks.push(current.join(" "));
        }

        chunks
    }

    /// Emit the current chunk and seed the next one with the overlap tail
    fn flush(&self, chunks: &mut Vec<String>, current: &mut Vec<String>) {
        if current.is_empty() {
            return;
        }
        chunks.push(current.join(" "));

        let tail_start = current.len().saturating_sub(self.overlap);
        *current = current.split_off(tail_start);
    }

    /// Fixed-size word windows with overlap, covering the whole slice
    fn word_windows<'a>(
        words: &'a [&'a str],
        size: usize,
        overlap: usize,
    ) -> Vec<Vec<&'a str>> {
        let step = size.saturating_sub(overlap).max(1);
        let mut windows = Vec::new();
        let mut start = 0;
        while start < words.len() {
            let end = (start + size).min(words.len());
            windows.push(words[start..end].to_vec());
            if end == words.len() {
                break;
            }
            start += step;
        }
        windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileType;

    fn doc() -> Document {
        Document::new("sample.txt".to_string(), FileType::Txt)
    }

    fn token_count(s: &str) -> usize {
        s.split_whitespace().count()
    }

    #[test]
    fn short_text_is_one_chunk() {
        let chunker = TextChunker::new(512, 20);
        let chunks = chunker.split("A single short sentence.");
        assert_eq!(chunks, vec!["A single short sentence.".to_string()]);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        let chunker = TextChunker::new(512, 20);
        assert!(chunker.split("").is_empty());
        assert!(chunker.split("   \n\t ").is_empty());
    }

    #[test]
    fn respects_sentence_boundaries() {
        let chunker = TextChunker::new(8, 2);
        let text = "One two three four five. Six seven eight nine ten. Eleven twelve.";
        let chunks = chunker.split(text);

        assert!(chunks.len() >= 2);
        // First chunk ends at a sentence boundary, not mid-sentence.
        assert!(chunks[0].ends_with("five."));
    }

    #[test]
    fn consecutive_chunks_overlap() {
        let chunker = TextChunker::new(6, 2);
        let text = "Alpha beta gamma delta epsilon. Zeta eta theta iota kappa.";
        let chunks = chunker.split(text);
        assert_eq!(chunks.len(), 2);

        let first_words: Vec<&str> = chunks[0].split_whitespace().collect();
        let second_words: Vec<&str> = chunks[1].split_whitespace().collect();
        assert_eq!(&first_words[first_words.len() - 2..], &second_words[..2]);
    }

    #[test]
    fn oversized_sentence_is_hard_split() {
        let chunker = TextChunker::new(5, 1);
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let chunks = chunker.split(text);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(token_count(chunk) <= 5);
        }
        // All words still present, in order.
        let rejoined: Vec<&str> = chunks
            .iter()
            .flat_map(|c| c.split_whitespace())
            .collect();
        assert!(rejoined.windows(2).any(|w| w == ["one", "two"]));
        assert!(rejoined.contains(&"twelve"));
    }

    #[test]
    fn splitting_is_deterministic() {
        let chunker = TextChunker::new(16, 4);
        let text = "First sentence here. Second sentence follows. Third one closes it out. \
                    Another paragraph begins now. It keeps going for a while longer.";
        assert_eq!(chunker.split(text), chunker.split(text));
    }

    #[test]
    fn chunk_document_assigns_ordinals_and_source() {
        let chunker = TextChunker::new(6, 2);
        let doc = doc();
        let text = "Alpha beta gamma delta epsilon. Zeta eta theta iota kappa.";
        let chunks = chunker.chunk_document(&doc, text);

        assert_eq!(chunks.len(), 2);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, i as u32);
            assert_eq!(chunk.document_id, doc.id);
            assert_eq!(chunk.source.filename, "sample.txt");
        }
    }
}
