use std::io::{self, Write};

pub const WORD_SIZE: usize = 4;

/// Number of zero bytes `decode_words` appends to `len` bytes to reach a
/// whole word.
pub fn padding_len(len: usize) -> usize {
    len.next_multiple_of(WORD_SIZE) - len
}

/// Decodes `bytes` as consecutive little-endian `u32` words.
///
/// A trailing partial word is read as if it had been zero-padded, so
/// `decode_words(b).len() == b.len().div_ceil(4)` holds for every input.
pub fn decode_words(bytes: &[u8]) -> Vec<u32> {
    let (chunks, tail) = bytes.as_chunks::<WORD_SIZE>();
    let mut words = Vec::with_capacity(bytes.len().div_ceil(WORD_SIZE));
    for chunk in chunks {
        words.push(u32::from_le_bytes(*chunk));
    }
    if !tail.is_empty() {
        let mut last = [0u8; WORD_SIZE];
        last[..tail.len()].copy_from_slice(tail);
        words.push(u32::from_le_bytes(last));
    }
    words
}

pub fn format_word(word: u32) -> String {
    format!("{word:08x}")
}

pub fn write_words<W: Write>(writer: &mut W, words: &[u32]) -> io::Result<()> {
    for word in words {
        writeln!(writer, "{}", format_word(*word))?;
    }
    Ok(())
}
