use std::iter::Peekable;
use std::str::CharIndices;

pub struct Cursor<'src> {
    char_iterator: Peekable<CharIndices<'src>>,
    position: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a character stream for the given source string
    pub fn new(source: &'src str) -> Self {
        Cursor {
            char_iterator: source.char_indices().peekable(),
            position: 0,
        }
    }

    /// Returns the byte position of the cursor
    pub fn get_position(&self) -> usize {
        self.position
    }

    /// Peeks at the next character without consuming it. Returns the
    /// byte-position and the value of the character.
    pub fn peek(&mut self) -> Option<(usize, char)> {
        self.char_iterator.peek().copied()
    }

    /// Consumes the next character, returning the byte-position and the value
    /// of the character.
    pub fn take(&mut self) -> Option<(usize, char)> {
        let (byte_idx, ch) = match self.char_iterator.next() {
            None => return None,
            Some(t) => t,
        };

        self.position = byte_idx + ch.len_utf8();

        Some((byte_idx, ch))
    }

    /// Advances the iterator until the condition is false, or the string ends.
    /// The next character (if any) will not satisfy the condition.
    pub fn take_while<F>(&mut self, condition: F)
    where
        F: Fn(char) -> bool,
    {
        loop {
            match self.peek() {
                Some((_, ch)) if condition(ch) => {
                    self.take();
                }
                _ => break,
            }
        }
    }

    /// Advances the iterator until the condition is true, or the string ends.
    /// The next character (if any) will satisfy the condition.
    pub fn take_until<F>(&mut self, condition: F)
    where
        F: Fn(char) -> bool,
    {
        self.take_while(|ch| !condition(ch));
    }
}
