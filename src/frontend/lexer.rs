use super::cursor::Cursor;
use super::span::Span;
use super::token::{SpannedToken, Token};

pub struct Lexer<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
}

/// The fixed set of characters that terminate a multi-character scan and
/// lex as single-character tokens. Note that `.` is absent, which is what
/// lets decimal literals through the number scan.
fn is_delimiter(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '+' | '-' | '/' | '*' | '%' | '^' | '=' | '(' | ')'
    )
}

impl<'src> Lexer<'src> {
    /// Creates a lexer for the given source string
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            cursor: Cursor::new(source),
        }
    }

    /// Advances through the string, and returns the next token, repeating
    /// the end-of-input token once the string is exhausted.
    pub fn next_token(&mut self) -> SpannedToken {
        // Consume whitespace before measuring the token's span.
        self.cursor.take_while(|ch| ch.is_ascii_whitespace());

        let start_pos = self.cursor.get_position();
        let token = self.lex_token();
        let end_pos = self.cursor.get_position();

        SpannedToken {
            token,
            span: Span::new(start_pos, end_pos),
        }
    }

    fn lex_token(&mut self) -> Token {
        // Read the next character, if any
        let (byte_idx, ch) = match self.cursor.take() {
            Some(tuple) => tuple,
            None => return Token::EndOfInput,
        };

        match ch {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '=' => Token::Equals,
            // Numbers start with a digit
            _ if ch.is_ascii_digit() => self.lex_number(byte_idx),
            // Variable-shaped identifiers start with a letter
            _ if ch.is_alphabetic() => self.lex_identifier(byte_idx),
            _ => Token::Error(format!("Unexpected character '{}'", ch)),
        }
    }

    // ---- helpers ----

    /// Scans up to the next delimiter and returns a token containing the
    /// numeric value of the consumed text. Because the scan only stops at
    /// delimiters, non-numeric trailing characters (as in `12a`) end up in
    /// the text and surface as an error token.
    fn lex_number(&mut self, start_idx: usize) -> Token {
        let slice = self.take_rest_of_word(start_idx);
        match slice.parse() {
            Ok(value) => Token::Number(value),
            Err(_) => Token::Error(format!("Malformed number `{}`", slice)),
        }
    }

    /// Scans up to the next delimiter, and returns an identifier token for
    /// the consumed word.
    fn lex_identifier(&mut self, start_idx: usize) -> Token {
        Token::Identifier(self.take_rest_of_word(start_idx).to_owned())
    }

    fn take_rest_of_word(&mut self, start_idx: usize) -> &'src str {
        self.cursor.take_until(is_delimiter);

        let end_idx = match self.cursor.peek() {
            Some((i, _)) => i,
            None => self.source.len(),
        };

        &self.source[start_idx..end_idx]
    }

    /// Returns an iterator over all tokens before end-of-input.
    pub fn iter(self) -> LexerIterator<'src> {
        LexerIterator { lexer: self }
    }
}

pub struct LexerIterator<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Iterator for LexerIterator<'src> {
    type Item = SpannedToken;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next_token();

        if token.token == Token::EndOfInput {
            return None;
        }

        Some(token)
    }
}
