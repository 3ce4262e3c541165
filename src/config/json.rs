//! Minimal JSON tokenizer for flat configuration documents.
//!
//! Produces tokens in document order without building a tree. String tokens
//! are the raw text between the quotes; escapes are not decoded. Separators
//! (`:` and `,`) are skipped. An unterminated string ends the stream: the
//! tokens before it are still returned.

use super::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    String(&'a str),
    /// Numbers, `true`/`false`/`null`, or any other bare word.
    Primitive(&'a str),
}

/// Iterator over the tokens of a document.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn string(&mut self) -> Option<Token<'a>> {
        let input = self.input;
        let bytes = input.as_bytes();
        let start = self.pos + 1;
        let mut i = start;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'"' => {
                    self.pos = i + 1;
                    return Some(Token::String(&input[start..i]));
                }
                _ => i += 1,
            }
        }
        // Unterminated: stop the stream here.
        self.pos = bytes.len();
        None
    }

    fn primitive(&mut self) -> Token<'a> {
        let input = self.input;
        let bytes = input.as_bytes();
        let start = self.pos;
        let mut i = start;
        while i < bytes.len() && !is_delimiter(bytes[i]) {
            i += 1;
        }
        self.pos = i;
        Token::Primitive(&input[start..i])
    }
}

fn is_delimiter(b: u8) -> bool {
    matches!(b, b'{' | b'}' | b'[' | b']' | b'"' | b':' | b',') || b.is_ascii_whitespace()
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let input = self.input;
        let bytes = input.as_bytes();
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            let token = match b {
                b'{' => Token::ObjectStart,
                b'}' => Token::ObjectEnd,
                b'[' => Token::ArrayStart,
                b']' => Token::ArrayEnd,
                b'"' => return self.string(),
                b':' | b',' => {
                    self.pos += 1;
                    continue;
                }
                _ if b.is_ascii_whitespace() => {
                    self.pos += 1;
                    continue;
                }
                _ => return Some(self.primitive()),
            };
            self.pos += 1;
            return Some(token);
        }
        None
    }
}

/// Tokenizes a whole document, failing once more than `limit` tokens appear.
pub fn tokenize(input: &str, limit: usize) -> Result<Vec<Token<'_>>, ConfigError> {
    let mut tokens = Vec::with_capacity(limit.min(input.len()));
    for token in Tokenizer::new(input) {
        if tokens.len() == limit {
            return Err(ConfigError::TooManyTokens { limit });
        }
        tokens.push(token);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_object() {
        let tokens = tokenize(r#"{"A": "x", "B": true, "C": 12}"#, 16).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::ObjectStart,
                Token::String("A"),
                Token::String("x"),
                Token::String("B"),
                Token::Primitive("true"),
                Token::String("C"),
                Token::Primitive("12"),
                Token::ObjectEnd,
            ]
        );
    }

    #[test]
    fn test_escaped_quote_stays_raw() {
        let tokens = tokenize(r#"{"A": "say \"hi\""}"#, 16).unwrap();
        assert_eq!(tokens[2], Token::String(r#"say \"hi\""#));
    }

    #[test]
    fn test_unterminated_string_ends_stream() {
        let tokens = tokenize(r#"{"A": "x", "B": "unfinished"#, 16).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::ObjectStart,
                Token::String("A"),
                Token::String("x"),
                Token::String("B"),
            ]
        );
    }

    #[test]
    fn test_nested_structures_are_tokenized() {
        let tokens = tokenize(r#"{"A": [1, {"B": 2}]}"#, 16).unwrap();
        assert_eq!(tokens.len(), 10);
        assert_eq!(tokens[2], Token::ArrayStart);
        assert_eq!(tokens[4], Token::ObjectStart);
    }

    #[test]
    fn test_token_limit() {
        let doc = r#"{"A": 1, "B": 2}"#;
        assert_eq!(tokenize(doc, 6).unwrap().len(), 6);
        let err = tokenize(doc, 5).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyTokens { limit: 5 }));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("   \n", 4).unwrap().is_empty());
    }
}
