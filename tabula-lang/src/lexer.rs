//! Per-notation tokenizers
//!
//! One hand-rolled scanner per concrete syntax, all producing the shared
//! token set. The scanner tracks byte positions so a failure reports the
//! exact offset of the first character it could not consume — the
//! auto-detector ranks failed grammars by that offset.

use crate::token::{Token, TokenKind};
use tabula_core::{ConcreteNotation, Location, SyntaxError};

pub fn tokenize(text: &str, notation: ConcreteNotation) -> Result<Vec<Token>, SyntaxError> {
    let mut scanner = Scanner::new(text);
    match notation {
        ConcreteNotation::C => scanner.run(Scanner::next_c),
        ConcreteNotation::Python => scanner.run(Scanner::next_python),
        ConcreteNotation::Latex => scanner.run(Scanner::next_latex),
        ConcreteNotation::Math => scanner.run(Scanner::next_math),
    }
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn run(
        &mut self,
        next: fn(&mut Self, char, usize) -> Result<TokenKind, SyntaxError>,
    ) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let start = self.pos;
            let Some(c) = self.peek() else {
                return Ok(tokens);
            };
            let kind = next(self, c, start)?;
            tokens.push(Token::new(kind, start));
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    /// Consume `[A-Za-z][A-Za-z0-9_]*` starting at the current position.
    fn take_ident(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            let ok = if self.pos == start {
                c.is_ascii_alphabetic()
            } else {
                c.is_ascii_alphanumeric() || c == '_'
            };
            if !ok {
                break;
            }
            self.bump();
        }
        self.input[start..self.pos].to_string()
    }

    fn error(&self, message: impl Into<String>, offset: usize) -> SyntaxError {
        SyntaxError::new(message, Location::at(self.input, offset))
    }

    fn unexpected(&self, c: char, offset: usize) -> SyntaxError {
        self.error(format!("unexpected character '{}'", c), offset)
    }

    /// Punctuation shared by every notation.
    fn common(&mut self, c: char) -> Option<TokenKind> {
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            _ => return None,
        };
        self.bump();
        Some(kind)
    }

    // C-style: `&&`, `||`, `^`, `!`, `true`, `false`.
    fn next_c(&mut self, c: char, start: usize) -> Result<TokenKind, SyntaxError> {
        if let Some(kind) = self.common(c) {
            return Ok(kind);
        }
        match c {
            '&' | '|' => {
                self.bump();
                if self.peek() == Some(c) {
                    self.bump();
                    Ok(if c == '&' { TokenKind::And } else { TokenKind::Or })
                } else {
                    Err(self.error(format!("expected '{c}' after '{c}'"), self.pos))
                }
            }
            '^' => {
                self.bump();
                Ok(TokenKind::Xor)
            }
            '!' => {
                self.bump();
                Ok(TokenKind::Not)
            }
            c if c.is_ascii_alphabetic() => {
                let word = self.take_ident();
                Ok(match word.as_str() {
                    "true" => TokenKind::Const(true),
                    "false" => TokenKind::Const(false),
                    _ => TokenKind::Ident(word),
                })
            }
            _ => Err(self.unexpected(c, start)),
        }
    }

    // Python-style: `and`, `or`, `not`, `^`, `True`, `False`.
    fn next_python(&mut self, c: char, start: usize) -> Result<TokenKind, SyntaxError> {
        if let Some(kind) = self.common(c) {
            return Ok(kind);
        }
        match c {
            '^' => {
                self.bump();
                Ok(TokenKind::Xor)
            }
            c if c.is_ascii_alphabetic() => {
                let word = self.take_ident();
                Ok(match word.as_str() {
                    "and" => TokenKind::And,
                    "or" => TokenKind::Or,
                    "not" => TokenKind::Not,
                    "True" => TokenKind::Const(true),
                    "False" => TokenKind::Const(false),
                    _ => TokenKind::Ident(word),
                })
            }
            _ => Err(self.unexpected(c, start)),
        }
    }

    // LaTeX-style: `\land`/`\wedge`, `\lor`/`\vee`, `\oplus`,
    // `\lnot`/`\neg`, `\top`, `\bot`.
    fn next_latex(&mut self, c: char, start: usize) -> Result<TokenKind, SyntaxError> {
        if let Some(kind) = self.common(c) {
            return Ok(kind);
        }
        match c {
            '\\' => {
                self.bump();
                let word = self.take_ident();
                match word.as_str() {
                    "land" | "wedge" => Ok(TokenKind::And),
                    "lor" | "vee" => Ok(TokenKind::Or),
                    "oplus" => Ok(TokenKind::Xor),
                    "lnot" | "neg" => Ok(TokenKind::Not),
                    "top" => Ok(TokenKind::Const(true)),
                    "bot" => Ok(TokenKind::Const(false)),
                    _ => Err(self.error(format!("unknown command '\\{}'", word), start)),
                }
            }
            c if c.is_ascii_alphabetic() => Ok(TokenKind::Ident(self.take_ident())),
            _ => Err(self.unexpected(c, start)),
        }
    }

    // Bare math: `∧`, `∨`, `⊕`/`⊻`, `¬`, `⊤`, `⊥`, plus the word
    // literals `true`/`false`.
    fn next_math(&mut self, c: char, start: usize) -> Result<TokenKind, SyntaxError> {
        if let Some(kind) = self.common(c) {
            return Ok(kind);
        }
        match c {
            '∧' | '∨' | '⊕' | '⊻' | '¬' | '⊤' | '⊥' => {
                self.bump();
                Ok(match c {
                    '∧' => TokenKind::And,
                    '∨' => TokenKind::Or,
                    '⊕' | '⊻' => TokenKind::Xor,
                    '¬' => TokenKind::Not,
                    '⊤' => TokenKind::Const(true),
                    _ => TokenKind::Const(false),
                })
            }
            c if c.is_ascii_alphabetic() => {
                let word = self.take_ident();
                Ok(match word.as_str() {
                    "true" => TokenKind::Const(true),
                    "false" => TokenKind::Const(false),
                    _ => TokenKind::Ident(word),
                })
            }
            _ => Err(self.unexpected(c, start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str, notation: ConcreteNotation) -> Vec<TokenKind> {
        tokenize(text, notation)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_c_operators() {
        assert_eq!(
            kinds("a && !b || true ^ c", ConcreteNotation::C),
            vec![
                TokenKind::Ident("a".to_string()),
                TokenKind::And,
                TokenKind::Not,
                TokenKind::Ident("b".to_string()),
                TokenKind::Or,
                TokenKind::Const(true),
                TokenKind::Xor,
                TokenKind::Ident("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_c_lone_ampersand() {
        let err = tokenize("a & b", ConcreteNotation::C).unwrap_err();
        assert_eq!(err.location.offset, 3);
    }

    #[test]
    fn test_python_keywords() {
        assert_eq!(
            kinds("not a and True", ConcreteNotation::Python),
            vec![
                TokenKind::Not,
                TokenKind::Ident("a".to_string()),
                TokenKind::And,
                TokenKind::Const(true),
            ]
        );
    }

    #[test]
    fn test_python_lowercase_true_is_ident() {
        assert_eq!(
            kinds("true", ConcreteNotation::Python),
            vec![TokenKind::Ident("true".to_string())]
        );
    }

    #[test]
    fn test_latex_commands_and_synonyms() {
        assert_eq!(
            kinds(r"\lnot a \wedge \top", ConcreteNotation::Latex),
            vec![
                TokenKind::Not,
                TokenKind::Ident("a".to_string()),
                TokenKind::And,
                TokenKind::Const(true),
            ]
        );
    }

    #[test]
    fn test_latex_unknown_command() {
        let err = tokenize(r"a \landx b", ConcreteNotation::Latex).unwrap_err();
        assert!(err.message.contains("\\landx"));
        assert_eq!(err.location.offset, 2);
    }

    #[test]
    fn test_math_symbols() {
        assert_eq!(
            kinds("¬a ∧ (b ⊕ ⊥)", ConcreteNotation::Math),
            vec![
                TokenKind::Not,
                TokenKind::Ident("a".to_string()),
                TokenKind::And,
                TokenKind::LParen,
                TokenKind::Ident("b".to_string()),
                TokenKind::Xor,
                TokenKind::Const(false),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        assert_eq!(
            kinds("x_1 && y2", ConcreteNotation::C),
            vec![
                TokenKind::Ident("x_1".to_string()),
                TokenKind::And,
                TokenKind::Ident("y2".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_input_tokenizes_empty() {
        assert!(tokenize("  \n ", ConcreteNotation::Math).unwrap().is_empty());
    }

    #[test]
    fn test_error_location_line_column() {
        let err = tokenize("a &&\n#", ConcreteNotation::C).unwrap_err();
        assert_eq!((err.location.line, err.location.column), (2, 1));
    }
}
