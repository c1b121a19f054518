//! Expression parser
//!
//! Recursive descent over the shared token set, one function per
//! precedence tier: parentheses bind tightest, then prefix NOT, then AND,
//! then OR/XOR at equal precedence. OR/XOR and AND are left-associative.
//! The same parser serves every notation, so switching notation never
//! changes the meaning of equivalent input.
//!
//! The top level is a comma-separated expression list; empty input parses
//! to an empty list.

use crate::lexer::tokenize;
use crate::raw::{RawNode, RawOp};
use crate::token::{Token, TokenKind};
use tabula_core::{ConcreteNotation, Location, SyntaxError};

/// Parse one input string under one concrete notation.
pub fn parse(text: &str, notation: ConcreteNotation) -> Result<Vec<RawNode>, SyntaxError> {
    let tokens = tokenize(text, notation)?;
    Parser::new(text, &tokens).document()
}

struct Parser<'a> {
    text: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            text,
            tokens,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Offset of the next unconsumed token, or end of input.
    fn offset(&self) -> usize {
        self.peek().map_or(self.text.len(), |t| t.offset)
    }

    fn error(&self, expected: &str) -> SyntaxError {
        let message = match self.peek() {
            Some(token) => format!("expected {}, found {}", expected, token.kind.describe()),
            None => format!("expected {}, found end of input", expected),
        };
        SyntaxError::new(message, Location::at(self.text, self.offset()))
    }

    fn document(&mut self) -> Result<Vec<RawNode>, SyntaxError> {
        let mut expressions = Vec::new();
        if self.peek().is_some() {
            expressions.push(self.expression()?);
            while matches!(self.peek(), Some(t) if t.kind == TokenKind::Comma) {
                self.bump();
                expressions.push(self.expression()?);
            }
        }
        if self.peek().is_some() {
            return Err(self.error("',' or end of input"));
        }
        Ok(expressions)
    }

    // OR and XOR share the loosest tier, left-associative.
    fn expression(&mut self) -> Result<RawNode, SyntaxError> {
        let mut node = self.conjunction()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Or) => RawOp::Or,
                Some(TokenKind::Xor) => RawOp::Xor,
                _ => break,
            };
            self.bump();
            let rhs = self.conjunction()?;
            node = RawNode::Binary(Box::new(node), op, Box::new(rhs));
        }
        Ok(node)
    }

    fn conjunction(&mut self) -> Result<RawNode, SyntaxError> {
        let mut node = self.unary()?;
        while matches!(self.peek(), Some(t) if t.kind == TokenKind::And) {
            self.bump();
            let rhs = self.unary()?;
            node = RawNode::Binary(Box::new(node), RawOp::And, Box::new(rhs));
        }
        Ok(node)
    }

    fn unary(&mut self) -> Result<RawNode, SyntaxError> {
        if matches!(self.peek(), Some(t) if t.kind == TokenKind::Not) {
            self.bump();
            let operand = self.unary()?;
            return Ok(RawNode::Not(Box::new(operand)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<RawNode, SyntaxError> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Ident(name)) => {
                let name = name.clone();
                self.bump();
                Ok(RawNode::Ident(name))
            }
            Some(TokenKind::Const(value)) => {
                let value = *value;
                self.bump();
                Ok(RawNode::Literal(value))
            }
            Some(TokenKind::LParen) => {
                self.bump();
                let inner = self.expression()?;
                if !matches!(self.peek(), Some(t) if t.kind == TokenKind::RParen) {
                    return Err(self.error("')'"));
                }
                self.bump();
                Ok(RawNode::Group(Box::new(inner)))
            }
            _ => Err(self.error("expression")),
        }
    }
}
