//! Parser implementation for building the expression syntax tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing, plus a separate postfix dispatch.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Postfix handlers
//!
//! Binding powers live in the static tables in `lookups`.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::SyntaxNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, LedHandler, LedLookup, NudHandler, NudLookup, PostfixHandler,
        PostfixLookup,
    },
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the handler lookup tables, and
/// tracks the current position in the token stream.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NudLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LedLookup,
    /// Lookup table for postfix expression handlers
    postfix_lookup: PostfixLookup,
}

impl Parser {
    /// Creates a new Parser instance over a token stream.
    ///
    /// The stream must be terminated by an EOF token, as produced by
    /// `lexer::tokenize`.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            postfix_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos as usize).unwrap().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get((self.pos - 1) as usize).unwrap()
    }

    /// Expects an operator token with the given character, with optional
    /// custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an
    /// Error without consuming the token.
    pub fn expect_error(&mut self, expected: char, error: Option<Error>) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != TokenKind::Operator || token.value != expected {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        expected,
                        found: token.to_string(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects an operator token with the given character, with the default
    /// error message.
    pub fn expect(&mut self, expected: char) -> Result<Token, Error> {
        self.expect_error(expected, None)
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NudLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LedLookup {
        &self.led_lookup
    }

    /// Returns a reference to the postfix lookup table.
    pub fn get_postfix_lookup(&self) -> &PostfixLookup {
        &self.postfix_lookup
    }

    /// Registers a left denotation (infix) handler for an operator.
    pub fn led(&mut self, op: char, led_fn: LedHandler) {
        self.led_lookup.insert(op, led_fn);
    }

    /// Registers a null denotation (prefix) handler for an operator.
    pub fn nud(&mut self, op: char, nud_fn: NudHandler) {
        self.nud_lookup.insert(op, nud_fn);
    }

    /// Registers a postfix handler for an operator.
    pub fn postfix(&mut self, op: char, postfix_fn: PostfixHandler) {
        self.postfix_lookup.insert(op, postfix_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        Position(self.current_token().span.start.0, Rc::clone(&self.file))
    }
}

/// Parses a stream of tokens into an expression syntax tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the handler lookup tables, and parses a single expression
/// with minimum binding power 0. The whole stream must be consumed: tokens
/// left over after the expression are an error.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the root SyntaxNode or an Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<SyntaxNode, Error>) {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    let result = parse_expr(&mut parser, 0);

    let result = match result {
        Ok(_) if parser.current_token_kind() != TokenKind::EOF => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().to_string(),
                message: String::from("expected end of input"),
            },
            parser.get_position(),
        )),
        result => result,
    };

    (parser, result)
}
