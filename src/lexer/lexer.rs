use std::rc::Rc;

use regex::Regex;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: i32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("repl"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            // Tried in order; the first pattern matching at the cursor wins.
            // Whitespace and the operator catch-all cover every character,
            // so every input position matches exactly one pattern.
            patterns: vec![
                RegexPattern {
                    regex: Regex::new("^\\s+").unwrap(),
                    handler: skip_handler,
                },
                RegexPattern {
                    regex: Regex::new("^[a-zA-Z0-9]").unwrap(),
                    handler: atom_handler,
                },
                RegexPattern {
                    regex: Regex::new("^[^\\s]").unwrap(),
                    handler: operator_handler,
                },
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos as usize..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched as i32);
}

fn atom_handler(lexer: &mut Lexer, regex: Regex) {
    let value = regex
        .find(lexer.remainder())
        .unwrap()
        .as_str()
        .chars()
        .next()
        .unwrap();

    lexer.push(MK_TOKEN!(
        TokenKind::Atom,
        value,
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position(
                (lexer.pos + value.len_utf8() as i32) as u32,
                Rc::clone(&lexer.file)
            ),
        }
    ));
    lexer.advance_n(value.len_utf8() as i32);
}

fn operator_handler(lexer: &mut Lexer, regex: Regex) {
    let value = regex
        .find(lexer.remainder())
        .unwrap()
        .as_str()
        .chars()
        .next()
        .unwrap();

    lexer.push(MK_TOKEN!(
        TokenKind::Operator,
        value,
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position(
                (lexer.pos + value.len_utf8() as i32) as u32,
                Rc::clone(&lexer.file)
            ),
        }
    ));
    lexer.advance_n(value.len_utf8() as i32);
}

pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        for pattern in lex.clone().patterns.iter() {
            if pattern.regex.is_match(lex.remainder()) {
                (pattern.handler)(&mut lex, pattern.regex.clone());
                break;
            }
        }
    }

    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        '\0',
        Span {
            start: Position(lex.pos as u32, Rc::clone(&lex.file)),
            end: Position(lex.pos as u32, Rc::clone(&lex.file)),
        }
    ));
    lex.tokens
}
