use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::SyntaxNode, errors::errors::Error};

use super::{expr::*, parser::Parser};

/// Binding strength of an operator. Higher numbers bind tighter.
///
/// A prefix operator only carries a right power, a postfix operator only a
/// left power; the unused side is zero. For infix operators, `left < right`
/// chains left-associatively and `right < left` right-associatively.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BindingPower {
    pub left: u8,
    pub right: u8,
}

impl BindingPower {
    pub const fn infix(left: u8, right: u8) -> Self {
        BindingPower { left, right }
    }

    pub const fn prefix(right: u8) -> Self {
        BindingPower { left: 0, right }
    }

    pub const fn postfix(left: u8) -> Self {
        BindingPower { left, right: 0 }
    }
}

lazy_static! {
    pub static ref PREFIX_POWER: HashMap<char, BindingPower> = {
        let mut map = HashMap::new();
        map.insert('+', BindingPower::prefix(9));
        map.insert('-', BindingPower::prefix(9));
        map
    };

    pub static ref INFIX_POWER: HashMap<char, BindingPower> = {
        let mut map = HashMap::new();
        map.insert('=', BindingPower::infix(2, 1));
        map.insert('?', BindingPower::infix(4, 3));
        map.insert('+', BindingPower::infix(5, 6));
        map.insert('-', BindingPower::infix(5, 6));
        map.insert('*', BindingPower::infix(7, 8));
        map.insert('/', BindingPower::infix(7, 8));
        map.insert('.', BindingPower::infix(14, 13));
        map
    };

    pub static ref POSTFIX_POWER: HashMap<char, BindingPower> = {
        let mut map = HashMap::new();
        map.insert('!', BindingPower::postfix(11));
        map.insert('[', BindingPower::postfix(11));
        map
    };
}

pub type NudHandler = fn(&mut Parser) -> Result<SyntaxNode, Error>;
pub type LedHandler = fn(&mut Parser, SyntaxNode, BindingPower) -> Result<SyntaxNode, Error>;
pub type PostfixHandler = fn(&mut Parser, SyntaxNode) -> Result<SyntaxNode, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Assignment
    parser.led('=', parse_binary_expr);

    // Ternary conditional
    parser.led('?', parse_ternary_expr);

    // Additive and multiplicative
    parser.led('+', parse_binary_expr);
    parser.led('-', parse_binary_expr);
    parser.led('*', parse_binary_expr);
    parser.led('/', parse_binary_expr);

    // Member
    parser.led('.', parse_binary_expr);

    // Postfix
    parser.postfix('!', parse_postfix_expr);
    parser.postfix('[', parse_index_expr);

    // Sign operators and grouping
    parser.nud('+', parse_prefix_expr);
    parser.nud('-', parse_prefix_expr);
    parser.nud('(', parse_grouping_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NudLookup = HashMap<char, NudHandler>;
pub type LedLookup = HashMap<char, LedHandler>;
pub type PostfixLookup = HashMap<char, PostfixHandler>;
