use crate::{
    ast::ast::SyntaxNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, INFIX_POWER, POSTFIX_POWER, PREFIX_POWER},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, min_bp: u8) -> Result<SyntaxNode, Error> {
    // First parse NUD: an atom, a grouping, or a prefix operator
    let mut left = match parser.current_token_kind() {
        TokenKind::Atom => SyntaxNode::leaf(parser.advance().value),
        TokenKind::Operator => {
            let op = parser.current_token().value;
            let handler = match parser.get_nud_lookup().get(&op) {
                Some(handler) => *handler,
                None => {
                    return Err(Error::new(
                        ErrorImpl::NotPrefixOperator { op },
                        parser.get_position(),
                    ))
                }
            };
            handler(parser)?
        }
        TokenKind::EOF => {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput,
                parser.get_position(),
            ))
        }
    };

    // While the peeked operator binds at least as tightly as min_bp,
    // continue growing the lhs
    loop {
        let token = parser.current_token().clone();
        match token.kind {
            TokenKind::EOF => break,
            TokenKind::Operator => {}
            TokenKind::Atom => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.to_string(),
                    },
                    parser.get_position(),
                ))
            }
        }
        let op = token.value;

        if let Some(bp) = POSTFIX_POWER.get(&op).copied() {
            if bp.left < min_bp {
                break;
            }
            let handler = match parser.get_postfix_lookup().get(&op) {
                Some(handler) => *handler,
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedToken {
                            token: token.to_string(),
                        },
                        parser.get_position(),
                    ))
                }
            };
            left = handler(parser, left)?;
            continue;
        }

        if let Some(bp) = INFIX_POWER.get(&op).copied() {
            if bp.left < min_bp {
                break;
            }
            let handler = match parser.get_led_lookup().get(&op) {
                Some(handler) => *handler,
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedToken {
                            token: token.to_string(),
                        },
                        parser.get_position(),
                    ))
                }
            };
            left = handler(parser, left, bp)?;
            continue;
        }

        // No binding power entry: the operator closes an enclosing
        // construct (`)`, `:`, `]`) and is left unconsumed
        break;
    }

    Ok(left)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let operator_token = parser.advance().clone();
    let op = operator_token.value;

    let bp = match PREFIX_POWER.get(&op) {
        Some(bp) => *bp,
        None => {
            return Err(Error::new(
                ErrorImpl::NotPrefixOperator { op },
                operator_token.span.start.clone(),
            ))
        }
    };

    let operand = parse_expr(parser, bp.right)?;

    Ok(SyntaxNode::branch(op, vec![operand]))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    parser.advance();
    let expr = parse_expr(parser, 0)?;
    parser.expect(')')?;

    // Parentheses group but do not appear in the tree
    Ok(expr)
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: SyntaxNode,
    bp: BindingPower,
) -> Result<SyntaxNode, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp.right)?;

    Ok(SyntaxNode::branch(operator_token.value, vec![left, right]))
}

pub fn parse_ternary_expr(
    parser: &mut Parser,
    left: SyntaxNode,
    bp: BindingPower,
) -> Result<SyntaxNode, Error> {
    parser.advance();

    let then_branch = parse_expr(parser, 0)?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().to_string(),
            message: String::from("expected `:` after the then-branch of `?`"),
        },
        parser.get_position(),
    );
    parser.expect_error(':', Some(error))?;

    let else_branch = parse_expr(parser, bp.right)?;

    Ok(SyntaxNode::branch('?', vec![left, then_branch, else_branch]))
}

pub fn parse_postfix_expr(parser: &mut Parser, left: SyntaxNode) -> Result<SyntaxNode, Error> {
    let operator_token = parser.advance().clone();

    Ok(SyntaxNode::branch(operator_token.value, vec![left]))
}

pub fn parse_index_expr(parser: &mut Parser, left: SyntaxNode) -> Result<SyntaxNode, Error> {
    parser.advance();

    let index = parse_expr(parser, 0)?;
    parser.expect(']')?;

    Ok(SyntaxNode::branch('[', vec![left, index]))
}
