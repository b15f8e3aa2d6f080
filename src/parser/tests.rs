//! Unit tests for the parser module.
//!
//! This module contains tests for parsing expressions including:
//! - Precedence and associativity of the binary operators
//! - Prefix, postfix and index operators
//! - Parenthesized grouping
//! - The ternary conditional
//! - Malformed inputs

use pretty_assertions::assert_eq;

use super::parser::parse;
use crate::lexer::lexer::tokenize;

#[test]
fn test_parse_single_atom() {
    let source = "1".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "1");
}

#[test]
fn test_parse_precedence() {
    let source = "1 + 2 * 3".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(+ 1 (* 2 3))");
}

#[test]
fn test_parse_left_associativity() {
    let source = "a + b * c * d + e".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(+ (+ a (* (* b c) d)) e)");
}

#[test]
fn test_parse_member_right_associativity() {
    let source = "f . g . h".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(. f (. g h))");
}

#[test]
fn test_parse_mixed_additive_and_member() {
    let source = " 1 + 2 + f . g . h * 3 * 4".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(
        result.unwrap().to_string(),
        "(+ (+ 1 2) (* (* (. f (. g h)) 3) 4))"
    );
}

#[test]
fn test_parse_chained_prefix_operators() {
    let source = "--1 * 2".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(* (- (- 1)) 2)");
}

#[test]
fn test_parse_prefix_binds_looser_than_member() {
    let source = "--f . g".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(- (- (. f g)))");
}

#[test]
fn test_parse_postfix_binds_tighter_than_prefix() {
    let source = "-9!".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(- (! 9))");
}

#[test]
fn test_parse_postfix_after_member_chain() {
    let source = "f . g !".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(! (. f g))");
}

#[test]
fn test_parse_nested_parentheses_collapse() {
    let source = "(((0)))".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "0");
}

#[test]
fn test_parse_grouping_overrides_precedence() {
    let source = "(1 + 2) * 3".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(* (+ 1 2) 3)");
}

#[test]
fn test_parse_chained_indexing() {
    let source = "x[0][1]".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "([ ([ x 0) 1)");
}

#[test]
fn test_parse_index_in_sum() {
    let source = "1 + x[0]".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(+ 1 ([ x 0))");
}

#[test]
fn test_parse_index_with_full_expression() {
    let source = "x[a + b * c]".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "([ x (+ a (* b c)))");
}

#[test]
fn test_parse_ternary_right_associativity() {
    let source = "a ? b : c ? d : e".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(? a b (? c d e))");
}

#[test]
fn test_parse_ternary_with_assignment() {
    let source = "a = 0 ? b : c = d".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(= a (= (? 0 b c) d))");
}

#[test]
fn test_parse_assignment_right_associativity() {
    let source = "a = b = c".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert_eq!(result.unwrap().to_string(), "(= a (= b c))");
}

#[test]
fn test_parse_empty_input() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    // There is no valid empty expression
    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_parse_unclosed_parenthesis() {
    let source = "(1 + 2".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "ExpectedToken");
}

#[test]
fn test_parse_ternary_missing_colon() {
    let source = "a ? b".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnexpectedTokenDetailed"
    );
}

#[test]
fn test_parse_ternary_missing_else_branch() {
    let source = "a ? b :".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_parse_unclosed_index() {
    let source = "x[1".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "ExpectedToken");
}

#[test]
fn test_parse_adjacent_atoms() {
    let source = "1 2".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_non_prefix_operator() {
    let source = "* 1".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "NotPrefixOperator");
}

#[test]
fn test_parse_dangling_infix_operator() {
    let source = "1 +".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_parse_trailing_close_paren() {
    let source = "1)".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string()));
    let (_, result) = parse(tokens, std::rc::Rc::new("test.expr".to_string()));

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnexpectedTokenDetailed"
    );
}
