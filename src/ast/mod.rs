/// AST (Abstract Syntax Tree) module
/// Contains the syntax tree produced by the parser and its rendering
///
/// Submodules:
/// - ast: The tree node type and its S-expression Display impl
pub mod ast;
