/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` and `Stmt` sum types, `Program`, and span helpers
/// - expressions: Definitions for the expression node payloads
/// - statements: Definitions for the statement node payloads
/// - printer: S-expression rendering used by `-p` and the tests
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
