// Abstract Syntax Tree definitions for the Pascal-like front end
// Nodes borrow the lexemes that produced them from the token stream.

mod traits;
pub use traits::{NodeRef, SyntaxNode};

// AST node modules
mod expressions;
mod statements;

pub use expressions::{BinOp, Expr, Literal};
pub use statements::{AssignStmt, BeginStmt, IfStmt, Stmt, VarDecl, WhileStmt};
