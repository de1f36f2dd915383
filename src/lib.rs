pub mod ast;
pub mod config;
pub mod errors;
pub mod render;
pub mod samples;
pub mod token;

pub use ast::{Expr, NodeRef, Stmt, SyntaxNode};
pub use config::RenderStyle;
pub use errors::{AstError, AstResult};
pub use render::{render_to_string, TreePrinter};
pub use token::Lexeme;
