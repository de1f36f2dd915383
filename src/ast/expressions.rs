use std::fmt;

use log::trace;

use crate::ast::{NodeRef, SyntaxNode};
use crate::errors::{AstResult, Required};
use crate::token::Lexeme;

/// Number literal or identifier reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal<'src> {
    lexeme: &'src Lexeme,
}

impl<'src> Literal<'src> {
    pub fn lexeme(&self) -> &'src Lexeme {
        self.lexeme
    }
}

/// Arithmetic or relational operator applied to two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOp<'src> {
    lexeme: &'src Lexeme,
    left: Box<Expr<'src>>,
    right: Box<Expr<'src>>,
}

impl<'src> BinOp<'src> {
    fn new(
        node: &'static str,
        lexeme: &'src Lexeme,
        left: Option<Box<Expr<'src>>>,
        right: Option<Box<Expr<'src>>>,
    ) -> AstResult<Self> {
        let line = lexeme.line();
        let left = left.required(node, "left operand", line)?;
        let right = right.required(node, "right operand", line)?;
        trace!("built {} '{}' at {}", node, lexeme.source(), lexeme.position());
        Ok(Self { lexeme, left, right })
    }

    pub fn operator(&self) -> &'src str {
        self.lexeme.source()
    }

    pub fn left(&self) -> &Expr<'src> {
        &self.left
    }

    pub fn right(&self) -> &Expr<'src> {
        &self.right
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'src> {
    Number(Literal<'src>),
    Ident(Literal<'src>),
    BinOp(BinOp<'src>),
    RelOp(BinOp<'src>),
}

impl<'src> Expr<'src> {
    pub fn number(lexeme: &'src Lexeme) -> Self {
        Expr::Number(Literal { lexeme })
    }

    pub fn ident(lexeme: &'src Lexeme) -> Self {
        Expr::Ident(Literal { lexeme })
    }

    pub fn bin_op(
        lexeme: &'src Lexeme,
        left: Option<Box<Expr<'src>>>,
        right: Option<Box<Expr<'src>>>,
    ) -> AstResult<Self> {
        BinOp::new("binary operator", lexeme, left, right).map(Expr::BinOp)
    }

    pub fn rel_op(
        lexeme: &'src Lexeme,
        left: Option<Box<Expr<'src>>>,
        right: Option<Box<Expr<'src>>>,
    ) -> AstResult<Self> {
        BinOp::new("relational operator", lexeme, left, right).map(Expr::RelOp)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number",
            Expr::Ident(_) => "identifier",
            Expr::BinOp(_) => "binary operator",
            Expr::RelOp(_) => "relational operator",
        }
    }

    pub fn children(&self) -> Vec<NodeRef<'_, 'src>> {
        match self {
            Expr::Number(_) | Expr::Ident(_) => Vec::new(),
            Expr::BinOp(op) | Expr::RelOp(op) => vec![op.left().into(), op.right().into()],
        }
    }
}

impl<'src> SyntaxNode<'src> for Expr<'src> {
    fn lexeme(&self) -> &'src Lexeme {
        match self {
            Expr::Number(lit) | Expr::Ident(lit) => lit.lexeme,
            Expr::BinOp(op) | Expr::RelOp(op) => op.lexeme,
        }
    }

    fn as_node(&self) -> NodeRef<'_, 'src> {
        NodeRef::Expr(self)
    }
}

// Leaves show their value, operators their source text.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(lit) | Expr::Ident(lit) => write!(f, "{}", lit.lexeme.value()),
            Expr::BinOp(op) | Expr::RelOp(op) => f.write_str(op.operator()),
        }
    }
}
