/*
*                    pastree -- Pascal-like syntax trees.
*
* statement  = [ "var" ident { "," ident } ":" type
*            | ident ":=" expression
*            | "begin" statement { ";" statement } "end"
*            | "if" condition "then" statement [ "else" statement ]
*            | "while" condition "do" statement ] ;
* condition  = expression ( comparator ) expression ;
* expression = term { ( "+" | "-" ) term } ;
* term       = factor { ( "*" | "/" ) factor } ;
* factor     = ident | number | "(" expression ")" ;
* comparator = "=" | "<>" | "<" | ">" | "<=" | ">=" ;
*/

use std::io::Write;

use crate::ast::{Expr, Stmt};
use crate::config::RenderStyle;
use crate::errors::AstResult;
use crate::render::{rule, TreePrinter};
use crate::token::Lexeme;

pub trait SyntaxNode<'src> {
    /// Token that produced this node.
    fn lexeme(&self) -> &'src Lexeme;

    fn as_node(&self) -> NodeRef<'_, 'src>;

    /// Writes the subtree in the reference style.
    fn render(&self, out: &mut dyn Write, depth: usize, indent: &str) -> AstResult<()> {
        self.render_with(RenderStyle::default(), out, depth, indent)
    }

    fn render_with(
        &self,
        style: RenderStyle,
        out: &mut dyn Write,
        depth: usize,
        indent: &str,
    ) -> AstResult<()> {
        TreePrinter::new(out, style).print(self.as_node(), depth, indent)
    }

    /// Whether the reference style draws children below this node.
    fn has_children(&self) -> bool {
        self.has_children_with(RenderStyle::default())
    }

    fn has_children_with(&self, style: RenderStyle) -> bool {
        rule(self.as_node(), style).has_children()
    }
}

/// Borrowed view over any vertex of the tree, used for generic walking.
///
/// Declared variable names are not nodes of their own, they show up as
/// [`NodeRef::Name`] so a declaration can still be walked like a block.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'n, 'src> {
    Expr(&'n Expr<'src>),
    Stmt(&'n Stmt<'src>),
    Name(&'src Lexeme),
}

impl<'n, 'src> NodeRef<'n, 'src> {
    pub fn lexeme(&self) -> &'src Lexeme {
        match *self {
            NodeRef::Expr(expr) => expr.lexeme(),
            NodeRef::Stmt(stmt) => stmt.lexeme(),
            NodeRef::Name(lexeme) => lexeme,
        }
    }

    pub fn kind(&self) -> &'static str {
        match *self {
            NodeRef::Expr(expr) => expr.kind(),
            NodeRef::Stmt(stmt) => stmt.kind(),
            NodeRef::Name(_) => "variable name",
        }
    }

    /// Structural children in declared order, whatever the render style.
    pub fn children(&self) -> Vec<NodeRef<'n, 'src>> {
        match *self {
            NodeRef::Expr(expr) => expr.children(),
            NodeRef::Stmt(stmt) => stmt.children(),
            NodeRef::Name(_) => Vec::new(),
        }
    }

    /// Number of vertices in this subtree, itself included.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(NodeRef::size).sum::<usize>()
    }
}

impl<'n, 'src> From<&'n Expr<'src>> for NodeRef<'n, 'src> {
    fn from(expr: &'n Expr<'src>) -> Self {
        NodeRef::Expr(expr)
    }
}

impl<'n, 'src> From<&'n Stmt<'src>> for NodeRef<'n, 'src> {
    fn from(stmt: &'n Stmt<'src>) -> Self {
        NodeRef::Stmt(stmt)
    }
}
