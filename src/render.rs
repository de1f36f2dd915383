//! Indented ASCII tree output for syntax trees.
//!
//! Every node is drawn pre-order: its own line first, then each child in
//! declared order behind a `├──── ` marker, the last one behind `└──── `.
//! A child's whole subtree is written before its next sibling starts.

use std::io::Write;

use log::trace;

use crate::ast::{Expr, NodeRef, Stmt, SyntaxNode};
use crate::config::{tree, RenderStyle};
use crate::errors::AstResult;
use crate::token::LexemeValue;

/// How a single node is drawn under a given style.
#[derive(Debug)]
pub enum RenderRule<'n, 'src> {
    /// Value text on its own line, nothing below it.
    Leaf(&'src LexemeValue),
    /// Label line followed by the children.
    Branch {
        label: &'src str,
        children: Vec<NodeRef<'n, 'src>>,
    },
    /// Writes nothing at all, not even a newline.
    Blank,
}

impl RenderRule<'_, '_> {
    pub fn has_children(&self) -> bool {
        matches!(self, RenderRule::Branch { children, .. } if !children.is_empty())
    }
}

pub fn rule<'n, 'src>(node: NodeRef<'n, 'src>, style: RenderStyle) -> RenderRule<'n, 'src> {
    let branch = || RenderRule::Branch {
        label: node.lexeme().source(),
        children: node.children(),
    };
    match (node, style) {
        (NodeRef::Expr(Expr::Number(lit) | Expr::Ident(lit)), _) => {
            RenderRule::Leaf(lit.lexeme().value())
        }
        (NodeRef::Name(lexeme), _) => RenderRule::Leaf(lexeme.value()),
        (NodeRef::Expr(Expr::BinOp(_) | Expr::RelOp(_)), _) => branch(),
        (NodeRef::Stmt(Stmt::While(_)), _) => branch(),
        (NodeRef::Stmt(_), RenderStyle::Uniform) => branch(),
        (NodeRef::Stmt(_), RenderStyle::Reference) => RenderRule::Blank,
    }
}

pub struct TreePrinter<'w> {
    out: &'w mut dyn Write,
    style: RenderStyle,
}

impl<'w> TreePrinter<'w> {
    pub fn new(out: &'w mut dyn Write, style: RenderStyle) -> Self {
        Self { out, style }
    }

    /// Writes `node` at `depth`. The caller has already written the marker
    /// in front of it; `indent` is what its own children get prefixed with.
    pub fn print(&mut self, node: NodeRef<'_, '_>, depth: usize, indent: &str) -> AstResult<()> {
        trace!("rendering {} at depth {}", node.kind(), depth);
        match rule(node, self.style) {
            RenderRule::Leaf(value) => writeln!(self.out, "{}", value)?,
            RenderRule::Branch { label, children } => {
                writeln!(self.out, "{}", label)?;
                let last = children.len().saturating_sub(1);
                for (i, child) in children.into_iter().enumerate() {
                    if i == last {
                        write!(self.out, "{}{}", indent, tree::LAST_BRANCH)?;
                        self.print(child, depth + 1, &tree::closed(indent))?;
                    } else {
                        write!(self.out, "{}{}", indent, tree::BRANCH)?;
                        self.print(child, depth + 1, &tree::continued(indent))?;
                    }
                }
            }
            RenderRule::Blank => {
                trace!("{} has no render rule in {} style", node.kind(), self.style)
            }
        }
        Ok(())
    }
}

/// True when `output` stops in the middle of a line, which happens when the
/// last thing drawn is the marker in front of a blank statement.
pub fn ends_open(output: &str) -> bool {
    !output.is_empty() && !output.ends_with('\n')
}

/// Renders a whole tree from the root into a string.
pub fn render_to_string<'src, N>(node: &N, style: RenderStyle) -> AstResult<String>
where
    N: SyntaxNode<'src> + ?Sized,
{
    let mut buf = Vec::new();
    node.render_with(style, &mut buf, 0, "")?;
    Ok(String::from_utf8(buf)?)
}
