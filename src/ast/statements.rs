use std::fmt;

use log::trace;

use crate::ast::{Expr, NodeRef, SyntaxNode};
use crate::errors::{AstResult, Required};
use crate::token::Lexeme;

/// `var a, b: integer`, anchored on the type token.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl<'src> {
    lexeme: &'src Lexeme,
    names: Vec<&'src Lexeme>,
}

impl<'src> VarDecl<'src> {
    pub fn names(&self) -> &[&'src Lexeme] {
        &self.names
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt<'src> {
    lexeme: &'src Lexeme,
    target: Box<Expr<'src>>,
    value: Box<Expr<'src>>,
}

impl<'src> AssignStmt<'src> {
    pub fn target(&self) -> &Expr<'src> {
        &self.target
    }

    pub fn value(&self) -> &Expr<'src> {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BeginStmt<'src> {
    lexeme: &'src Lexeme,
    stmts: Vec<Stmt<'src>>,
}

impl<'src> BeginStmt<'src> {
    /// Statements in execution order.
    pub fn stmts(&self) -> &[Stmt<'src>] {
        &self.stmts
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt<'src> {
    lexeme: &'src Lexeme,
    condition: Box<Expr<'src>>,
    body: Box<Stmt<'src>>,
}

impl<'src> WhileStmt<'src> {
    pub fn condition(&self) -> &Expr<'src> {
        &self.condition
    }

    pub fn body(&self) -> &Stmt<'src> {
        &self.body
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt<'src> {
    lexeme: &'src Lexeme,
    condition: Box<Expr<'src>>,
    then_branch: Box<Stmt<'src>>,
    else_branch: Option<Box<Stmt<'src>>>,
}

impl<'src> IfStmt<'src> {
    pub fn condition(&self) -> &Expr<'src> {
        &self.condition
    }

    pub fn then_branch(&self) -> &Stmt<'src> {
        &self.then_branch
    }

    pub fn else_branch(&self) -> Option<&Stmt<'src>> {
        self.else_branch.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt<'src> {
    VarDecl(VarDecl<'src>),
    Assign(AssignStmt<'src>),
    Begin(BeginStmt<'src>),
    While(WhileStmt<'src>),
    If(IfStmt<'src>),
}

impl<'src> Stmt<'src> {
    pub fn var_decl(lexeme: &'src Lexeme, names: Vec<&'src Lexeme>) -> Self {
        trace!("built variable declaration of {} names at {}", names.len(), lexeme.position());
        Stmt::VarDecl(VarDecl { lexeme, names })
    }

    pub fn assign(
        lexeme: &'src Lexeme,
        target: Option<Box<Expr<'src>>>,
        value: Option<Box<Expr<'src>>>,
    ) -> AstResult<Self> {
        let line = lexeme.line();
        Ok(Stmt::Assign(AssignStmt {
            lexeme,
            target: target.required("assignment", "target", line)?,
            value: value.required("assignment", "value", line)?,
        }))
    }

    /// Fails on the first statement slot the parser left empty.
    pub fn begin(lexeme: &'src Lexeme, stmts: Vec<Option<Stmt<'src>>>) -> AstResult<Self> {
        let line = lexeme.line();
        let stmts = stmts
            .into_iter()
            .enumerate()
            .map(|(i, stmt)| stmt.required("block", &format!("statement {}", i), line))
            .collect::<AstResult<Vec<_>>>()?;
        trace!("built block of {} statements at {}", stmts.len(), lexeme.position());
        Ok(Stmt::Begin(BeginStmt { lexeme, stmts }))
    }

    pub fn while_loop(
        lexeme: &'src Lexeme,
        condition: Option<Box<Expr<'src>>>,
        body: Option<Box<Stmt<'src>>>,
    ) -> AstResult<Self> {
        let line = lexeme.line();
        Ok(Stmt::While(WhileStmt {
            lexeme,
            condition: condition.required("while loop", "condition", line)?,
            body: body.required("while loop", "body", line)?,
        }))
    }

    pub fn if_else(
        lexeme: &'src Lexeme,
        condition: Option<Box<Expr<'src>>>,
        then_branch: Option<Box<Stmt<'src>>>,
        else_branch: Option<Box<Stmt<'src>>>,
    ) -> AstResult<Self> {
        let line = lexeme.line();
        Ok(Stmt::If(IfStmt {
            lexeme,
            condition: condition.required("if statement", "condition", line)?,
            then_branch: then_branch.required("if statement", "then branch", line)?,
            else_branch,
        }))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Stmt::VarDecl(_) => "variable declaration",
            Stmt::Assign(_) => "assignment",
            Stmt::Begin(_) => "block",
            Stmt::While(_) => "while loop",
            Stmt::If(_) => "if statement",
        }
    }

    pub fn children(&self) -> Vec<NodeRef<'_, 'src>> {
        match self {
            Stmt::VarDecl(decl) => decl.names.iter().copied().map(NodeRef::Name).collect(),
            Stmt::Assign(assign) => vec![assign.target().into(), assign.value().into()],
            Stmt::Begin(block) => block.stmts.iter().map(NodeRef::from).collect(),
            Stmt::While(w) => vec![w.condition().into(), w.body().into()],
            Stmt::If(i) => {
                let mut children: Vec<NodeRef<'_, 'src>> =
                    vec![i.condition().into(), i.then_branch().into()];
                if let Some(else_branch) = i.else_branch() {
                    children.push(else_branch.into());
                }
                children
            }
        }
    }
}

impl<'src> SyntaxNode<'src> for Stmt<'src> {
    fn lexeme(&self) -> &'src Lexeme {
        match self {
            Stmt::VarDecl(decl) => decl.lexeme,
            Stmt::Assign(assign) => assign.lexeme,
            Stmt::Begin(block) => block.lexeme,
            Stmt::While(w) => w.lexeme,
            Stmt::If(i) => i.lexeme,
        }
    }

    fn as_node(&self) -> NodeRef<'_, 'src> {
        NodeRef::Stmt(self)
    }
}

impl fmt::Display for Stmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme().source())
    }
}
