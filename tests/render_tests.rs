use std::io::{self, Write};

use pastree::ast::{Expr, Stmt, SyntaxNode};
use pastree::errors::{AstError, AstResult};
use pastree::render::{ends_open, render_to_string};
use pastree::samples::Sample;
use pastree::token::Lexeme;
use pastree::RenderStyle;

fn render_sample(sample: Sample, style: RenderStyle) -> AstResult<String> {
    let tokens = sample.tokens();
    let tree = sample.build(&tokens)?;
    render_to_string(tree.as_ref(), style)
}

fn num(lexeme: &Lexeme) -> Option<Box<Expr<'_>>> {
    Some(Box::new(Expr::number(lexeme)))
}

fn ident(lexeme: &Lexeme) -> Option<Box<Expr<'_>>> {
    Some(Box::new(Expr::ident(lexeme)))
}

const LOOP_HEAD: &str = concat!(
    "while\n",
    "├──── <\n",
    "│     ├──── i\n",
    "│     └──── 10\n",
    "└──── ",
);

#[test]
fn test_leaf_ignores_depth_and_indent() -> AstResult<()> {
    let seven = Lexeme::integer("07", 7, 1, 1);
    let name = Lexeme::identifier("x", 1, 4);

    let mut out = Vec::new();
    Expr::number(&seven).render(&mut out, 3, "│     │     ")?;
    Expr::ident(&name).render(&mut out, 1, "      ")?;
    assert_eq!(String::from_utf8(out).unwrap(), "7\nx\n");
    Ok(())
}

#[test]
fn test_sum_renders_three_lines() -> AstResult<()> {
    let expected = concat!(
        "+\n",
        "├──── 1\n",
        "└──── 2\n",
    );
    assert_eq!(render_sample(Sample::Sum, RenderStyle::Reference)?, expected);
    assert_eq!(render_sample(Sample::Sum, RenderStyle::Uniform)?, expected);
    Ok(())
}

#[test]
fn test_nested_operator_is_indented_below_its_branch() -> AstResult<()> {
    let expected = concat!(
        "*\n",
        "├──── +\n",
        "│     ├──── 1\n",
        "│     └──── 2\n",
        "└──── 3\n",
    );
    assert_eq!(render_sample(Sample::Nested, RenderStyle::Reference)?, expected);
    Ok(())
}

#[test]
fn test_right_nested_operator_gets_blank_padding() -> AstResult<()> {
    let one = Lexeme::integer("1", 1, 1, 1);
    let minus = Lexeme::operator("-", 1, 3);
    let a = Lexeme::identifier("a", 1, 5);
    let less = Lexeme::operator("<", 1, 7);
    let b = Lexeme::identifier("b", 1, 9);

    let cmp = Expr::rel_op(&less, ident(&a), ident(&b))?;
    let tree = Expr::bin_op(&minus, num(&one), Some(Box::new(cmp)))?;
    let expected = concat!(
        "-\n",
        "├──── 1\n",
        "└──── <\n",
        "      ├──── a\n",
        "      └──── b\n",
    );
    assert_eq!(render_to_string(&tree, RenderStyle::Reference)?, expected);
    Ok(())
}

#[test]
fn test_subtree_uses_the_callers_indent() -> AstResult<()> {
    let tokens = Sample::Sum.tokens();
    let tree = Sample::Sum.build(&tokens)?;

    let mut out = Vec::new();
    tree.render(&mut out, 2, "ab")?;
    assert_eq!(String::from_utf8(out).unwrap(), "+\nab├──── 1\nab└──── 2\n");
    Ok(())
}

#[test]
fn test_loop_body_is_blank_in_reference_style() -> AstResult<()> {
    assert_eq!(render_sample(Sample::Loop, RenderStyle::Reference)?, LOOP_HEAD);
    Ok(())
}

#[test]
fn test_loop_body_is_drawn_in_uniform_style() -> AstResult<()> {
    let expected = [
        LOOP_HEAD,
        "begin\n",
        "      └──── :=\n",
        "            ├──── i\n",
        "            └──── +\n",
        "                  ├──── i\n",
        "                  └──── 1\n",
    ]
    .concat();
    assert_eq!(render_sample(Sample::Loop, RenderStyle::Uniform)?, expected);
    Ok(())
}

#[test]
fn test_blank_statements_write_nothing() -> AstResult<()> {
    let tokens = Sample::Program.tokens();
    let decl = Stmt::var_decl(&tokens[5], vec![&tokens[1], &tokens[3]]);
    let assign = Stmt::assign(&tokens[9], ident(&tokens[8]), num(&tokens[10]))?;
    let block = Stmt::begin(&tokens[7], vec![Some(assign.clone())])?;
    let choose = Stmt::if_else(
        &tokens[22],
        Some(Box::new(Expr::rel_op(&tokens[24], ident(&tokens[23]), num(&tokens[25]))?)),
        Some(Box::new(assign.clone())),
        None,
    )?;

    for stmt in [&decl, &assign, &block, &choose] {
        let mut out = Vec::new();
        stmt.render(&mut out, 0, "")?;
        assert!(out.is_empty(), "{} wrote {:?}", stmt.kind(), out);
    }
    assert_eq!(render_sample(Sample::Program, RenderStyle::Reference)?, "");
    Ok(())
}

#[test]
fn test_program_in_uniform_style() -> AstResult<()> {
    let expected = concat!(
        "begin\n",
        "├──── integer\n",
        "│     ├──── i\n",
        "│     └──── sum\n",
        "├──── :=\n",
        "│     ├──── sum\n",
        "│     └──── 0\n",
        "├──── :=\n",
        "│     ├──── i\n",
        "│     └──── 1\n",
        "└──── while\n",
        "      ├──── <=\n",
        "      │     ├──── i\n",
        "      │     └──── 10\n",
        "      └──── begin\n",
        "            ├──── if\n",
        "            │     ├──── >\n",
        "            │     │     ├──── i\n",
        "            │     │     └──── 5\n",
        "            │     ├──── :=\n",
        "            │     │     ├──── sum\n",
        "            │     │     └──── +\n",
        "            │     │           ├──── sum\n",
        "            │     │           └──── i\n",
        "            │     └──── :=\n",
        "            │           ├──── sum\n",
        "            │           └──── -\n",
        "            │                 ├──── sum\n",
        "            │                 └──── i\n",
        "            └──── :=\n",
        "                  ├──── i\n",
        "                  └──── +\n",
        "                        ├──── i\n",
        "                        └──── 1\n",
    );
    assert_eq!(render_sample(Sample::Program, RenderStyle::Uniform)?, expected);
    Ok(())
}

#[test]
fn test_if_without_else_closes_on_then_branch() -> AstResult<()> {
    let tokens = Sample::Program.tokens();
    let choose = Stmt::if_else(
        &tokens[22],
        Some(Box::new(Expr::rel_op(&tokens[24], ident(&tokens[23]), num(&tokens[25]))?)),
        Some(Box::new(Stmt::assign(&tokens[28], ident(&tokens[27]), num(&tokens[25]))?)),
        None,
    )?;
    let expected = concat!(
        "if\n",
        "├──── >\n",
        "│     ├──── i\n",
        "│     └──── 5\n",
        "└──── :=\n",
        "      ├──── sum\n",
        "      └──── 5\n",
    );
    assert_eq!(render_to_string(&choose, RenderStyle::Uniform)?, expected);
    Ok(())
}

#[test]
fn test_empty_block_is_a_single_line() -> AstResult<()> {
    let tokens = Sample::Program.tokens();
    let block = Stmt::begin(&tokens[7], vec![])?;
    assert_eq!(render_to_string(&block, RenderStyle::Uniform)?, "begin\n");
    Ok(())
}

#[test]
fn test_rendering_is_repeatable() -> AstResult<()> {
    let tokens = Sample::Program.tokens();
    let tree = Sample::Program.build(&tokens)?;
    for style in [RenderStyle::Reference, RenderStyle::Uniform] {
        let first = render_to_string(tree.as_ref(), style)?;
        let second = render_to_string(tree.as_ref(), style)?;
        assert_eq!(first, second);
    }
    Ok(())
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_is_reported() -> AstResult<()> {
    let tokens = Sample::Nested.tokens();
    let tree = Sample::Nested.build(&tokens)?;

    let err = tree.render(&mut BrokenSink, 0, "").unwrap_err();
    assert!(matches!(&err, AstError::IoError(e) if e.kind() == io::ErrorKind::BrokenPipe));
    Ok(())
}

#[test]
fn test_only_trees_ending_in_a_blank_statement_are_left_open() -> AstResult<()> {
    // The loop body is a blank block: the output stops right after its marker.
    let looped = render_sample(Sample::Loop, RenderStyle::Reference)?;
    assert!(looped.ends_with("└──── "));
    assert!(ends_open(&looped));

    for sample in Sample::ALL {
        let uniform = render_sample(sample, RenderStyle::Uniform)?;
        assert!(!ends_open(&uniform), "{:?} in uniform style", sample);
    }
    assert!(!ends_open(&render_sample(Sample::Sum, RenderStyle::Reference)?));
    assert!(!ends_open(""));
    Ok(())
}
