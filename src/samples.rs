//! Hand-built trees used by the command line and the tests.
//!
//! The sources are written with a blank between every token so that
//! [`split_tokens`] can stand in for the real scanner.

use crate::ast::{Expr, Stmt, SyntaxNode};
use crate::errors::{AstError, AstResult};
use crate::token::{Category, Lexeme, LexemeValue, Position};

const KEYWORDS: &[&str] = &[
    "var", "integer", "begin", "end", "if", "then", "else", "while", "do",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Sample {
    /// `1 + 2`
    Sum,
    /// `( 1 + 2 ) * 3`
    Nested,
    /// `while i < 10 do begin i := i + 1 end`
    Loop,
    /// A declaration, assignments, a loop and an if/else inside one block.
    Program,
}

impl Sample {
    pub const ALL: [Sample; 4] = [Sample::Sum, Sample::Nested, Sample::Loop, Sample::Program];

    pub fn source(self) -> &'static str {
        match self {
            Sample::Sum => "1 + 2",
            Sample::Nested => "( 1 + 2 ) * 3",
            Sample::Loop => "while i < 10 do\nbegin i := i + 1 end",
            Sample::Program => concat!(
                "var i , sum : integer ;\n",
                "begin sum := 0 ; i := 1 ;\n",
                "while i <= 10 do\n",
                "begin if i > 5 then sum := sum + i else sum := sum - i ;\n",
                "i := i + 1 end end",
            ),
        }
    }

    pub fn tokens(self) -> Vec<Lexeme> {
        split_tokens(self.source())
    }

    /// Builds the tree the parser would produce for `tokens`, which must be
    /// this sample's own tokens.
    pub fn build<'src>(self, t: &'src [Lexeme]) -> AstResult<Box<dyn SyntaxNode<'src> + 'src>> {
        self.check_tokens(t)?;
        let tree: Box<dyn SyntaxNode<'src> + 'src> = match self {
            Sample::Sum => Box::new(Expr::bin_op(&t[1], num(&t[0]), num(&t[2]))?),
            Sample::Nested => {
                let sum = Expr::bin_op(&t[2], num(&t[1]), num(&t[3]))?;
                Box::new(Expr::bin_op(&t[5], Some(Box::new(sum)), num(&t[6]))?)
            }
            Sample::Loop => {
                let cond = Expr::rel_op(&t[2], ident(&t[1]), num(&t[3]))?;
                let incr = Expr::bin_op(&t[9], ident(&t[8]), num(&t[10]))?;
                let body = Stmt::begin(
                    &t[5],
                    vec![Some(Stmt::assign(&t[7], ident(&t[6]), Some(Box::new(incr)))?)],
                )?;
                Box::new(Stmt::while_loop(
                    &t[0],
                    Some(Box::new(cond)),
                    Some(Box::new(body)),
                )?)
            }
            Sample::Program => Box::new(program(t)?),
        };
        Ok(tree)
    }

    // Every index used by `build` is in range once this passes.
    fn check_tokens(self, t: &[Lexeme]) -> AstResult<()> {
        let own = self.tokens();
        let mismatch = |expected: String, found: String| AstError::SampleMismatch {
            sample: format!("{:?}", self).to_lowercase(),
            expected,
            found,
        };
        if own.len() != t.len() {
            return Err(mismatch(
                format!("{} tokens", own.len()),
                format!("{} tokens", t.len()),
            ));
        }
        match own.iter().zip(t).find(|(a, b)| a.source() != b.source()) {
            Some((a, b)) => Err(mismatch(
                format!("'{}'", a.source()),
                format!("'{}' at {}", b.source(), b.position()),
            )),
            None => Ok(()),
        }
    }
}

fn num(lexeme: &Lexeme) -> Option<Box<Expr<'_>>> {
    Some(Box::new(Expr::number(lexeme)))
}

fn ident(lexeme: &Lexeme) -> Option<Box<Expr<'_>>> {
    Some(Box::new(Expr::ident(lexeme)))
}

fn program(t: &[Lexeme]) -> AstResult<Stmt<'_>> {
    let decl = Stmt::var_decl(&t[5], vec![&t[1], &t[3]]);
    let init_sum = Stmt::assign(&t[9], ident(&t[8]), num(&t[10]))?;
    let init_i = Stmt::assign(&t[13], ident(&t[12]), num(&t[14]))?;

    let add = Expr::bin_op(&t[30], ident(&t[29]), ident(&t[31]))?;
    let sub = Expr::bin_op(&t[36], ident(&t[35]), ident(&t[37]))?;
    let choose = Stmt::if_else(
        &t[22],
        Some(Box::new(Expr::rel_op(&t[24], ident(&t[23]), num(&t[25]))?)),
        Some(Box::new(Stmt::assign(&t[28], ident(&t[27]), Some(Box::new(add)))?)),
        Some(Box::new(Stmt::assign(&t[34], ident(&t[33]), Some(Box::new(sub)))?)),
    )?;
    let step = Stmt::assign(
        &t[40],
        ident(&t[39]),
        Some(Box::new(Expr::bin_op(&t[42], ident(&t[41]), num(&t[43]))?)),
    )?;
    let body = Stmt::begin(&t[21], vec![Some(choose), Some(step)])?;
    let cond = Expr::rel_op(&t[18], ident(&t[17]), num(&t[19]))?;
    let looped = Stmt::while_loop(&t[16], Some(Box::new(cond)), Some(Box::new(body)))?;

    Stmt::begin(
        &t[7],
        vec![Some(decl), Some(init_sum), Some(init_i), Some(looped)],
    )
}

/// Splits blank-separated source into lexemes with 1-based positions.
pub fn split_tokens(source: &str) -> Vec<Lexeme> {
    let mut tokens = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let mut column = 1;
        for word in line.split(' ') {
            if !word.is_empty() {
                tokens.push(classify(word, Position { line: index + 1, column }));
            }
            column += word.chars().count() + 1;
        }
    }
    tokens
}

fn classify(word: &str, position: Position) -> Lexeme {
    let (value, category) = if let Ok(n) = word.parse::<i64>() {
        (LexemeValue::Integer(n), Category::Integer)
    } else if KEYWORDS.contains(&word) {
        (LexemeValue::None, Category::Keyword)
    } else if word.starts_with(|c: char| c.is_alphabetic()) {
        (LexemeValue::Name(word.to_string()), Category::Identifier)
    } else if matches!(word, "(" | ")" | "," | ";" | ":") {
        (LexemeValue::None, Category::Separator)
    } else {
        (LexemeValue::None, Category::Operator)
    };
    Lexeme::new(word, value, category, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderStyle;

    #[test]
    fn split_tokens_tracks_lines_and_columns() {
        let tokens = split_tokens("while i < 10 do\nbegin i := i + 1 end");
        assert_eq!(tokens.len(), 12);
        assert_eq!(tokens[0].category(), Category::Keyword);
        assert_eq!(tokens[2].position(), Position { line: 1, column: 9 });
        assert_eq!(tokens[3].value(), &LexemeValue::Integer(10));
        assert_eq!(tokens[7].source(), ":=");
        assert_eq!(tokens[7].position(), Position { line: 2, column: 9 });
    }

    #[test]
    fn program_tokens_line_up_with_builder() {
        let tokens = Sample::Program.tokens();
        assert_eq!(tokens.len(), 46);
        let anchors = [(5, "integer"), (7, "begin"), (16, "while"), (22, "if"), (32, "else")];
        for (index, source) in anchors {
            assert_eq!(tokens[index].source(), source);
        }
    }

    #[test]
    fn foreign_tokens_are_rejected() {
        let sum = Sample::Sum.tokens();
        let err = Sample::Program.build(&sum).err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("tokens do not match the program sample: expected 46 tokens, found 3 tokens")
        );

        let renamed = split_tokens("1 - 2");
        let err = Sample::Sum.build(&renamed).err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("tokens do not match the sum sample: expected '+', found '-' at 1:3")
        );
    }

    #[test]
    fn every_sample_builds() -> AstResult<()> {
        for sample in Sample::ALL {
            let tokens = sample.tokens();
            let tree = sample.build(&tokens)?;
            assert!(tree.has_children_with(RenderStyle::Uniform));
        }
        Ok(())
    }
}
