use std::fmt;

/// Lexical category assigned by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Integer,
    Real,
    Identifier,
    Keyword,
    Operator,
    Separator,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Parsed payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum LexemeValue {
    Integer(i64),
    Real(f64),
    Name(String),
    None,
}

impl fmt::Display for LexemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexemeValue::Integer(n) => write!(f, "{}", n),
            LexemeValue::Real(r) => write!(f, "{}", r),
            LexemeValue::Name(name) => f.write_str(name),
            LexemeValue::None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token as handed over by the scanner. Syntax nodes borrow it, they never
/// own it.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    source: String,
    value: LexemeValue,
    category: Category,
    position: Position,
}

impl Lexeme {
    pub fn new(
        source: impl Into<String>,
        value: LexemeValue,
        category: Category,
        position: Position,
    ) -> Self {
        Self {
            source: source.into(),
            value,
            category,
            position,
        }
    }

    /// Integer literal whose value is parsed from `source` by the scanner.
    pub fn integer(source: impl Into<String>, value: i64, line: usize, column: usize) -> Self {
        Self::new(
            source,
            LexemeValue::Integer(value),
            Category::Integer,
            Position { line, column },
        )
    }

    pub fn identifier(name: &str, line: usize, column: usize) -> Self {
        Self::new(
            name,
            LexemeValue::Name(name.to_string()),
            Category::Identifier,
            Position { line, column },
        )
    }

    pub fn keyword(source: &str, line: usize, column: usize) -> Self {
        Self::new(
            source,
            LexemeValue::None,
            Category::Keyword,
            Position { line, column },
        )
    }

    pub fn operator(source: &str, line: usize, column: usize) -> Self {
        Self::new(
            source,
            LexemeValue::None,
            Category::Operator,
            Position { line, column },
        )
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn value(&self) -> &LexemeValue {
        &self.value
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line(&self) -> usize {
        self.position.line
    }
}
