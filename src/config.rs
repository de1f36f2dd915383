use std::fmt;

// Tree drawing constants. Output is compared byte for byte, do not touch.
pub mod tree {
    pub const BRANCH: &str = "├──── ";
    pub const LAST_BRANCH: &str = "└──── ";
    pub const BAR: &str = "│";

    // Width of one indentation step, in characters
    pub const PAD_WIDTH: usize = 6;

    /// Indent extension below a child that has later siblings.
    pub fn continued(indent: &str) -> String {
        format!("{}{:<width$}", indent, BAR, width = PAD_WIDTH)
    }

    /// Indent extension below the last child.
    pub fn closed(indent: &str) -> String {
        format!("{}{:<width$}", indent, "", width = PAD_WIDTH)
    }
}

/// Which statements get a render rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderStyle {
    /// Only expressions and `while` loops are drawn; other statements are blank.
    #[default]
    Reference,
    /// Every node is drawn, statements fan out over all of their children.
    Uniform,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Reference => f.write_str("reference"),
            RenderStyle::Uniform => f.write_str("uniform"),
        }
    }
}
