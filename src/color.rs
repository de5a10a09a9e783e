/// ANSI escape sequences used by git's diff output
pub mod ansi {
    pub const RESET: &str = "\x1b[m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const REVERSE: &str = "\x1b[7m";
}

/// Semantic role of a span of diff output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// File header block, `diff --git` through the last `+++`
    Meta,
    /// The `@@ ... @@` range of a hunk header
    Frag,
    /// Function context after the closing `@@`
    Func,
    /// Deleted lines
    Old,
    /// Added lines
    New,
    /// Unchanged context lines
    Context,
}

const ROLES: usize = 6;

fn slot(role: ColorRole) -> usize {
    match role {
        ColorRole::Meta => 0,
        ColorRole::Frag => 1,
        ColorRole::Func => 2,
        ColorRole::Old => 3,
        ColorRole::New => 4,
        ColorRole::Context => 5,
    }
}

/// Mapping from semantic role to ANSI escape sequence.
///
/// The default mapping leaves every role empty, which produces plain
/// output: an empty role emits neither its escape nor a reset, so
/// colouring never changes the non-escape bytes of a diff.
#[derive(Debug, Clone, Default)]
pub struct ColorConfig {
    escapes: [String; ROLES],
}

impl ColorConfig {
    /// Uncoloured output; every role maps to the empty escape
    pub fn plain() -> Self {
        Self::default()
    }

    /// Git's default diff colours: bold headers, cyan hunk ranges, red
    /// deletions, green additions
    pub fn colored() -> Self {
        Self::default()
            .with(ColorRole::Meta, ansi::BOLD)
            .with(ColorRole::Frag, ansi::CYAN)
            .with(ColorRole::Old, ansi::RED)
            .with(ColorRole::New, ansi::GREEN)
    }

    /// Override the escape for a single role
    pub fn with(mut self, role: ColorRole, escape: impl Into<String>) -> Self {
        self.escapes[slot(role)] = escape.into();
        self
    }

    /// Escape written before a span of the given role
    pub fn prefix(&self, role: ColorRole) -> &str {
        &self.escapes[slot(role)]
    }

    /// Reset written after a span of the given role; empty when the role
    /// itself is empty
    pub fn reset(&self, role: ColorRole) -> &'static str {
        if self.escapes[slot(role)].is_empty() {
            ""
        } else {
            ansi::RESET
        }
    }
}
