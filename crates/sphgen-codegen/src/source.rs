//! Indentation-tracked source buffer.
//!
//! Accumulates ordered text blocks with an explicit nesting level and
//! renders them with a fixed per-level indent unit. The emitter brackets
//! each nested construct with [`indent`]/[`dedent`], which guarantees
//! syntactically valid nesting regardless of which fragments are
//! concatenated.
//!
//! [`indent`]: SourceCode::indent
//! [`dedent`]: SourceCode::dedent

/// Indent unit per nesting level
const INDENT: &str = "    ";

/// Ordered text blocks, each recorded at an explicit nesting level.
#[derive(Debug, Default)]
pub struct SourceCode {
    blocks: Vec<(String, usize)>,
    level: usize,
}

impl SourceCode {
    /// Empty buffer at nesting level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase the nesting level for subsequent blocks.
    pub fn indent(&mut self) {
        self.level += 1;
    }

    /// Decrease the nesting level for subsequent blocks.
    pub fn dedent(&mut self) {
        self.level -= 1;
    }

    /// Record a block at the current nesting level.
    pub fn push(&mut self, code: impl Into<String>) {
        self.blocks.push((code.into(), self.level));
    }

    /// Render every recorded block at its recorded level.
    ///
    /// Rendering does not consume or mutate the buffer: repeated renders
    /// of the same recorded blocks are byte-identical.
    pub fn render(&self) -> String {
        let rendered: Vec<String> = self
            .blocks
            .iter()
            .map(|(code, level)| indent_block(code, *level))
            .collect();
        rendered.join("\n")
    }
}

/// Prefix every line of `code` with `level` indent units.
fn indent_block(code: &str, level: usize) -> String {
    let pad = INDENT.repeat(level);
    let lines: Vec<String> = code.lines().map(|line| format!("{pad}{line}")).collect();
    lines.join("\n")
}
