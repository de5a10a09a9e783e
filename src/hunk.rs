use std::collections::VecDeque;

use crate::color::{ColorConfig, ColorRole};
use crate::model::{Chunk, Operation};

/// One line of a hunk body, stored without its trailing newline
#[derive(Debug, Clone, PartialEq, Eq)]
struct HunkLine {
    op: Operation,
    text: String,
    /// Set on the final line of a side whose content did not end in `\n`
    no_newline: bool,
}

impl HunkLine {
    fn write_into(&self, out: &mut String, colors: &ColorConfig) {
        let (sign, role) = match self.op {
            Operation::Equal => (' ', ColorRole::Context),
            Operation::Delete => ('-', ColorRole::Old),
            Operation::Add => ('+', ColorRole::New),
        };
        out.push_str(colors.prefix(role));
        out.push(sign);
        out.push_str(&self.text);
        if self.no_newline {
            out.push_str("\n\\ No newline at end of file");
        }
        out.push_str(colors.reset(role));
        out.push('\n');
    }
}

/// One `@@`-delimited block: leading context, changes, trailing context
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hunk {
    /// 1-based line where the hunk's shown region starts on the old side
    old_line: usize,
    /// 1-based line where the hunk's shown region starts on the new side
    new_line: usize,
    function_context: Option<String>,
    ops: Vec<HunkLine>,
}

impl Hunk {
    fn old_count(&self) -> usize {
        self.ops.iter().filter(|line| line.op != Operation::Add).count()
    }

    fn new_count(&self) -> usize {
        self.ops.iter().filter(|line| line.op != Operation::Delete).count()
    }

    pub(crate) fn write_into(&self, out: &mut String, colors: &ColorConfig) {
        out.push_str(colors.prefix(ColorRole::Frag));
        out.push_str("@@ ");
        push_range(out, '-', self.old_line, self.old_count());
        out.push(' ');
        push_range(out, '+', self.new_line, self.new_count());
        out.push_str(" @@");
        out.push_str(colors.reset(ColorRole::Frag));
        if let Some(context) = &self.function_context {
            out.push(' ');
            out.push_str(colors.prefix(ColorRole::Func));
            out.push_str(context);
            out.push_str(colors.reset(ColorRole::Func));
        }
        out.push('\n');

        for line in &self.ops {
            line.write_into(out, colors);
        }
    }
}

/// Render one side of a hunk range. A count of one omits the count; an
/// empty side points at the line before the gap.
fn push_range(out: &mut String, sign: char, line: usize, count: usize) {
    match count {
        0 => out.push_str(&format!("{}{},0", sign, line - 1)),
        1 => out.push_str(&format!("{}{}", sign, line)),
        n => out.push_str(&format!("{}{},{}", sign, line, n)),
    }
}

/// Builds the hunks of one file patch from its chunk run.
///
/// Walks the decomposed line stream keeping a rolling window of the last
/// `context` Equal lines. A change line opens a hunk seeded with that
/// window; a run of more than `2 * context` Equal lines inside a hunk
/// closes it, because the next change could no longer share context.
pub(crate) struct HunkBuilder {
    context: usize,
    /// Next line number on the old side, starting at 1
    old_ln: usize,
    /// Next line number on the new side, starting at 1
    new_ln: usize,
    pre_context: VecDeque<HunkLine>,
    /// Most recent Equal line pushed out of the window; becomes the
    /// function context of the next hunk
    last_evicted: Option<String>,
    /// Equal lines in the open hunk since its last change line
    trailing_equals: usize,
    current: Option<Hunk>,
    hunks: Vec<Hunk>,
}

impl HunkBuilder {
    pub(crate) fn new(context: usize) -> Self {
        HunkBuilder {
            context,
            old_ln: 1,
            new_ln: 1,
            pre_context: VecDeque::new(),
            last_evicted: None,
            trailing_equals: 0,
            current: None,
            hunks: Vec::new(),
        }
    }

    pub(crate) fn build<C: Chunk>(mut self, chunks: &[C]) -> Vec<Hunk> {
        for chunk in chunks {
            let op = chunk.operation();
            for (text, no_newline) in split_lines(chunk.content()) {
                let line = HunkLine { op, text, no_newline };
                match op {
                    Operation::Equal => self.equal_line(line),
                    Operation::Add | Operation::Delete => self.change_line(line),
                }
            }
        }
        self.finish()
    }

    fn equal_line(&mut self, line: HunkLine) {
        match self.current.as_mut() {
            Some(hunk) => {
                hunk.ops.push(line);
                self.trailing_equals += 1;
                if self.trailing_equals > 2 * self.context {
                    self.close_current();
                }
            }
            None => self.buffer_context(line),
        }
        self.old_ln += 1;
        self.new_ln += 1;
    }

    fn change_line(&mut self, line: HunkLine) {
        debug_assert_ne!(line.op, Operation::Equal);
        if self.current.is_none() {
            self.open_hunk();
        }
        if line.op == Operation::Delete {
            self.old_ln += 1;
        } else {
            self.new_ln += 1;
        }
        if let Some(hunk) = self.current.as_mut() {
            hunk.ops.push(line);
        }
        self.trailing_equals = 0;
    }

    /// Open a hunk at the current position, seeded with the buffered
    /// window. Equal lines advance both sides equally, so the start is
    /// the current counters minus the window length on both sides.
    fn open_hunk(&mut self) {
        let leading = self.pre_context.len();
        let function_context = self.last_evicted.clone().filter(|text| !text.is_empty());
        self.current = Some(Hunk {
            old_line: self.old_ln - leading,
            new_line: self.new_ln - leading,
            function_context,
            ops: self.pre_context.drain(..).collect(),
        });
        self.trailing_equals = 0;
    }

    /// The open hunk has collected `2 * context + 1` trailing Equal
    /// lines: keep the first `context` as trailing context, spill the
    /// rest back into the window and flush.
    fn close_current(&mut self) {
        let Some(mut hunk) = self.current.take() else {
            return;
        };
        let keep = hunk.ops.len() - (self.trailing_equals - self.context);
        let spilled: Vec<HunkLine> = hunk.ops.drain(keep..).collect();
        self.hunks.push(hunk);
        for line in spilled {
            self.buffer_context(line);
        }
        self.trailing_equals = 0;
    }

    fn buffer_context(&mut self, line: HunkLine) {
        self.pre_context.push_back(line);
        if self.pre_context.len() > self.context {
            if let Some(evicted) = self.pre_context.pop_front() {
                self.last_evicted = Some(evicted.text);
            }
        }
    }

    /// Flush the open hunk, trimming trailing context beyond the window
    fn finish(mut self) -> Vec<Hunk> {
        if let Some(mut hunk) = self.current.take() {
            if self.trailing_equals > self.context {
                let keep = hunk.ops.len() - (self.trailing_equals - self.context);
                hunk.ops.truncate(keep);
            }
            self.hunks.push(hunk);
        }
        self.hunks
    }
}

/// Split chunk content into logical lines. A terminating `\n` is
/// consumed; a non-empty final piece without one marks the line that
/// ends its side of the file without a newline.
fn split_lines(content: &str) -> Vec<(String, bool)> {
    content
        .split_inclusive('\n')
        .map(|piece| match piece.strip_suffix('\n') {
            Some(text) => (text.to_string(), false),
            None => (piece.to_string(), true),
        })
        .collect()
}
