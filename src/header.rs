use crate::model::{File, FilePatch, ObjectId};

/// Compute the header block for one file patch: the `diff --git` line
/// through the `---`/`+++` markers or the binary sentinel. Returns no
/// lines when both sides are absent.
///
/// For a patch with both sides present, everything past the mode and
/// rename lines is gated on the content actually differing; a pure mode
/// change or rename emits neither an index line nor markers.
pub(crate) fn header_lines<F: FilePatch>(
    patch: &F,
    src_prefix: &str,
    dst_prefix: &str,
) -> Vec<String> {
    let mut lines = Vec::new();

    match patch.files() {
        (None, None) => {}
        (Some(from), Some(to)) => {
            lines.push(format!(
                "diff --git {}{} {}{}",
                src_prefix,
                from.path(),
                dst_prefix,
                to.path()
            ));
            if from.mode() != to.mode() {
                lines.push(format!("old mode {}", from.mode()));
                lines.push(format!("new mode {}", to.mode()));
            }
            if from.path() != to.path() {
                lines.push(format!("rename from {}", from.path()));
                lines.push(format!("rename to {}", to.path()));
            }
            if from.hash() != to.hash() {
                if from.mode() != to.mode() {
                    lines.push(format!("index {}..{}", from.hash(), to.hash()));
                } else {
                    lines.push(format!(
                        "index {}..{} {}",
                        from.hash(),
                        to.hash(),
                        from.mode()
                    ));
                }
                push_marker_lines(
                    &mut lines,
                    &format!("{}{}", src_prefix, from.path()),
                    &format!("{}{}", dst_prefix, to.path()),
                    patch.is_binary(),
                );
            }
        }
        (None, Some(to)) => {
            lines.push(format!(
                "diff --git {}{} {}{}",
                src_prefix,
                to.path(),
                dst_prefix,
                to.path()
            ));
            lines.push(format!("new file mode {}", to.mode()));
            lines.push(format!("index {}..{}", ObjectId::ZERO, to.hash()));
            push_marker_lines(
                &mut lines,
                "/dev/null",
                &format!("{}{}", dst_prefix, to.path()),
                patch.is_binary(),
            );
        }
        (Some(from), None) => {
            lines.push(format!(
                "diff --git {}{} {}{}",
                src_prefix,
                from.path(),
                dst_prefix,
                from.path()
            ));
            lines.push(format!("deleted file mode {}", from.mode()));
            lines.push(format!("index {}..{}", from.hash(), ObjectId::ZERO));
            push_marker_lines(
                &mut lines,
                &format!("{}{}", src_prefix, from.path()),
                "/dev/null",
                patch.is_binary(),
            );
        }
    }

    lines
}

/// The source/dest marker pair, or the binary sentinel in its place
fn push_marker_lines(lines: &mut Vec<String>, from_label: &str, to_label: &str, is_binary: bool) {
    if is_binary {
        lines.push(format!("Binary files {} and {} differ", from_label, to_label));
    } else {
        lines.push(format!("--- {}", from_label));
        lines.push(format!("+++ {}", to_label));
    }
}
