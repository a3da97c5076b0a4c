//! PNG export of a note's rendered content.
//!
//! Rasterization is delegated to an external command named by the
//! `KNOTES_RENDERER` environment variable. The command receives the prepared
//! LaTeX document on stdin and the target path as its single argument.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

const RENDERER_ENV: &str = "KNOTES_RENDERER";
const EXPORT_DIR_ENV: &str = "KNOTES_EXPORT_DIR";
const RENDERER_WAIT: Duration = Duration::from_secs(60);

/// How the editor renders content, which also shapes the exported document.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum ExportMode {
    /// Content is plain text, exported verbatim.
    Text,
    /// Each non-blank line is a display-math block.
    #[default]
    Math,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    NoRenderer,
    Failed(String),
}

/// Lowercases the title and collapses every non-alphanumeric char to `_`,
/// falling back to `note` for titles with no usable characters at all.
pub fn slugify(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if slug.chars().all(|ch| ch == '_') {
        "note".to_string()
    } else {
        slug
    }
}

pub fn export_file_name(title: &str) -> String {
    format!("{}.png", slugify(title))
}

/// Builds the document handed to the renderer. Math mode wraps each trimmed
/// non-empty line in a display block; blank lines become vertical gaps.
pub fn prepare_document(content: &str, mode: ExportMode) -> String {
    match mode {
        ExportMode::Text => content.to_string(),
        ExportMode::Math => {
            let mut doc = String::new();
            for line in content.lines() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    doc.push_str("\\vspace{1em}\n");
                } else {
                    doc.push_str("\\[\n");
                    doc.push_str(trimmed);
                    doc.push_str("\n\\]\n");
                }
            }
            doc
        }
    }
}

/// Where exported PNGs land: `KNOTES_EXPORT_DIR`, else `~/Downloads`, else
/// the current directory.
pub fn export_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(EXPORT_DIR_ENV) {
        let dir = PathBuf::from(dir);
        if !dir.as_os_str().is_empty() {
            return dir;
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join("Downloads");
    }

    #[cfg(target_os = "windows")]
    if let Some(profile) = std::env::var_os("USERPROFILE") {
        return PathBuf::from(profile).join("Downloads");
    }

    PathBuf::from(".")
}

/// Renders `content` to `<export_dir>/<slug>.png` and returns the written
/// path.
pub fn export_note(title: &str, content: &str, mode: ExportMode) -> Result<PathBuf, ExportError> {
    let renderer = std::env::var(RENDERER_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ExportError::NoRenderer)?;

    let dir = export_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|err| ExportError::Failed(format!("{}: {err}", dir.display())))?;
    let target = dir.join(export_file_name(title));

    let document = prepare_document(content, mode);
    run_renderer(&renderer, &target, &document)?;

    if !target.is_file() {
        return Err(ExportError::Failed(format!(
            "renderer produced no file at {}",
            target.display()
        )));
    }

    Ok(target)
}

fn run_renderer(
    renderer: &str,
    target: &std::path::Path,
    document: &str,
) -> Result<(), ExportError> {
    let mut parts = renderer.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| ExportError::Failed("renderer command is empty".to_string()))?;

    let mut child = Command::new(program)
        .args(parts)
        .arg(target)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| ExportError::Failed(format!("failed to start {program}: {err}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(document.as_bytes())
            .map_err(|err| ExportError::Failed(format!("failed to feed renderer: {err}")))?;
    }

    let output = wait_with_deadline(child)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim();
        return Err(ExportError::Failed(if detail.is_empty() {
            format!("renderer exited with {}", output.status)
        } else {
            detail.to_string()
        }));
    }

    Ok(())
}

fn wait_with_deadline(child: std::process::Child) -> Result<std::process::Output, ExportError> {
    // wait_with_output has no timeout; run it on a helper thread and give up
    // after RENDERER_WAIT so a hung renderer cannot block the worker forever.
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(child.wait_with_output());
    });

    match rx.recv_timeout(RENDERER_WAIT) {
        Ok(result) => {
            result.map_err(|err| ExportError::Failed(format!("renderer wait failed: {err}")))
        }
        Err(_) => Err(ExportError::Failed("renderer timed out".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_replaces() {
        assert_eq!(slugify("Integral Notes #3"), "integral_notes__3");
        assert_eq!(slugify("ALGEBRA"), "algebra");
    }

    #[test]
    fn slugify_falls_back_for_unusable_titles() {
        assert_eq!(slugify(""), "note");
        assert_eq!(slugify("!!!"), "note");
        assert_eq!(slugify("数学"), "note");
    }

    #[test]
    fn file_name_appends_png() {
        assert_eq!(export_file_name("My Note"), "my_note.png");
    }

    #[test]
    fn text_mode_is_verbatim() {
        let content = "line one\n\nline two";
        assert_eq!(prepare_document(content, ExportMode::Text), content);
    }

    #[test]
    fn math_mode_wraps_each_nonblank_line() {
        let doc = prepare_document("\\frac{a}{b}\n\n  x^2  ", ExportMode::Math);
        assert_eq!(
            doc,
            "\\[\n\\frac{a}{b}\n\\]\n\\vspace{1em}\n\\[\nx^2\n\\]\n"
        );
    }
}
