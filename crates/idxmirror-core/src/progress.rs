//! Tree-shaped progress output, one line per visited directory or file.
//!
//! ```text
//! data/malware
//! ├── CTU-Malware-Capture-Botnet-1
//!     └── capture.pcap
//! ```
//!
//! Purely cosmetic: write errors on the progress stream are ignored.

use std::io::Write;
use std::path::Path;

const INDENT: &str = "    ";
const BRANCH: &str = "├── ";
const LEAF: &str = "└── ";

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Line for a directory: the full local path at depth 0, a branch glyph below.
pub fn directory_line(path: &Path, depth: usize) -> String {
    if depth == 0 {
        path.display().to_string()
    } else {
        format!("{}{}{}", INDENT.repeat(depth - 1), BRANCH, display_name(path))
    }
}

/// Line for a file listed by the directory at `depth`.
pub fn file_line(path: &Path, depth: usize) -> String {
    format!("{}{}{}", INDENT.repeat(depth), LEAF, display_name(path))
}

pub struct TreePrinter<W: Write> {
    out: W,
}

impl<W: Write> TreePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn directory(&mut self, path: &Path, depth: usize) {
        let line = directory_line(path, depth);
        self.emit(&line);
    }

    pub fn file(&mut self, path: &Path, depth: usize) {
        let line = file_line(path, depth);
        self.emit(&line);
    }

    fn emit(&mut self, line: &str) {
        let _ = writeln!(self.out, "{line}");
        let _ = self.out.flush();
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
