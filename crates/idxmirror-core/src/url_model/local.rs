//! Local mirror path for a listing entry.

use std::path::{Path, PathBuf};

/// Joins `href` onto the local directory `dir`.
///
/// Empty and `.` segments are dropped and a leading `/` is ignored. Returns
/// `None` when the href has no name segment or contains a `..` segment, since
/// such an entry would land on or outside the mirror directory.
pub fn local_child_path(dir: &Path, href: &str) -> Option<PathBuf> {
    let mut out = dir.to_path_buf();
    let mut named = false;
    for seg in href.split('/') {
        match seg {
            "" | "." => {}
            ".." => return None,
            s => {
                out.push(s);
                named = true;
            }
        }
    }
    named.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_href_drops_trailing_slash() {
        assert_eq!(
            local_child_path(Path::new("/data/malware"), "CTU-1/"),
            Some(PathBuf::from("/data/malware/CTU-1"))
        );
    }

    #[test]
    fn file_href() {
        assert_eq!(
            local_child_path(Path::new("out"), "README.md"),
            Some(PathBuf::from("out/README.md"))
        );
    }

    #[test]
    fn nested_and_absolute_href() {
        assert_eq!(
            local_child_path(Path::new("out"), "/a/./b/"),
            Some(PathBuf::from("out/a/b"))
        );
    }

    #[test]
    fn parent_or_empty_rejected() {
        assert_eq!(local_child_path(Path::new("out"), "../etc/passwd"), None);
        assert_eq!(local_child_path(Path::new("out"), "a/../../b"), None);
        assert_eq!(local_child_path(Path::new("out"), "/"), None);
        assert_eq!(local_child_path(Path::new("out"), "./"), None);
    }
}
