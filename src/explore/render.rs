use std::io::{self, Write};
use std::path::Path;

use crate::models::DirTree;

/// Write the report: `root_path` on the first line, then one display line per
/// entry below the root.
pub fn write_dir_tree<W: Write>(
    writer: &mut W,
    root_path: &Path,
    tree: &DirTree,
) -> io::Result<()> {
    writer.write_all(root_path.to_string_lossy().as_bytes())?;
    writer.write_all(b"\n")?;

    for entry in tree.descendants() {
        writer.write_all(entry.display_line().as_bytes())?;
        writer.write_all(b"\n")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, FsEntry, TreeEntry};
    use std::path::PathBuf;

    fn entry(path: &str, kind: EntryKind, depth: usize) -> TreeEntry {
        let path = PathBuf::from(path);
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        TreeEntry::new(FsEntry { path, name, kind }, depth)
    }

    #[test]
    fn renders_root_path_then_indented_entries() {
        let tree = DirTree::new(vec![
            TreeEntry::root(Path::new("/home/me/R")),
            entry("/home/me/R/S", EntryKind::Directory, 1),
            entry("/home/me/R/S/b.log", EntryKind::File, 2),
            entry("/home/me/R/T", EntryKind::Directory, 1),
            entry("/home/me/R/a.txt", EntryKind::File, 1),
        ]);

        let mut out = Vec::new();
        write_dir_tree(&mut out, Path::new("/home/me/R"), &tree).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(
            out,
            concat!(
                "/home/me/R\n",
                "\t[DR] S\n",
                "\t\tb.log\n",
                "\t[DR] T\n",
                "\ta.txt\n",
            )
        );
    }

    #[test]
    fn root_only_tree_is_a_single_line() {
        let tree = DirTree::new(vec![TreeEntry::root(Path::new("/data"))]);

        let mut out = Vec::new();
        write_dir_tree(&mut out, Path::new("/data"), &tree).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "/data\n");
    }
}
