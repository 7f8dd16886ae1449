#[cfg(test)]
pub mod fixtures {
    use crate::types::FileList;
    use std::fs;
    use tempfile::TempDir;

    /// Create a temporary directory holding one file per relative path.
    pub fn create_tree(paths: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for path in paths {
            let file = dir.path().join(path);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&file, format!("// {}\n", path)).unwrap();
        }
        dir
    }

    pub fn test_classes() -> FileList {
        FileList::from(
            &[
                "com/example/FooTest.java",
                "com/example/sub/BarTest.java",
                "RootTest.java",
            ][..],
        )
    }
}
