//! Keeps tests/unit a mirror of src so every module has a test file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module declarations carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn mirrored_paths(root: &str) -> BTreeSet<String> {
        let root = Path::new(root);
        let mut paths = BTreeSet::new();
        if let Err(error) = collect(root, root, &mut paths) {
            assert!(!root.exists(), "Failed to scan {}: {error}", root.display());
        }
        paths.retain(|path| !is_exempt(path));
        paths
    }

    fn collect(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> Result<(), io::Error> {
        if !dir.is_dir() {
            return Ok(());
        }
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                collect(&path, base, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let tests = mirrored_paths(UNIT_DIR);
        let missing: Vec<String> = mirrored_paths(SRC_DIR)
            .into_iter()
            .filter(|path| !tests.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_source_file() {
        let sources = mirrored_paths(SRC_DIR);
        let orphaned: Vec<String> = mirrored_paths(UNIT_DIR)
            .into_iter()
            .filter(|path| !sources.contains(path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_declares_tests() {
        let mut empty = Vec::new();
        let mut pending = vec![Path::new("tests").to_path_buf()];

        while let Some(dir) = pending.pop() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                    continue;
                }
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                let is_module_file =
                    name == "mod.rs" || (dir == Path::new("tests") && name == "main.rs");
                if is_module_file || path.extension().is_none_or(|ext| ext != "rs") {
                    continue;
                }
                let content = fs::read_to_string(&path).unwrap_or_default();
                if !content.contains("#[test]") {
                    empty.push(format!("  - {}", path.display()));
                }
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
