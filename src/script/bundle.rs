//! Named script resources
use log::debug;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Directory in which script resources are looked up by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bundle {
    root: PathBuf,
}

impl Bundle {
    /// Resources stored under `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Bundle {
        Bundle { root: root.into() }
    }

    /// Directory of the running executable
    pub fn main() -> Option<Bundle> {
        let exe = env::current_exe().ok()?;
        exe.parent().map(Bundle::new)
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the resource file `name`.
    ///
    /// With an `extension` (leading `.` optional), the file is `name.extension`.
    /// Without, `name` itself if it is a file, else the first file, by file
    /// name order, whose stem is `name`.
    ///
    /// Return `None` when there is no matching file, or when the file name
    /// is not a single plain path component (no separator, `..` or root).
    pub fn path_for_resource(&self, name: &str, extension: Option<&str>) -> Option<PathBuf> {
        let extension = extension
            .map(|ext| ext.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty());
        let found = match extension {
            _ if !is_file_name(name) => None,
            Some(ext) => {
                let file_name = format!("{name}.{ext}");
                let path = self.root.join(&file_name);
                (is_file_name(&file_name) && path.is_file()).then_some(path)
            }
            None => self.find_by_stem(name),
        };
        debug!(
            target: "bundle",
            "resource {name:?} ({extension:?}) in {}: {found:?}",
            self.root.display()
        );
        found
    }

    fn find_by_stem(&self, name: &str) -> Option<PathBuf> {
        let exact = self.root.join(name);
        if exact.is_file() {
            return Some(exact);
        }
        let mut candidates: Vec<PathBuf> = fs::read_dir(&self.root)
            .ok()?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.file_stem().is_some_and(|stem| stem == name) && path.is_file())
            .collect();
        candidates.sort();
        candidates.into_iter().next()
    }
}

fn is_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::Bundle;
    use std::fs;

    #[test]
    fn lookup() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("schema.sql"), "SELECT 1;").unwrap();
        fs::write(dir.path().join("schema.txt"), "SELECT 2;").unwrap();
        fs::write(dir.path().join("seed"), "SELECT 3;").unwrap();
        fs::create_dir(dir.path().join("data.sql")).unwrap();
        let bundle = Bundle::new(dir.path());

        assert_eq!(
            bundle.path_for_resource("schema", Some("sql")),
            Some(dir.path().join("schema.sql"))
        );
        assert_eq!(
            bundle.path_for_resource("schema", Some(".txt")),
            Some(dir.path().join("schema.txt"))
        );
        assert_eq!(
            bundle.path_for_resource("schema", None),
            Some(dir.path().join("schema.sql"))
        );
        assert_eq!(
            bundle.path_for_resource("schema", Some("")),
            Some(dir.path().join("schema.sql"))
        );
        assert_eq!(bundle.path_for_resource("seed", None), Some(dir.path().join("seed")));
        assert_eq!(
            bundle.path_for_resource("schema.sql", None),
            Some(dir.path().join("schema.sql"))
        );
        assert_eq!(bundle.path_for_resource("schema", Some("csv")), None);
        assert_eq!(bundle.path_for_resource("data", Some("sql")), None);
        assert_eq!(bundle.path_for_resource("data", None), None);
        assert_eq!(bundle.path_for_resource("missing", None), None);
    }

    #[test]
    fn outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("bundle");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(dir.path().join("secrets.sql"), "SELECT 1;").unwrap();
        fs::write(root.join("sub").join("nested.sql"), "SELECT 2;").unwrap();
        let bundle = Bundle::new(&root);

        assert_eq!(bundle.path_for_resource("../secrets", Some("sql")), None);
        assert_eq!(bundle.path_for_resource("../secrets.sql", None), None);
        let absolute = dir.path().join("secrets.sql");
        assert_eq!(bundle.path_for_resource(absolute.to_str().unwrap(), None), None);
        assert_eq!(bundle.path_for_resource("sub/nested", Some("sql")), None);
        assert_eq!(bundle.path_for_resource("sub", Some("/nested.sql")), None);
        assert_eq!(bundle.path_for_resource("nested", Some("sql/../../secrets.sql")), None);
        assert_eq!(bundle.path_for_resource("..", None), None);
        assert_eq!(bundle.path_for_resource("", None), None);
    }

    #[test]
    fn missing_root() {
        let bundle = Bundle::new("/nonexistent/bundle/root");
        assert_eq!(bundle.path_for_resource("schema", None), None);
    }

    #[test]
    fn main_bundle() {
        let bundle = Bundle::main().unwrap();
        assert!(bundle.root().is_dir());
    }
}
