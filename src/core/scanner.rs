use crate::domain::model::TerraformFile;
use crate::domain::ports::FileHandler;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

fn stat_and_read(path: &Path) -> Result<TerraformFile> {
    let metadata = fs::metadata(path)?;
    let modified: DateTime<Utc> = metadata.modified()?.into();
    let content = fs::read_to_string(path)?;

    Ok(TerraformFile {
        path: path.to_path_buf(),
        size: metadata.len(),
        modified,
        content,
    })
}

pub struct TerraformFileHandler;

impl FileHandler for TerraformFileHandler {
    fn can_handle(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some("tf")
    }

    fn process(&self, path: &Path) -> Result<TerraformFile> {
        stat_and_read(path)
    }
}

pub struct TerraformVarsFileHandler;

impl FileHandler for TerraformVarsFileHandler {
    fn can_handle(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some("tfvars")
    }

    fn process(&self, path: &Path) -> Result<TerraformFile> {
        stat_and_read(path)
    }
}

pub struct FileScanner {
    handlers: Vec<Box<dyn FileHandler>>,
}

impl FileScanner {
    pub fn new(handlers: Vec<Box<dyn FileHandler>>) -> Self {
        Self { handlers }
    }

    pub fn with_default_handlers() -> Self {
        Self::new(vec![
            Box::new(TerraformFileHandler),
            Box::new(TerraformVarsFileHandler),
        ])
    }

    /// Recursively walks `directory`; the first handler that accepts a
    /// file processes it, remaining handlers are not consulted.
    pub fn scan_directory(&self, directory: &Path) -> Result<Vec<TerraformFile>> {
        let mut results = Vec::new();
        self.walk(directory, &mut results)?;
        Ok(results)
    }

    fn walk(&self, directory: &Path, results: &mut Vec<TerraformFile>) -> Result<()> {
        let mut entries: Vec<_> = fs::read_dir(directory)?.collect::<std::io::Result<_>>()?;
        // Stable output order across platforms
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            if path.is_dir() {
                self.walk(&path, results)?;
            } else {
                for handler in &self.handlers {
                    if handler.can_handle(&path) {
                        results.push(handler.process(&path)?);
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    struct HandlerCase {
        name: &'static str,
        file: &'static str,
        should_handle: bool,
        handler: Box<dyn FileHandler>,
    }

    #[test]
    fn test_file_handlers() {
        let temp_dir = TempDir::new().unwrap();
        let cases = vec![
            HandlerCase {
                name: "terraform file",
                file: "main.tf",
                should_handle: true,
                handler: Box::new(TerraformFileHandler),
            },
            HandlerCase {
                name: "terraform vars file",
                file: "vars.tfvars",
                should_handle: true,
                handler: Box::new(TerraformVarsFileHandler),
            },
            HandlerCase {
                name: "non-terraform file",
                file: "readme.md",
                should_handle: false,
                handler: Box::new(TerraformFileHandler),
            },
        ];

        for case in cases {
            let path = temp_dir.path().join(case.file);
            File::create(&path).unwrap();
            assert_eq!(
                case.handler.can_handle(&path),
                case.should_handle,
                "case: {}",
                case.name
            );
        }
    }

    #[test]
    fn test_extension_matching_is_exact() {
        let handler = TerraformFileHandler;
        assert!(!handler.can_handle(Path::new("main.tf.bak")));
        assert!(!handler.can_handle(Path::new("maintf")));
        assert!(handler.can_handle(Path::new("nested/dir/main.tf")));
    }

    #[test]
    fn test_file_scanner() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("main.tf");
        let mut f = File::create(&test_file).unwrap();
        f.write_all(b"resource \"aws_vpc\" \"main\" {}\n").unwrap();

        let scanner = FileScanner::with_default_handlers();
        let results = scanner.scan_directory(temp_dir.path()).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, test_file);
        assert!(results[0].size > 0);
        assert!(results[0].content.contains("aws_vpc"));
    }

    #[test]
    fn test_file_scanner_recurses_and_skips_unmatched() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("modules").join("network");
        std::fs::create_dir_all(&nested).unwrap();

        File::create(temp_dir.path().join("main.tf")).unwrap();
        File::create(temp_dir.path().join("readme.md")).unwrap();
        File::create(nested.join("subnet.tf")).unwrap();
        File::create(nested.join("prod.tfvars")).unwrap();

        let scanner = FileScanner::with_default_handlers();
        let results = scanner.scan_directory(temp_dir.path()).unwrap();

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|f| {
            let ext = f.path.extension().and_then(|e| e.to_str()).unwrap();
            ext == "tf" || ext == "tfvars"
        }));
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let scanner = FileScanner::with_default_handlers();
        assert!(scanner.scan_directory(Path::new("/no/such/dir")).is_err());
    }
}
