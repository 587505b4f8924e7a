use std::fs;
use std::path::{Path, PathBuf};

use sv_header::{extract_headers, ModuleHeader, PortDirection, PortRecord};

pub mod macros;

pub struct TestHarness {
    fixtures_root: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            fixtures_root: default_fixtures_root(),
        }
    }

    pub fn fixture_path(&self, relative: &str) -> PathBuf {
        self.fixtures_root.join(relative)
    }

    pub fn read_fixture(&self, relative: &str) -> String {
        let path = self.fixture_path(relative);
        fs::read_to_string(&path).unwrap_or_else(|err| {
            panic!("Failed to read fixture {}: {}", path.display(), err);
        })
    }

    pub fn extract_fixture(&self, relative: &str) -> Vec<ModuleHeader> {
        extract_headers(&self.read_fixture(relative))
    }

    /// Header of `module` in the fixture, panicking if it is not declared there.
    #[allow(dead_code)]
    pub fn module_header(&self, relative: &str, module: &str) -> ModuleHeader {
        self.extract_fixture(relative)
            .into_iter()
            .find(|header| header.name == module)
            .unwrap_or_else(|| panic!("Module {} not found in {}", module, relative))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn default_fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test_files")
}

#[allow(dead_code)]
pub fn iter_sv_files(relative_dir: &str) -> Vec<PathBuf> {
    let root = default_fixtures_root().join(relative_dir);
    if !root.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap_or_else(|err| panic!("Failed to read directory {}: {}", root.display(), err))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("sv") => Some(path),
                _ => None,
            }
        })
        .collect();
    files.sort();
    files
}

/// Build an expected port record without a default value or unpacked range.
#[allow(dead_code)]
pub fn port(
    name: &str,
    direction: Option<PortDirection>,
    port_type: &str,
    width: &str,
) -> PortRecord {
    PortRecord {
        name: name.to_string(),
        direction,
        port_type: port_type.to_string(),
        width: width.to_string(),
        ..PortRecord::default()
    }
}

#[allow(dead_code)]
pub fn port_names(ports: &[PortRecord]) -> Vec<&str> {
    ports.iter().map(|port| port.name.as_str()).collect()
}
