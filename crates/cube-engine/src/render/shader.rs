//! Shader source loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Entry point the vertex source must define.
pub const VERTEX_ENTRY: &str = "vs_main";

/// Entry point the fragment source must define.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// WGSL text of a vertex/fragment shader pair.
///
/// The two stages live in separate files and are compiled into separate
/// shader modules; their inter-stage locations must agree.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Reads both stages from disk.
    pub fn load(vertex: impl AsRef<Path>, fragment: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            vertex: read_source(vertex.as_ref())?,
            fragment: read_source(fragment.as_ref())?,
        })
    }

    /// Loads the pair from the first directory in `dirs` that holds both files.
    pub fn load_from_dirs<P: AsRef<Path>>(dirs: &[P], vertex: &str, fragment: &str) -> Result<Self> {
        let (vertex_path, fragment_path) = dirs
            .iter()
            .map(|d| (d.as_ref().join(vertex), d.as_ref().join(fragment)))
            .find(|(v, f)| v.is_file() && f.is_file())
            .with_context(|| {
                let searched: Vec<PathBuf> = dirs.iter().map(|d| d.as_ref().to_path_buf()).collect();
                format!("shader pair {vertex} + {fragment} not found in {searched:?}")
            })?;

        Self::load(vertex_path, fragment_path)
    }
}

fn read_source(path: &Path) -> Result<String> {
    log::debug!("loading shader {}", path.display());
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read shader source {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cube-engine-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn load_reads_both_files() {
        let dir = scratch("load");
        std::fs::write(dir.join("a.wgsl"), "// vertex").unwrap();
        std::fs::write(dir.join("b.wgsl"), "// fragment").unwrap();

        let s = ShaderSources::load(dir.join("a.wgsl"), dir.join("b.wgsl")).unwrap();
        assert_eq!(s.vertex, "// vertex");
        assert_eq!(s.fragment, "// fragment");
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = scratch("missing");
        std::fs::write(dir.join("a.wgsl"), "").unwrap();

        let err = ShaderSources::load(dir.join("a.wgsl"), dir.join("nope.wgsl")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.wgsl"));
    }

    #[test]
    fn load_from_dirs_skips_incomplete_directories() {
        let partial = scratch("partial");
        let full = scratch("full");
        std::fs::write(partial.join("v.wgsl"), "partial").unwrap();
        std::fs::write(full.join("v.wgsl"), "full v").unwrap();
        std::fs::write(full.join("f.wgsl"), "full f").unwrap();

        let s = ShaderSources::load_from_dirs(&[&partial, &full], "v.wgsl", "f.wgsl").unwrap();
        assert_eq!(s.vertex, "full v");
        assert_eq!(s.fragment, "full f");
    }

    #[test]
    fn load_from_dirs_reports_search_path() {
        let empty = scratch("empty");
        let err = ShaderSources::load_from_dirs(&[&empty], "v.wgsl", "f.wgsl").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
