//! Shader source loading.
//!
//! The engine compiles one program from a vertex/fragment GLSL pair read off
//! disk at setup time. Reads are synchronous; there is no hot reload.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read a shader source file.
#[derive(Debug, Error)]
#[error("failed to read shader source {}: {source}", .path.display())]
pub struct ShaderError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Locations of the vertex and fragment shader sources.
#[derive(Debug, Clone)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl ShaderPaths {
    pub fn new(vertex: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

/// Loaded GLSL text for one program.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Reads both sources from disk.
    pub fn load(paths: &ShaderPaths) -> Result<Self, ShaderError> {
        Ok(Self {
            vertex: read_source(&paths.vertex)?,
            fragment: read_source(&paths.fragment)?,
        })
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_its_path() {
        let paths = ShaderPaths::new("no/such/dir/a.vert", "no/such/dir/a.frag");
        let err = ShaderSources::load(&paths).unwrap_err();
        assert!(err.path.ends_with("a.vert"));
    }

    #[test]
    fn loads_the_shipped_clock_shaders() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        let paths = ShaderPaths::new(
            root.join("shaders/clock.vert"),
            root.join("shaders/clock.frag"),
        );

        let sources = ShaderSources::load(&paths).unwrap();
        assert!(sources.vertex.contains("in vec2 pos"));
        assert!(sources.fragment.contains("uniform float time"));
    }
}
