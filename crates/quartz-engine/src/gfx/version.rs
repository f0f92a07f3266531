use std::fmt;

/// OpenGL version reported by the driver after loader initialization.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Whether the driver offers any usable OpenGL at all.
    ///
    /// The probe mirrors the loader-based detection this engine replaces:
    /// anything at or above 1.0 counts as supported, the actual feature gate
    /// is shader compilation later in setup.
    pub fn is_supported(self) -> bool {
        self.major >= 1
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_version_is_unsupported() {
        assert!(!GlVersion::new(0, 0).is_supported());
    }

    #[test]
    fn legacy_and_modern_versions_are_supported() {
        assert!(GlVersion::new(1, 1).is_supported());
        assert!(GlVersion::new(3, 3).is_supported());
        assert!(GlVersion::new(4, 5).is_supported());
    }

    #[test]
    fn displays_as_major_dot_minor() {
        assert_eq!(GlVersion::new(3, 3).to_string(), "3.3");
    }
}
