//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Settings that control how lyrics are cut into slides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum lines per slide. 0 keeps each marked section on one slide.
    pub max_lines_per_slide: usize,
}

impl PipelineConfig {
    /// Create a configuration that respects section boundaries only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of lines per slide (0 disables re-chunking).
    pub fn with_max_lines_per_slide(mut self, lines: usize) -> Self {
        self.max_lines_per_slide = lines;
        self
    }

    /// True if oversized sections are split into several slides.
    pub fn chunking_enabled(&self) -> bool {
        self.max_lines_per_slide > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disables_chunking() {
        let config = PipelineConfig::new();
        assert_eq!(config.max_lines_per_slide, 0);
        assert!(!config.chunking_enabled());
    }

    #[test]
    fn test_with_max_lines_per_slide() {
        let config = PipelineConfig::new().with_max_lines_per_slide(4);
        assert!(config.chunking_enabled());
        assert_eq!(config.max_lines_per_slide, 4);
    }

    #[test]
    fn test_deserialize_missing_field_uses_default() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());

        let config: PipelineConfig = serde_json::from_str(r#"{"max_lines_per_slide":6}"#).unwrap();
        assert_eq!(config.max_lines_per_slide, 6);
    }
}
