//! Configuration for Git operations.

/// Configuration for Git operations
#[derive(Debug, Clone)]
pub struct GitConfig {
    /// Remote to pull from and push tags to
    pub remote: String,
    /// Whether to push the tag after creating it
    pub push_tags: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            push_tags: true,
        }
    }
}

impl GitConfig {
    /// Generate the annotated tag message for a release
    pub fn generate_tag_message(&self, tag: &str) -> String {
        format!("Release {}", tag)
    }
}
