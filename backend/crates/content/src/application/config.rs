//! Application Configuration

/// Content application configuration: field constraints for posts and
/// comments.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Lower bound on post title length (characters)
    pub title_min: usize,
    /// Upper bound on post title length.
    ///
    /// Carried over from the legacy schema, which capped titles at 10
    /// characters; kept configurable so deployments can widen it
    /// without a code change.
    pub title_max: usize,
    /// Lower bound on slug length
    pub slug_min: usize,
    /// Upper bound on slug length
    pub slug_max: usize,
    /// Upper bound on comment body length
    pub comment_max: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            title_min: 5,
            title_max: 10,
            slug_min: 5,
            slug_max: 20,
            comment_max: 255,
        }
    }
}
