//! Clean options

/// Options for the clean routine
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Also remove the output (dist) directory
    pub include_dist: bool,
    /// Report what would be removed without touching anything
    pub dry_run: bool,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dist-dir removal
    pub fn with_dist(mut self, include_dist: bool) -> Self {
        self.include_dist = include_dist;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
