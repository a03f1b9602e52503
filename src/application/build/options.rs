//! Build options

/// Options for the build pipeline
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Report every stage without touching the filesystem or spawning the tool
    pub dry_run: bool,
    /// Remove the output directory during the pre-build clean.
    /// The slate-reset default; `--no-clean-dist` turns it off.
    pub clean_dist_before: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            clean_dist_before: true,
        }
    }
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set pre-build dist removal
    pub fn with_clean_dist_before(mut self, clean: bool) -> Self {
        self.clean_dist_before = clean;
        self
    }
}
