use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NotFound(PathBuf),
    Unchanged(PathBuf),
    Fixed(PathBuf),
    WouldFix(PathBuf),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Outcome::Unchanged(path) => write!(f, "No changes needed for {}", path.display()),
            Outcome::Fixed(path) => write!(f, "Fixed {}", path.display()),
            Outcome::WouldFix(path) => write!(f, "Would fix {}", path.display()),
        }
    }
}

/// Tally of one batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub fixed: usize,
    /// Files a dry run would have rewritten.
    pub would_fix: usize,
    pub unchanged: usize,
    pub missing: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::NotFound(_) => self.missing += 1,
            Outcome::Unchanged(_) => self.unchanged += 1,
            Outcome::Fixed(_) => self.fixed += 1,
            Outcome::WouldFix(_) => self.would_fix += 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} fixed, {} would fix, {} unchanged, {} missing, {} failed",
            self.fixed, self.would_fix, self.unchanged, self.missing, self.failed
        )
    }
}
