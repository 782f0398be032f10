use super::{conflict_block_regex, resolve_blocks, MalformedConflictPolicy, Outcome, Summary};
use crate::errors::ResolveError;
use crate::utils::replace_file_contents;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub struct Resolver {
    policy: Option<Box<dyn MalformedConflictPolicy>>,
    dry_run: bool,
    blocks: Regex,
}

impl Resolver {
    pub fn new(policy: Option<Box<dyn MalformedConflictPolicy>>, dry_run: bool) -> Self {
        Resolver {
            policy,
            dry_run,
            blocks: conflict_block_regex(),
        }
    }

    /// Resolves all conflict blocks in the file at `path`, keeping "ours".
    ///
    /// The file is only rewritten when its contents actually change.
    pub fn resolve(&self, path: &Path) -> Result<Outcome, ResolveError> {
        if !path.is_file() {
            return Ok(Outcome::NotFound(path.to_owned()));
        }

        let bytes = std::fs::read(path).map_err(|err| ResolveError::io(path, err))?;
        let content = String::from_utf8(bytes).map_err(|_| ResolveError::Decode {
            path: path.to_owned(),
        })?;

        let resolution = resolve_blocks(&self.blocks, &content);
        debug!(
            path = %path.display(),
            blocks = resolution.blocks,
            "replaced conflict blocks"
        );
        let mut new_content = resolution.text;

        if let Some(policy) = self.policy.as_ref().filter(|p| p.applies_to(path)) {
            if let Some(repaired) = policy.repair(&new_content) {
                println!("Fixing {} special case", policy.name());
                new_content = repaired;
            }
        }

        if new_content == content {
            return Ok(Outcome::Unchanged(path.to_owned()));
        }

        if self.dry_run {
            return Ok(Outcome::WouldFix(path.to_owned()));
        }

        replace_file_contents(path, &new_content).map_err(|err| ResolveError::io(path, err))?;
        info!(path = %path.display(), bytes = new_content.len(), "rewrote file");

        Ok(Outcome::Fixed(path.to_owned()))
    }

    /// Resolves every target in order. A failing file doesn't stop the batch.
    pub fn run(&self, targets: &[PathBuf]) -> Summary {
        let mut summary = Summary::default();

        for path in targets {
            match self.resolve(path) {
                Ok(outcome) => {
                    println!("{}", outcome);
                    summary.record(&outcome);
                }
                Err(err) => {
                    error!("{}", err);
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
