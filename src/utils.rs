use std::io::{Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the contents of `path` with `content`.
///
/// The new contents go to a temporary file next to `path` first, which is then
/// renamed over it, so an interrupted write leaves the old file in place.
pub fn replace_file_contents(path: &Path, content: &str) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let permissions = std::fs::metadata(path)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path).map_err(|err| err.error)?;

    Ok(())
}
