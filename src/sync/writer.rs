//! authorized_keys rendering and output

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

use super::User;

/// Render users as authorized_keys content.
///
/// Users without keys are skipped. Each key becomes one line,
/// `<key> <name>-<index>`, in user order then key order.
pub fn render(users: &[User]) -> String {
    users
        .iter()
        .filter(|user| user.has_keys())
        .map(User::authorized_keys_lines)
        .collect()
}

/// Overwrite `path` with `content`.
///
/// Newly created files are readable and writable by the owner only;
/// an existing file keeps its permissions.
pub fn write_authorized_keys(path: &Path, content: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;

    Ok(())
}
