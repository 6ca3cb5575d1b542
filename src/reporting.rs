use std::fs::{DirBuilder, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ReconError, Result};

/// Creates every missing directory above `output`.
pub fn prepare_output_dir(output: &Path) -> Result<()> {
    let dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Ok(()),
    };

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir).map_err(|source| ReconError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Truncates `output` and writes one subdomain per line. The parent
/// directory must already exist, see [`prepare_output_dir`].
pub fn write_outputs(subs: &[String], output: &Path) -> Result<()> {
    let file = File::create(output).map_err(|source| ReconError::CreateFile {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let write_err = |source| ReconError::Write {
        path: output.to_path_buf(),
        source,
    };
    for sub in subs {
        writeln!(writer, "{}", sub).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    Ok(())
}
