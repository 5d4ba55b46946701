//! Discovery of the `pg_worker` helper used when tests run as root.

use super::BoxError;
use super::fs_utils::open_parent_dir;
use camino::{Utf8Path, Utf8PathBuf};
#[cfg(unix)]
use cap_std::fs::{Permissions, PermissionsExt};
use std::io::Write;

const WORKER_NAME: &str = "pg_worker";

/// Finds `pg_worker` in `~/.cargo/bin` or on `PATH`.
pub(super) fn locate_pg_worker() -> Option<Utf8PathBuf> {
    let cargo_bin = std::env::var_os("HOME")
        .and_then(|home| Utf8PathBuf::from_path_buf(home.into()).ok())
        .map(|home| home.join(".cargo").join("bin"));
    let path_entries = std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| Utf8PathBuf::from_path_buf(entry).ok());

    cargo_bin
        .into_iter()
        .chain(path_entries)
        .map(|dir| dir.join(WORKER_NAME))
        .find(|candidate| candidate.is_file())
}

/// Copies `worker` into the temporary directory behind a wrapper script
/// that drops to `nobody`, since root's home is not readable by that user.
pub(super) fn prepare_pg_worker(worker: &Utf8Path) -> Result<Utf8PathBuf, BoxError> {
    let temp_dir = Utf8PathBuf::from_path_buf(std::env::temp_dir()).map_err(|path| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{} is not valid UTF-8", path.display()),
        )) as BoxError
    })?;
    let wrapper_path = temp_dir.join(format!("kanban_pg_worker_{}", std::process::id()));
    let binary_path = wrapper_path.with_extension("bin");

    let (source_dir, source_name) = open_parent_dir(worker)?;
    let (target_dir, wrapper_name) = open_parent_dir(&wrapper_path)?;
    let binary_name = binary_path.file_name().unwrap_or(WORKER_NAME);

    source_dir
        .copy(source_name, &target_dir, binary_name)
        .map_err(|err| Box::new(err) as BoxError)?;
    let mut wrapper = target_dir
        .create(wrapper_name)
        .map_err(|err| Box::new(err) as BoxError)?;
    let script = format!(
        concat!(
            "#!/bin/sh\n",
            "if [ \"$(id -u)\" -eq 0 ]; then\n",
            "  exec runuser -u nobody -- {binary} \"$@\"\n",
            "fi\n",
            "exec {binary} \"$@\"\n",
        ),
        binary = binary_path
    );
    wrapper
        .write_all(script.as_bytes())
        .map_err(|err| Box::new(err) as BoxError)?;

    #[cfg(unix)]
    {
        for name in [wrapper_name, binary_name] {
            target_dir
                .set_permissions(name, Permissions::from_mode(0o755))
                .map_err(|err| Box::new(err) as BoxError)?;
        }
    }
    Ok(wrapper_path)
}
