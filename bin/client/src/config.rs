//! Host configuration

use crate::constants::PLUGIN_DIR_ENV;
use std::env;
use std::path::{Path, PathBuf};

/// Directory holding settings.cfg.
/// Priority: command-line flag > DROPNOTES_DIR > executable directory > current directory
pub fn resolve_settings_dir(flag: Option<PathBuf>) -> PathBuf {
    pick_settings_dir(
        flag,
        env::var_os(PLUGIN_DIR_ENV).map(PathBuf::from),
        executable_dir(),
    )
}

fn pick_settings_dir(
    flag: Option<PathBuf>,
    from_env: Option<PathBuf>,
    exe_dir: Option<PathBuf>,
) -> PathBuf {
    flag.or(from_env)
        .or(exe_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn executable_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()?
        .parent()
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let dir = pick_settings_dir(
            Some(PathBuf::from("flag")),
            Some(PathBuf::from("env")),
            Some(PathBuf::from("exe")),
        );
        assert_eq!(dir, PathBuf::from("flag"));
    }

    #[test]
    fn test_env_before_executable_dir() {
        let dir = pick_settings_dir(None, Some(PathBuf::from("env")), Some(PathBuf::from("exe")));
        assert_eq!(dir, PathBuf::from("env"));
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(
            pick_settings_dir(None, None, Some(PathBuf::from("exe"))),
            PathBuf::from("exe")
        );
        assert_eq!(pick_settings_dir(None, None, None), PathBuf::from("."));
    }
}
