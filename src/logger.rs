use std::fs::create_dir_all;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use tklog::{Format, LEVEL, LOG};

static LOG_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();
static FILE_LOGGING_ENABLED: AtomicBool = AtomicBool::new(false);

fn resolve_log_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("KNOTES_LOG_FILE") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    #[cfg(target_os = "windows")]
    if let Some(app_data) = std::env::var_os("APPDATA") {
        return Some(
            PathBuf::from(app_data)
                .join("kNotes")
                .join("logs")
                .join("debug.log"),
        );
    }

    #[cfg(target_os = "macos")]
    if let Some(home) = std::env::var_os("HOME") {
        return Some(
            PathBuf::from(home)
                .join("Library")
                .join("Logs")
                .join("kNotes")
                .join("debug.log"),
        );
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Some(
            PathBuf::from(home)
                .join(".knotes")
                .join("logs")
                .join("debug.log"),
        );
    }

    Some(std::env::temp_dir().join("knotes-debug.log"))
}

pub fn log_file_path() -> Option<PathBuf> {
    LOG_PATH.get_or_init(resolve_log_path).clone()
}

#[allow(dead_code)]
pub fn file_logging_enabled() -> bool {
    FILE_LOGGING_ENABLED.load(Ordering::Relaxed)
}

fn enable_file_logging() {
    let Some(path) = log_file_path() else {
        eprintln!("[log] cannot enable file logging: no writable path");
        return;
    };

    if let Some(parent) = path.parent()
        && let Err(err) = create_dir_all(parent)
    {
        eprintln!(
            "[log] failed to create log dir: {} | {}",
            parent.display(),
            err
        );
        return;
    }

    let path_string = path.to_string_lossy().to_string();
    LOG.set_cutmode_by_size(&path_string, 10 * 1024 * 1024, 5, true);
    FILE_LOGGING_ENABLED.store(true, Ordering::Relaxed);
}

pub fn initialize() {
    LOG.set_level(LEVEL::Debug)
        .set_console(true)
        .set_format(Format::LevelFlag | Format::Date | Format::Time | Format::ShortFileName)
        .set_formatter("{level}{time} {file}:{message}\n");

    // File sink is opt-in: set KNOTES_LOG_FILE to a writable path.
    if std::env::var_os("KNOTES_LOG_FILE").is_some() {
        enable_file_logging();
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        tklog::debug!(format!($($arg)*));
    }};
}
