#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

pub mod api;
pub mod export;
pub mod i18n;
pub mod icons;
pub mod latex;
pub mod logger;
pub mod note;
mod notes_app;
pub mod symbols;

use gpui::*;
use gpui_component::*;
use notes_app::NotesApp;

const WINDOW_SIZE_TREE: &str = "window_size";
const WINDOW_SIZE_KEY_WIDTH: &str = "width";
const WINDOW_SIZE_KEY_HEIGHT: &str = "height";
const LOCAL_STATE_DB_DIR_NAME: &str = "knotes_db";
const DEFAULT_WINDOW_SIZE: (f32, f32) = (1080., 720.);
#[cfg(target_os = "linux")]
const KNOTES_LINUX_BACKEND_ENV: &str = "KNOTES_LINUX_BACKEND";

fn window_size_db_path() -> std::path::PathBuf {
    if let Some(app_data) = std::env::var_os("APPDATA") {
        return std::path::PathBuf::from(app_data)
            .join("knotes")
            .join(LOCAL_STATE_DB_DIR_NAME);
    }
    if let Some(home) = std::env::var_os("HOME") {
        return std::path::PathBuf::from(home)
            .join(".knotes")
            .join(LOCAL_STATE_DB_DIR_NAME);
    }
    std::path::PathBuf::from(LOCAL_STATE_DB_DIR_NAME)
}

fn load_saved_window_size() -> Option<(f32, f32)> {
    let db_path = window_size_db_path();
    let db = match sled::open(&db_path) {
        Ok(db) => db,
        Err(_) => return None,
    };
    let store = match db.open_tree(WINDOW_SIZE_TREE) {
        Ok(tree) => tree,
        Err(_) => return None,
    };
    let width_bytes = store.get(WINDOW_SIZE_KEY_WIDTH).ok().flatten()?;
    let height_bytes = store.get(WINDOW_SIZE_KEY_HEIGHT).ok().flatten()?;
    if width_bytes.len() != 4 || height_bytes.len() != 4 {
        return None;
    }
    let width = f32::from_be_bytes(width_bytes.as_ref().try_into().ok()?);
    let height = f32::from_be_bytes(height_bytes.as_ref().try_into().ok()?);
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some((width, height))
}

#[cfg(target_os = "linux")]
fn running_inside_wsl() -> bool {
    if std::env::var_os("WSL_DISTRO_NAME").is_some() || std::env::var_os("WSL_INTEROP").is_some() {
        return true;
    }

    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|release| release.to_ascii_lowercase().contains("microsoft"))
        .unwrap_or(false)
}

#[cfg(target_os = "linux")]
fn has_non_empty_env(key: &str) -> bool {
    std::env::var_os(key).is_some_and(|value| !value.is_empty())
}

#[cfg(target_os = "linux")]
fn configure_linux_display_backend() {
    let requested_backend = std::env::var(KNOTES_LINUX_BACKEND_ENV)
        .ok()
        .map(|value| value.trim().to_ascii_lowercase());

    match requested_backend.as_deref() {
        Some("wayland") => {
            crate::debug_log!(
                "[linux] backend override: {}=wayland",
                KNOTES_LINUX_BACKEND_ENV
            );
            return;
        }
        Some("x11") => {
            if has_non_empty_env("WAYLAND_DISPLAY") {
                // Safe here: this runs before any threads are spawned.
                unsafe { std::env::remove_var("WAYLAND_DISPLAY") };
            }
            crate::debug_log!("[linux] backend override: {}=x11", KNOTES_LINUX_BACKEND_ENV);
            return;
        }
        Some("auto") | None => {}
        Some(other) => {
            crate::debug_log!(
                "[linux] invalid {} value '{}', expected auto/x11/wayland; using auto",
                KNOTES_LINUX_BACKEND_ENV,
                other
            );
        }
    }

    if running_inside_wsl() && has_non_empty_env("WAYLAND_DISPLAY") && has_non_empty_env("DISPLAY")
    {
        // Safe here: this runs before any threads are spawned.
        unsafe { std::env::remove_var("WAYLAND_DISPLAY") };
        crate::debug_log!(
            "[linux] detected WSL with DISPLAY and WAYLAND_DISPLAY; forcing X11. set {}=wayland to override",
            KNOTES_LINUX_BACKEND_ENV
        );
    }
}

fn main() {
    logger::initialize();
    #[cfg(target_os = "linux")]
    configure_linux_display_backend();

    let app = Application::new().with_assets(icons::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);
        Theme::change(cx.window_appearance(), None, cx);

        #[cfg(target_os = "macos")]
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        cx.spawn(async move |cx| {
            let (width, height) = load_saved_window_size().unwrap_or(DEFAULT_WINDOW_SIZE);
            let window_bounds =
                cx.update(|app| WindowBounds::centered(size(px(width), px(height)), app))?;

            let window_options = WindowOptions {
                window_bounds: Some(window_bounds),
                ..WindowOptions::default()
            };

            cx.open_window(window_options, |window, cx| {
                let view = cx.new(|cx| NotesApp::new(window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;
            Ok::<_, anyhow::Error>(())
        })
        .detach();

        cx.activate(true);
    });
}
