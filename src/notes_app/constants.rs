pub(super) const AUTOSAVE_DEBOUNCE_MS: u64 = 1200;

pub(super) const TITLE_BAR_HEIGHT: f32 = 36.;
pub(super) const NOTE_CARD_WIDTH: f32 = 240.;
pub(super) const NOTE_CARD_HEIGHT: f32 = 170.;
pub(super) const DIALOG_WIDTH: f32 = 420.;
pub(super) const EDITOR_DIALOG_WIDTH: f32 = 860.;
pub(super) const EDITOR_CONTENT_ROWS: usize = 14;
pub(super) const SYMBOL_PANEL_WIDTH: f32 = 260.;
pub(super) const SYMBOL_PANEL_MAX_HEIGHT: f32 = 280.;

pub(super) const ERROR_TEXT_COLOR: u32 = 0xE5484D;

pub(super) const WINDOW_SIZE_TREE: &str = "window_size";
pub(super) const WINDOW_SIZE_KEY_WIDTH: &str = "width";
pub(super) const WINDOW_SIZE_KEY_HEIGHT: &str = "height";
