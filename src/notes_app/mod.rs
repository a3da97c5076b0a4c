use crate::api::NotesApi;
use crate::export::ExportMode;
use crate::i18n::{I18n, Language};
use crate::icons::IconName;
use crate::note::{Note, NoteDraft, NoteId, NoteTab, NotesCollection};
use crate::symbols::{GroupHeading, Symbol};
use crate::{export, latex, symbols};
use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::checkbox::Checkbox;
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::popover::Popover;
use gpui_component::{button::*, *};
use std::time::Duration;

include!("types.rs");
include!("constants.rs");

pub struct NotesApp {
    focus_handle: FocusHandle,
    language: Language,
    api: NotesApi,
    window_size_store: Option<sled::Tree>,
    last_window_size: Option<(f32, f32)>,
    screen: Screen,
    collection: NotesCollection,
    load_state: LoadState,
    active_tab: NoteTab,
    search_query: String,
    search_input_state: Entity<InputState>,
    _search_input_subscription: Subscription,
    grid_error: Option<String>,
    status_notice: Option<String>,
    delete_confirm: Option<DeleteTarget>,
    bulk_delete_running: bool,
    title_prompt_open: bool,
    title_prompt_needs_focus: bool,
    title_prompt_input_state: Entity<InputState>,
    editor_open: bool,
    editor_note_id: Option<NoteId>,
    editor_session: u64,
    editor_needs_focus: bool,
    editor_error: Option<String>,
    editor_notice: Option<String>,
    editor_mode: ExportMode,
    preview_visible: bool,
    save_state: SaveState,
    autosave_epoch: u64,
    export_running: bool,
    editor_title_input_state: Entity<InputState>,
    _editor_title_subscription: Subscription,
    editor_content_input_state: Entity<InputState>,
    _editor_content_subscription: Subscription,
    content_caret: usize,
    pending_caret: Option<usize>,
    draft_snapshot: NoteDraft,
    link_prompt_open: bool,
    link_prompt_needs_focus: bool,
    link_prompt_input_state: Entity<InputState>,
    symbol_popover_open: Option<GroupHeading>,
    grid_scroll: ScrollHandle,
    math_symbols_scroll: ScrollHandle,
    chemistry_symbols_scroll: ScrollHandle,
    needs_initial_focus: bool,
    needs_root_refocus: bool,
}

impl NotesApp {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let language = Language::detect();
        let i18n = I18n::new(language);
        let window_size_store = Self::open_window_size_store();

        let search_input_state =
            cx.new(|cx| InputState::new(window, cx).placeholder(i18n.search_placeholder));
        let search_input_subscription = cx.subscribe(
            &search_input_state.clone(),
            |this, input, event: &InputEvent, cx| {
                if !matches!(event, InputEvent::Change) {
                    return;
                }
                let next_query = input.read(cx).value().to_string();
                if this.search_query != next_query {
                    this.search_query = next_query;
                    this.grid_scroll.scroll_to_item(0);
                    cx.notify();
                }
            },
        );

        let title_prompt_input_state =
            cx.new(|cx| InputState::new(window, cx).placeholder(i18n.title_prompt_placeholder));

        let editor_title_input_state =
            cx.new(|cx| InputState::new(window, cx).placeholder(i18n.editor_title_placeholder));
        let editor_title_subscription = cx.subscribe(
            &editor_title_input_state.clone(),
            |this, _, event: &InputEvent, cx| {
                if matches!(event, InputEvent::Change) {
                    this.on_draft_changed(cx);
                }
            },
        );

        let editor_content_input_state = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line(true)
                .rows(EDITOR_CONTENT_ROWS)
                .placeholder(i18n.editor_content_placeholder)
        });
        let editor_content_subscription = cx.subscribe(
            &editor_content_input_state.clone(),
            |this, input, event: &InputEvent, cx| {
                if !matches!(event, InputEvent::Change) {
                    return;
                }
                let value_len = input.read(cx).value().len();
                this.content_caret = match this.pending_caret.take() {
                    Some(caret) => caret.min(value_len),
                    // Without a caret position from the input itself, keep
                    // insertions anchored to the end of the buffer.
                    None => value_len,
                };
                this.on_draft_changed(cx);
            },
        );

        let link_prompt_input_state =
            cx.new(|cx| InputState::new(window, cx).placeholder(i18n.link_prompt_placeholder));

        Self {
            focus_handle: cx.focus_handle(),
            language,
            api: NotesApi::from_env(),
            window_size_store,
            last_window_size: None,
            screen: Screen::Dashboard,
            collection: NotesCollection::default(),
            load_state: LoadState::Idle,
            active_tab: NoteTab::All,
            search_query: String::new(),
            search_input_state,
            _search_input_subscription: search_input_subscription,
            grid_error: None,
            status_notice: None,
            delete_confirm: None,
            bulk_delete_running: false,
            title_prompt_open: false,
            title_prompt_needs_focus: false,
            title_prompt_input_state,
            editor_open: false,
            editor_note_id: None,
            editor_session: 0,
            editor_needs_focus: false,
            editor_error: None,
            editor_notice: None,
            editor_mode: ExportMode::default(),
            preview_visible: true,
            save_state: SaveState::Idle,
            autosave_epoch: 0,
            export_running: false,
            editor_title_input_state,
            _editor_title_subscription: editor_title_subscription,
            editor_content_input_state,
            _editor_content_subscription: editor_content_subscription,
            content_caret: 0,
            pending_caret: None,
            draft_snapshot: NoteDraft::default(),
            link_prompt_open: false,
            link_prompt_needs_focus: false,
            link_prompt_input_state,
            symbol_popover_open: None,
            grid_scroll: ScrollHandle::new(),
            math_symbols_scroll: ScrollHandle::new(),
            chemistry_symbols_scroll: ScrollHandle::new(),
            needs_initial_focus: true,
            needs_root_refocus: false,
        }
    }
}

include!("core.rs");
include!("dashboard.rs");
include!("note_grid.rs");
include!("editor.rs");
include!("toolbar.rs");
include!("save_controller.rs");
include!("api_actions.rs");

impl Focusable for NotesApp {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for NotesApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.needs_initial_focus {
            self.needs_initial_focus = false;
            cx.focus_self(window);
        }
        if self.title_prompt_open && self.title_prompt_needs_focus {
            self.title_prompt_needs_focus = false;
            let _ = self
                .title_prompt_input_state
                .update(cx, |input, cx| input.focus(window, cx));
        }
        if self.editor_open && self.editor_needs_focus {
            self.editor_needs_focus = false;
            let _ = self
                .editor_content_input_state
                .update(cx, |input, cx| input.focus(window, cx));
        }
        if self.link_prompt_open && self.link_prompt_needs_focus {
            self.link_prompt_needs_focus = false;
            let _ = self
                .link_prompt_input_state
                .update(cx, |input, cx| input.focus(window, cx));
        }
        if !self.editor_open && !self.title_prompt_open && self.needs_root_refocus {
            self.needs_root_refocus = false;
            window.focus(&self.focus_handle);
        }

        window.set_window_title("kNotes");
        window.set_rem_size(cx.theme().font_size);

        let bounds = window.bounds();
        let current_size = (f32::from(bounds.size.width), f32::from(bounds.size.height));
        if self.last_window_size != Some(current_size) {
            self.last_window_size = Some(current_size);
            if !window.is_maximized() && !window.is_fullscreen() {
                self.save_window_size(current_size.0, current_size.1);
            }
        }

        let title_prompt = self.render_title_prompt_dialog(cx);
        let editor_dialog = self.render_editor_dialog(window, cx);
        let link_prompt = self.render_link_prompt_dialog(cx);
        let delete_confirm = self.render_delete_confirm_dialog(cx);

        div().size_full().child(
            div()
                .v_flex()
                .size_full()
                .bg(cx.theme().background)
                .relative()
                .track_focus(&self.focus_handle)
                .capture_key_down(cx.listener(|this, event: &gpui::KeyDownEvent, window, cx| {
                    this.handle_key_down(event, window, cx);
                }))
                .child(self.render_title_bar(window, cx))
                .child(match self.screen {
                    Screen::Dashboard => self.render_dashboard(cx),
                    Screen::Notes => self.render_notes_screen(cx),
                })
                .when_some(title_prompt, |this, dialog| this.child(dialog))
                .when_some(editor_dialog, |this, dialog| this.child(dialog))
                .when_some(link_prompt, |this, dialog| this.child(dialog))
                .when_some(delete_confirm, |this, dialog| this.child(dialog)),
        )
    }
}
