impl NotesApp {
    const LOCAL_STATE_DB_DIR_NAME: &'static str = "knotes_db";

    fn i18n(&self) -> I18n {
        I18n::new(self.language)
    }

    fn local_state_db_path() -> std::path::PathBuf {
        if let Some(app_data) = std::env::var_os("APPDATA") {
            return std::path::PathBuf::from(app_data)
                .join("knotes")
                .join(Self::LOCAL_STATE_DB_DIR_NAME);
        }
        if let Some(home) = std::env::var_os("HOME") {
            return std::path::PathBuf::from(home)
                .join(".knotes")
                .join(Self::LOCAL_STATE_DB_DIR_NAME);
        }
        std::path::PathBuf::from(Self::LOCAL_STATE_DB_DIR_NAME)
    }

    fn open_window_size_store() -> Option<sled::Tree> {
        let db_path = Self::local_state_db_path();
        if let Some(parent) = db_path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                crate::debug_log!("[store] create dir failed: {}", parent.to_string_lossy());
                return None;
            }
        }

        let db = match sled::open(&db_path) {
            Ok(db) => db,
            Err(err) => {
                crate::debug_log!(
                    "[store] open db failed: {} | {}",
                    db_path.to_string_lossy(),
                    err
                );
                return None;
            }
        };

        match db.open_tree(WINDOW_SIZE_TREE) {
            Ok(tree) => Some(tree),
            Err(err) => {
                crate::debug_log!("[store] open tree failed: {} | {}", WINDOW_SIZE_TREE, err);
                None
            }
        }
    }

    fn save_window_size(&self, width: f32, height: f32) {
        let Some(store) = self.window_size_store.as_ref() else {
            return;
        };
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let width_result = store.insert(WINDOW_SIZE_KEY_WIDTH, &width.to_be_bytes());
        let height_result = store.insert(WINDOW_SIZE_KEY_HEIGHT, &height.to_be_bytes());
        if width_result.is_err() || height_result.is_err() {
            crate::debug_log!("[store] save window size failed: {}x{}", width, height);
        }
    }

    /// Fields currently in the editor inputs.
    fn current_draft(&self, cx: &Context<Self>) -> NoteDraft {
        NoteDraft {
            title: self.editor_title_input_state.read(cx).value().to_string(),
            content: self.editor_content_input_state.read(cx).value().to_string(),
        }
    }

    fn set_grid_error(&mut self, message: Option<String>, cx: &mut Context<Self>) {
        if self.grid_error != message {
            self.grid_error = message;
            cx.notify();
        }
    }

    fn set_status_notice(&mut self, message: Option<String>, cx: &mut Context<Self>) {
        if self.status_notice != message {
            self.status_notice = message;
            cx.notify();
        }
    }

    fn open_notes_screen(&mut self, cx: &mut Context<Self>) {
        if self.screen == Screen::Notes {
            return;
        }
        self.screen = Screen::Notes;
        self.load_notes(cx);
        cx.notify();
    }

    fn back_to_dashboard(&mut self, cx: &mut Context<Self>) {
        if self.screen == Screen::Dashboard {
            return;
        }
        self.screen = Screen::Dashboard;
        self.collection.clear_selection();
        self.status_notice = None;
        self.grid_error = None;
        cx.notify();
    }

    fn handle_key_down(
        &mut self,
        event: &gpui::KeyDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let is_primary_modifier = event.keystroke.modifiers.secondary();
        let key = event.keystroke.key.as_str();

        if self.link_prompt_open {
            if key == "escape" {
                self.close_link_prompt(cx);
                cx.stop_propagation();
            } else if key == "enter" {
                self.confirm_link_prompt(window, cx);
                cx.stop_propagation();
            }
            return;
        }

        if self.title_prompt_open {
            if key == "escape" {
                self.close_title_prompt(cx);
                cx.stop_propagation();
            } else if key == "enter" {
                self.confirm_title_prompt(window, cx);
                cx.stop_propagation();
            }
            return;
        }

        if self.delete_confirm.is_some() {
            if key == "escape" {
                self.close_delete_confirm(cx);
                cx.stop_propagation();
            } else if key == "enter" {
                self.confirm_delete(cx);
                cx.stop_propagation();
            }
            return;
        }

        if self.editor_open {
            if key == "escape" {
                self.close_editor(cx);
                cx.stop_propagation();
                return;
            }
            if is_primary_modifier {
                match key {
                    "enter" | "s" => {
                        self.save_now(cx);
                        cx.stop_propagation();
                    }
                    "b" => {
                        self.insert_symbol(symbols::BOLD, window, cx);
                        cx.stop_propagation();
                    }
                    "i" => {
                        self.insert_symbol(symbols::ITALIC, window, cx);
                        cx.stop_propagation();
                    }
                    "k" => {
                        self.open_link_prompt(cx);
                        cx.stop_propagation();
                    }
                    _ => {}
                }
            }
            return;
        }

        if key == "escape" && self.collection.selected_count() > 0 {
            self.collection.clear_selection();
            cx.stop_propagation();
            cx.notify();
        }
    }

    fn render_title_bar(&self, _window: &mut Window, cx: &mut Context<Self>) -> Stateful<Div> {
        div()
            .id("title-bar")
            .w_full()
            .h(px(TITLE_BAR_HEIGHT))
            .flex_shrink_0()
            .flex()
            .items_center()
            .px_3()
            .bg(cx.theme().title_bar)
            .border_b_1()
            .border_color(cx.theme().title_bar_border)
            .child(
                div()
                    .text_sm()
                    .font_semibold()
                    .text_color(cx.theme().foreground)
                    .child("kNotes"),
            )
    }
}
