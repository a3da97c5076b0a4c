impl NotesApp {
    fn load_notes(&mut self, cx: &mut Context<Self>) {
        if self.load_state == LoadState::Loading {
            return;
        }
        self.load_state = LoadState::Loading;
        self.grid_error = None;
        cx.notify();

        let api = self.api.clone();
        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { api.list() })
                .await;

            let _ = view.update(cx, |this, cx| {
                match result {
                    Ok(notes) => {
                        this.collection.replace_all(notes);
                        this.load_state = LoadState::Loaded;
                    }
                    Err(err) => {
                        crate::debug_log!("[notes] load failed: {}", err);
                        let message = if err.message.trim().is_empty() {
                            this.i18n().load_failed_fallback.to_string()
                        } else {
                            err.message
                        };
                        this.load_state = LoadState::Error(message);
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn delete_note(&mut self, id: NoteId, cx: &mut Context<Self>) {
        let api = self.api.clone();
        let request_id = id.clone();
        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { api.delete(&request_id) })
                .await;

            let _ = view.update(cx, |this, cx| {
                match result {
                    Ok(()) => {
                        this.apply_note_removed(&id, cx);
                        this.set_grid_error(None, cx);
                    }
                    Err(err) => {
                        crate::debug_log!("[notes] delete failed: {} | {}", id, err);
                        let message = if err.message.trim().is_empty() {
                            this.i18n().delete_failed_fallback.to_string()
                        } else {
                            err.message
                        };
                        this.set_grid_error(Some(message), cx);
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    /// Removes a note locally and closes the editor if it was open on it.
    fn apply_note_removed(&mut self, id: &str, cx: &mut Context<Self>) {
        self.collection.remove(id);
        if self.editor_open && self.editor_note_id.as_deref() == Some(id) {
            self.close_editor(cx);
        }
    }

    fn toggle_pin(&mut self, id: NoteId, pinned: bool, cx: &mut Context<Self>) {
        let api = self.api.clone();
        let request_id = id.clone();
        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { api.set_pinned(&request_id, pinned) })
                .await;

            let _ = view.update(cx, |this, cx| {
                match result {
                    // The server's value wins over the requested one.
                    Ok(server_pinned) => {
                        this.collection.set_pinned(&id, server_pinned);
                        this.set_grid_error(None, cx);
                    }
                    Err(err) => {
                        crate::debug_log!("[notes] pin failed: {} | {}", id, err);
                        let message = if err.message.trim().is_empty() {
                            this.i18n().pin_failed_fallback.to_string()
                        } else {
                            err.message
                        };
                        this.set_grid_error(Some(message), cx);
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    /// Deletes every selected note sequentially, keeping going past failures
    /// and reporting a summary at the end.
    fn bulk_delete_selected(&mut self, cx: &mut Context<Self>) {
        if self.bulk_delete_running {
            return;
        }
        let ids: Vec<NoteId> = self.collection.selected_ids().to_vec();
        if ids.is_empty() {
            return;
        }

        self.bulk_delete_running = true;
        self.grid_error = None;
        cx.notify();

        let api = self.api.clone();
        cx.spawn(async move |view, cx| {
            let outcome = cx
                .background_executor()
                .spawn(async move {
                    let mut deleted = Vec::new();
                    let mut failed = 0_usize;
                    for id in &ids {
                        match api.delete(id) {
                            Ok(()) => deleted.push(id.clone()),
                            Err(err) => {
                                crate::debug_log!("[notes] bulk delete failed: {} | {}", id, err);
                                failed += 1;
                            }
                        }
                    }
                    (ids.len(), deleted, failed)
                })
                .await;

            let _ = view.update(cx, |this, cx| {
                let (total, deleted, failed) = outcome;
                for id in &deleted {
                    this.apply_note_removed(id, cx);
                }
                // The sweep is over either way; failed notes stay in the grid
                // but do not stay selected.
                this.collection.clear_selection();
                this.bulk_delete_running = false;
                if failed > 0 {
                    let summary = this.i18n().bulk_delete_failures(failed, total);
                    this.set_grid_error(Some(summary), cx);
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn export_current(&mut self, cx: &mut Context<Self>) {
        if self.export_running || !self.editor_open {
            return;
        }
        let draft = self.current_draft(cx);
        let mode = self.editor_mode;
        let session = self.editor_session;

        self.export_running = true;
        self.editor_notice = None;
        cx.notify();

        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { crate::export::export_note(&draft.title, &draft.content, mode) })
                .await;

            let _ = view.update(cx, |this, cx| {
                this.export_running = false;
                if this.editor_session != session {
                    cx.notify();
                    return;
                }
                match result {
                    Ok(path) => {
                        this.editor_error = None;
                        this.editor_notice = Some(this.i18n().export_saved_to(&path));
                    }
                    Err(export::ExportError::NoRenderer) => {
                        this.editor_notice = None;
                        this.editor_error = Some(this.i18n().export_no_renderer.to_string());
                    }
                    Err(export::ExportError::Failed(message)) => {
                        crate::debug_log!("[export] failed: {}", message);
                        this.editor_notice = None;
                        this.editor_error = Some(if message.trim().is_empty() {
                            this.i18n().export_failed_fallback.to_string()
                        } else {
                            message
                        });
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}
