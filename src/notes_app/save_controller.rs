impl NotesApp {
    /// Arms the autosave debounce timer. Each call invalidates the previous
    /// timer, so the save fires only after the draft has been quiet for the
    /// full debounce window.
    fn schedule_autosave(&mut self, cx: &mut Context<Self>) {
        self.autosave_epoch = self.autosave_epoch.wrapping_add(1);
        let epoch = self.autosave_epoch;

        if self.save_state != SaveState::Saving {
            self.save_state = SaveState::Pending;
        }

        cx.spawn(async move |view, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(AUTOSAVE_DEBOUNCE_MS))
                .await;

            let _ = view.update(cx, |this, cx| {
                if this.autosave_epoch != epoch || !this.editor_open {
                    return;
                }
                this.commit_draft_save(cx);
            });
        })
        .detach();
    }

    /// Explicit save from the Create/Update button or the keyboard shortcut.
    /// Disarms any pending debounce timer so the same draft is not sent twice.
    fn save_now(&mut self, cx: &mut Context<Self>) {
        self.autosave_epoch = self.autosave_epoch.wrapping_add(1);
        self.commit_draft_save(cx);
    }

    fn commit_draft_save(&mut self, cx: &mut Context<Self>) {
        if !self.editor_open {
            return;
        }
        if self.save_state == SaveState::Saving {
            // A request is in flight; try again once it settles.
            self.schedule_autosave(cx);
            return;
        }

        let draft = self.current_draft(cx);
        if !draft.is_valid() {
            let message = self.i18n().validation_required.to_string();
            self.save_state = SaveState::Error(message.clone());
            self.editor_error = Some(message);
            cx.notify();
            return;
        }

        self.editor_error = None;
        self.save_state = SaveState::Saving;
        cx.notify();

        let api = self.api.clone();
        let note_id = self.editor_note_id.clone();
        let is_create = note_id.is_none();
        let session = self.editor_session;

        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move {
                    match &note_id {
                        Some(id) => api.update(id, &draft.title, &draft.content),
                        None => api.create(&draft.title, &draft.content),
                    }
                })
                .await;

            let _ = view.update(cx, |this, cx| {
                let session_is_live = this.editor_session == session;
                match result {
                    Ok(note) => {
                        this.collection.apply_saved(note, is_create);
                        if session_is_live {
                            this.close_editor(cx);
                        }
                        cx.notify();
                    }
                    Err(err) => {
                        crate::debug_log!("[notes] save failed: {}", err);
                        if session_is_live {
                            let message = if err.message.trim().is_empty() {
                                this.i18n().save_failed_fallback.to_string()
                            } else {
                                err.message
                            };
                            this.save_state = SaveState::Error(message.clone());
                            this.editor_error = Some(message);
                            cx.notify();
                        }
                    }
                }
            });
        })
        .detach();
    }
}
