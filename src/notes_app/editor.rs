impl NotesApp {
    fn open_title_prompt(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.title_prompt_input_state.update(cx, |input, cx| {
            input.set_value("", window, cx);
        });
        self.title_prompt_open = true;
        self.title_prompt_needs_focus = true;
        cx.notify();
    }

    fn close_title_prompt(&mut self, cx: &mut Context<Self>) {
        if self.title_prompt_open {
            self.title_prompt_open = false;
            self.needs_root_refocus = true;
            cx.notify();
        }
    }

    fn confirm_title_prompt(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let title = self
            .title_prompt_input_state
            .read(cx)
            .value()
            .trim()
            .to_string();
        if title.is_empty() {
            return;
        }

        self.title_prompt_open = false;
        self.open_editor(None, title, String::new(), window, cx);
    }

    fn open_editor_for(&mut self, id: &str, window: &mut Window, cx: &mut Context<Self>) {
        let Some(note) = self.collection.get(id) else {
            return;
        };
        let (id, title, content) = (note.id.clone(), note.title.clone(), note.content.clone());
        self.open_editor(Some(id), title, content, window, cx);
    }

    fn open_editor(
        &mut self,
        note_id: Option<NoteId>,
        title: String,
        content: String,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.editor_session = self.editor_session.wrapping_add(1);
        self.autosave_epoch = self.autosave_epoch.wrapping_add(1);
        self.editor_note_id = note_id;
        self.save_state = SaveState::Idle;
        self.editor_error = None;
        self.editor_notice = None;
        self.editor_mode = ExportMode::default();
        self.link_prompt_open = false;
        self.symbol_popover_open = None;
        self.content_caret = content.len();
        self.pending_caret = Some(content.len());
        self.draft_snapshot = NoteDraft {
            title: title.clone(),
            content: content.clone(),
        };

        self.editor_title_input_state.update(cx, |input, cx| {
            input.set_value(title, window, cx);
        });
        self.editor_content_input_state.update(cx, |input, cx| {
            input.set_value(content, window, cx);
        });

        self.editor_open = true;
        self.editor_needs_focus = true;
        cx.notify();
    }

    /// Closing discards nothing that was already saved; a pending debounce
    /// timer is disarmed by the session and epoch bumps.
    fn close_editor(&mut self, cx: &mut Context<Self>) {
        if !self.editor_open {
            return;
        }
        self.editor_session = self.editor_session.wrapping_add(1);
        self.autosave_epoch = self.autosave_epoch.wrapping_add(1);
        self.editor_open = false;
        self.editor_note_id = None;
        self.link_prompt_open = false;
        self.symbol_popover_open = None;
        self.save_state = SaveState::Idle;
        self.editor_error = None;
        self.editor_notice = None;
        self.needs_root_refocus = true;
        cx.notify();
    }

    /// Runs on every title or content change, including programmatic ones.
    fn on_draft_changed(&mut self, cx: &mut Context<Self>) {
        if !self.editor_open {
            return;
        }
        if self.current_draft(cx) == self.draft_snapshot {
            return;
        }
        self.schedule_autosave(cx);
        cx.notify();
    }

    fn render_title_prompt_dialog(&self, cx: &mut Context<Self>) -> Option<AnyElement> {
        if !self.title_prompt_open {
            return None;
        }
        let i18n = self.i18n();
        let can_continue = !self
            .title_prompt_input_state
            .read(cx)
            .value()
            .trim()
            .is_empty();

        Some(
            div()
                .id("title-prompt-overlay")
                .absolute()
                .top_0()
                .left_0()
                .right_0()
                .bottom_0()
                .bg(cx.theme().background.opacity(0.45))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| {
                        this.close_title_prompt(cx);
                    }),
                )
                .child(
                    div()
                        .absolute()
                        .top_0()
                        .left_0()
                        .right_0()
                        .bottom_0()
                        .v_flex()
                        .items_center()
                        .justify_center()
                        .child(
                            div()
                                .id("title-prompt-dialog")
                                .w(px(DIALOG_WIDTH))
                                .v_flex()
                                .gap_3()
                                .popover_style(cx)
                                .p_4()
                                .on_mouse_down(
                                    MouseButton::Left,
                                    cx.listener(|_, _, _, cx| {
                                        cx.stop_propagation();
                                    }),
                                )
                                .child(
                                    div()
                                        .text_lg()
                                        .text_color(cx.theme().foreground)
                                        .child(i18n.title_prompt_title),
                                )
                                .child(Input::new(&self.title_prompt_input_state))
                                .child(
                                    div()
                                        .w_full()
                                        .flex()
                                        .justify_end()
                                        .gap_2()
                                        .child(
                                            Button::new("title-prompt-cancel")
                                                .ghost()
                                                .small()
                                                .label(i18n.cancel_button)
                                                .on_click(cx.listener(|this, _, _, cx| {
                                                    this.close_title_prompt(cx);
                                                })),
                                        )
                                        .child(
                                            Button::new("title-prompt-next")
                                                .outline()
                                                .small()
                                                .label(i18n.title_prompt_next_button)
                                                .disabled(!can_continue)
                                                .on_click(cx.listener(|this, _, window, cx| {
                                                    this.confirm_title_prompt(window, cx);
                                                })),
                                        ),
                                ),
                        ),
                )
                .into_any_element(),
        )
    }

    fn render_editor_dialog(
        &self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Option<AnyElement> {
        if !self.editor_open {
            return None;
        }
        let i18n = self.i18n();
        let is_update = self.editor_note_id.is_some();
        let save_label = if is_update {
            i18n.update_button
        } else {
            i18n.create_button
        };
        let preview_label = if self.preview_visible {
            i18n.hide_preview_button
        } else {
            i18n.show_preview_button
        };
        let is_saving = self.save_state == SaveState::Saving;
        let content = self
            .editor_content_input_state
            .read(cx)
            .value()
            .to_string();

        Some(
            div()
                .id("editor-overlay")
                .absolute()
                .top_0()
                .left_0()
                .right_0()
                .bottom_0()
                .bg(cx.theme().background.opacity(0.45))
                .child(
                    div()
                        .absolute()
                        .top_0()
                        .left_0()
                        .right_0()
                        .bottom_0()
                        .v_flex()
                        .items_center()
                        .justify_center()
                        .child(
                            div()
                                .id("editor-dialog")
                                .w(px(EDITOR_DIALOG_WIDTH))
                                .max_h(px(680.))
                                .v_flex()
                                .gap_3()
                                .popover_style(cx)
                                .p_4()
                                .on_mouse_down(
                                    MouseButton::Left,
                                    cx.listener(|this, _, _, cx| {
                                        this.close_symbol_popovers(cx);
                                        cx.stop_propagation();
                                    }),
                                )
                                .child(self.render_editor_header(
                                    i18n,
                                    save_label,
                                    preview_label,
                                    is_saving,
                                    cx,
                                ))
                                .child(div().h(px(1.)).bg(cx.theme().border))
                                .child(self.render_toolbar(cx))
                                .child(
                                    div()
                                        .w_full()
                                        .flex()
                                        .gap_3()
                                        .child(
                                            div()
                                                .flex_1()
                                                .child(Input::new(&self.editor_content_input_state)),
                                        )
                                        .when(self.preview_visible, |this| {
                                            this.child(self.render_preview_pane(&content, cx))
                                        }),
                                )
                                .when_some(self.editor_error.clone(), |this, message| {
                                    this.child(
                                        div()
                                            .w_full()
                                            .flex()
                                            .justify_center()
                                            .text_sm()
                                            .text_color(gpui::rgb(ERROR_TEXT_COLOR))
                                            .child(message),
                                    )
                                })
                                .when_some(self.editor_notice.clone(), |this, message| {
                                    this.child(
                                        div()
                                            .w_full()
                                            .flex()
                                            .justify_center()
                                            .text_sm()
                                            .text_color(cx.theme().muted_foreground)
                                            .child(message),
                                    )
                                }),
                        ),
                )
                .into_any_element(),
        )
    }

    fn render_editor_header(
        &self,
        i18n: I18n,
        save_label: &'static str,
        preview_label: &'static str,
        is_saving: bool,
        cx: &mut Context<Self>,
    ) -> Div {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .flex_1()
                    .child(Input::new(&self.editor_title_input_state).small()),
            )
            .child(
                ButtonGroup::new("editor-mode")
                    .small()
                    .outline()
                    .child(
                        Button::new("editor-mode-text")
                            .label(i18n.editor_mode_text)
                            .selected(self.editor_mode == ExportMode::Text),
                    )
                    .child(
                        Button::new("editor-mode-math")
                            .label(i18n.editor_mode_math)
                            .selected(self.editor_mode == ExportMode::Math),
                    )
                    .on_click(cx.listener(|this, selected: &Vec<usize>, _, cx| {
                        let next_mode = if selected.first().copied() == Some(1) {
                            ExportMode::Math
                        } else {
                            ExportMode::Text
                        };
                        if this.editor_mode != next_mode {
                            this.editor_mode = next_mode;
                            cx.notify();
                        }
                    })),
            )
            .child(
                Button::new("editor-preview-toggle")
                    .ghost()
                    .small()
                    .label(preview_label)
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.preview_visible = !this.preview_visible;
                        cx.notify();
                    })),
            )
            .child(
                Button::new("editor-download")
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(if self.export_running {
                            IconName::LoaderCircle
                        } else {
                            IconName::Download
                        })
                        .text_color(cx.theme().foreground),
                    )
                    .label(i18n.download_button)
                    .disabled(self.export_running)
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.export_current(cx);
                    })),
            )
            .child(
                Button::new("editor-save")
                    .outline()
                    .small()
                    .when(is_saving, |this| {
                        this.icon(
                            Icon::new(IconName::LoaderCircle).text_color(cx.theme().foreground),
                        )
                    })
                    .label(save_label)
                    .disabled(is_saving)
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.save_now(cx);
                    })),
            )
            .child(
                Button::new("editor-close")
                    .ghost()
                    .small()
                    .icon(Icon::new(IconName::Close).text_color(cx.theme().foreground))
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.close_editor(cx);
                    })),
            )
    }

    /// Raw rendition of the draft, line-per-block in math mode. The real
    /// typeset output only exists in the exported PNG.
    fn render_preview_pane(&self, content: &str, cx: &mut Context<Self>) -> Div {
        let pane = div()
            .flex_1()
            .min_w_0()
            .p_3()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().secondary)
            .v_flex()
            .gap_2()
            .overflow_hidden();

        match self.editor_mode {
            ExportMode::Text => pane.child(
                div()
                    .text_sm()
                    .text_color(cx.theme().foreground)
                    .whitespace_normal()
                    .child(content.to_string()),
            ),
            ExportMode::Math => pane.children(content.lines().map(|line| {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    div().h_4()
                } else {
                    div()
                        .w_full()
                        .px_2()
                        .py_1()
                        .rounded_sm()
                        .bg(cx.theme().muted)
                        .font_family("monospace")
                        .text_sm()
                        .text_color(cx.theme().foreground)
                        .child(trimmed.to_string())
                }
            })),
        }
    }
}
