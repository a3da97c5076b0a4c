impl NotesApp {
    /// "2024-03-12T09:30:00.000Z" shown as "2024-03-12 09:30".
    fn format_note_date(raw: &str) -> String {
        let cleaned: String = raw.replace('T', " ").chars().take(16).collect();
        cleaned
    }

    fn render_notes_screen(&self, cx: &mut Context<Self>) -> Stateful<Div> {
        let i18n = self.i18n();

        div()
            .id("notes-screen")
            .flex_1()
            .v_flex()
            .overflow_hidden()
            .child(self.render_notes_header(cx))
            .when(self.collection.selected_count() > 0, |this| {
                this.child(self.render_bulk_bar(cx))
            })
            .when_some(self.grid_error.clone(), |this, message| {
                this.child(
                    div()
                        .w_full()
                        .px_4()
                        .py_2()
                        .text_sm()
                        .text_color(gpui::rgb(ERROR_TEXT_COLOR))
                        .child(message),
                )
            })
            .when_some(self.status_notice.clone(), |this, message| {
                this.child(
                    div()
                        .w_full()
                        .px_4()
                        .py_2()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child(message),
                )
            })
            .child(self.render_note_grid(i18n, cx))
    }

    fn render_notes_header(&self, cx: &mut Context<Self>) -> Div {
        let i18n = self.i18n();

        div()
            .w_full()
            .flex_shrink_0()
            .flex()
            .items_center()
            .gap_2()
            .px_4()
            .py_3()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                Button::new("back-to-dashboard")
                    .ghost()
                    .small()
                    .icon(Icon::new(IconName::ChevronLeft).text_color(cx.theme().foreground))
                    .label(i18n.back_to_dashboard)
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.back_to_dashboard(cx);
                    })),
            )
            .child(
                ButtonGroup::new("note-tabs")
                    .small()
                    .outline()
                    .child(
                        Button::new("tab-all")
                            .label(i18n.tab_all_notes)
                            .selected(self.active_tab == NoteTab::All),
                    )
                    .child(
                        Button::new("tab-important")
                            .label(i18n.tab_important)
                            .selected(self.active_tab == NoteTab::Important),
                    )
                    .on_click(cx.listener(|this, selected: &Vec<usize>, _, cx| {
                        let next_tab = if selected.first().copied() == Some(1) {
                            NoteTab::Important
                        } else {
                            NoteTab::All
                        };
                        if this.active_tab != next_tab {
                            this.active_tab = next_tab;
                            this.grid_scroll.scroll_to_item(0);
                            cx.notify();
                        }
                    })),
            )
            .child(
                div()
                    .flex_1()
                    .max_w(px(320.))
                    .child(Input::new(&self.search_input_state).small()),
            )
            .child(div().flex_1())
            .child(
                Button::new("add-note")
                    .outline()
                    .small()
                    .icon(Icon::new(IconName::Plus).text_color(cx.theme().foreground))
                    .label(i18n.add_note_button)
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.open_title_prompt(window, cx);
                    })),
            )
    }

    fn render_bulk_bar(&self, cx: &mut Context<Self>) -> Div {
        let i18n = self.i18n();
        let select_all_label = if self.collection.all_selected() {
            i18n.deselect_all_button
        } else {
            i18n.select_all_button
        };

        div()
            .w_full()
            .flex_shrink_0()
            .flex()
            .items_center()
            .gap_3()
            .px_4()
            .py_2()
            .bg(cx.theme().secondary)
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().foreground)
                    .child(i18n.selected_count(self.collection.selected_count())),
            )
            .child(
                Button::new("select-all")
                    .ghost()
                    .small()
                    .label(select_all_label)
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.collection.toggle_select_all();
                        cx.notify();
                    })),
            )
            .child(div().flex_1())
            .child(
                Button::new("bulk-delete")
                    .outline()
                    .small()
                    .icon(Icon::new(IconName::Trash).text_color(gpui::rgb(ERROR_TEXT_COLOR)))
                    .label(i18n.bulk_delete_button)
                    .disabled(self.bulk_delete_running)
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.delete_confirm = Some(DeleteTarget::Selection);
                        cx.notify();
                    })),
            )
    }

    fn render_note_grid(&self, i18n: I18n, cx: &mut Context<Self>) -> Stateful<Div> {
        let body = div()
            .id("note-grid")
            .flex_1()
            .overflow_y_scroll()
            .track_scroll(&self.grid_scroll)
            .p_4();

        match &self.load_state {
            LoadState::Idle | LoadState::Loading => body.child(
                div()
                    .w_full()
                    .py_8()
                    .flex()
                    .justify_center()
                    .text_color(cx.theme().muted_foreground)
                    .child(i18n.loading_notes),
            ),
            LoadState::Error(message) => body.child(
                div()
                    .w_full()
                    .py_8()
                    .v_flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .text_color(gpui::rgb(ERROR_TEXT_COLOR))
                            .child(message.clone()),
                    )
                    .child(
                        Button::new("reload-notes")
                            .outline()
                            .small()
                            .label(i18n.retry_button)
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.load_notes(cx);
                            })),
                    ),
            ),
            LoadState::Loaded => {
                let visible = self.collection.filtered(self.active_tab, &self.search_query);
                if visible.is_empty() {
                    return body.child(
                        div()
                            .w_full()
                            .py_8()
                            .flex()
                            .justify_center()
                            .text_color(cx.theme().muted_foreground)
                            .child(i18n.no_notes_found),
                    );
                }

                let cards: Vec<AnyElement> = visible
                    .into_iter()
                    .map(|note| self.render_note_card(note, cx))
                    .collect();

                body.child(div().flex().flex_wrap().gap_4().children(cards))
            }
        }
    }

    fn render_note_card(&self, note: &Note, cx: &mut Context<Self>) -> AnyElement {
        let note_id = note.id.clone();
        let is_selected = self.collection.is_selected(&note.id);
        let pin_icon = if note.pinned {
            IconName::PinOff
        } else {
            IconName::Pin
        };
        let open_id = note_id.clone();
        let select_id = note_id.clone();
        let pin_id = note_id.clone();
        let pin_next = !note.pinned;
        let delete_id = note_id.clone();
        let delete_title = note.title.clone();

        div()
            .id(SharedString::from(format!("note-card-{note_id}")))
            .w(px(NOTE_CARD_WIDTH))
            .h(px(NOTE_CARD_HEIGHT))
            .v_flex()
            .gap_1()
            .p_3()
            .rounded_lg()
            .border_1()
            .border_color(if is_selected {
                cx.theme().primary
            } else {
                cx.theme().border
            })
            .bg(cx.theme().secondary)
            .hover(|this| this.border_color(cx.theme().primary.opacity(0.65)))
            .cursor_pointer()
            .on_click(cx.listener(move |this, _, window, cx| {
                this.open_editor_for(&open_id, window, cx);
            }))
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Checkbox::new(SharedString::from(format!("note-select-{note_id}")))
                            .checked(is_selected)
                            .on_click(cx.listener(move |this, _: &bool, _, cx| {
                                this.collection.toggle_selected(&select_id);
                                cx.stop_propagation();
                                cx.notify();
                            })),
                    )
                    .child(
                        div()
                            .flex_1()
                            .text_sm()
                            .font_semibold()
                            .text_color(cx.theme().foreground)
                            .truncate()
                            .child(note.title.clone()),
                    )
                    .child(
                        Button::new(SharedString::from(format!("note-pin-{note_id}")))
                            .ghost()
                            .small()
                            .icon(Icon::new(pin_icon).size_4().text_color(if note.pinned {
                                cx.theme().primary
                            } else {
                                cx.theme().muted_foreground
                            }))
                            .on_click(cx.listener(move |this, _, _, cx| {
                                cx.stop_propagation();
                                this.toggle_pin(pin_id.clone(), pin_next, cx);
                            })),
                    )
                    .child(
                        Button::new(SharedString::from(format!("note-delete-{note_id}")))
                            .ghost()
                            .small()
                            .icon(
                                Icon::new(IconName::Trash)
                                    .size_4()
                                    .text_color(cx.theme().muted_foreground),
                            )
                            .on_click(cx.listener(move |this, _, _, cx| {
                                cx.stop_propagation();
                                this.delete_confirm = Some(DeleteTarget::Single {
                                    id: delete_id.clone(),
                                    title: delete_title.clone(),
                                });
                                cx.notify();
                            })),
                    ),
            )
            .when_some(
                note.display_date().map(Self::format_note_date),
                |this, date| {
                    this.child(
                        div()
                            .text_xs()
                            .text_color(cx.theme().muted_foreground)
                            .child(date),
                    )
                },
            )
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(Self::content_preview(&note.content)),
            )
            .into_any_element()
    }

    fn content_preview(content: &str) -> String {
        const PREVIEW_CHARS: usize = 180;
        let trimmed = content.trim();
        if trimmed.chars().count() <= PREVIEW_CHARS {
            return trimmed.to_string();
        }
        let mut preview: String = trimmed.chars().take(PREVIEW_CHARS).collect();
        preview.push('…');
        preview
    }

    fn render_delete_confirm_dialog(&self, cx: &mut Context<Self>) -> Option<AnyElement> {
        let target = self.delete_confirm.as_ref()?;
        let i18n = self.i18n();

        let title = match target {
            DeleteTarget::Single { title, .. } => i18n.delete_confirm(title),
            DeleteTarget::Selection => {
                i18n.delete_confirm(&i18n.selected_count(self.collection.selected_count()))
            }
        };

        Some(
            div()
                .id("delete-confirm-overlay")
                .absolute()
                .top_0()
                .left_0()
                .right_0()
                .bottom_0()
                .bg(cx.theme().background.opacity(0.45))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| {
                        this.close_delete_confirm(cx);
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
                                .id("delete-confirm-dialog")
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
                                        .text_base()
                                        .text_color(cx.theme().foreground)
                                        .child(title),
                                )
                                .child(
                                    div()
                                        .w_full()
                                        .flex()
                                        .justify_end()
                                        .gap_2()
                                        .child(
                                            Button::new("delete-cancel")
                                                .ghost()
                                                .small()
                                                .label(i18n.cancel_button)
                                                .on_click(cx.listener(|this, _, _, cx| {
                                                    this.close_delete_confirm(cx);
                                                })),
                                        )
                                        .child(
                                            Button::new("delete-confirm")
                                                .outline()
                                                .small()
                                                .icon(
                                                    Icon::new(IconName::Trash)
                                                        .text_color(gpui::rgb(ERROR_TEXT_COLOR)),
                                                )
                                                .label(i18n.delete_button)
                                                .on_click(cx.listener(|this, _, _, cx| {
                                                    this.confirm_delete(cx);
                                                })),
                                        ),
                                ),
                        ),
                )
                .into_any_element(),
        )
    }

    fn close_delete_confirm(&mut self, cx: &mut Context<Self>) {
        if self.delete_confirm.take().is_some() {
            self.needs_root_refocus = true;
            cx.notify();
        }
    }

    fn confirm_delete(&mut self, cx: &mut Context<Self>) {
        let Some(target) = self.delete_confirm.take() else {
            return;
        };
        match target {
            DeleteTarget::Single { id, .. } => self.delete_note(id, cx),
            DeleteTarget::Selection => self.bulk_delete_selected(cx),
        }
        cx.notify();
    }
}
