impl NotesApp {
    /// Splices a snippet into the content input at the tracked caret.
    fn insert_symbol(&mut self, symbol: Symbol, window: &mut Window, cx: &mut Context<Self>) {
        self.insert_latex(symbol.latex, symbol.wrapping, window, cx);
    }

    fn insert_latex(
        &mut self,
        snippet: &str,
        wrapping: bool,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.editor_open {
            return;
        }

        let buffer = self
            .editor_content_input_state
            .read(cx)
            .value()
            .to_string();
        let caret = latex::clamp_to_char_boundary(&buffer, self.content_caret);
        let insertion = latex::insert_snippet(&buffer, caret, caret, snippet, wrapping);

        self.pending_caret = Some(insertion.caret);
        self.content_caret = insertion.caret;
        let text = insertion.text;
        self.editor_content_input_state.update(cx, |input, cx| {
            input.set_value(text, window, cx);
        });
        self.symbol_popover_open = None;
        self.editor_needs_focus = true;
        cx.notify();
    }

    fn close_symbol_popovers(&mut self, cx: &mut Context<Self>) {
        if self.symbol_popover_open.take().is_some() {
            cx.notify();
        }
    }

    fn open_link_prompt(&mut self, cx: &mut Context<Self>) {
        self.symbol_popover_open = None;
        self.link_prompt_open = true;
        self.link_prompt_needs_focus = true;
        cx.notify();
    }

    fn close_link_prompt(&mut self, cx: &mut Context<Self>) {
        if self.link_prompt_open {
            self.link_prompt_open = false;
            self.editor_needs_focus = true;
            cx.notify();
        }
    }

    fn confirm_link_prompt(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let url = self
            .link_prompt_input_state
            .read(cx)
            .value()
            .trim()
            .to_string();
        if url.is_empty() {
            return;
        }

        self.link_prompt_open = false;
        let snippet = symbols::link_snippet(&url);
        self.insert_latex(&snippet, false, window, cx);
        self.link_prompt_input_state.update(cx, |input, cx| {
            input.set_value("", window, cx);
        });
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> Div {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .child(
                Button::new("toolbar-bold")
                    .ghost()
                    .small()
                    .icon(Icon::new(IconName::Bold).size_4().text_color(cx.theme().foreground))
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.insert_symbol(symbols::BOLD, window, cx);
                    })),
            )
            .child(
                Button::new("toolbar-italic")
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(IconName::Italic)
                            .size_4()
                            .text_color(cx.theme().foreground),
                    )
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.insert_symbol(symbols::ITALIC, window, cx);
                    })),
            )
            .child(
                Button::new("toolbar-link")
                    .ghost()
                    .small()
                    .icon(Icon::new(IconName::Link).size_4().text_color(cx.theme().foreground))
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.open_link_prompt(cx);
                    })),
            )
            .child(div().w(px(1.)).h_4().bg(cx.theme().border))
            .children(
                symbols::SYMBOL_GROUPS
                    .iter()
                    .map(|group| self.render_symbol_group(group, cx)),
            )
    }

    fn render_symbol_group(
        &self,
        group: &'static symbols::SymbolGroup,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let i18n = self.i18n();
        let heading = match group.heading_key {
            GroupHeading::Math => i18n.math_symbols_heading,
            GroupHeading::Chemistry => i18n.chemistry_symbols_heading,
        };
        let (trigger_id, panel_id, popover_id) = match group.heading_key {
            GroupHeading::Math => ("math-symbols-trigger", "math-symbols-panel", "math-symbols"),
            GroupHeading::Chemistry => (
                "chemistry-symbols-trigger",
                "chemistry-symbols-panel",
                "chemistry-symbols",
            ),
        };
        let scroll_handle = match group.heading_key {
            GroupHeading::Math => self.math_symbols_scroll.clone(),
            GroupHeading::Chemistry => self.chemistry_symbols_scroll.clone(),
        };
        let is_open = self.symbol_popover_open == Some(group.heading_key);
        let heading_key = group.heading_key;

        Popover::new(popover_id)
            .anchor(Corner::TopLeft)
            .appearance(false)
            .overlay_closable(false)
            .open(is_open)
            .trigger(
                Button::new(trigger_id)
                    .ghost()
                    .small()
                    .label(heading)
                    .icon(
                        Icon::new(IconName::ChevronDown)
                            .size_4()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.symbol_popover_open = if this.symbol_popover_open == Some(heading_key)
                        {
                            None
                        } else {
                            Some(heading_key)
                        };
                        cx.notify();
                    })),
            )
            .content({
                let app = cx.entity();
                move |_, _window, cx| {
                    Self::render_symbol_panel(panel_id, app.clone(), group, &scroll_handle, cx)
                }
            })
            .into_any_element()
    }

    fn render_symbol_panel(
        panel_id: &'static str,
        app: Entity<NotesApp>,
        group: &'static symbols::SymbolGroup,
        scroll_handle: &ScrollHandle,
        cx: &mut Context<gpui_component::popover::PopoverState>,
    ) -> AnyElement {
        let border = cx.theme().border;
        let foreground = cx.theme().foreground;
        let accent = cx.theme().accent;

        div()
            .id(panel_id)
            .w(px(SYMBOL_PANEL_WIDTH))
            .max_h(px(SYMBOL_PANEL_MAX_HEIGHT))
            .popover_style(cx)
            .p_2()
            .overflow_y_scroll()
            .track_scroll(scroll_handle)
            .child(
                div().flex().flex_wrap().gap_1().children(
                    group.symbols.iter().enumerate().map(|(index, symbol)| {
                        let app = app.clone();
                        div()
                            .id(index)
                            .px_2()
                            .py_1()
                            .rounded_md()
                            .border_1()
                            .border_color(border)
                            .text_sm()
                            .text_color(foreground)
                            .hover(move |this| this.bg(accent))
                            .cursor_pointer()
                            .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                                let _ = app.update(cx, |this, cx| {
                                    this.insert_symbol(*symbol, window, cx);
                                });
                            })
                            .child(symbol.label)
                    }),
                ),
            )
            .into_any_element()
    }

    fn render_link_prompt_dialog(&self, cx: &mut Context<Self>) -> Option<AnyElement> {
        if !self.link_prompt_open {
            return None;
        }
        let i18n = self.i18n();
        let can_insert = !self
            .link_prompt_input_state
            .read(cx)
            .value()
            .trim()
            .is_empty();

        Some(
            div()
                .id("link-prompt-overlay")
                .absolute()
                .top_0()
                .left_0()
                .right_0()
                .bottom_0()
                .bg(cx.theme().background.opacity(0.45))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| {
                        this.close_link_prompt(cx);
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
                                .id("link-prompt-dialog")
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
                                        .child(i18n.link_prompt_title),
                                )
                                .child(Input::new(&self.link_prompt_input_state))
                                .child(
                                    div()
                                        .w_full()
                                        .flex()
                                        .justify_end()
                                        .gap_2()
                                        .child(
                                            Button::new("link-prompt-cancel")
                                                .ghost()
                                                .small()
                                                .label(i18n.cancel_button)
                                                .on_click(cx.listener(|this, _, _, cx| {
                                                    this.close_link_prompt(cx);
                                                })),
                                        )
                                        .child(
                                            Button::new("link-prompt-insert")
                                                .outline()
                                                .small()
                                                .label(i18n.insert_button)
                                                .disabled(!can_insert)
                                                .on_click(cx.listener(|this, _, window, cx| {
                                                    this.confirm_link_prompt(window, cx);
                                                })),
                                        ),
                                ),
                        ),
                )
                .into_any_element(),
        )
    }
}
