impl NotesApp {
    fn render_dashboard(&self, cx: &mut Context<Self>) -> Stateful<Div> {
        let i18n = self.i18n();

        div()
            .id("dashboard")
            .flex_1()
            .v_flex()
            .items_center()
            .justify_center()
            .gap_4()
            .child(
                div()
                    .text_3xl()
                    .font_semibold()
                    .text_color(cx.theme().foreground)
                    .child("kNotes"),
            )
            .child(
                div()
                    .text_lg()
                    .text_color(cx.theme().muted_foreground)
                    .child(i18n.app_tagline),
            )
            .child(
                Button::new("get-started")
                    .outline()
                    .label(i18n.get_started_button)
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.open_notes_screen(cx);
                    })),
            )
    }
}
