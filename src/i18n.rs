use serde::Deserialize;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Language {
    ZhCn,
    EnUs,
}

impl Language {
    pub fn detect() -> Self {
        if let Some(locale_tag) = sys_locale::get_locale() {
            return Self::from_locale_tag(&locale_tag);
        }

        Self::EnUs
    }

    fn from_locale_tag(raw: &str) -> Self {
        let tag = raw.trim().to_ascii_lowercase();
        if tag.is_empty() {
            return Self::EnUs;
        }

        if tag.starts_with("zh") || tag.contains("-zh") || tag.contains("_zh") {
            return Self::ZhCn;
        }

        Self::EnUs
    }

    fn file_name(self) -> &'static str {
        match self {
            Self::ZhCn => "zh_CN.json",
            Self::EnUs => "en_US.json",
        }
    }
}

macro_rules! locale_message_fields {
    ($macro:ident) => {
        $macro! {
            app_tagline,
            get_started_button,
            back_to_dashboard,
            tab_all_notes,
            tab_important,
            search_placeholder,
            add_note_button,
            select_all_button,
            deselect_all_button,
            bulk_delete_button,
            selected_count_label,
            no_notes_found,
            loading_notes,
            retry_button,
            title_prompt_title,
            title_prompt_placeholder,
            title_prompt_next_button,
            cancel_button,
            close_button,
            editor_title_placeholder,
            editor_content_placeholder,
            editor_mode_text,
            editor_mode_math,
            create_button,
            update_button,
            download_button,
            show_preview_button,
            hide_preview_button,
            validation_required,
            save_failed_fallback,
            delete_failed_fallback,
            pin_failed_fallback,
            load_failed_fallback,
            delete_confirm_title,
            delete_button,
            pin_tooltip,
            unpin_tooltip,
            bulk_delete_summary,
            math_symbols_heading,
            chemistry_symbols_heading,
            link_prompt_title,
            link_prompt_placeholder,
            insert_button,
            export_saved,
            export_no_renderer,
            export_failed_fallback,
        }
    };
}

macro_rules! define_raw_locale_messages {
    ($($field:ident),+ $(,)?) => {
        #[derive(Debug, Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawLocaleMessages {
            $(
                $field: String,
            )+
        }
    };
}

macro_rules! define_locale_messages {
    ($($field:ident),+ $(,)?) => {
        #[derive(Debug)]
        pub struct LocaleMessages {
            $(
                pub $field: &'static str,
            )+
        }
    };
}

macro_rules! impl_from_raw_locale_messages {
    ($($field:ident),+ $(,)?) => {
        impl From<RawLocaleMessages> for LocaleMessages {
            fn from(raw: RawLocaleMessages) -> Self {
                Self {
                    $(
                        $field: leak_str(raw.$field),
                    )+
                }
            }
        }
    };
}

locale_message_fields!(define_raw_locale_messages);
locale_message_fields!(define_locale_messages);
locale_message_fields!(impl_from_raw_locale_messages);

fn leak_str(value: String) -> &'static str {
    Box::leak(value.into_boxed_str())
}

static ZH_CN_MESSAGES: OnceLock<LocaleMessages> = OnceLock::new();
static EN_US_MESSAGES: OnceLock<LocaleMessages> = OnceLock::new();

#[derive(Clone, Copy, Debug)]
pub struct I18n {
    messages: &'static LocaleMessages,
}

impl I18n {
    pub fn new(lang: Language) -> Self {
        Self {
            messages: messages_for(lang),
        }
    }

    pub fn selected_count(self, count: usize) -> String {
        format_template(self.selected_count_label, &[("count", count.to_string())])
    }

    pub fn delete_confirm(self, title: &str) -> String {
        format_template(self.delete_confirm_title, &[("title", title.to_string())])
    }

    pub fn bulk_delete_failures(self, failed: usize, total: usize) -> String {
        format_template(
            self.bulk_delete_summary,
            &[("failed", failed.to_string()), ("total", total.to_string())],
        )
    }

    pub fn export_saved_to(self, path: &Path) -> String {
        format_template(
            self.export_saved,
            &[("path", path.to_string_lossy().to_string())],
        )
    }
}

impl Deref for I18n {
    type Target = LocaleMessages;

    fn deref(&self) -> &Self::Target {
        self.messages
    }
}

fn messages_for(lang: Language) -> &'static LocaleMessages {
    match lang {
        Language::ZhCn => ZH_CN_MESSAGES.get_or_init(|| load_messages(Language::ZhCn)),
        Language::EnUs => EN_US_MESSAGES.get_or_init(|| load_messages(Language::EnUs)),
    }
}

fn load_messages(lang: Language) -> LocaleMessages {
    match try_load_messages(lang) {
        Ok(messages) => messages,
        Err(primary_err) => {
            crate::debug_log!(
                "[i18n] failed to load {}: {}",
                lang.file_name(),
                primary_err
            );

            if lang == Language::EnUs {
                panic!(
                    "failed to load i18n file {}: {}",
                    lang.file_name(),
                    primary_err
                );
            }

            match try_load_messages(Language::EnUs) {
                Ok(messages) => messages,
                Err(fallback_err) => panic!(
                    "failed to load i18n files {} ({}) and {} ({})",
                    lang.file_name(),
                    primary_err,
                    Language::EnUs.file_name(),
                    fallback_err
                ),
            }
        }
    }
}

fn try_load_messages(lang: Language) -> Result<LocaleMessages, String> {
    let (path, raw) = load_locale_file(lang.file_name())?;
    crate::debug_log!(
        "[i18n] loading locale {} from {}",
        lang.file_name(),
        path.display()
    );

    serde_json::from_str::<RawLocaleMessages>(&raw)
        .map(LocaleMessages::from)
        .map_err(|err| format!("{} parse failed: {}", path.display(), err))
}

fn load_locale_file(file_name: &str) -> Result<(PathBuf, String), String> {
    let candidates = collect_i18n_dirs();
    for dir in &candidates {
        let path = dir.join(file_name);
        if !path.is_file() {
            continue;
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|err| format!("{} read failed: {}", path.display(), err))?;
        return Ok((path, raw));
    }

    let searched = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(format!(
        "{} not found; searched directories: {}",
        file_name, searched
    ))
}

fn app_resources_i18n_dir(current_exe: &Path) -> Option<PathBuf> {
    let macos_dir = current_exe.parent()?;
    if macos_dir.file_name()?.to_string_lossy() != "MacOS" {
        return None;
    }
    let contents_dir = macos_dir.parent()?;
    if contents_dir.file_name()?.to_string_lossy() != "Contents" {
        return None;
    }

    Some(contents_dir.join("Resources").join("i18n"))
}

fn push_i18n_dir(
    candidates: &mut Vec<PathBuf>,
    seen: &mut std::collections::HashSet<PathBuf>,
    candidate: PathBuf,
) {
    if candidate.as_os_str().is_empty() {
        return;
    }

    let normalized = if candidate.exists() {
        candidate.canonicalize().unwrap_or(candidate)
    } else if candidate.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&candidate))
            .unwrap_or(candidate)
    } else {
        candidate
    };

    if seen.insert(normalized.clone()) {
        candidates.push(normalized);
    }
}

fn collect_i18n_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    let mut seen = std::collections::HashSet::new();

    if let Ok(current_exe) = std::env::current_exe() {
        if let Some(resources_i18n_dir) = app_resources_i18n_dir(&current_exe) {
            push_i18n_dir(&mut candidates, &mut seen, resources_i18n_dir);
        }

        if let Some(exe_dir) = current_exe.parent() {
            for ancestor in exe_dir.ancestors().take(6) {
                push_i18n_dir(
                    &mut candidates,
                    &mut seen,
                    ancestor.join("assets").join("i18n"),
                );
                push_i18n_dir(&mut candidates, &mut seen, ancestor.join("i18n"));
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        push_i18n_dir(
            &mut candidates,
            &mut seen,
            PathBuf::from("/usr/lib/knotes/i18n"),
        );
        push_i18n_dir(
            &mut candidates,
            &mut seen,
            PathBuf::from("/usr/local/lib/knotes/i18n"),
        );
    }

    if let Ok(current_dir) = std::env::current_dir() {
        push_i18n_dir(
            &mut candidates,
            &mut seen,
            current_dir.join("assets").join("i18n"),
        );
        push_i18n_dir(&mut candidates, &mut seen, current_dir.join("i18n"));
    }

    push_i18n_dir(&mut candidates, &mut seen, PathBuf::from("./assets/i18n"));

    candidates
}

fn format_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut output = template.to_string();
    for (key, value) in vars {
        let token = format!("{{{key}}}");
        output = output.replace(&token, value);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tag_detection() {
        assert_eq!(Language::from_locale_tag("zh-CN"), Language::ZhCn);
        assert_eq!(Language::from_locale_tag("zh_TW"), Language::ZhCn);
        assert_eq!(Language::from_locale_tag("en-US"), Language::EnUs);
        assert_eq!(Language::from_locale_tag(""), Language::EnUs);
    }

    #[test]
    fn template_substitution() {
        assert_eq!(
            format_template("{count} selected", &[("count", "3".to_string())]),
            "3 selected"
        );
        assert_eq!(
            format_template(
                "{failed} of {total} failed",
                &[("failed", "1".to_string()), ("total", "4".to_string())]
            ),
            "1 of 4 failed"
        );
    }
}
