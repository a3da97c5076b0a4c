//! Note records as served by the REST backend, plus the in-memory
//! collection and selection logic behind the grid.

use serde::{Deserialize, Serialize};

pub type NoteId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

impl Note {
    /// The timestamp shown on a card, preferring the last edit.
    pub fn display_date(&self) -> Option<&str> {
        self.updated_at
            .as_deref()
            .or(self.created_at.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Which tab of the grid is active.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum NoteTab {
    #[default]
    All,
    Important,
}

/// Fields of a new or edited note as gathered from the editor inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// A draft is savable only when both fields carry non-whitespace text.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

/// The ordered note list plus the multi-select state over it.
///
/// Order is server order with one local rule: newly created notes are
/// prepended, updates replace in place without reordering.
#[derive(Debug, Default)]
pub struct NotesCollection {
    notes: Vec<Note>,
    selected: Vec<NoteId>,
}

impl NotesCollection {
    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.prune_selection();
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Inserts a freshly created note at the front of the list.
    pub fn prepend(&mut self, note: Note) {
        self.notes.insert(0, note);
    }

    /// Replaces the note with a matching id, keeping its position. A note
    /// the server returned for an id we no longer hold is dropped.
    pub fn replace(&mut self, note: Note) {
        if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *slot = note;
        }
    }

    /// Applies the note a save returned: created notes go to the front,
    /// updated ones keep their slot.
    pub fn apply_saved(&mut self, note: Note, is_create: bool) {
        if is_create {
            self.prepend(note);
        } else {
            self.replace(note);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.notes.retain(|n| n.id != id);
        self.selected.retain(|sel| sel != id);
    }

    pub fn set_pinned(&mut self, id: &str, pinned: bool) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.pinned = pinned;
        }
    }

    /// Notes visible for `tab` after applying the search query. Matching is
    /// case-insensitive over title and content; a blank query matches all.
    pub fn filtered(&self, tab: NoteTab, query: &str) -> Vec<&Note> {
        let needle = query.trim().to_lowercase();
        self.notes
            .iter()
            .filter(|n| match tab {
                NoteTab::All => true,
                NoteTab::Important => n.pinned,
            })
            .filter(|n| {
                needle.is_empty()
                    || n.title.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn selected_ids(&self) -> &[NoteId] {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|sel| sel == id)
    }

    /// Toggles one note in and out of the selection, preserving the order
    /// in which notes were selected.
    pub fn toggle_selected(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|sel| sel == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Select-all over the whole collection, or clear if everything is
    /// already selected.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.notes.iter().map(|n| n.id.clone()).collect();
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.notes.is_empty() && self.selected.len() == self.notes.len()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Drops selected ids that no longer name a note.
    fn prune_selection(&mut self) {
        self.selected
            .retain(|sel| self.notes.iter().any(|n| &n.id == sel));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str, pinned: bool) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: format!("{title} body"),
            pinned,
            created_at: Some("2024-01-01T00:00:00.000Z".to_string()),
            updated_at: None,
        }
    }

    fn collection() -> NotesCollection {
        let mut c = NotesCollection::default();
        c.replace_all(vec![
            note("a", "Alpha", true),
            note("b", "Beta", false),
            note("c", "Gamma", true),
        ]);
        c
    }

    #[test]
    fn deserializes_backend_shape() {
        let raw = r#"{
            "_id": "65f0",
            "title": "Integrals",
            "content": "\\int x dx",
            "pinned": true,
            "createdAt": "2024-03-12T09:30:00.000Z",
            "updatedAt": "2024-03-13T10:00:00.000Z"
        }"#;
        let parsed: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.id, "65f0");
        assert!(parsed.pinned);
        assert_eq!(parsed.display_date(), Some("2024-03-13T10:00:00.000Z"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let parsed: Note =
            serde_json::from_str(r#"{"_id": "1", "title": "t", "content": "c"}"#).unwrap();
        assert!(!parsed.pinned);
        assert_eq!(parsed.display_date(), None);
    }

    #[test]
    fn prepend_puts_new_note_first() {
        let mut c = collection();
        c.prepend(note("d", "Delta", false));
        assert_eq!(c.notes()[0].id, "d");
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn replace_keeps_position() {
        let mut c = collection();
        let mut updated = note("b", "Beta v2", false);
        updated.updated_at = Some("2024-02-01T00:00:00.000Z".to_string());
        c.replace(updated);
        assert_eq!(c.notes()[1].title, "Beta v2");
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn replace_unknown_id_is_dropped() {
        let mut c = collection();
        c.replace(note("zz", "Ghost", false));
        assert_eq!(c.len(), 3);
        assert!(c.get("zz").is_none());
    }

    #[test]
    fn remove_also_deselects() {
        let mut c = collection();
        c.toggle_selected("b");
        c.remove("b");
        assert_eq!(c.len(), 2);
        assert_eq!(c.selected_count(), 0);
    }

    #[test]
    fn important_tab_filters_pinned() {
        let c = collection();
        let important: Vec<_> = c
            .filtered(NoteTab::Important, "")
            .iter()
            .map(|n| n.id.clone())
            .collect();
        assert_eq!(important, vec!["a", "c"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let c = collection();
        assert_eq!(c.filtered(NoteTab::All, "ALPHA").len(), 1);
        assert_eq!(c.filtered(NoteTab::All, "beta body").len(), 1);
        assert_eq!(c.filtered(NoteTab::All, "nothing").len(), 0);
        assert_eq!(c.filtered(NoteTab::All, "   ").len(), 3);
    }

    #[test]
    fn selection_preserves_toggle_order() {
        let mut c = collection();
        c.toggle_selected("c");
        c.toggle_selected("a");
        assert_eq!(c.selected_ids(), ["c".to_string(), "a".to_string()]);

        c.toggle_selected("c");
        assert_eq!(c.selected_ids(), ["a".to_string()]);
    }

    #[test]
    fn select_all_toggles_between_full_and_empty() {
        let mut c = collection();
        c.toggle_select_all();
        assert!(c.all_selected());
        c.toggle_select_all();
        assert_eq!(c.selected_count(), 0);

        // Partial selection toggles up to full, not down to empty.
        c.toggle_selected("b");
        c.toggle_select_all();
        assert!(c.all_selected());
    }

    #[test]
    fn saved_create_lands_first_saved_update_stays_put() {
        let mut c = collection();
        c.apply_saved(note("d", "Delta", false), true);
        assert_eq!(c.notes()[0].id, "d");

        c.apply_saved(note("b", "Beta v2", false), false);
        assert_eq!(c.notes()[2].id, "b");
        assert_eq!(c.notes()[2].title, "Beta v2");
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn bulk_delete_sweep_empties_selection_despite_failures() {
        let mut c = collection();
        c.toggle_selected("a");
        c.toggle_selected("b");
        c.toggle_selected("c");

        // Only "a" and "c" came back deleted; "b" failed on the server.
        c.remove("a");
        c.remove("c");
        c.clear_selection();

        assert_eq!(c.selected_count(), 0);
        assert!(c.get("b").is_some());
    }

    #[test]
    fn replace_all_prunes_stale_selection() {
        let mut c = collection();
        c.toggle_selected("a");
        c.toggle_selected("b");
        c.replace_all(vec![note("b", "Beta", false)]);
        assert_eq!(c.selected_ids(), ["b".to_string()]);
    }

    #[test]
    fn draft_validation_requires_both_fields() {
        assert!(!NoteDraft::default().is_valid());
        assert!(
            !NoteDraft {
                title: "t".into(),
                content: "   ".into()
            }
            .is_valid()
        );
        assert!(
            NoteDraft {
                title: "t".into(),
                content: "c".into()
            }
            .is_valid()
        );
    }
}
