use chrono::NaiveDate;
use uuid::Uuid;

/// Stable identifier of a note, unique per note for its whole lifetime.
pub type NoteId = Uuid;

/// A free-text entry bound to exactly one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    description: String,
    date: NaiveDate,
}

impl Note {
    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// All notes of the picker, in insertion order.
///
/// Display order is reverse insertion order; the ids carry no ordering.
#[derive(Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        NoteStore::default()
    }

    /// Appends a note for `date` and returns its fresh id.
    ///
    /// A description that is empty after trimming is silently dropped and
    /// `None` is returned, mirroring a submit action that does nothing.
    pub fn add(&mut self, description: &str, date: NaiveDate) -> Option<NoteId> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }

        let id = Uuid::new_v4();
        self.notes.push(Note {
            id,
            description: description.to_owned(),
            date,
        });

        Some(id)
    }

    /// Removes the note with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: NoteId) {
        self.notes.retain(|note| note.id != id);
    }

    /// All notes whose date equals `date`, most recently added first.
    pub fn notes_of_day<'a>(&'a self, date: &NaiveDate) -> impl Iterator<Item = &'a Note> {
        let date = *date;
        self.notes.iter().rev().filter(move |note| note.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn blank_descriptions_are_dropped() {
        let mut store = NoteStore::new();

        assert_eq!(store.add("", date(2024, 3, 5)), None);
        assert_eq!(store.add("  \t ", date(2024, 3, 5)), None);
        assert_eq!(store.notes_of_day(&date(2024, 3, 5)).count(), 0);
    }

    #[test]
    fn descriptions_are_stored_trimmed() {
        let mut store = NoteStore::new();
        store.add("  Buy milk  ", date(2024, 3, 5)).unwrap();

        let note = store.notes_of_day(&date(2024, 3, 5)).next().unwrap();
        assert_eq!(note.description(), "Buy milk");
    }

    #[test]
    fn most_recently_added_listed_first() {
        let mut store = NoteStore::new();
        store.add("Buy milk", date(2024, 3, 5)).unwrap();
        store.add("Call mom", date(2024, 3, 5)).unwrap();

        let descriptions: Vec<_> = store
            .notes_of_day(&date(2024, 3, 5))
            .map(Note::description)
            .collect();

        assert_eq!(descriptions, ["Call mom", "Buy milk"]);
    }

    #[test]
    fn notes_are_partitioned_by_day() {
        let mut store = NoteStore::new();
        store.add("Buy milk", date(2024, 3, 5)).unwrap();
        store.add("Dentist", date(2024, 3, 6)).unwrap();

        let descriptions: Vec<_> = store
            .notes_of_day(&date(2024, 3, 6))
            .map(Note::description)
            .collect();

        assert_eq!(descriptions, ["Dentist"]);
    }

    #[test]
    fn remove_deletes_exactly_one_note() {
        let mut store = NoteStore::new();
        let keep = store.add("Buy milk", date(2024, 3, 5)).unwrap();
        let gone = store.add("Call mom", date(2024, 3, 5)).unwrap();

        store.remove(gone);

        let ids: Vec<_> = store.notes_of_day(&date(2024, 3, 5)).map(Note::id).collect();
        assert_eq!(ids, [keep]);
    }

    #[test]
    fn removing_an_unknown_id_is_a_noop() {
        let mut store = NoteStore::new();
        store.add("Buy milk", date(2024, 3, 5)).unwrap();

        store.remove(Uuid::new_v4());

        assert_eq!(store.notes_of_day(&date(2024, 3, 5)).count(), 1);
    }
}
