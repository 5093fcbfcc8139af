//! Dialogue box - scrolling text pages with an optional choice menu.
//!
//! State machine: Closed -> Showing(pages, cursor) -> optional
//! AwaitingChoice(options, selected) -> Closed. Confirm is two-stage while
//! text is revealing: the first press completes the current page, the next
//! one acts (resolves the choice, turns the page, or closes). An optional
//! on-close key fires when the box closes normally; cancelling discards it
//! along with any pending choice.

use crate::events::EventKey;
use hustle_logic::constants::dialogue::{LINE_CHARS, LINES_PER_PAGE};
use hustle_logic::wrap::paginate;

/// A choice menu shown alongside the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSet {
    pub options: Vec<(String, EventKey)>,
    pub selected: usize,
}

/// What a confirm press resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirm {
    /// Reveal completed or page turned; nothing to dispatch.
    Consumed,
    /// A menu option was committed.
    Choice(EventKey),
    /// The box closed; the carried key (if any) should be dispatched.
    Closed(Option<EventKey>),
}

/// Read-only view of the box for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueView {
    pub text: String,
    pub choices: Option<(Vec<String>, usize)>,
}

#[derive(Debug, Clone, Default)]
pub struct DialogueBox {
    pages: Vec<String>,
    page: usize,
    cursor: f32,
    scrolling: bool,
    choices: Option<ChoiceSet>,
    on_close: Option<EventKey>,
    open: bool,
}

impl DialogueBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with wrapped, paginated text and start the typewriter reveal.
    pub fn open_text(&mut self, text: &str) {
        self.open_with(text, None);
    }

    /// Like [`DialogueBox::open_text`], additionally carrying a key to fire
    /// once the box is dismissed.
    pub fn open_with(&mut self, text: &str, on_close: Option<EventKey>) {
        self.pages = paginate(text, LINE_CHARS, LINES_PER_PAGE);
        self.page = 0;
        self.cursor = 0.0;
        self.scrolling = true;
        self.choices = None;
        self.on_close = on_close;
        self.open = true;
    }

    /// Attach a choice menu. Ignored when empty.
    pub fn set_choices(&mut self, options: Vec<(String, EventKey)>) {
        if !options.is_empty() {
            self.choices = Some(ChoiceSet {
                options,
                selected: 0,
            });
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn has_choices(&self) -> bool {
        self.choices.is_some()
    }

    fn current_page(&self) -> &str {
        self.pages.get(self.page).map(String::as_str).unwrap_or("")
    }

    /// Advance the typewriter reveal by `chars` characters.
    pub fn tick(&mut self, chars: f32) {
        if !self.open || !self.scrolling {
            return;
        }
        self.cursor += chars;
        if self.cursor.round() as usize >= self.current_page().chars().count() {
            self.finish_reveal();
        }
    }

    fn finish_reveal(&mut self) {
        self.scrolling = false;
        self.cursor = self.current_page().chars().count() as f32;
    }

    /// The currently revealed portion of the page.
    pub fn visible_text(&self) -> String {
        let shown = self.cursor.round() as usize;
        self.current_page().chars().take(shown).collect()
    }

    /// Snapshot for the presentation layer; `None` while closed.
    pub fn view(&self) -> Option<DialogueView> {
        if !self.open {
            return None;
        }
        Some(DialogueView {
            text: self.visible_text(),
            choices: self.choices.as_ref().map(|set| {
                (
                    set.options.iter().map(|(label, _)| label.clone()).collect(),
                    set.selected,
                )
            }),
        })
    }

    /// Move the selection up, saturating at the first option.
    pub fn choice_up(&mut self) {
        if let Some(set) = &mut self.choices {
            set.selected = set.selected.saturating_sub(1);
        }
    }

    /// Move the selection down, saturating at the last option.
    pub fn choice_down(&mut self) {
        if let Some(set) = &mut self.choices {
            set.selected = (set.selected + 1).min(set.options.len() - 1);
        }
    }

    /// Handle a confirm press.
    pub fn confirm(&mut self) -> Confirm {
        if !self.open {
            return Confirm::Consumed;
        }

        if self.scrolling {
            self.finish_reveal();
            return Confirm::Consumed;
        }

        if let Some(set) = self.choices.take() {
            let key = set.options[set.selected].1.clone();
            self.dismiss();
            return Confirm::Choice(key);
        }

        if self.page + 1 < self.pages.len() {
            self.page += 1;
            self.cursor = 0.0;
            self.scrolling = true;
            return Confirm::Consumed;
        }

        let key = self.on_close.take();
        self.dismiss();
        Confirm::Closed(key)
    }

    /// Close immediately, discarding any pending choice and on-close key.
    /// Used for the escape/abort path - nothing is committed.
    pub fn dismiss(&mut self) {
        self.pages.clear();
        self.page = 0;
        self.cursor = 0.0;
        self.scrolling = false;
        self.choices = None;
        self.on_close = None;
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Category;

    fn reveal_all(dialogue: &mut DialogueBox) {
        dialogue.tick(10_000.0);
    }

    #[test]
    fn test_two_stage_confirm() {
        let mut dialogue = DialogueBox::new();
        dialogue.open_text("short line");
        dialogue.tick(3.0);
        assert_eq!(dialogue.visible_text(), "sho");

        // First press completes the reveal instead of closing.
        assert_eq!(dialogue.confirm(), Confirm::Consumed);
        assert_eq!(dialogue.visible_text(), "short line");
        assert!(dialogue.is_open());

        // Second press closes.
        assert_eq!(dialogue.confirm(), Confirm::Closed(None));
        assert!(!dialogue.is_open());
    }

    #[test]
    fn test_pages_advance_one_per_confirm() {
        let mut dialogue = DialogueBox::new();
        // Four wrapped lines -> two pages at three lines per page.
        dialogue.open_text("one\ntwo\nthree\nfour");
        reveal_all(&mut dialogue);

        assert_eq!(dialogue.visible_text(), "one\ntwo\nthree");
        assert_eq!(dialogue.confirm(), Confirm::Consumed);

        reveal_all(&mut dialogue);
        assert_eq!(dialogue.visible_text(), "four");
        assert_eq!(dialogue.confirm(), Confirm::Closed(None));
    }

    #[test]
    fn test_choice_navigation_saturates() {
        let mut dialogue = DialogueBox::new();
        dialogue.open_text("pick one");
        dialogue.set_choices(vec![
            ("A".to_string(), EventKey::parse("comp_sci-2")),
            ("B".to_string(), EventKey::parse("comp_sci-3")),
            ("C".to_string(), EventKey::parse("exit")),
        ]);
        reveal_all(&mut dialogue);

        dialogue.choice_up();
        assert_eq!(dialogue.view().unwrap().choices.unwrap().1, 0);

        dialogue.choice_down();
        dialogue.choice_down();
        dialogue.choice_down();
        assert_eq!(dialogue.view().unwrap().choices.unwrap().1, 2);
    }

    #[test]
    fn test_choice_resolves_to_its_key() {
        let mut dialogue = DialogueBox::new();
        dialogue.open_text("study how long?");
        dialogue.set_choices(vec![
            ("2 hours".to_string(), EventKey::parse("comp_sci-2")),
            ("3 hours".to_string(), EventKey::parse("comp_sci-3")),
        ]);
        reveal_all(&mut dialogue);
        dialogue.choice_down();

        match dialogue.confirm() {
            Confirm::Choice(key) => {
                assert_eq!(key.category, Category::Study);
                assert_eq!(key.args, vec!["3"]);
            }
            other => panic!("Expected Choice, got {:?}", other),
        }
        assert!(!dialogue.is_open());
    }

    #[test]
    fn test_on_close_key_fires_on_normal_close() {
        let mut dialogue = DialogueBox::new();
        dialogue.open_with("done", Some(EventKey::parse("exit")));
        reveal_all(&mut dialogue);

        assert_eq!(
            dialogue.confirm(),
            Confirm::Closed(Some(EventKey::parse("exit")))
        );
    }

    #[test]
    fn test_dismiss_discards_choice_and_close_key() {
        let mut dialogue = DialogueBox::new();
        dialogue.open_with("sure?", Some(EventKey::parse("accomodation-sleep")));
        dialogue.set_choices(vec![("Yes".to_string(), EventKey::parse("accomodation-sleep"))]);
        reveal_all(&mut dialogue);

        dialogue.dismiss();
        assert!(!dialogue.is_open());
        // Reopening and closing normally must not fire the discarded key.
        dialogue.open_text("hi");
        reveal_all(&mut dialogue);
        assert_eq!(dialogue.confirm(), Confirm::Closed(None));
    }

    #[test]
    fn test_long_text_wraps_to_line_budget() {
        let mut dialogue = DialogueBox::new();
        let long = "a".repeat(80);
        dialogue.open_text(&long);
        reveal_all(&mut dialogue);

        for line in dialogue.visible_text().lines() {
            assert!(line.chars().count() <= 35);
        }
    }
}
