//! Addressable units of quest content.

use crate::{Choice, sanitize};
use derive_getters::Getters;
use derive_setters::Setters;

/// One narrative node with its own anchor identifier.
///
/// The identifier is sanitized on every assignment and can only be changed
/// through [`QuestGraph`](crate::QuestGraph), which keeps it unique. All other
/// fields are free to edit in place.
///
/// # Examples
///
/// ```
/// use questsmith_core::{Choice, Node};
///
/// let mut node = Node::new("Village Square", "");
/// node.set_scene("Market day").set_notes("Busy");
/// node.push_choice(Choice::new("Leave", "end"));
///
/// assert_eq!(node.id(), "village-square");
/// assert_eq!(node.display_title(), "village-square");
/// assert_eq!(node.choices().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Setters)]
#[setters(prefix = "set_", borrow_self, into)]
pub struct Node {
    /// Anchor identifier, unique within the owning graph
    #[setters(skip)]
    id: String,
    /// Heading of the node section
    title: String,
    /// Where the scene plays
    scene: String,
    /// Spoken lines, rendered preformatted
    dialog: String,
    /// Free-text body
    content: String,
    /// Bulleted "important information" items
    info_items: Vec<String>,
    /// Technical flags the node touches
    tech_flags: Vec<String>,
    /// Possible outcomes noted by the author
    outcomes: Vec<String>,
    /// Author notes
    notes: String,
    /// Outgoing edges in display order
    choices: Vec<Choice>,
}

impl Node {
    /// Creates an empty node. The id is sanitized.
    pub fn new(id: &str, title: impl Into<String>) -> Self {
        Self {
            id: sanitize(id),
            title: title.into(),
            scene: String::new(),
            dialog: String::new(),
            content: String::new(),
            info_items: Vec::new(),
            tech_flags: Vec::new(),
            outcomes: Vec::new(),
            notes: String::new(),
            choices: Vec::new(),
        }
    }

    /// Replaces the choices, consuming and returning the node.
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    /// Title for headings and navigation; falls back to the id when blank.
    pub fn display_title(&self) -> &str {
        match self.title.trim() {
            "" => &self.id,
            title => title,
        }
    }

    /// Appends a choice.
    pub fn push_choice(&mut self, choice: Choice) -> &mut Self {
        self.choices.push(choice);
        self
    }

    /// Removes and returns the choice at `index`, if present.
    pub fn remove_choice(&mut self, index: usize) -> Option<Choice> {
        (index < self.choices.len()).then(|| self.choices.remove(index))
    }

    /// Ids of every choice target, in order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|choice| choice.target().as_str())
    }

    pub(crate) fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    pub(crate) fn choices_mut(&mut self) -> &mut [Choice] {
        &mut self.choices
    }
}
