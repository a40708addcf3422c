//! Declarative field rules for book payloads

/// Value type a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String with a minimum length in characters
    Text { min_len: usize },
    /// Boolean
    Flag,
}

/// Book field a rule populates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
    Finished,
}

/// Rule for a single payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// JSON property name
    pub name: &'static str,
    pub field: BookField,
    pub kind: FieldKind,
    /// Must be present (non-null, non-empty) when creating
    pub required_on_create: bool,
    /// Message reported when a text value is below `min_len`
    pub too_short: &'static str,
}

/// Minimum length of title and author
pub const MIN_TEXT_LEN: usize = 3;

pub const TITLE: FieldRule = FieldRule {
    name: "title",
    field: BookField::Title,
    kind: FieldKind::Text {
        min_len: MIN_TEXT_LEN,
    },
    required_on_create: true,
    too_short: "Title too short",
};

pub const AUTHOR: FieldRule = FieldRule {
    name: "author",
    field: BookField::Author,
    kind: FieldKind::Text {
        min_len: MIN_TEXT_LEN,
    },
    required_on_create: true,
    too_short: "Author name too short",
};

pub const FINISHED: FieldRule = FieldRule {
    name: "finished",
    field: BookField::Finished,
    kind: FieldKind::Flag,
    required_on_create: false,
    too_short: "",
};

/// Book fields in the order they are checked
pub const BOOK_RULES: [FieldRule; 3] = [TITLE, AUTHOR, FINISHED];
