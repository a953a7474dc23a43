//! This module contains the data structures shared by the tree builder, the
//! evaluation harness and the dataset loader.

use std::fmt;

/// The tipping state of a balance scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    Right,
    Left,
    Balanced,
}

impl Label {
    /// Every label, in the order used for tie-breaking and reporting.
    pub const ALL: [Label; 3] = [Label::Right, Label::Left, Label::Balanced];

    /// Parses a single-character label code (`"R"`, `"L"`, `"B"`).
    /// Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "R" => Some(Label::Right),
            "L" => Some(Label::Left),
            "B" => Some(Label::Balanced),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Label::Right => 'R',
            Label::Left => 'L',
            Label::Balanced => 'B',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Label::Right => "RIGHT",
            Label::Left => "LEFT",
            Label::Balanced => "BALANCED",
        }
    }

    fn index(self) -> usize {
        match self {
            Label::Right => 0,
            Label::Left => 1,
            Label::Balanced => 2,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A labeled balance-scale configuration. Immutable once built.
///
/// There is intentionally no `PartialEq`: the only comparison the tree builder
/// needs between records is [`Record::same_label`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    label: Label,
    left_weight: i64,
    left_distance: i64,
    right_weight: i64,
    right_distance: i64,
}

impl Record {
    pub fn new(
        label: Label,
        left_weight: i64,
        left_distance: i64,
        right_weight: i64,
        right_distance: i64,
    ) -> Self {
        Record { label, left_weight, left_distance, right_weight, right_distance }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn left_weight(&self) -> i64 {
        self.left_weight
    }

    pub fn left_distance(&self) -> i64 {
        self.left_distance
    }

    pub fn right_weight(&self) -> i64 {
        self.right_weight
    }

    pub fn right_distance(&self) -> i64 {
        self.right_distance
    }

    /// Two records are considered equal for stopping purposes when they share
    /// a label, whatever their attribute values.
    pub fn same_label(&self, other: &Record) -> bool {
        self.label == other.label
    }
}

/// A named projection from a [`Record`] to one of its numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    LeftWeight,
    LeftDistance,
    RightWeight,
    RightDistance,
}

impl Attribute {
    /// The fixed candidate pool for splitting.
    pub const ALL: [Attribute; 4] = [
        Attribute::LeftWeight,
        Attribute::LeftDistance,
        Attribute::RightWeight,
        Attribute::RightDistance,
    ];

    pub fn project(self, record: &Record) -> i64 {
        match self {
            Attribute::LeftWeight => record.left_weight,
            Attribute::LeftDistance => record.left_distance,
            Attribute::RightWeight => record.right_weight,
            Attribute::RightDistance => record.right_distance,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Attribute::LeftWeight => "left_weight",
            Attribute::LeftDistance => "left_distance",
            Attribute::RightWeight => "right_weight",
            Attribute::RightDistance => "right_distance",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-label tallies. Every label is present, even with a zero count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    counts: [usize; 3],
}

impl ClassCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, label: Label) {
        self.counts[label.index()] += 1;
    }

    pub fn get(&self, label: Label) -> usize {
        self.counts[label.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Counts in [`Label::ALL`] order.
    pub fn values(&self) -> [usize; 3] {
        self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (Label, usize)> + '_ {
        Label::ALL.into_iter().map(move |label| (label, self.get(label)))
    }

    /// The label with the highest count; ties go to the earliest label in
    /// [`Label::ALL`]. With all counts at zero this is `Label::Right`.
    pub fn majority(&self) -> Label {
        let mut best = Label::ALL[0];
        for label in Label::ALL {
            if self.get(label) > self.get(best) {
                best = label;
            }
        }
        best
    }
}
