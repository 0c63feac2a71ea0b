use serde::{Deserialize, Serialize};

/// Travel direction of the active service relative to stored station order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Direction {
    #[default]
    Forward,
    Reversed,
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        if value == 1 { Self::Reversed } else { Self::Forward }
    }
}

impl From<Direction> for u8 {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Forward => 0,
            Direction::Reversed => 1,
        }
    }
}

impl Direction {
    pub fn is_reversed(&self) -> bool {
        matches!(self, Self::Reversed)
    }

    /// Applies the direction to a stored-order sequence.
    pub fn orient<T: Clone>(&self, sequence: &[T]) -> Vec<T> {
        match self {
            Self::Forward => sequence.to_vec(),
            Self::Reversed => sequence.iter().rev().cloned().collect(),
        }
    }
}

/// Which way a loop line is running. Ring maps show this label in place of a
/// terminal station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingDirection {
    Outer,
    Inner,
}

impl RingDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Outer => "outer ring running",
            Self::Inner => "inner ring running",
        }
    }
}

impl From<Direction> for RingDirection {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Forward => Self::Outer,
            Direction::Reversed => Self::Inner,
        }
    }
}

#[test]
fn direction_from_flag() {
    assert_eq!(Direction::from(0), Direction::Forward);
    assert_eq!(Direction::from(1), Direction::Reversed);
    assert_eq!(Direction::from(7), Direction::Forward);
}

#[test]
fn reversal_is_an_involution() {
    let sequence = vec!["a", "b", "c"];
    let twice = Direction::Reversed.orient(&Direction::Reversed.orient(&sequence));
    assert_eq!(sequence, twice);
}

#[test]
fn ring_labels_follow_direction() {
    assert_eq!(
        RingDirection::from(Direction::Forward).label(),
        "outer ring running"
    );
    assert_eq!(
        RingDirection::from(Direction::Reversed).label(),
        "inner ring running"
    );
}
