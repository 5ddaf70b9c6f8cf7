//! Canonical clip names and loaded clip data.

use std::fmt;

/// Spoken-digit clips the firmware knows how to play.
///
/// Declaration order is the canonical table order: the firmware indexes
/// `audioDataLengths`/`audioDataOffsets` with `Digit::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Niner,
}

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit::Zero,
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Niner,
    ];

    /// File stem of the clip inside a voice pack (`<pack>/<stem>.<ext>`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Digit::Zero => "ZERO",
            Digit::One => "ONE",
            Digit::Two => "TWO",
            Digit::Three => "THREE",
            Digit::Four => "FOUR",
            Digit::Five => "FIVE",
            Digit::Six => "SIX",
            Digit::Seven => "SEVEN",
            Digit::Eight => "EIGHT",
            Digit::Niner => "NINER",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|digit| digit.as_str() == name)
    }

    /// Canonical name list used when no config overrides it
    pub fn canonical_names() -> Vec<String> {
        Self::ALL.iter().map(|d| d.as_str().to_string()).collect()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named audio payload, exactly as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Clip {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Complete, canonically ordered set of clips.
///
/// Only produced once every canonical name has resolved, so downstream steps
/// never see a partial set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipSet {
    clips: Vec<Clip>,
}

impl ClipSet {
    /// Build a set from clips already in canonical order
    pub fn from_clips(clips: Vec<Clip>) -> Self {
        Self { clips }
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clip> {
        self.clips.iter()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.clips.iter().map(|c| c.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ClipSet {
    type Item = &'a Clip;
    type IntoIter = std::slice::Iter<'a, Clip>;

    fn into_iter(self) -> Self::IntoIter {
        self.clips.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_order_matches_index() {
        for (i, digit) in Digit::ALL.iter().enumerate() {
            assert_eq!(digit.index(), i);
        }
        assert_eq!(Digit::Niner.index(), 9);
    }

    #[test]
    fn test_digit_names() {
        assert_eq!(Digit::Four.as_str(), "FOUR");
        assert_eq!(Digit::Niner.to_string(), "NINER");
        assert_eq!(Digit::from_name("SEVEN"), Some(Digit::Seven));
        assert_eq!(Digit::from_name("NINE"), None);
        assert_eq!(Digit::canonical_names().len(), 10);
        assert_eq!(Digit::canonical_names()[0], "ZERO");
    }

    #[test]
    fn test_clip_set_keeps_order() {
        let set = ClipSet::from_clips(vec![
            Clip::new("ZERO", vec![1]),
            Clip::new("ONE", vec![]),
            Clip::new("TWO", vec![2, 3]),
        ]);
        assert_eq!(set.names(), vec!["ZERO", "ONE", "TWO"]);
        assert_eq!(set.len(), 3);
        assert!(set.clips()[1].is_empty());
    }
}
