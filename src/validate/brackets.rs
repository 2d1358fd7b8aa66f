//! Bracket families and character classification.

/// One of the three bracket families the validator tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketFamily {
    /// `(` and `)`
    Round,
    /// `{` and `}`
    Curly,
    /// `[` and `]`
    Square,
}

impl BracketFamily {
    pub const ALL: [BracketFamily; 3] = [Self::Round, Self::Curly, Self::Square];

    pub fn opener(self) -> char {
        match self {
            Self::Round => '(',
            Self::Curly => '{',
            Self::Square => '[',
        }
    }

    pub fn closer(self) -> char {
        match self {
            Self::Round => ')',
            Self::Curly => '}',
            Self::Square => ']',
        }
    }
}

/// A bracket character, tagged with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Open(BracketFamily),
    Close(BracketFamily),
}

impl Bracket {
    /// Classify a character, returning `None` for anything that is not a bracket.
    pub fn classify(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Open(BracketFamily::Round)),
            '{' => Some(Self::Open(BracketFamily::Curly)),
            '[' => Some(Self::Open(BracketFamily::Square)),
            ')' => Some(Self::Close(BracketFamily::Round)),
            '}' => Some(Self::Close(BracketFamily::Curly)),
            ']' => Some(Self::Close(BracketFamily::Square)),
            _ => None,
        }
    }

    pub fn family(self) -> BracketFamily {
        match self {
            Self::Open(family) | Self::Close(family) => family,
        }
    }
}

pub fn is_opener(c: char) -> bool {
    matches!(Bracket::classify(c), Some(Bracket::Open(_)))
}

pub fn is_closer(c: char) -> bool {
    matches!(Bracket::classify(c), Some(Bracket::Close(_)))
}

/// Whether `opener` and `closer` belong to the same family, in that order.
pub fn is_matching_pair(opener: char, closer: char) -> bool {
    match (Bracket::classify(opener), Bracket::classify(closer)) {
        (Some(Bracket::Open(a)), Some(Bracket::Close(b))) => a == b,
        _ => false,
    }
}
