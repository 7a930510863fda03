use serde::{Deserialize, Serialize};

/// The bundled sign vocabulary, in training-class order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    ILoveYou,
    Yes,
    No,
    Hello,
    Wow,
}

impl Sign {
    pub const ALL: [Sign; 5] = [Sign::ILoveYou, Sign::Yes, Sign::No, Sign::Hello, Sign::Wow];

    /// Display label, as written to the journal and shown on screen.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ILoveYou => "I Love You",
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Hello => "Hello",
            Self::Wow => "Wow",
        }
    }

    /// Class index used when the dataset was collected.
    pub fn class_index(&self) -> usize {
        match self {
            Self::ILoveYou => 0,
            Self::Yes => 1,
            Self::No => 2,
            Self::Hello => 3,
            Self::Wow => 4,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}
