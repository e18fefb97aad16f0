use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Friend {
    Henry,
    Dave,
    Stephen,
    Nick,
    Dre,
}

impl Friend {
    pub const COUNT: usize = 5;

    /// Every friend, in display order.
    pub const ALL: [Friend; Friend::COUNT] = [
        Friend::Henry,
        Friend::Dave,
        Friend::Stephen,
        Friend::Nick,
        Friend::Dre,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Friend::Henry => "henry",
            Friend::Dave => "dave",
            Friend::Stephen => "stephen",
            Friend::Nick => "nick",
            Friend::Dre => "dre",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Friend::Henry => "Henry",
            Friend::Dave => "Dave",
            Friend::Stephen => "Stephen",
            Friend::Nick => "Nick",
            Friend::Dre => "Dre",
        }
    }

    /// Unknown names yield `None`; they must never reach storage.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "henry" => Some(Friend::Henry),
            "dave" => Some(Friend::Dave),
            "stephen" => Some(Friend::Stephen),
            "nick" => Some(Friend::Nick),
            "dre" => Some(Friend::Dre),
            _ => None,
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Friend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
