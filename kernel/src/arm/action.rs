//! The closed action alphabet understood by the arm.

use serde::{Deserialize, Serialize};

/// One executable arm action.
///
/// Wire codes are the single letters `l`, `r`, `p`, `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "l")]
    StepLeft,
    #[serde(rename = "r")]
    StepRight,
    #[serde(rename = "p")]
    Pick,
    #[serde(rename = "d")]
    Drop,
}

impl Action {
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::StepLeft => 'l',
            Self::StepRight => 'r',
            Self::Pick => 'p',
            Self::Drop => 'd',
        }
    }

    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'l' => Some(Self::StepLeft),
            'r' => Some(Self::StepRight),
            'p' => Some(Self::Pick),
            'd' => Some(Self::Drop),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Arm steps moving from column `from` to column `to`, one column at a time.
#[must_use]
pub fn steps_between(from: usize, to: usize) -> Vec<Action> {
    if to >= from {
        vec![Action::StepRight; to - from]
    } else {
        vec![Action::StepLeft; from - to]
    }
}

/// Render actions as their wire codes, e.g. `"prd"`.
#[must_use]
pub fn encode(actions: &[Action]) -> String {
    actions.iter().map(|a| a.code()).collect()
}
