use serde::{Deserialize, Serialize};

/// Ground-truth class of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    NotFraud,
    Fraud,
}

impl Label {
    #[must_use]
    pub const fn is_fraud(self) -> bool {
        matches!(self, Label::Fraud)
    }

    #[must_use]
    pub const fn as_bit(self) -> u8 {
        match self {
            Label::NotFraud => 0,
            Label::Fraud => 1,
        }
    }

    /// Parses a raw label cell. Integer and float spellings of 0 and 1 are
    /// accepted since exported datasets are not consistent about it.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn parse_cell(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        match cell {
            "0" => return Some(Label::NotFraud),
            "1" => return Some(Label::Fraud),
            _ => {}
        }
        match cell.parse::<f64>() {
            Ok(v) if v == 0.0 => Some(Label::NotFraud),
            Ok(v) if v == 1.0 => Some(Label::Fraud),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = u8;

    fn try_from(bit: u8) -> Result<Self, Self::Error> {
        match bit {
            0 => Ok(Label::NotFraud),
            1 => Ok(Label::Fraud),
            other => Err(other),
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.as_bit()
    }
}
