use serde::{Deserialize, Serialize};

/// Letter grade derived from a result total.
///
/// Ordering follows the scale itself: `A1` sorts lowest, so a smaller value
/// is a better grade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Grade {
    A1,
    B2,
    B3,
    C4,
    C5,
    C6,
    D7,
    E8,
    F9,
}

/// Qualitative remark paired with a grade on issued result records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Remark {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Credit,
    Pass,
    Fail,
}

impl Grade {
    /// Fixed threshold table over the raw total. The total is not clamped:
    /// anything below 30, including a negative total, lands on `F9`.
    pub fn from_total(total: f64) -> Self {
        match total {
            t if t >= 90.0 => Grade::A1,
            t if t >= 80.0 => Grade::B2,
            t if t >= 70.0 => Grade::B3,
            t if t >= 60.0 => Grade::C4,
            t if t >= 50.0 => Grade::C5,
            t if t >= 45.0 => Grade::C6,
            t if t >= 40.0 => Grade::D7,
            t if t >= 30.0 => Grade::E8,
            _ => Grade::F9,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Grade::A1 => "A1",
            Grade::B2 => "B2",
            Grade::B3 => "B3",
            Grade::C4 => "C4",
            Grade::C5 => "C5",
            Grade::C6 => "C6",
            Grade::D7 => "D7",
            Grade::E8 => "E8",
            Grade::F9 => "F9",
        }
    }

    pub const fn remark(self) -> Remark {
        match self {
            Grade::A1 => Remark::Excellent,
            Grade::B2 => Remark::VeryGood,
            Grade::B3 => Remark::Good,
            Grade::C4 | Grade::C5 | Grade::C6 => Remark::Credit,
            Grade::D7 | Grade::E8 => Remark::Pass,
            Grade::F9 => Remark::Fail,
        }
    }

    /// Pass predicate used by the batch pass-rate.
    ///
    /// `E8` carries the remark "Pass" yet is excluded here; the two
    /// definitions intentionally diverge and both are preserved as-is.
    pub const fn is_pass(self) -> bool {
        !matches!(self, Grade::E8 | Grade::F9)
    }
}

impl Remark {
    pub const fn label(self) -> &'static str {
        match self {
            Remark::Excellent => "Excellent",
            Remark::VeryGood => "Very Good",
            Remark::Good => "Good",
            Remark::Credit => "Credit",
            Remark::Pass => "Pass",
            Remark::Fail => "Fail",
        }
    }
}
