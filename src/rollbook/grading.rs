//! # Grade Policy
//!
//! Maps an average score to a letter grade through an ordered band table.
//! A band is a `(threshold, grade)` pair with an inclusive lower bound; the
//! first band whose threshold the average reaches wins, and anything that
//! clears no band gets the floor grade.
//!
//! The policy is plain data, so an alternate table (e.g. [`GradePolicy::strict`])
//! can be swapped in without touching callers.

use crate::error::{Result, RollbookError};
use crate::model::Grade;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub threshold: f64,
    pub grade: Grade,
}

impl Band {
    pub const fn new(threshold: f64, grade: Grade) -> Self {
        Self { threshold, grade }
    }
}

const STANDARD_BANDS: [Band; 4] = [
    Band::new(90.0, Grade::A),
    Band::new(80.0, Grade::B),
    Band::new(70.0, Grade::C),
    Band::new(60.0, Grade::D),
];

const STRICT_BANDS: [Band; 4] = [
    Band::new(95.0, Grade::A),
    Band::new(85.0, Grade::B),
    Band::new(75.0, Grade::C),
    Band::new(65.0, Grade::D),
];

#[derive(Debug, Clone, PartialEq)]
pub struct GradePolicy {
    bands: Vec<Band>,
    floor: Grade,
}

impl GradePolicy {
    /// Builds a policy from bands ordered by strictly descending threshold.
    pub fn new(bands: Vec<Band>, floor: Grade) -> Result<Self> {
        if bands.iter().any(|b| b.threshold.is_nan()) {
            return Err(RollbookError::InvalidBands("NaN threshold".into()));
        }
        for pair in bands.windows(2) {
            if pair[0].threshold <= pair[1].threshold {
                return Err(RollbookError::InvalidBands(format!(
                    "threshold {} for {} must be above {} for {}",
                    pair[0].threshold, pair[0].grade, pair[1].threshold, pair[1].grade
                )));
            }
        }
        Ok(Self { bands, floor })
    }

    pub fn standard() -> Self {
        Self {
            bands: STANDARD_BANDS.to_vec(),
            floor: Grade::F,
        }
    }

    pub fn strict() -> Self {
        Self {
            bands: STRICT_BANDS.to_vec(),
            floor: Grade::F,
        }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn assign(&self, average: f64) -> Grade {
        self.bands
            .iter()
            .find(|band| average >= band.threshold)
            .map(|band| band.grade)
            .unwrap_or(self.floor)
    }
}

impl Default for GradePolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Named band tables selectable from config and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradingScheme {
    #[default]
    Standard,
    Strict,
}

impl GradingScheme {
    pub fn policy(self) -> GradePolicy {
        match self {
            GradingScheme::Standard => GradePolicy::standard(),
            GradingScheme::Strict => GradePolicy::strict(),
        }
    }
}

impl fmt::Display for GradingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradingScheme::Standard => write!(f, "standard"),
            GradingScheme::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for GradingScheme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "default" => Ok(GradingScheme::Standard),
            "strict" => Ok(GradingScheme::Strict),
            other => Err(format!(
                "unknown grading scheme '{}' (expected standard or strict)",
                other
            )),
        }
    }
}
