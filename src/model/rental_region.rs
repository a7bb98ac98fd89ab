use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::RentalError;

/// Discriminant selecting which [`RegionFactory`](crate::region::RegionFactory)
/// the selector returns.
///
/// Deserializing goes through [`FromStr`], so `"ASIA"` and `"asia"` both work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RentalRegion {
    Us,
    Eu,
    Asia,
}

impl RentalRegion {
    /// Every region, in declaration order.
    pub const ALL: [RentalRegion; 3] = [RentalRegion::Us, RentalRegion::Eu, RentalRegion::Asia];

    /// The lowercase discriminant accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalRegion::Us => "us",
            RentalRegion::Eu => "eu",
            RentalRegion::Asia => "asia",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RentalRegion::Us => "US",
            RentalRegion::Eu => "EU",
            RentalRegion::Asia => "Asia",
        }
    }
}

impl Display for RentalRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; surrounding whitespace is ignored.
impl FromStr for RentalRegion {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RentalRegion::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RentalError::UnknownRentalRegion(s.to_string()))
    }
}

impl TryFrom<String> for RentalRegion {
    type Error = RentalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
