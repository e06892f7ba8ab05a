// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Band region taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The color of a guidance band.
///
/// `Far`, `Mid` and `Near` are conflict regions of increasing severity;
/// `None` marks conflict-free maneuvers, `Recovery` marks best-effort
/// escape maneuvers when no conflict-free one exists, and `Unknown` is the
/// degraded answer for invalid configurations or out-of-range queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BandsRegion {
    Unknown,
    None,
    Recovery,
    Far,
    Mid,
    Near,
}

impl BandsRegion {
    /// Returns `true` for regions that mark a maneuver producing a loss of
    /// separation.
    #[inline]
    pub fn is_conflict_band(self) -> bool {
        matches!(self, BandsRegion::Far | BandsRegion::Mid | BandsRegion::Near)
    }

    /// Returns `true` for regions a resolution maneuver may target.
    #[inline]
    pub fn is_resolution_band(self) -> bool {
        matches!(self, BandsRegion::None | BandsRegion::Recovery)
    }

    /// Returns `true` for every region except `Unknown`.
    #[inline]
    pub fn is_valid_band(self) -> bool {
        self != BandsRegion::Unknown
    }
}

impl fmt::Display for BandsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BandsRegion::Unknown => "UNKNOWN",
            BandsRegion::None => "NONE",
            BandsRegion::Recovery => "RECOVERY",
            BandsRegion::Far => "FAR",
            BandsRegion::Mid => "MID",
            BandsRegion::Near => "NEAR",
        };
        f.write_str(s)
    }
}
