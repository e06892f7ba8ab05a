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

//! # Airspace Domain Model
//!
//! Domain types for detect-and-avoid guidance: band regions and colored
//! band ranges, aircraft states with linear projection, conflict detectors
//! over protected cylinders, and the per-severity alert configuration.
//! Contains no band-synthesis logic; the engine crate consumes these types.

pub mod alertor;
pub mod color;
pub mod detection;
pub mod err;
pub mod generator;
pub mod region;
pub mod traffic;

pub use alertor::{AlertLevel, Alertor};
pub use color::{BandsRange, ColoredValue};
pub use detection::{ConflictData, ConflictDetector, CylinderDetector, NMAC_D, NMAC_H};
pub use region::BandsRegion;
pub use traffic::TrafficState;
