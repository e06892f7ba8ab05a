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

//! # Maneuver Guidance Band Engine
//!
//! Synthesizes colored guidance bands over a one-dimensional control
//! variable for an ownship avoiding traffic: conflict-free ranges, alert
//! ranges per severity level, and recovery ranges once no conflict-free
//! maneuver remains.
//!
//! The engine is generic over the per-variable kinematics through the
//! [`ControlAxis`] / [`ManeuverEvaluator`] trait pair; an
//! [`InstantaneousEvaluator`] for the four classic axes is included. All
//! computation is single-threaded and cached: queries recompute lazily
//! after a configuration change, and callers own the [`BandsContext`] the
//! computation runs against.

pub mod bands;
pub mod context;
pub mod envelope;
pub mod instantaneous;
pub mod kinematics;

mod recovery;
mod resolution;

#[cfg(test)]
pub(crate) mod testutil;

pub use bands::ManeuverBands;
pub use context::{BandsContext, ContextParams};
pub use envelope::ControlEnvelope;
pub use instantaneous::{GuidanceAxis, InstantaneousEvaluator};
pub use kinematics::{
    ControlAxis, EvalRequest, IndexBand, ManeuverDirection, ManeuverEvaluator,
};
