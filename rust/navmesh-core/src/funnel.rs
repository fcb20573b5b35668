//! Funnel (string-pulling) algorithm that converts an ordered portal corridor
//! into waypoints.
//!
//! Deterministic, allocation-free except for output waypoints.

use tracing::trace;

use crate::geometry::{distance_sq, orient};
use crate::models::{Point, Portal};
use crate::options::{NavOptions, Winding};

#[derive(Clone, Copy, Debug)]
pub struct FunnelSmoother {
    winding: Winding,
    epsilon: f64,
}

impl FunnelSmoother {
    /// `epsilon` is compared against the squared apex-to-bound distance when
    /// deciding whether a bound has collapsed onto the apex.
    pub fn new(winding: Winding, epsilon: f64) -> Self {
        // Must stay positive or a bound sitting on the apex never counts as
        // collapsed and the scan stops making progress.
        Self { winding, epsilon: epsilon.max(f64::MIN_POSITIVE) }
    }

    pub fn from_options(options: &NavOptions) -> Self {
        Self::new(options.winding, options.funnel_epsilon)
    }

    /// Shortest path from `start` to `end` through `portals`.
    ///
    /// The corridor is bracketed with zero-width portals at `start` and
    /// `end`; an empty portal list yields the direct segment.
    pub fn smooth(&self, portals: &[Portal], start: Point, end: Point) -> Vec<Point> {
        // If no portals, return straight line
        if portals.is_empty() {
            return vec![start, end];
        }

        let w = self.winding;
        let eps = self.epsilon;
        let count = portals.len() + 2;
        let portal_at = |i: usize| -> Portal {
            if i == 0 {
                Portal::point(start)
            } else if i <= portals.len() {
                portals[i - 1]
            } else {
                Portal::point(end)
            }
        };

        let mut res: Vec<Point> = Vec::with_capacity(portals.len() + 2);
        res.push(start);

        let mut apex = start;
        let mut left = start;
        let mut right = start;
        let mut apex_idx = 0usize;
        let mut left_idx = 0usize;
        let mut right_idx = 0usize;

        let mut i = 1usize;
        while i < count {
            let Portal { left: pl, right: pr } = portal_at(i);

            // Tighten right edge
            if orient(apex, right, pr, w) <= 0.0 {
                if distance_sq(apex, right) < eps || orient(apex, left, pr, w) > 0.0 {
                    right = pr;
                    right_idx = i;
                } else {
                    // Crossed over left - left becomes the new apex
                    push_distinct(&mut res, left);
                    trace!(x = left[0], y = left[1], portal = left_idx, "funnel apex moved to left bound");
                    apex = left;
                    apex_idx = left_idx;
                    // Reset funnel
                    left = apex;
                    right = apex;
                    left_idx = apex_idx;
                    right_idx = apex_idx;
                    i = apex_idx + 1;
                    continue;
                }
            }

            // Tighten left edge
            if orient(apex, left, pl, w) >= 0.0 {
                if distance_sq(apex, left) < eps || orient(apex, right, pl, w) < 0.0 {
                    left = pl;
                    left_idx = i;
                } else {
                    // Crossed over right - right becomes the new apex
                    push_distinct(&mut res, right);
                    trace!(x = right[0], y = right[1], portal = right_idx, "funnel apex moved to right bound");
                    apex = right;
                    apex_idx = right_idx;
                    left = apex;
                    right = apex;
                    left_idx = apex_idx;
                    right_idx = apex_idx;
                    i = apex_idx + 1;
                    continue;
                }
            }

            i += 1;
        }

        if res.len() < 2 || res.last() != Some(&end) {
            res.push(end);
        }
        res
    }
}

#[inline]
fn push_distinct(res: &mut Vec<Point>, p: Point) {
    if res.last() != Some(&p) {
        res.push(p);
    }
}
