//! Ray counters collected while tracing.

use std::fmt::Display;
use std::ops::AddAssign;

/// Counts of the rays cast while shading.
///
/// Each worker keeps its own instance; instances are merged with `+=` once
/// the work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceStats {
    /// Rays shaded by [`crate::trace`] (camera rays and reflected rays)
    pub traced_rays: u64,
    /// Shadow rays cast toward point lights
    pub shadow_rays: u64,
    /// Shadow rays that found an occluder before the light
    pub occluded_shadow_rays: u64,
    /// Mirror reflection rays spawned
    pub reflection_rays: u64,
    /// Deepest bounce depth reached
    pub max_bounce_depth: u32,
}

impl TraceStats {
    pub fn total_rays(&self) -> u64 {
        self.traced_rays + self.shadow_rays
    }

    #[inline]
    pub(crate) fn record_depth(&mut self, depth: u32) {
        self.max_bounce_depth = self.max_bounce_depth.max(depth);
    }
}

impl AddAssign for TraceStats {
    fn add_assign(&mut self, other: Self) {
        self.traced_rays += other.traced_rays;
        self.shadow_rays += other.shadow_rays;
        self.occluded_shadow_rays += other.occluded_shadow_rays;
        self.reflection_rays += other.reflection_rays;
        self.max_bounce_depth = self.max_bounce_depth.max(other.max_bounce_depth);
    }
}

impl Display for TraceStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} traced, {} shadow ({} occluded), {} reflection rays; max depth {}",
            self.traced_rays,
            self.shadow_rays,
            self.occluded_shadow_rays,
            self.reflection_rays,
            self.max_bounce_depth
        )
    }
}
