use crate::{Ray, Vec3};

/// Absolute padding applied by [`Aabb::padded`].
pub const AABB_PAD_ABSOLUTE: f32 = 1e-4;

/// Padding applied by [`Aabb::padded`] per unit of the largest coordinate
/// magnitude, so boxes far from the origin stay conservative.
pub const AABB_PAD_RELATIVE: f32 = 1e-5;

/// `gamma(3)` error bound of the slab distances: `3u / (1 - 3u)` with
/// `u = f32::EPSILON / 2`.
const SLAB_ERROR: f32 = 3.0 * (f32::EPSILON * 0.5) / (1.0 - 3.0 * (f32::EPSILON * 0.5));

/// Axis-Aligned Bounding Box used to prune intersection tests.
///
/// Defined by its min and max corners. [`Aabb::EMPTY`] has `min = +inf` and
/// `max = -inf` so that it contains nothing and grows correctly through
/// [`Aabb::encapsulate`]. Once at least one point has been added,
/// `min <= max` holds componentwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from its corners. The caller guarantees `min <= max`.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.cmple(max).all(), "inverted AABB: {min} > {max}");
        Self { min, max }
    }

    /// Create an AABB from two arbitrary corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create the tightest AABB around a set of points.
    pub fn from_iter_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut aabb = Self::EMPTY;
        for p in points {
            aabb.encapsulate(p);
        }
        aabb
    }

    /// Grow to contain `point`.
    #[inline]
    pub fn encapsulate(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow to contain `other`. Encapsulating an empty box is a no-op.
    #[inline]
    pub fn encapsulate_aabb(&mut self, other: &Aabb) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        let mut aabb = *box0;
        aabb.encapsulate_aabb(box1);
        aabb
    }

    /// A copy grown on every side by [`AABB_PAD_ABSOLUTE`] plus
    /// [`AABB_PAD_RELATIVE`] times the largest coordinate magnitude.
    ///
    /// Pruning boxes are stored padded: a ray aimed exactly at a vertex or an
    /// edge on a box face must not be rejected by rounding in the slab test.
    /// Empty boxes stay empty.
    pub fn padded(&self) -> Aabb {
        if self.is_empty() {
            return *self;
        }
        let scale = self.min.abs().max(self.max.abs()).max_element();
        let delta = Vec3::splat(AABB_PAD_ABSOLUTE + AABB_PAD_RELATIVE * scale);
        Aabb {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    /// True until something has been encapsulated.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Returns true if `point` lies inside the box (boundary inclusive).
    pub fn contains(&self, point: Vec3) -> bool {
        self.min.cmple(point).all() && point.cmple(self.max).all()
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Test if a ray intersects this AABB in front of (or around) its origin.
    ///
    /// Slab method using the ray's cached reciprocal direction. The running
    /// interval starts at `[0, inf)`, so boxes entirely behind the origin are
    /// rejected and boxes containing the origin are accepted.
    ///
    /// Zero direction components give infinite slab distances. When the origin
    /// also lies exactly on a slab plane the product is NaN; `f32::min` and
    /// `f32::max` return the non-NaN operand, so that axis simply does not
    /// narrow the interval.
    ///
    /// The exit distance is widened by the slab rounding bound (`gamma(3)`),
    /// so the test errs on the side of reporting a hit.
    ///
    /// This is a reject test only and does not report a distance.
    pub fn hit(&self, ray: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }

        let origin = ray.origin();
        let inv_dir = ray.inv_direction();

        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let t1 = (self.min[axis] - origin[axis]) * inv_dir[axis];
            let t2 = (self.max[axis] - origin[axis]) * inv_dir[axis];

            t_min = t1.max(t_min).min(t2.max(t_min));
            t_max = t1.min(t_max).max(t2.min(t_max));
        }

        t_min <= t_max * (1.0 + 2.0 * SLAB_ERROR)
    }

    /// Static constants
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}
