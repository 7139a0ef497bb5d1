use crate::utils;

/// Structure for placing the points of a density grid in Cartesian space.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// The 3d size of the data.
    pub size: Size,
    /// The Cartesian position of the point (0, 0, 0).
    pub origin: [f64; 3],
    /// The step vector of each axis, spacing[a] is the step along axis a.
    pub spacing: [[f64; 3]; 3],
}

impl Grid {
    /// Initialises a grid structure. Returns None if any axis has no points
    /// or the total number of points overflows.
    pub fn new(grid: [usize; 3],
               origin: [f64; 3],
               spacing: [[f64; 3]; 3])
               -> Option<Self> {
        let size = Size::new(grid[0], grid[1], grid[2])?;
        Some(Self { size,
                    origin,
                    spacing })
    }

    /// The number of points along each axis.
    pub fn shape(&self) -> [usize; 3] {
        [self.size.x, self.size.y, self.size.z]
    }

    /// Converts a 1D index of the array into a 3D index
    pub fn to_3d(&self, p: usize) -> [usize; 3] {
        let x = p / (self.size.y * self.size.z);
        let y = (p / self.size.z) % self.size.y;
        let z = p % self.size.z;
        [x, y, z]
    }

    /// The Cartesian coordinate along `axis` of the grid plane `index`.
    ///
    /// Only the diagonal term of the spacing is used, skewed lattices are
    /// placed as though they were orthogonal.
    pub fn axis_position(&self, axis: usize, index: usize) -> f64 {
        self.origin[axis] + index as f64 * self.spacing[axis][axis]
    }

    /// Converts a point in the array to cartesian.
    pub fn to_cartesian(&self, p: usize) -> [f64; 3] {
        let [x, y, z] = self.to_3d(p);
        [self.axis_position(0, x),
         self.axis_position(1, y),
         self.axis_position(2, z)]
    }

    /// Does the spacing carry any off-diagonal (skew) terms.
    pub fn is_skewed(&self) -> bool {
        utils::max_off_diagonal(&self.spacing) > 0.
    }

    /// Do two grids share the same size, origin and spacing, with the real
    /// values compared to a relative tolerance.
    pub fn same_geometry(&self, other: &Self, tolerance: f64) -> bool {
        self.size == other.size
        && self.origin
               .iter()
               .zip(other.origin.iter())
               .all(|(a, b)| utils::close(*a, *b, tolerance))
        && self.spacing
               .iter()
               .flatten()
               .zip(other.spacing.iter().flatten())
               .all(|(a, b)| utils::close(*a, *b, tolerance))
    }
}

/// Size of the density data in 3d
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    /// Number of points in the x-direction.
    pub x: usize,
    /// Number of points in the y-direction.
    pub y: usize,
    /// Number of points in the z-direction.
    pub z: usize,
    /// Total number of points.
    pub total: usize,
}

impl Size {
    /// The length of the flattened array for the density data in 3d
    pub fn new(x: usize, y: usize, z: usize) -> Option<Self> {
        if x == 0 || y == 0 || z == 0 {
            return None;
        }
        let total = x.checked_mul(y)?.checked_mul(z)?;
        Some(Self { x, y, z, total })
    }
}
