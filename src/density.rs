use crate::errors::{Result, TransferError};
use std::ops::Index;
use tracing::{debug, info};

/// A density sampled on a grid, stored flat in row-major order (x slowest,
/// z fastest).
#[derive(Clone, Debug, PartialEq)]
pub struct Density {
    data: Vec<f64>,
    shape: [usize; 3],
}

impl Index<usize> for Density {
    type Output = f64;

    fn index(&self, i: usize) -> &Self::Output {
        &self.data[i]
    }
}

impl Density {
    /// Wraps the flat data, which must hold exactly one value per grid point.
    pub fn new(data: Vec<f64>, shape: [usize; 3]) -> Result<Self> {
        let expected = shape.iter().product::<usize>();
        if data.len() != expected {
            return Err(TransferError::parse("<memory>",
                                            0,
                                            format!("{} values cannot fill a {:?} grid of {} points",
                                                    data.len(),
                                                    shape,
                                                    expected)));
        }
        Ok(Self { data, shape })
    }

    /// A density of the given shape that is zero everywhere.
    pub fn zeros(shape: [usize; 3]) -> Self {
        let data = vec![0f64; shape.iter().product()];
        Self { data, shape }
    }

    /// The number of points along each axis.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// The total number of points.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Is the density without points.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flat data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Value at the 3d index [i, j, k].
    pub fn get(&self, [i, j, k]: [usize; 3]) -> f64 {
        self.data[(i * self.shape[1] + j) * self.shape[2] + k]
    }

    /// The total mass of the density.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// A copy of the density multiplied by a constant.
    pub fn scale(&self, factor: f64) -> Self {
        Self { data: self.data.iter().map(|d| d * factor).collect(),
               shape: self.shape }
    }
}

/// The positive (density gained) and negative (density lost) parts of the
/// change in density on excitation.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityDifference {
    /// max(excited - ground, 0)
    pub plus: Density,
    /// min(excited - ground, 0)
    pub minus: Density,
}

/// Splits excited - ground into its positive and negative parts.
pub fn difference(ground: &Density,
                  excited: &Density)
                  -> Result<DensityDifference> {
    if ground.shape != excited.shape {
        return Err(TransferError::ShapeMismatch { ground: ground.shape,
                                                  excited: excited.shape });
    }
    let (plus, minus): (Vec<f64>, Vec<f64>) =
        ground.data
              .iter()
              .zip(&excited.data)
              .map(|(g, e)| {
                  let d = e - g;
                  if d > 0. {
                      (d, 0.)
                  } else if d < 0. {
                      (0., d)
                  } else {
                      (0., 0.)
                  }
              })
              .unzip();
    let plus = Density { data: plus,
                         shape: ground.shape };
    let minus = Density { data: minus,
                          shape: ground.shape };
    info!("Computed density differences between ground and excited states.");
    debug!(sum = plus.sum(), "Delta rho (positive)");
    debug!(sum = minus.sum(), "Delta rho (negative)");
    Ok(DensityDifference { plus, minus })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(shape: [usize; 3], offset: f64) -> Density {
        let n = shape.iter().product::<usize>();
        let data = (0..n).map(|x| (x as f64 - offset) * 0.25).collect();
        Density::new(data, shape).unwrap()
    }

    #[test]
    fn density_new() {
        let density = ramp([2, 3, 4], 0.);
        assert_eq!(density.shape(), [2, 3, 4]);
        assert_eq!(density.len(), 24);
        assert_eq!(density.get([1, 2, 3]), 23. * 0.25);
        assert_eq!(density[5], 5. * 0.25);
    }

    #[test]
    fn density_new_bad_length() {
        let result = Density::new(vec![0.; 7], [2, 2, 2]);
        assert!(matches!(result, Err(TransferError::Parse { .. })));
    }

    #[test]
    fn density_scale() {
        let density = ramp([2, 2, 2], 0.).scale(2.);
        assert_eq!(density[3], 1.5);
        assert_eq!(density.sum(), 14.);
    }

    #[test]
    fn difference_decomposition() {
        let ground = ramp([3, 3, 3], 0.);
        let excited = ramp([3, 3, 3], 13.).scale(-1.5);
        let diff = difference(&ground, &excited).unwrap();
        for i in 0..ground.len() {
            let (p, m) = (diff.plus[i], diff.minus[i]);
            assert_eq!(p + m, excited[i] - ground[i]);
            assert_eq!(p * m, 0.);
            assert!(p >= 0.);
            assert!(m <= 0.);
        }
    }

    #[test]
    fn difference_identical() {
        let ground = ramp([2, 3, 2], 4.);
        let diff = difference(&ground, &ground.clone()).unwrap();
        assert!(diff.plus.data().iter().all(|d| *d == 0.));
        assert!(diff.minus.data().iter().all(|d| *d == 0.));
    }

    #[test]
    fn difference_swapped_negates() {
        let ground = ramp([2, 2, 2], 0.);
        let excited = ramp([2, 2, 2], 4.).scale(3.);
        let forward = difference(&ground, &excited).unwrap();
        let backward = difference(&excited, &ground).unwrap();
        assert_eq!(forward.plus, backward.minus.scale(-1.));
        assert_eq!(forward.minus, backward.plus.scale(-1.));
    }

    #[test]
    fn difference_shape_mismatch() {
        let ground = Density::zeros([2, 2, 2]);
        let excited = Density::zeros([3, 3, 3]);
        match difference(&ground, &excited) {
            Err(TransferError::ShapeMismatch { ground, excited }) => {
                assert_eq!(ground, [2, 2, 2]);
                assert_eq!(excited, [3, 3, 3]);
            }
            _ => panic!("Shapes differ but no ShapeMismatch"),
        }
    }
}
