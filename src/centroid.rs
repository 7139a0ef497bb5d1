use crate::density::Density;
use crate::errors::{Result, TransferError};
use crate::grid::Grid;
use crate::progress::Bar;
use crossbeam_utils::thread;
use tracing::{debug, warn};

/// The Cartesian axes, each reduced independently.
static AXES: [usize; 3] = [0, 1, 2];

/// Sums position * density along one axis.
///
/// The voxels are always visited in the same order so the sum does not
/// depend on which thread computes it.
fn axis_moment(axis: usize,
               density: &Density,
               grid: &Grid,
               progress_bar: &Bar)
               -> f64 {
    let mut moment = 0f64;
    let mut p = 0;
    for i in 0..grid.size.x {
        for j in 0..grid.size.y {
            for k in 0..grid.size.z {
                let index = [i, j, k][axis];
                moment += grid.axis_position(axis, index) * density[p];
                p += 1;
            }
        }
        progress_bar.tick();
    }
    moment
}

/// Calculates the density weighted mean position of a density.
///
/// Returns the zero vector if the density has no total mass. With more than
/// one thread the three axes are split between at most three scoped
/// threads which are joined before returning, the result is identical to
/// the sequential calculation.
pub fn centroid(density: &Density,
                grid: &Grid,
                threads: usize,
                progress_bar: Bar)
                -> Result<[f64; 3]> {
    if density.shape() != grid.shape() {
        return Err(TransferError::ShapeMismatch { ground: grid.shape(),
                                                  excited: density.shape() });
    }
    let total_density = density.sum();
    if total_density == 0. {
        warn!("Total density is zero. Returning zero vector for centroid.");
        return Ok([0f64; 3]);
    }
    let pbar = &progress_bar;
    let moments = match threads.cmp(&1) {
        std::cmp::Ordering::Greater => {
            let workers = threads.min(AXES.len());
            let chunk_size =
                (AXES.len() / workers) + (AXES.len() % workers).min(1);
            let joined = thread::scope(|s| {
                let spawned_threads =
                    AXES.chunks(chunk_size)
                        .map(|chunk| {
                            s.spawn(move |_| {
                                 chunk.iter()
                                      .map(|axis| {
                                          axis_moment(*axis, density, grid, pbar)
                                      })
                                      .collect::<Vec<f64>>()
                             })
                        })
                        .collect::<Vec<_>>();
                // join in spawn order so the moments stay in axis order
                let mut moments = Vec::with_capacity(AXES.len());
                for thread in spawned_threads {
                    match thread.join() {
                        Ok(m) => moments.extend(m),
                        Err(_) => {
                            return Err(TransferError::Worker(String::from("Failed to join thread in centroid.")))
                        }
                    }
                }
                Ok(moments)
            }).map_err(|_| {
                  TransferError::Worker(String::from("Centroid thread scope panicked."))
              })?;
            joined?
        }
        _ => AXES.iter()
                 .map(|axis| axis_moment(*axis, density, grid, pbar))
                 .collect(),
    };
    let mut centroid = [0f64; 3];
    for (c, m) in centroid.iter_mut().zip(moments) {
        *c = m / total_density;
    }
    debug!(total_density, ?centroid, "Calculated centroid");
    Ok(centroid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: [[f64; 3]; 3] = [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]];

    fn bar() -> Bar {
        Bar::new(0, 100, String::new())
    }

    fn lumpy(shape: [usize; 3]) -> Density {
        let n = shape.iter().product::<usize>();
        let data = (0..n).map(|x| ((x * 7919) % 113) as f64 * 1.37E-3 + 0.1)
                         .collect();
        Density::new(data, shape).unwrap()
    }

    #[test]
    fn centroid_zero_field() {
        let spacing = [[0.3, 0., 0.], [0.1, 0.2, 0.], [0., 0., 0.7]];
        let grid = Grid::new([3, 4, 5], [1., -2., 3.], spacing).unwrap();
        let density = Density::zeros([3, 4, 5]);
        assert_eq!(centroid(&density, &grid, 1, bar()).unwrap(), [0.; 3]);
        assert_eq!(centroid(&density, &grid, 4, bar()).unwrap(), [0.; 3]);
    }

    #[test]
    fn centroid_single_point() {
        let grid = Grid::new([2, 2, 2], [0.; 3], IDENTITY).unwrap();
        let mut data = vec![0.; 8];
        data[7] = 1.;
        let density = Density::new(data, [2, 2, 2]).unwrap();
        assert_eq!(centroid(&density, &grid, 1, bar()).unwrap(), [1., 1., 1.]);
    }

    #[test]
    fn centroid_uniform() {
        let spacing = [[0.5, 0., 0.], [0., 0.5, 0.], [0., 0., 0.5]];
        let grid = Grid::new([3, 3, 3], [-0.5, 0., 0.5], spacing).unwrap();
        let density = Density::new(vec![2.; 27], [3, 3, 3]).unwrap();
        assert_eq!(centroid(&density, &grid, 1, bar()).unwrap(),
                   [0., 0.5, 1.]);
    }

    #[test]
    fn centroid_negative_field() {
        let grid = Grid::new([4, 3, 2], [0.25, 0., -1.], IDENTITY).unwrap();
        let density = lumpy([4, 3, 2]);
        let positive = centroid(&density, &grid, 1, bar()).unwrap();
        let negative = centroid(&density.scale(-1.), &grid, 1, bar()).unwrap();
        assert_eq!(positive, negative);
    }

    #[test]
    fn centroid_scale_invariant() {
        let spacing = [[0.2, 0., 0.], [0., 0.3, 0.], [0., 0., 0.4]];
        let grid = Grid::new([5, 4, 3], [1., 2., 3.], spacing).unwrap();
        let density = lumpy([5, 4, 3]);
        let reference = centroid(&density, &grid, 1, bar()).unwrap();
        let doubled = centroid(&density.scale(2.), &grid, 1, bar()).unwrap();
        assert_eq!(reference, doubled);
        let scaled = centroid(&density.scale(3.7), &grid, 1, bar()).unwrap();
        for (a, b) in reference.iter().zip(scaled.iter()) {
            assert!((a - b).abs() < 1E-12);
        }
    }

    #[test]
    fn centroid_threads_identical() {
        let spacing = [[0.13, 0., 0.], [0., 0.29, 0.], [0., 0., 0.31]];
        let grid = Grid::new([7, 6, 5], [-1.1, 0.7, 2.3], spacing).unwrap();
        let density = lumpy([7, 6, 5]);
        let sequential = centroid(&density, &grid, 1, bar()).unwrap();
        for threads in 2..9 {
            let threaded = centroid(&density, &grid, threads, bar()).unwrap();
            assert_eq!(sequential, threaded);
        }
    }

    #[test]
    fn centroid_ticks_progress() {
        let grid = Grid::new([4, 2, 2], [0.; 3], IDENTITY).unwrap();
        let density = lumpy([4, 2, 2]);
        let progress_bar = bar();
        let counter = &progress_bar;
        let _ = axis_moment(0, &density, &grid, counter);
        assert_eq!(counter.position(), 4);
    }

    #[test]
    fn centroid_shape_mismatch() {
        let grid = Grid::new([2, 2, 2], [0.; 3], IDENTITY).unwrap();
        let density = Density::zeros([2, 2, 3]);
        assert!(matches!(centroid(&density, &grid, 1, bar()),
                         Err(TransferError::ShapeMismatch { .. })));
    }
}
