use crate::centroid::centroid;
use crate::density::{self, DensityDifference};
use crate::diagnostics::Diagnostics;
use crate::errors::{Result, TransferError};
use crate::grid::Grid;
use crate::io::cube;
use crate::progress::Bar;
use crate::utils;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Relative tolerance for two grids to be considered the same geometry.
const GEOMETRY_TOLERANCE: f64 = 1E-6;

/// Settings for a transfer calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Threads used for the centroid reduction, 1 or less is sequential.
    pub threads: usize,
    /// Warn if the positive and negative changes differ by more than this.
    pub conservation_tolerance: f64,
    /// Display progress bars on stderr.
    pub progress: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { threads: num_cpus::get(),
               conservation_tolerance: 1E-6,
               progress: false }
    }
}

/// The charge-transfer diagnostics of an excitation.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferResult {
    /// Distance between the centroids of density gain and density loss.
    pub dct: f64,
    /// Total density gained.
    pub qct: f64,
    /// Total density lost, this is negative.
    pub charge_minus: f64,
    /// Centroid of the density gained, R+.
    pub centroid_plus: [f64; 3],
    /// Centroid of the density lost, R-.
    pub centroid_minus: [f64; 3],
}

/// Computes the charge transfer distance and transferred charge from the
/// density difference.
pub fn transfer_metrics(difference: &DensityDifference,
                        grid: &Grid,
                        options: &Options)
                        -> Result<TransferResult> {
    let len = 3 * grid.size.x as u64;
    let pbar = Bar::maybe_visible(options.progress,
                                  len,
                                  100,
                                  String::from("Centroid (R+): "));
    let centroid_plus = centroid(&difference.plus, grid, options.threads, pbar)?;
    let pbar = Bar::maybe_visible(options.progress,
                                  len,
                                  100,
                                  String::from("Centroid (R-): "));
    let centroid_minus =
        centroid(&difference.minus, grid, options.threads, pbar)?;
    let dct = utils::norm(utils::subtract(centroid_plus, centroid_minus));
    let qct = difference.plus.sum();
    let charge_minus = difference.minus.sum();
    if (qct + charge_minus).abs() > options.conservation_tolerance {
        warn!(qct,
              charge_minus,
              tolerance = options.conservation_tolerance,
              "Density gained and density lost do not balance");
    }
    info!("Computed DCT and qCT.");
    debug!(dct, "DCT (Charge Transfer Distance)");
    debug!(qct, "qCT (Transferred Charge)");
    debug!(?centroid_plus, "Centroid (R+)");
    debug!(?centroid_minus, "Centroid (R-)");
    Ok(TransferResult { dct,
                        qct,
                        charge_minus,
                        centroid_plus,
                        centroid_minus })
}

/// Checks the ground and excited densities share a grid.
pub fn check_grids(ground: &Grid, excited: &Grid) -> Result<()> {
    if ground.shape() != excited.shape() {
        error!(ground = ?ground.shape(),
               excited = ?excited.shape(),
               "Mismatch in grid size between ground state and excited state cube files.");
        return Err(TransferError::ShapeMismatch { ground: ground.shape(),
                                                  excited: excited.shape() });
    }
    if !ground.same_geometry(excited, GEOMETRY_TOLERANCE) {
        error!("Mismatch in grid origin or spacing between ground state and excited state cube files.");
        let describe = |g: &Grid| {
            format!("origin {:?}, spacing {:?}", g.origin, g.spacing)
        };
        return Err(TransferError::GeometryMismatch { ground: describe(ground),
                                                     excited: describe(excited) });
    }
    Ok(())
}

/// Reads the ground and excited state cube files and computes the charge
/// transfer between them, with `diagnostics` receiving the log.
pub fn compute_transfer(ground_file: impl AsRef<Path>,
                        excited_file: impl AsRef<Path>,
                        options: &Options,
                        diagnostics: &Diagnostics)
                        -> Result<TransferResult> {
    let (ground_file, excited_file) = (ground_file.as_ref(), excited_file.as_ref());
    diagnostics.in_scope(|| -> Result<TransferResult> {
                   info!("Starting DCT and qCT calculation.");
                   let ground = cube::read(ground_file)?;
                   let excited = cube::read(excited_file)?;
                   check_grids(&ground.grid, &excited.grid)?;
                   let difference = density::difference(&ground.density,
                                                        &excited.density)?;
                   let result =
                       transfer_metrics(&difference, &ground.grid, options)?;
                   info!(dct = result.dct,
                         qct = result.qct,
                         "Charge transfer calculation finished.");
                   Ok(result)
               })
}
