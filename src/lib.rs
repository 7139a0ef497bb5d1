//! A fast, multi-threaded calculator of charge-transfer diagnostics between
//! the ground and excited state electron densities of a molecule. Based on
//! the charge-transfer index presented in [Le Bahers, Adamo and Ciofini 2011
//! J. Chem. Theory Comput. 7 2498].
//!
//! ## Installing the binary
//! ### From Source
//! ```sh
//! $ cargo build --verbose --release
//! $ mv ./target/release/ctdiag ~/bin
//! ```
//!
//! ## Usage
//! The program takes two [cube] files, the density of the ground state and
//! the density of the excited state, sampled on the same grid.
//! ```sh
//! $ ctdiag ground.cube excited.cube
//! ```
//! The difference between the densities is split into the density gained
//! (Δρ+) and the density lost (Δρ-) on excitation. The charge transfer
//! distance, DCT, is the distance between the density weighted centroids of
//! the two and the transferred charge, qCT, is the total density gained.
//! For a detailed list of usage options run
//! ```sh
//! $ ctdiag --help
//! ```
//! ## Output
//! The four values are printed and appended, with the names of the input
//! files, to results.txt (-o, --output). Diagnostics of the run are written
//! to dct_qct_calculation.log (-l, --log).
//!
//! ## Using the library
//! ```no_run
//! use ctdiag::analysis::{compute_transfer, Options};
//! use ctdiag::diagnostics::Diagnostics;
//!
//! let result = compute_transfer("ground.cube",
//!                               "excited.cube",
//!                               &Options::default(),
//!                               &Diagnostics::silent()).unwrap();
//! println!("DCT: {:.2}, qCT: {:.2}", result.dct, result.qct);
//! ```
//! ## License
//! MIT
//!
//! [cube]: <https://gaussian.com/cubegen/>
//! [Le Bahers, Adamo and Ciofini 2011 J. Chem. Theory Comput. 7 2498]: <https://doi.org/10.1021/ct200308m>

/// Computes the charge transfer distance and transferred charge, the
/// [compute_transfer](analysis::compute_transfer) entry point reads both
/// files and runs the whole calculation.
pub mod analysis;
/// For parsing command-line arguments.
pub mod arguments;
/// Density weighted centroids, optionally splitting the axes over threads.
pub mod centroid;
/// Contains [Density](density::Density) for storing a density on a grid and
/// the splitting of the difference between two densities.
pub mod density;
/// Provides the [Diagnostics](diagnostics::Diagnostics) handle which
/// receives the log of a calculation.
pub mod diagnostics;
/// Provides custom errors types.
pub mod errors;
/// Contains [Grid](grid::Grid) for placing the points of the density in
/// Cartesian space.
pub mod grid;
/// Handles the File I/O for both the density files and the results file.
pub mod io;
/// Provides a [Bar](progress::Bar) that can be ticked from many threads.
pub mod progress;
/// Misc functions for vector and matrix manipulation.
pub mod utils;

pub use analysis::{compute_transfer, Options, TransferResult};
pub use errors::TransferError;
