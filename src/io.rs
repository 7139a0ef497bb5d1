/// Reading of the Gaussian cube format into a [Grid](crate::grid::Grid) and
/// [Density](crate::density::Density).
pub mod cube;
/// Formatting and appending of the results file.
pub mod output;
/// Line by line file reader used for the cube header.
pub mod reader;
