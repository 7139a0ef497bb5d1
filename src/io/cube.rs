use crate::density::Density;
use crate::errors::{Result, TransferError};
use crate::grid::Grid;
use crate::io::reader::BufReader;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, error, info, warn};

/// The contents of a cube file needed for the transfer analysis.
#[derive(Clone, Debug)]
pub struct CubeFile {
    /// Origin, size and spacing of the grid.
    pub grid: Grid,
    /// The density on the grid.
    pub density: Density,
    /// Number of atom records in the header.
    pub atoms: usize,
}

/// Reads the next header line, a missing line is a malformed header.
fn header_line<'buf>(reader: &mut BufReader,
                     buffer: &'buf mut String,
                     path: &Path)
                     -> Result<&'buf str> {
    let next = reader.line_number() + 1;
    match reader.read_line(buffer) {
        Some(line) => {
            let (text, _) = line.map_err(|e| TransferError::read(path, next, e))?;
            Ok(text.as_str())
        }
        None => Err(TransferError::parse(path,
                                         next,
                                         "unexpected end of file in header")),
    }
}

/// Parses a single token of the header.
fn token<T: FromStr>(text: &str,
                     what: &str,
                     path: &Path,
                     line: usize)
                     -> Result<T> {
    text.parse::<T>().map_err(|_| {
                         TransferError::parse(path,
                                              line,
                                              format!("unable to parse {} from \"{}\"",
                                                      what, text))
                     })
}

/// Read a cube formatted density into its grid and density.
///
/// The density values are kept in the units of the file and in the order
/// they are written, x slowest and z fastest.
pub fn read(path: impl AsRef<Path>) -> Result<CubeFile> {
    let path = path.as_ref();
    info!(file = %path.display(), "Reading cube file");
    let mut reader = BufReader::open(path).map_err(|e| {
                                               error!(file = %path.display(), "Cube file not found or unreadable");
                                               TransferError::io(path, e)
                                           })?;
    let mut buffer = String::new();
    // first two lines are comments
    for _ in 0..2 {
        let _ = header_line(&mut reader, &mut buffer, path)?;
    }
    // number of atoms, the origin and optionally the values per voxel
    let text = header_line(&mut reader, &mut buffer, path)?;
    let line = reader.line_number();
    let split = text.split_whitespace().collect::<Vec<&str>>();
    if split.len() != 4 && split.len() != 5 {
        return Err(TransferError::parse(path,
                                        line,
                                        format!("expected the atom count and origin, found {} values",
                                                split.len())));
    }
    if split.len() == 5 && token::<i64>(split[4], "values per voxel", path, line)? != 1 {
        return Err(TransferError::parse(path,
                                        line,
                                        "multiple values per voxel are unsupported"));
    }
    let natoms = token::<isize>(split[0], "the number of atoms", path, line)?;
    let mut origin = [0f64; 3];
    for (i, o) in origin.iter_mut().enumerate() {
        *o = token(split[i + 1], "the origin", path, line)?;
    }
    debug!(atoms = natoms, "Number of atoms");
    debug!(?origin, "Origin of the grid");
    // the point count and step vector of each axis
    let mut grid_pts = [0usize; 3];
    let mut spacing = [[0f64; 3]; 3];
    for axis in 0..3 {
        let text = header_line(&mut reader, &mut buffer, path)?;
        let line = reader.line_number();
        let split = text.split_whitespace().collect::<Vec<&str>>();
        if split.len() != 4 {
            return Err(TransferError::parse(path,
                                            line,
                                            format!("expected a point count and 3 spacing values, found {} values",
                                                    split.len())));
        }
        let points = token::<i64>(split[0], "the number of points", path, line)?;
        if points <= 0 {
            return Err(TransferError::parse(path,
                                            line,
                                            format!("number of points must be positive, found {}",
                                                    points)));
        }
        grid_pts[axis] = points as usize;
        for (i, s) in spacing[axis].iter_mut().enumerate() {
            *s = token(split[i + 1], "the grid spacing", path, line)?;
        }
        debug!(axis,
               points = grid_pts[axis],
               spacing = ?spacing[axis],
               "Grid size and spacing");
    }
    // skip the atoms, a negative count is followed by the dataset ids
    for _ in 0..natoms.unsigned_abs() {
        let _ = header_line(&mut reader, &mut buffer, path)?;
    }
    if natoms < 0 {
        let text = header_line(&mut reader, &mut buffer, path)?;
        let line = reader.line_number();
        let datasets = match text.split_whitespace().next() {
            Some(t) => token::<usize>(t, "the number of datasets", path, line)?,
            None => {
                return Err(TransferError::parse(path,
                                                line,
                                                "missing the dataset ids"))
            }
        };
        if datasets != 1 {
            return Err(TransferError::parse(path,
                                            line,
                                            "multiple values per voxel are unsupported"));
        }
    }
    let grid = match Grid::new(grid_pts, origin, spacing) {
        Some(grid) => grid,
        None => {
            return Err(TransferError::parse(path,
                                            reader.line_number(),
                                            format!("grid of {:?} points is too large",
                                                    grid_pts)))
        }
    };
    if grid.is_skewed() {
        warn!(spacing = ?grid.spacing,
              "Grid spacing has off-diagonal terms, only the diagonal is used to place points");
    }
    // everything else is density
    let start = reader.line_number() + 1;
    let mut text = String::new();
    let _ = reader.read_rest(&mut text)
                  .map_err(|e| TransferError::read(path, start, e))?;
    let mut data = Vec::with_capacity(grid.size.total.min(text.len()));
    for (i, line) in text.lines().enumerate() {
        for value in line.split_whitespace() {
            data.push(token::<f64>(value, "a density value", path, start + i)?);
        }
    }
    if data.len() != grid.size.total {
        return Err(TransferError::parse(path,
                                        start,
                                        format!("found {} density values, expected {} for a {:?} grid",
                                                data.len(),
                                                grid.size.total,
                                                grid_pts)));
    }
    let density = Density::new(data, grid.shape())?;
    info!(file = %path.display(), "Successfully read density data from cube file");
    debug!(shape = ?density.shape(), "Density data shape");
    Ok(CubeFile { grid,
                  density,
                  atoms: natoms.unsigned_abs() })
}
