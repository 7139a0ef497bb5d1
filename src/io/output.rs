use crate::analysis::TransferResult;
use crate::errors::{Result, TransferError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// The line separating the result blocks.
const SEPARATOR: &str = "=============================================";

/// Formats a position as [x, y, z].
pub fn vector(v: [f64; 3]) -> String {
    format!("[{:.6}, {:.6}, {:.6}]", v[0], v[1], v[2])
}

/// The four results, one per line.
pub fn summary(result: &TransferResult) -> String {
    format!("Charge Transfer Distance (DCT): {:.2} Å\n\
             Transferred Charge (qCT): {:.2} e\n\
             Centroid of Positive Density Changes (R+): {}\n\
             Centroid of Negative Density Changes (R-): {}\n",
            result.dct,
            result.qct,
            vector(result.centroid_plus),
            vector(result.centroid_minus))
}

/// The block appended to the results file for a single calculation.
pub fn results_block(ground_file: &Path,
                     excited_file: &Path,
                     result: &TransferResult)
                     -> String {
    format!("{sep}\nResults for files: \nGround State File: {}\nExcited State File: {}\n{}{sep}\n\n",
            ground_file.display(),
            excited_file.display(),
            summary(result),
            sep = SEPARATOR)
}

/// Appends the string to the file, creating it if it doesn't exist.
pub fn write(contents: String, filename: impl AsRef<Path>) -> Result<()> {
    let filename = filename.as_ref();
    let mut file = OpenOptions::new().create(true)
                                     .append(true)
                                     .open(filename)
                                     .map_err(|e| TransferError::io(filename, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| TransferError::io(filename, e))
}
