use std::fs::File;
use std::io::{self, prelude::*};

/// Read a file line by line into a mutable buffer, counting the lines read.
pub struct BufReader {
    reader: io::BufReader<File>,
    line: usize,
}

impl BufReader {
    /// Opens the file from the path into a reader
    pub fn open(path: impl AsRef<std::path::Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = io::BufReader::new(file);

        Ok(Self { reader, line: 0 })
    }

    /// Reads a line from the buffer reader to mutable string
    pub fn read_line<'buf>(&mut self,
                           buffer: &'buf mut String)
                           -> Option<io::Result<(&'buf mut String, usize)>>
    {
        buffer.clear();

        let read = self.reader
                       .read_line(buffer)
                       .map(|u| if u == 0 { None } else { Some((buffer, u)) })
                       .transpose();
        if let Some(Ok(_)) = read {
            self.line += 1;
        }
        read
    }

    /// Reads everything left in the file into the buffer.
    pub fn read_rest(&mut self, buffer: &mut String) -> io::Result<usize> {
        buffer.clear();
        self.reader.read_to_string(buffer)
    }

    /// The number of lines read so far, equal to the 1-based number of the
    /// last line read.
    pub fn line_number(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reader_counts_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first\nsecond\nthird 1 2\n4 5\n").unwrap();
        let mut reader = BufReader::open(file.path()).unwrap();
        let mut buffer = String::new();
        let (text, size) = reader.read_line(&mut buffer).unwrap().unwrap();
        assert_eq!(text.trim(), "first");
        assert_eq!(size, 6);
        let _ = reader.read_line(&mut buffer).unwrap().unwrap();
        assert_eq!(reader.line_number(), 2);
        let mut rest = String::new();
        let _ = reader.read_rest(&mut rest).unwrap();
        assert_eq!(rest, "third 1 2\n4 5\n");
        assert!(reader.read_line(&mut buffer).is_none());
    }

    #[test]
    fn reader_missing_file() {
        assert!(BufReader::open("does/not/exist.cube").is_err())
    }
}
