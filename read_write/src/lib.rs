use std::fs::File;
use std::io::prelude::*;
use std::io::{Error, ErrorKind, Result};

/// Width in bytes of one table entry on disk
pub const ENTRY_SIZE: usize = 4;

/// object used to extend functionality of File
/// used for reading and writing lookup tables as little-endian u32 entries
pub trait TableIO {
    fn write_table(&mut self, data: &[u32]) -> Result<()>;
    fn read_table(&mut self) -> Result<Vec<u32>>;
}

impl TableIO for File {
    /// Writes every entry as 4 little-endian bytes
    fn write_table(&mut self, data: &[u32]) -> Result<()> {
        let mut bytes = Vec::with_capacity(data.len() * ENTRY_SIZE);
        for entry in data {
            bytes.extend_from_slice(&entry.to_le_bytes());
        }
        self.write_all(&bytes)
    }

    /// Reads a table previously written with `write_table`
    fn read_table(&mut self) -> Result<Vec<u32>> {
        let mut bytes = Vec::new();
        let size = self.read_to_end(&mut bytes)?;
        if size % ENTRY_SIZE != 0 {
            return Err(Error::new(
                ErrorKind::UnexpectedEof,
                format!(
                    "read_table() returned a number of bytes ({}) which is not a multiple of size ({})",
                    size, ENTRY_SIZE
                ),
            ));
        }
        Ok(bytes
            .chunks_exact(ENTRY_SIZE)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }
}

/// Decodes an embedded table at compile time
///
/// Used together with `include_bytes!` so the tables written by the build
/// script end up as plain `'static` arrays.
///
/// # Panics
///
/// Fails const evaluation if `bytes` holds fewer than `N` entries.
pub const fn decode_table<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut table = [0u32; N];
    let mut i = 0;
    while i < N {
        let at = i * ENTRY_SIZE;
        table[i] = u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_write_then_read_table() {
        let path = env::temp_dir().join("read_write_test_table.dat");
        let data: Vec<u32> = vec![0, 1, 0xdead_beef, 8191, u32::MAX];
        {
            let mut file = File::create(&path).unwrap();
            file.write_table(&data).unwrap();
        }
        let mut file = File::open(&path).unwrap();
        assert_eq!(file.read_table().unwrap(), data);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_decode_table() {
        const BYTES: [u8; 8] = [1, 0, 0, 0, 0, 1, 0, 0];
        const TABLE: [u32; 2] = decode_table::<2>(&BYTES);
        assert_eq!(TABLE, [1, 256]);
    }
}
