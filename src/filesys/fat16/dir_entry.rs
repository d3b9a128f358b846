//! Root directory entry structure and operations

use super::constants::*;
use alloc::string::String;

/// Fixed-width directory record (32 bytes on disk, little-endian)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry {
    /// 11 byte blank-padded name
    pub name: [u8; NAME_LENGTH],

    /// File attributes, always zero for files created by the shell
    pub attributes: u8,

    /// Reserved
    pub reserved: [u8; 14],

    /// First (and only) cluster number
    pub first_cluster: u16,

    /// Byte length of the most recent write
    pub size: u32,
}

/// Pads (or truncates) a name into the fixed 11-byte field form
pub fn pad_name(name: &str) -> [u8; NAME_LENGTH] {
    let mut field = [b' '; NAME_LENGTH];
    let bytes = name.as_bytes();
    let len = bytes.len().min(NAME_LENGTH);
    field[..len].copy_from_slice(&bytes[..len]);
    field
}

impl DirEntry {
    /// Creates a zeroed file entry with given name and cluster
    pub fn new_file(name: &str, first_cluster: u16) -> Self {
        Self {
            name: pad_name(name),
            attributes: 0,
            reserved: [0; 14],
            first_cluster,
            size: 0,
        }
    }

    pub fn from_bytes(raw: &[u8]) -> Self {
        let mut name = [0u8; NAME_LENGTH];
        name.copy_from_slice(&raw[..11]);
        let mut reserved = [0u8; 14];
        reserved.copy_from_slice(&raw[12..26]);

        Self {
            name,
            attributes: raw[11],
            reserved,
            first_cluster: u16::from_le_bytes([raw[26], raw[27]]),
            size: u32::from_le_bytes([raw[28], raw[29], raw[30], raw[31]]),
        }
    }

    pub fn to_bytes(&self) -> [u8; DIR_ENTRY_SIZE] {
        let mut raw = [0u8; DIR_ENTRY_SIZE];
        raw[..11].copy_from_slice(&self.name);
        raw[11] = self.attributes;
        raw[12..26].copy_from_slice(&self.reserved);
        raw[26..28].copy_from_slice(&self.first_cluster.to_le_bytes());
        raw[28..32].copy_from_slice(&self.size.to_le_bytes());
        raw
    }

    /// Returns true if entry is marked as deleted
    pub fn is_deleted(&self) -> bool {
        self.name[0] == DELETED_ENTRY_MARKER
    }

    /// Returns true if entry is empty/unused
    pub fn is_free(&self) -> bool {
        self.name[0] == FREE_ENTRY_MARKER
    }

    /// Returns true if a create may claim this slot
    pub fn is_reusable(&self) -> bool {
        self.is_free() || self.is_deleted()
    }

    /// Name with the trailing padding removed
    pub fn name(&self) -> String {
        let end = self
            .name
            .iter()
            .rposition(|&b| b != b' ')
            .map_or(0, |pos| pos + 1);
        self.name[..end].iter().map(|&b| b as char).collect()
    }

    /// Name rendered the 8.3 way: base, then `.ext` when the extension
    /// field is not blank
    pub fn dotted_name(&self) -> String {
        let mut out: String = self.name[..8]
            .iter()
            .take_while(|&&b| b != b' ')
            .map(|&b| b as char)
            .collect();
        if self.name[8] != b' ' {
            out.push('.');
            out.extend(
                self.name[8..]
                    .iter()
                    .take_while(|&&b| b != b' ')
                    .map(|&b| b as char),
            );
        }
        out
    }

    /// Raw 11-byte field as text, padding included
    pub fn padded_name(&self) -> String {
        self.name.iter().map(|&b| b as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_name() {
        assert_eq!(&pad_name("a.txt"), b"a.txt      ");
        assert_eq!(&pad_name("averyverylongname"), b"averyverylo");
        assert_eq!(&pad_name(""), b"           ");
    }

    #[test]
    fn test_layout_offsets() {
        let mut entry = DirEntry::new_file("NOTES", 0x1234);
        entry.size = 0x0102_0304;
        let raw = entry.to_bytes();

        assert_eq!(&raw[..11], b"NOTES      ");
        assert_eq!(&raw[26..28], &[0x34, 0x12]);
        assert_eq!(&raw[28..32], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(DirEntry::from_bytes(&raw), entry);
    }

    #[test]
    fn test_markers() {
        let mut entry = DirEntry::from_bytes(&[0u8; DIR_ENTRY_SIZE]);
        assert!(entry.is_free());
        assert!(entry.is_reusable());

        entry.name = pad_name("x");
        assert!(!entry.is_reusable());

        entry.name[0] = DELETED_ENTRY_MARKER;
        assert!(entry.is_deleted());
        assert!(entry.is_reusable());
    }

    #[test]
    fn test_names() {
        let entry = DirEntry::new_file("README  TXT", 2);
        assert_eq!(entry.name(), "README  TXT");
        assert_eq!(entry.dotted_name(), "README.TXT");

        let entry = DirEntry::new_file("hello.txt", 2);
        assert_eq!(entry.name(), "hello.txt");
        assert_eq!(entry.dotted_name(), "hello.tx.t");
        assert_eq!(entry.padded_name(), "hello.txt  ");
    }
}
