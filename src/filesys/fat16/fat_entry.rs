//! FAT16 file allocation table entry

use super::constants::{END_OF_CHAIN, FAT_ENTRY_SIZE, SECTOR_SIZE};

/// Represents a 16-bit FAT entry. Files never chain, so any nonzero value
/// only means "allocated".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FatEntry {
    /// Cluster number or special value (0=free, >=0xFFF8=end)
    pub cluster: u16,
}

impl FatEntry {
    pub const FREE: FatEntry = FatEntry { cluster: 0 };
    pub const END: FatEntry = FatEntry {
        cluster: END_OF_CHAIN,
    };

    /// Returns true if this entry marks the end of a cluster chain
    pub fn is_end_of_chain(&self) -> bool {
        self.cluster >= 0xFFF8
    }

    /// Returns true if this cluster is unused/free
    pub fn is_free(&self) -> bool {
        *self == FatEntry::FREE
    }

    /// Sector offset (relative to the FAT start) and byte offset of the
    /// entry describing `cluster`
    pub fn location(cluster: u16) -> (u64, usize) {
        let offset = cluster as usize * FAT_ENTRY_SIZE;
        ((offset / SECTOR_SIZE) as u64, offset % SECTOR_SIZE)
    }
}
