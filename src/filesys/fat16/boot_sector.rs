//! FAT16 Boot Sector Structure

use super::constants::*;

/// Represents the boot sector (BPB) of the volume. Only the fields needed
/// to rebuild the geometry are read back on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootSector {
    /// Jump instruction to boot code
    pub jump_boot: [u8; 3],

    /// Name of the system that formatted the volume
    pub oem_name: [u8; 8],

    /// Number of bytes per sector
    pub bytes_per_sector: u16,

    /// Number of sectors per cluster; always 1, a file owns one sector
    pub sectors_per_cluster: u8,

    /// Number of reserved sectors at start of volume, boot sector included
    pub reserved_sectors: u16,

    /// Number of FAT copies
    pub fat_count: u8,

    /// Maximum number of root directory entries
    pub root_dir_entries: u16,

    /// Total number of sectors (16-bit)
    pub total_sectors_16: u16,

    /// Media type descriptor
    pub media_type: u8,

    /// Sectors per FAT
    pub sectors_per_fat: u16,

    /// Extended boot signature
    pub boot_signature: u8,

    /// Volume serial number
    pub volume_id: u32,

    /// Volume label
    pub volume_label: [u8; 11],

    /// Filesystem type string
    pub fs_type: [u8; 8],
}

impl BootSector {
    pub fn new(total_sectors: u64, sectors_per_fat: u16, root_dir_entries: u16) -> Self {
        Self {
            jump_boot: [0xEB, 0x3C, 0x90], // Standard boot jump
            oem_name: *b"FATSHELL",
            bytes_per_sector: SECTOR_SIZE as u16,
            sectors_per_cluster: 1,
            reserved_sectors: 1,
            fat_count: 1,
            root_dir_entries,
            total_sectors_16: total_sectors as u16,
            media_type: MEDIA_TYPE,
            sectors_per_fat,
            boot_signature: 0x29,
            volume_id: 0x1234_5678,
            volume_label: *b"NO NAME    ",
            fs_type: *b"FAT16   ",
        }
    }

    /// Serializes into a full sector, signature included
    pub fn to_bytes(&self) -> [u8; SECTOR_SIZE] {
        let mut raw = [0u8; SECTOR_SIZE];
        raw[0..3].copy_from_slice(&self.jump_boot);
        raw[3..11].copy_from_slice(&self.oem_name);
        raw[11..13].copy_from_slice(&self.bytes_per_sector.to_le_bytes());
        raw[13] = self.sectors_per_cluster;
        raw[14..16].copy_from_slice(&self.reserved_sectors.to_le_bytes());
        raw[16] = self.fat_count;
        raw[17..19].copy_from_slice(&self.root_dir_entries.to_le_bytes());
        raw[19..21].copy_from_slice(&self.total_sectors_16.to_le_bytes());
        raw[21] = self.media_type;
        raw[22..24].copy_from_slice(&self.sectors_per_fat.to_le_bytes());
        raw[38] = self.boot_signature;
        raw[39..43].copy_from_slice(&self.volume_id.to_le_bytes());
        raw[43..54].copy_from_slice(&self.volume_label);
        raw[54..62].copy_from_slice(&self.fs_type);
        raw[510..512].copy_from_slice(&BOOT_SIGNATURE);
        raw
    }

    /// Parses a boot sector; `None` if the signature is missing
    pub fn from_bytes(raw: &[u8; SECTOR_SIZE]) -> Option<Self> {
        if raw[510..512] != BOOT_SIGNATURE {
            return None;
        }

        let mut jump_boot = [0u8; 3];
        jump_boot.copy_from_slice(&raw[0..3]);
        let mut oem_name = [0u8; 8];
        oem_name.copy_from_slice(&raw[3..11]);
        let mut volume_label = [0u8; 11];
        volume_label.copy_from_slice(&raw[43..54]);
        let mut fs_type = [0u8; 8];
        fs_type.copy_from_slice(&raw[54..62]);

        Some(Self {
            jump_boot,
            oem_name,
            bytes_per_sector: u16::from_le_bytes([raw[11], raw[12]]),
            sectors_per_cluster: raw[13],
            reserved_sectors: u16::from_le_bytes([raw[14], raw[15]]),
            fat_count: raw[16],
            root_dir_entries: u16::from_le_bytes([raw[17], raw[18]]),
            total_sectors_16: u16::from_le_bytes([raw[19], raw[20]]),
            media_type: raw[21],
            sectors_per_fat: u16::from_le_bytes([raw[22], raw[23]]),
            boot_signature: raw[38],
            volume_id: u32::from_le_bytes([raw[39], raw[40], raw[41], raw[42]]),
            volume_label,
            fs_type,
        })
    }
}
