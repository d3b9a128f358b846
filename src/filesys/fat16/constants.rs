//! FAT16 volume constants

/// Size of a disk sector in bytes
pub const SECTOR_SIZE: usize = 512;

/// Size of FAT entry in bytes (16-bit)
pub const FAT_ENTRY_SIZE: usize = 2;

/// Size of one root directory record in bytes
pub const DIR_ENTRY_SIZE: usize = 32;

/// Number of sectors reserved for the FAT
pub const FAT_SECTORS: u64 = 256;

/// Maximum number of root directory entries
pub const ROOT_DIR_ENTRIES: usize = 512;

/// Historical allocator scan ceiling. The default image carries exactly
/// enough data sectors for every cluster below it.
pub const CLUSTER_SCAN_LIMIT: u16 = 1000;

/// First cluster number that maps into the data region
pub const FIRST_DATA_CLUSTER: u16 = 2;

/// Length of a blank-padded name field
pub const NAME_LENGTH: usize = 11;

/// Value written into the FAT for every allocated cluster
pub const END_OF_CHAIN: u16 = 0xFFFF;

/// Reserved value of FAT entry 0 (media descriptor in the low byte)
pub const MEDIA_ENTRY: u16 = 0xFFF8;

/// Media descriptor: fixed disk
pub const MEDIA_TYPE: u8 = 0xF8;

/// Marker for slots that were never used; also ends the live listing
pub const FREE_ENTRY_MARKER: u8 = 0x00;

/// Marker for deleted directory entries
pub const DELETED_ENTRY_MARKER: u8 = 0xE5;

/// Boot sector signature stored at offsets 510 and 511
pub const BOOT_SIGNATURE: [u8; 2] = [0x55, 0xAA];
