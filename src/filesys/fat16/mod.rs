//! FAT16-style volume over a block device.
//!
//! The layout is the classic four regions (boot sector, FAT, root directory,
//! data) but every file owns exactly one cluster of one sector. The FAT is
//! only ever used as an allocation map; chains are never followed.

use super::*;
use alloc::boxed::Box;
use alloc::vec::Vec;

mod boot_sector;
pub mod constants;
mod dir_entry;
mod fat_entry;

pub use boot_sector::BootSector;
use constants::*;
pub use dir_entry::{pad_name, DirEntry};
pub use fat_entry::FatEntry;

/// Shape of a volume. Everything else (region starts, scan ceiling) is
/// derived from these three numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Sectors reserved for the FAT
    pub fat_sectors: u16,
    /// Root directory slot count
    pub root_entries: u16,
    /// Usable clusters in the data region, numbered from 2
    pub data_clusters: u16,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            fat_sectors: FAT_SECTORS as u16,
            root_entries: ROOT_DIR_ENTRIES as u16,
            data_clusters: CLUSTER_SCAN_LIMIT - FIRST_DATA_CLUSTER,
        }
    }
}

impl Geometry {
    /// Starting sector of the FAT (right after the boot sector)
    pub fn fat_start(&self) -> u64 {
        1
    }

    /// Starting sector of root directory
    pub fn root_dir_start(&self) -> u64 {
        self.fat_start() + self.fat_sectors as u64
    }

    pub fn root_dir_sectors(&self) -> u64 {
        (self.root_entries as usize * DIR_ENTRY_SIZE).div_ceil(SECTOR_SIZE) as u64
    }

    /// Starting sector of data area
    pub fn data_start(&self) -> u64 {
        self.root_dir_start() + self.root_dir_sectors()
    }

    pub fn total_sectors(&self) -> u64 {
        self.data_start() + self.data_clusters as u64
    }

    /// Exclusive upper bound of the allocator scan: the data region size,
    /// clamped to what the FAT can describe
    pub fn cluster_limit(&self) -> u16 {
        let fat_capacity = self.fat_sectors as usize * SECTOR_SIZE / FAT_ENTRY_SIZE;
        let data_limit = FIRST_DATA_CLUSTER as usize + self.data_clusters as usize;
        data_limit.min(fat_capacity).min(u16::MAX as usize) as u16
    }

    /// A usable layout has a FAT, at least one root slot, at least one
    /// allocatable cluster, and a sector count the boot sector can hold
    pub fn validate(&self) -> Result<(), FsError> {
        if self.fat_sectors == 0
            || self.root_entries == 0
            || self.cluster_limit() <= FIRST_DATA_CLUSTER
            || self.total_sectors() > u16::MAX as u64
        {
            return Err(FsError::InvalidGeometry);
        }
        Ok(())
    }
}

/// Content of a file as stored: the whole sector plus the recorded size.
/// Bytes past `size` are leftovers of earlier writes.
#[derive(Clone)]
pub struct FileData {
    sector: [u8; SECTOR_SIZE],
    size: usize,
}

impl FileData {
    /// The file's bytes, `..size`
    pub fn bytes(&self) -> &[u8] {
        &self.sector[..self.size]
    }

    /// The raw sector, leftovers included
    pub fn sector(&self) -> &[u8; SECTOR_SIZE] {
        &self.sector
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Occupancy summary used by the `free` and `stat` style commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeUsage {
    pub live_files: usize,
    pub used_slots: usize,
    pub total_slots: usize,
    pub used_clusters: usize,
    pub total_clusters: usize,
    pub image_bytes: usize,
}

/// FAT16 filesystem driver
pub struct Fat16 {
    /// Underlying block device
    device: Box<dyn BlockDevice>,
    /// Region layout
    geometry: Geometry,
}

impl Fat16 {
    /// Lays a fresh, empty volume onto `device`
    ///
    /// The result is the volume mounted back from what was written, so a
    /// layout the boot sector cannot describe never reaches the caller.
    pub fn format(device: Box<dyn BlockDevice>, geometry: Geometry) -> Result<Self, FsError> {
        geometry.validate()?;
        if device.block_size() != SECTOR_SIZE || device.total_blocks() < geometry.total_sectors() {
            return Err(FsError::IOError);
        }

        let mut fs = Fat16 { device, geometry };
        fs.reformat()?;

        let mounted = Fat16::mount(fs.device)?;
        if mounted.geometry != geometry {
            log::warn!("formatted {:?} but mounted {:?}", geometry, mounted.geometry);
            return Err(FsError::IOError);
        }
        Ok(mounted)
    }

    /// Opens an already formatted device, rebuilding the geometry from the
    /// boot sector
    pub fn mount(device: Box<dyn BlockDevice>) -> Result<Self, FsError> {
        let mut raw = [0u8; SECTOR_SIZE];
        device.read_block(0, &mut raw)?;
        let boot = BootSector::from_bytes(&raw).ok_or(FsError::NotFormatted)?;

        if boot.bytes_per_sector as usize != SECTOR_SIZE || boot.sectors_per_cluster != 1 {
            return Err(FsError::NotFormatted);
        }

        let mut geometry = Geometry {
            fat_sectors: boot.sectors_per_fat,
            root_entries: boot.root_dir_entries,
            data_clusters: 0,
        };
        let total = boot.total_sectors_16 as u64;
        if total < geometry.data_start() || total > device.total_blocks() {
            return Err(FsError::NotFormatted);
        }
        geometry.data_clusters = (total - geometry.data_start()) as u16;
        if geometry.validate().is_err() {
            return Err(FsError::NotFormatted);
        }

        let fs = Fat16 { device, geometry };
        if !fs.read_fat_entry(1)?.is_end_of_chain() {
            return Err(FsError::NotFormatted);
        }

        log::info!(
            "mounted volume: {} sectors, {} root slots, {} clusters",
            total,
            geometry.root_entries,
            geometry.data_clusters
        );
        Ok(fs)
    }

    /// Zeroes the image and writes an empty, consistent layout. Idempotent.
    pub fn reformat(&mut self) -> Result<(), FsError> {
        let geometry = self.geometry;
        let zero_block = [0u8; SECTOR_SIZE];

        for sector in 0..self.device.total_blocks() {
            self.device.write_block(sector, &zero_block)?;
        }

        let boot_sector = BootSector::new(
            geometry.total_sectors(),
            geometry.fat_sectors,
            geometry.root_entries,
        );
        self.device.write_block(0, &boot_sector.to_bytes())?;

        // First two FAT entries are reserved
        let mut fat_block = [0u8; SECTOR_SIZE];
        fat_block[0..2].copy_from_slice(&MEDIA_ENTRY.to_le_bytes());
        fat_block[2..4].copy_from_slice(&END_OF_CHAIN.to_le_bytes());
        self.device.write_block(geometry.fat_start(), &fat_block)?;

        for i in 1..geometry.fat_sectors as u64 {
            self.device
                .write_block(geometry.fat_start() + i, &zero_block)?;
        }

        for i in 0..geometry.root_dir_sectors() {
            self.device
                .write_block(geometry.root_dir_start() + i, &zero_block)?;
        }

        log::info!(
            "formatted volume: {} sectors (fat {}, root {}, data from {})",
            geometry.total_sectors(),
            geometry.fat_sectors,
            geometry.root_dir_sectors(),
            geometry.data_start()
        );
        Ok(())
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn read_fat_entry(&self, cluster: u16) -> Result<FatEntry, FsError> {
        let (sector, sector_offset) = FatEntry::location(cluster);

        let mut sector_data = [0u8; SECTOR_SIZE];
        self.device
            .read_block(self.geometry.fat_start() + sector, &mut sector_data)?;

        let entry =
            u16::from_le_bytes([sector_data[sector_offset], sector_data[sector_offset + 1]]);

        Ok(FatEntry { cluster: entry })
    }

    fn write_fat_entry(&mut self, cluster: u16, entry: FatEntry) -> Result<(), FsError> {
        let (sector, sector_offset) = FatEntry::location(cluster);
        let sector = self.geometry.fat_start() + sector;

        let mut sector_data = [0u8; SECTOR_SIZE];
        self.device.read_block(sector, &mut sector_data)?;

        sector_data[sector_offset..sector_offset + FAT_ENTRY_SIZE]
            .copy_from_slice(&entry.cluster.to_le_bytes());

        self.device.write_block(sector, &sector_data)
    }

    /// Claims the first free cluster at or above 2, marking it end-of-chain.
    /// There is no matching free; clusters come back only on reformat.
    pub fn allocate_cluster(&mut self) -> Result<u16, FsError> {
        for cluster in FIRST_DATA_CLUSTER..self.geometry.cluster_limit() {
            let entry = self.read_fat_entry(cluster)?;
            if entry.is_free() {
                self.write_fat_entry(cluster, FatEntry::END)?;
                log::trace!("allocated cluster {}", cluster);
                return Ok(cluster);
            }
        }

        log::warn!("no free clusters below {}", self.geometry.cluster_limit());
        Err(FsError::Full)
    }

    /// Converts cluster number to absolute sector number
    pub fn cluster_to_sector(&self, cluster: u16) -> u64 {
        self.geometry.data_start() + (cluster - FIRST_DATA_CLUSTER) as u64
    }

    /// Sector holding root slot `index` and the byte offset inside it
    fn slot_location(&self, index: usize) -> (u64, usize) {
        let offset = index * DIR_ENTRY_SIZE;
        (
            self.geometry.root_dir_start() + (offset / SECTOR_SIZE) as u64,
            offset % SECTOR_SIZE,
        )
    }

    pub fn read_root_entry(&self, index: usize) -> Result<DirEntry, FsError> {
        let (sector, offset) = self.slot_location(index);
        let mut sector_buffer = [0u8; SECTOR_SIZE];
        self.device.read_block(sector, &mut sector_buffer)?;
        Ok(DirEntry::from_bytes(
            &sector_buffer[offset..offset + DIR_ENTRY_SIZE],
        ))
    }

    fn write_root_entry(&mut self, index: usize, entry: &DirEntry) -> Result<(), FsError> {
        let (sector, offset) = self.slot_location(index);
        let mut sector_buffer = [0u8; SECTOR_SIZE];
        self.device.read_block(sector, &mut sector_buffer)?;
        sector_buffer[offset..offset + DIR_ENTRY_SIZE].copy_from_slice(&entry.to_bytes());
        self.device.write_block(sector, &sector_buffer)
    }

    /// Byte-for-byte scan of every slot for the padded name. Tombstones are
    /// not skipped; their first byte simply never matches typed names.
    pub fn find(&self, name: &str) -> Result<(DirEntry, usize), FsError> {
        let wanted = pad_name(name);
        for index in 0..self.geometry.root_entries as usize {
            let entry = self.read_root_entry(index)?;
            if entry.name == wanted {
                return Ok((entry, index));
            }
        }
        Err(FsError::NotFound)
    }

    pub fn exists(&self, name: &str) -> Result<bool, FsError> {
        match self.find(name) {
            Ok(_) => Ok(true),
            Err(FsError::NotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// User-facing create: refuses names that already resolve
    pub fn touch(&mut self, name: &str) -> Result<DirEntry, FsError> {
        if self.exists(name)? {
            return Err(FsError::AlreadyExists);
        }
        self.create_entry(name).map(|(entry, _)| entry)
    }

    /// Internal create path. Does not check for an existing name; claims
    /// the first never-used or tombstoned slot, then a cluster, and zeroes
    /// both the record and its data sector.
    pub fn create_entry(&mut self, name: &str) -> Result<(DirEntry, usize), FsError> {
        for index in 0..self.geometry.root_entries as usize {
            if !self.read_root_entry(index)?.is_reusable() {
                continue;
            }

            let cluster = self.allocate_cluster()?;
            let entry = DirEntry::new_file(name, cluster);
            self.write_root_entry(index, &entry)?;
            self.device
                .write_block(self.cluster_to_sector(cluster), &[0u8; SECTOR_SIZE])?;

            log::debug!("created '{}' in slot {} (cluster {})", name, index, cluster);
            return Ok((entry, index));
        }

        log::warn!("root directory full, cannot create '{}'", name);
        Err(FsError::Full)
    }

    /// Rewrites the name field in place. Returns `false` without touching
    /// anything when `old` does not resolve.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<bool, FsError> {
        let (mut entry, index) = match self.find(old) {
            Ok(found) => found,
            Err(FsError::NotFound) => return Ok(false),
            Err(err) => return Err(err),
        };

        entry.name = pad_name(new);
        self.write_root_entry(index, &entry)?;
        log::debug!("renamed '{}' -> '{}'", old, new);
        Ok(true)
    }

    /// Marks the entry deleted. The cluster stays allocated in the FAT.
    pub fn tombstone(&mut self, name: &str) -> Result<DirEntry, FsError> {
        let (mut entry, index) = self.find(name)?;
        entry.name[0] = DELETED_ENTRY_MARKER;
        self.write_root_entry(index, &entry)?;
        log::debug!(
            "tombstoned '{}' (cluster {} stays allocated)",
            name,
            entry.first_cluster
        );
        Ok(entry)
    }

    /// Live entries in slot order: stops at the first never-used slot and
    /// skips tombstones
    pub fn entries(&self) -> Result<Vec<(usize, DirEntry)>, FsError> {
        let mut result = Vec::new();
        for index in 0..self.geometry.root_entries as usize {
            let entry = self.read_root_entry(index)?;
            if entry.is_free() {
                break;
            }
            if !entry.is_deleted() {
                result.push((index, entry));
            }
        }
        Ok(result)
    }

    pub fn read(&self, name: &str) -> Result<FileData, FsError> {
        let (entry, _) = self.find(name)?;
        let mut sector = [0u8; SECTOR_SIZE];
        self.device
            .read_block(self.cluster_to_sector(entry.first_cluster), &mut sector)?;
        Ok(FileData {
            sector,
            size: (entry.size as usize).min(SECTOR_SIZE),
        })
    }

    /// Full-sector overwrite of the file's only cluster, creating the file
    /// first when needed
    pub fn write(&mut self, name: &str, bytes: &[u8]) -> Result<(), FsError> {
        if bytes.len() > SECTOR_SIZE {
            return Err(FsError::FileTooLarge);
        }

        let (mut entry, index) = match self.find(name) {
            Ok(found) => found,
            Err(FsError::NotFound) => self.create_entry(name)?,
            Err(err) => return Err(err),
        };

        let mut sector = [0u8; SECTOR_SIZE];
        sector[..bytes.len()].copy_from_slice(bytes);
        self.device
            .write_block(self.cluster_to_sector(entry.first_cluster), &sector)?;

        entry.size = bytes.len() as u32;
        self.write_root_entry(index, &entry)?;
        log::trace!("wrote {} bytes to '{}'", bytes.len(), name);
        Ok(())
    }

    pub fn usage(&self) -> Result<VolumeUsage, FsError> {
        let mut used_slots = 0;
        for index in 0..self.geometry.root_entries as usize {
            if !self.read_root_entry(index)?.is_free() {
                used_slots += 1;
            }
        }

        let mut used_clusters = 0;
        for cluster in FIRST_DATA_CLUSTER..self.geometry.cluster_limit() {
            if !self.read_fat_entry(cluster)?.is_free() {
                used_clusters += 1;
            }
        }

        Ok(VolumeUsage {
            live_files: self.entries()?.len(),
            used_slots,
            total_slots: self.geometry.root_entries as usize,
            used_clusters,
            total_clusters: (self.geometry.cluster_limit() - FIRST_DATA_CLUSTER) as usize,
            image_bytes: self.device.total_blocks() as usize * SECTOR_SIZE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesys::block::memory::MemoryBlockDevice;
    use quickcheck::TestResult;

    fn volume(geometry: Geometry) -> Fat16 {
        let device = MemoryBlockDevice::new(geometry.total_sectors(), SECTOR_SIZE);
        Fat16::format(Box::new(device), geometry).unwrap()
    }

    fn small() -> Geometry {
        Geometry {
            fat_sectors: 1,
            root_entries: 16,
            data_clusters: 4,
        }
    }

    #[test]
    fn test_default_layout() {
        let geometry = Geometry::default();
        assert_eq!(geometry.root_dir_start(), 257);
        assert_eq!(geometry.root_dir_sectors(), 32);
        assert_eq!(geometry.data_start(), 289);
        assert_eq!(geometry.total_sectors(), 1287);
        assert_eq!(geometry.cluster_limit(), CLUSTER_SCAN_LIMIT);
    }

    #[test]
    fn test_cluster_limit_clamped_to_fat() {
        let geometry = Geometry {
            fat_sectors: 1,
            root_entries: 16,
            data_clusters: 1000,
        };
        assert_eq!(geometry.cluster_limit(), 256);
    }

    #[test]
    fn test_format_reserves_first_clusters() {
        let fs = volume(Geometry::default());
        assert_eq!(fs.read_fat_entry(0).unwrap().cluster, 0xFFF8);
        assert_eq!(fs.read_fat_entry(1).unwrap().cluster, 0xFFFF);
        assert!(fs.read_fat_entry(2).unwrap().is_free());
        assert!(fs.entries().unwrap().is_empty());
    }

    #[test]
    fn test_reformat_is_idempotent() {
        let mut fs = volume(small());
        fs.write("a", b"hello").unwrap();
        fs.reformat().unwrap();
        fs.reformat().unwrap();

        assert_eq!(fs.find("a").unwrap_err(), FsError::NotFound);
        assert!(fs.read_fat_entry(2).unwrap().is_free());
        assert_eq!(fs.usage().unwrap().used_clusters, 0);
    }

    /// Raw device holding only a boot sector, plus the reserved FAT entries
    /// when `marked`
    fn bare_device(total: u64, fat_sectors: u16, root_entries: u16, marked: bool) -> MemoryBlockDevice {
        let mut device = MemoryBlockDevice::new(8.max(total), SECTOR_SIZE);
        let boot = BootSector::new(total, fat_sectors, root_entries);
        device.write_block(0, &boot.to_bytes()).unwrap();
        if marked {
            let mut fat = [0u8; SECTOR_SIZE];
            fat[..4].copy_from_slice(&[0xF8, 0xFF, 0xFF, 0xFF]);
            device.write_block(1, &fat).unwrap();
        }
        device
    }

    #[test]
    fn test_mount_recovers_geometry() {
        let geometry = small();
        assert_eq!(
            Fat16::mount(Box::new(MemoryBlockDevice::new(8, SECTOR_SIZE))).err(),
            Some(FsError::NotFormatted)
        );

        let device = bare_device(geometry.total_sectors(), 1, 16, true);
        let fs = Fat16::mount(Box::new(device)).unwrap();
        assert_eq!(fs.geometry(), geometry);
    }

    #[test]
    fn test_mount_requires_reserved_fat_entries() {
        let device = bare_device(small().total_sectors(), 1, 16, false);
        assert_eq!(
            Fat16::mount(Box::new(device)).err(),
            Some(FsError::NotFormatted)
        );
    }

    #[test]
    fn test_mount_rejects_unusable_boot_sector() {
        // No FAT sectors
        let device = bare_device(8, 0, 16, true);
        assert_eq!(Fat16::mount(Box::new(device)).err(), Some(FsError::NotFormatted));

        // No root slots
        let device = bare_device(6, 1, 0, true);
        assert_eq!(Fat16::mount(Box::new(device)).err(), Some(FsError::NotFormatted));

        // Data region ends where it starts
        let device = bare_device(3, 1, 16, true);
        assert_eq!(Fat16::mount(Box::new(device)).err(), Some(FsError::NotFormatted));
    }

    #[test]
    fn test_format_rejects_unusable_geometry() {
        let unusable = [
            Geometry {
                fat_sectors: 0,
                ..small()
            },
            Geometry {
                root_entries: 0,
                ..small()
            },
            Geometry {
                data_clusters: 0,
                ..small()
            },
        ];

        for geometry in unusable {
            assert_eq!(geometry.validate(), Err(FsError::InvalidGeometry));
            let device = MemoryBlockDevice::new(geometry.total_sectors().max(8), SECTOR_SIZE);
            assert_eq!(
                Fat16::format(Box::new(device), geometry).err(),
                Some(FsError::InvalidGeometry)
            );
        }
        assert_eq!(small().validate(), Ok(()));
    }

    #[test]
    fn test_format_result_is_mounted_layout() {
        let fs = volume(small());
        assert_eq!(fs.geometry(), small());
        assert!(fs.read_fat_entry(1).unwrap().is_end_of_chain());
        assert_eq!(fs.usage().unwrap().total_clusters, 4);
    }

    #[test]
    fn test_allocate_skips_reserved_and_used() {
        let mut fs = volume(small());
        assert_eq!(fs.allocate_cluster().unwrap(), 2);
        assert_eq!(fs.allocate_cluster().unwrap(), 3);
        assert_eq!(fs.read_fat_entry(2).unwrap(), FatEntry::END);
    }

    #[test]
    fn test_allocate_exhaustion() {
        let mut fs = volume(small());
        for expected in 2..6 {
            assert_eq!(fs.allocate_cluster().unwrap(), expected);
        }
        assert_eq!(fs.allocate_cluster(), Err(FsError::Full));
    }

    #[test]
    fn test_touch_twice_reports_exists() {
        let mut fs = volume(small());
        fs.write("notes", b"keep me").unwrap();

        assert_eq!(fs.touch("notes"), Err(FsError::AlreadyExists));
        assert_eq!(fs.read("notes").unwrap().bytes(), b"keep me");
        assert_eq!(fs.entries().unwrap().len(), 1);
    }

    #[test]
    fn test_touch_creates_empty_file() {
        let mut fs = volume(small());
        let entry = fs.touch("empty").unwrap();
        assert_eq!(entry.size, 0);
        assert_eq!(entry.first_cluster, 2);
        assert_eq!(fs.read("empty").unwrap().bytes(), b"");
    }

    #[test]
    fn test_tombstone_leaks_cluster() {
        let mut fs = volume(small());
        let entry = fs.touch("gone").unwrap();
        fs.tombstone("gone").unwrap();

        assert_eq!(fs.find("gone").unwrap_err(), FsError::NotFound);
        assert!(!fs.read_fat_entry(entry.first_cluster).unwrap().is_free());
        assert_eq!(fs.tombstone("gone"), Err(FsError::NotFound));
    }

    #[test]
    fn test_tombstoned_slot_is_reused_with_new_cluster() {
        let mut fs = volume(small());
        fs.touch("one").unwrap();
        fs.tombstone("one").unwrap();

        let (entry, slot) = fs.create_entry("two").unwrap();
        assert_eq!(slot, 0);
        assert_eq!(entry.first_cluster, 3);
    }

    #[test]
    fn test_directory_exhaustion() {
        let geometry = Geometry {
            fat_sectors: 1,
            root_entries: 16,
            data_clusters: 64,
        };
        let mut fs = volume(geometry);
        for i in 0..16 {
            fs.touch(&alloc::format!("f{}", i)).unwrap();
        }
        assert_eq!(fs.touch("one-more"), Err(FsError::Full));
    }

    #[test]
    fn test_cluster_exhaustion_reports_full() {
        let mut fs = volume(small());
        for i in 0..4 {
            fs.touch(&alloc::format!("f{}", i)).unwrap();
        }
        assert_eq!(fs.touch("f4"), Err(FsError::Full));
        assert_eq!(fs.entries().unwrap().len(), 4);
    }

    #[test]
    fn test_rename_in_place() {
        let mut fs = volume(small());
        fs.write("old", b"data").unwrap();

        assert!(fs.rename("old", "new").unwrap());
        assert_eq!(fs.find("old").unwrap_err(), FsError::NotFound);
        assert_eq!(fs.read("new").unwrap().bytes(), b"data");
        assert_eq!(fs.find("new").unwrap().1, 0);

        assert!(!fs.rename("missing", "other").unwrap());
        assert_eq!(fs.entries().unwrap().len(), 1);
    }

    #[test]
    fn test_write_overwrites_whole_sector() {
        let mut fs = volume(small());
        fs.write("f", b"longer content").unwrap();
        fs.write("f", b"short").unwrap();

        let data = fs.read("f").unwrap();
        assert_eq!(data.bytes(), b"short");
        assert_eq!(data.size(), 5);
        assert!(data.sector()[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_write_rejects_oversized() {
        let mut fs = volume(small());
        let big = [b'x'; SECTOR_SIZE + 1];
        assert_eq!(fs.write("big", &big), Err(FsError::FileTooLarge));
        assert!(!fs.exists("big").unwrap());
    }

    #[test]
    fn test_entries_stop_at_never_used_slot() {
        let mut fs = volume(small());
        fs.touch("a").unwrap();
        fs.touch("b").unwrap();
        fs.touch("c").unwrap();
        fs.tombstone("b").unwrap();

        let names: Vec<_> = fs
            .entries()
            .unwrap()
            .into_iter()
            .map(|(_, e)| e.name())
            .collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn test_usage_counts_leaked_clusters() {
        let mut fs = volume(small());
        fs.touch("a").unwrap();
        fs.touch("b").unwrap();
        fs.tombstone("a").unwrap();

        let usage = fs.usage().unwrap();
        assert_eq!(usage.live_files, 1);
        assert_eq!(usage.used_slots, 2);
        assert_eq!(usage.used_clusters, 2);
        assert_eq!(usage.total_clusters, 4);
    }

    #[test]
    fn prop_write_read_roundtrip() {
        fn property(data: Vec<u8>) -> TestResult {
            if data.len() > SECTOR_SIZE {
                return TestResult::discard();
            }

            let mut fs = volume(small());
            fs.write("prop", &data).unwrap();
            let read = fs.read("prop").unwrap();
            TestResult::from_bool(read.bytes() == data.as_slice() && read.size() == data.len())
        }

        let mut qc = quickcheck::QuickCheck::new().tests(50);
        qc.quickcheck(property as fn(Vec<u8>) -> TestResult);
    }
}
