//! In-memory block device implementation

use crate::filesys::{BlockDevice, FsError};
use alloc::vec;
use alloc::vec::Vec;
use core::result::Result;

/// Block device backed by one contiguous RAM image
pub struct MemoryBlockDevice {
    /// Raw image, `total_blocks * block_size` bytes
    image: Vec<u8>,

    /// Size of each block in bytes
    block_size: usize,
}

impl MemoryBlockDevice {
    /// Creates a zero-filled memory block device with given size
    pub fn new(total_blocks: u64, block_size: usize) -> Self {
        Self {
            image: vec![0; total_blocks as usize * block_size],
            block_size,
        }
    }

    /// Byte range of a block inside the image, if the block exists
    fn block_range(&self, block_num: u64) -> Result<core::ops::Range<usize>, FsError> {
        if block_num >= self.total_blocks() {
            return Err(FsError::IOError);
        }
        let start = block_num as usize * self.block_size;
        Ok(start..start + self.block_size)
    }

    /// Validates buffer is correct block size
    fn validate_buffer(&self, buf: &[u8]) -> Result<(), FsError> {
        if buf.len() != self.block_size {
            return Err(FsError::IOError);
        }
        Ok(())
    }
}

impl BlockDevice for MemoryBlockDevice {
    /// Reads block into buffer
    fn read_block(&self, block_num: u64, buf: &mut [u8]) -> Result<(), FsError> {
        let range = self.block_range(block_num)?;
        self.validate_buffer(buf)?;
        buf.copy_from_slice(&self.image[range]);
        Ok(())
    }

    /// Writes buffer to block
    fn write_block(&mut self, block_num: u64, buf: &[u8]) -> Result<(), FsError> {
        let range = self.block_range(block_num)?;
        self.validate_buffer(buf)?;
        self.image[range].copy_from_slice(buf);
        Ok(())
    }

    /// Returns size of each block
    fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns total number of blocks
    fn total_blocks(&self) -> u64 {
        (self.image.len() / self.block_size) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_block() {
        let mut device = MemoryBlockDevice::new(4, 512);
        let block = [0xAB; 512];
        device.write_block(2, &block).unwrap();

        let mut out = [0u8; 512];
        device.read_block(2, &mut out).unwrap();
        assert_eq!(out, block);

        device.read_block(1, &mut out).unwrap();
        assert!(out.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_out_of_range_block_is_rejected() {
        let mut device = MemoryBlockDevice::new(4, 512);
        let mut out = [0u8; 512];
        assert_eq!(device.read_block(4, &mut out), Err(FsError::IOError));
        assert_eq!(device.write_block(9, &out), Err(FsError::IOError));
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let device = MemoryBlockDevice::new(4, 512);
        let mut out = [0u8; 100];
        assert_eq!(device.read_block(0, &mut out), Err(FsError::IOError));
        assert_eq!(device.total_blocks(), 4);
        assert_eq!(device.block_size(), 512);
    }
}
