//! Byte-addressable, little-endian data memory.
//!
//! Word accesses at address `A` touch bytes `A..A+4`, least significant
//! first. Addresses come straight from the ALU, so every access is bounds
//! checked and an out-of-range one aborts the run.

use byteorder::{ByteOrder, LittleEndian};

use super::error::Error;

pub const DATA_SIZE: usize = 4096;

pub struct Memory {
    data: Vec<u8>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            data: vec![0; DATA_SIZE],
        }
    }

    fn check(&self, addr: usize, len: usize) -> Result<(), Error> {
        if addr.saturating_add(len) > self.data.len() {
            Err(Error::AccessOutOfBounds { addr, len })
        } else {
            Ok(())
        }
    }

    pub fn get_byte(&self, addr: usize) -> Result<u8, Error> {
        self.check(addr, 1)?;
        Ok(self.data[addr])
    }

    pub fn set_byte(&mut self, addr: usize, x: u8) -> Result<(), Error> {
        self.check(addr, 1)?;
        self.data[addr] = x;
        Ok(())
    }

    pub fn get_word(&self, addr: usize) -> Result<u32, Error> {
        self.check(addr, 4)?;
        Ok(LittleEndian::read_u32(&self.data[addr..]))
    }

    pub fn set_word(&mut self, addr: usize, x: u32) -> Result<(), Error> {
        self.check(addr, 4)?;
        LittleEndian::write_u32(&mut self.data[addr..], x);
        Ok(())
    }
}
