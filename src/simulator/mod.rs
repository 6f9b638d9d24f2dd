//!
//! Runs a RISC-V program image one datapath cycle at a time.
//!
//! This is the textbook single-cycle machine: every instruction makes one
//! full traversal of fetch → decode → execute → memory access → writeback,
//! and the previous instruction has fully committed before the next one is
//! fetched, so there are no hazards to resolve. The caller drives the stage
//! methods in that order (see [`Cpu::step`]) until the program counter
//! reaches the bound of the loaded program.
//!

use owo_colors::OwoColorize;

pub mod alu;
pub mod constants;
pub mod control;
pub mod error;
pub mod instruction;
pub mod memory;
pub mod register_names;

pub use error::Error;
pub use instruction::Instruction;

use control::{AluSrc, ControlUnit, MemWidth};
use memory::Memory;

/// Instruction memory capacity, in hex characters.
///
/// The loader stores each architectural byte as two ASCII hex characters,
/// so the program counter advances in *double-byte* units: 8 per
/// instruction. Branch and jump targets are computed in architectural
/// bytes, so the PC is converted out of this convention (÷2) and back into
/// it (×2) on every redirect; get that wrong and every control transfer
/// lands at the wrong instruction.
pub const IMEM_SIZE: usize = 4096;

/// Hex characters occupied by one instruction in instruction memory.
const INSTRUCTION_UNITS: usize = 8;

/// Simulates the single-cycle datapath. Construct it with a loaded program
/// image and either call [`Cpu::run`] with the image bound, or drive the
/// five stage methods yourself, in order, once per cycle.
pub struct Cpu {
    registers: [u32; 32],
    pc: usize,
    imem: Vec<u8>,
    pub memory: Memory,

    // signals and operands latched by decode for the rest of the cycle
    control: ControlUnit,
    rs1_value: u32,
    rs2_value: u32,
    rd: u8,
    immediate: i32,
    alu_result: u32,
    load_value: u32,
}

impl Cpu {
    /// `image` holds two ASCII hex characters per architectural byte,
    /// instruction bytes in little-endian order. Shorter images are padded
    /// with `'0'`; anything over [`IMEM_SIZE`] does not fit.
    pub fn new(image: &[u8]) -> Result<Self, Error> {
        if image.len() > IMEM_SIZE {
            return Err(Error::ProgramTooLarge(image.len(), IMEM_SIZE));
        }

        let mut imem = vec![b'0'; IMEM_SIZE];
        imem[..image.len()].copy_from_slice(image);

        Ok(Self {
            registers: [0; 32],
            pc: 0,
            imem,
            memory: Memory::new(),
            control: ControlUnit::default(),
            rs1_value: 0,
            rs2_value: 0,
            rd: 0,
            immediate: 0,
            alu_result: 0,
            load_value: 0,
        })
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn set_pc(&mut self, pc: usize) {
        self.pc = pc;
    }

    /// Reads a register through the public API. Decoded indices are 5 bits
    /// and can't go out of range, but a caller-supplied one can.
    pub fn register(&self, index: usize) -> Result<u32, Error> {
        self.registers
            .get(index)
            .copied()
            .ok_or(Error::RegisterOutOfRange(index))
    }

    /// Result of the execute stage for the current cycle.
    pub fn alu_result(&self) -> u32 {
        self.alu_result
    }

    fn reg(&self, index: u8) -> u32 {
        self.registers[index as usize]
    }

    // Index 0 is not hard-wired to zero: a program that names x0 as a
    // destination really does overwrite it.
    fn set_reg(&mut self, index: u8, value: u32) {
        self.registers[index as usize] = value;
    }

    /// Reads the raw instruction word at the current PC and advances PC by
    /// one instruction. The eight hex characters are consumed in pairs,
    /// first pair = least significant byte.
    pub fn fetch(&mut self) -> Result<Instruction, Error> {
        if self.pc.saturating_add(INSTRUCTION_UNITS) > self.imem.len() {
            return Err(Error::PcOutOfRange {
                pc: self.pc,
                len: self.imem.len(),
            });
        }

        let mut word = 0u32;
        for byte in 0..4 {
            let pos = self.pc + 2 * byte;
            let hi = hex_value(self.imem[pos], pos)?;
            let lo = hex_value(self.imem[pos + 1], pos + 1)?;
            word |= u32::from((hi << 4) | lo) << (8 * byte);
        }

        self.pc += INSTRUCTION_UNITS;
        Ok(Instruction(word))
    }

    /// Derives the control signals and latches the operands the later
    /// stages need. Nothing is written back yet, so a decode failure leaves
    /// registers and memory exactly as the previous cycle committed them.
    pub fn decode(&mut self, instr: Instruction) -> Result<(), Error> {
        self.control = ControlUnit::new(instr.opcode(), instr.funct3(), instr.funct7())?;
        self.rs1_value = self.reg(instr.rs1());
        self.rs2_value = self.reg(instr.rs2());
        self.rd = instr.rd();
        self.immediate = instr.immediate()?;
        Ok(())
    }

    /// Runs the ALU on the selected operands. For branches, the ALU
    /// subtracts the operands and a zero result (rs1 == rs2) redirects the
    /// PC to the branch target.
    pub fn execute(&mut self) -> Result<(), Error> {
        let operand = match self.control.alu_src {
            AluSrc::Register => self.rs2_value,
            AluSrc::Immediate => self.immediate as u32,
        };
        self.alu_result = alu::compute(self.control.alu_op, self.rs1_value, operand);

        if self.control.branch && self.alu_result == 0 {
            self.redirect(self.immediate)?;
        }
        Ok(())
    }

    /// Load or store at the ALU-computed address. Byte loads sign-extend
    /// into the staged value; branches and ALU instructions skip this stage
    /// entirely.
    pub fn memory_access(&mut self) -> Result<(), Error> {
        let addr = self.alu_result as usize;

        if self.control.mem_write {
            match self.control.mem_width {
                MemWidth::Byte => self.memory.set_byte(addr, self.rs2_value as u8)?,
                MemWidth::Word => self.memory.set_word(addr, self.rs2_value)?,
            }
        } else if self.control.mem_read {
            self.load_value = match self.control.mem_width {
                MemWidth::Byte => self.memory.get_byte(addr)? as i8 as i32 as u32,
                MemWidth::Word => self.memory.get_word(addr)?,
            };
        }
        Ok(())
    }

    /// Commits the destination register, if the instruction has one. A jump
    /// links the architectural address of the next sequential instruction
    /// into rd and then redirects the PC; stores write nothing back.
    pub fn writeback(&mut self) -> Result<(), Error> {
        if self.control.jump {
            self.set_reg(self.rd, (self.pc / 2) as u32);
            self.redirect(self.immediate)?;
        } else if self.control.reg_write {
            let value = if self.control.mem_to_reg {
                self.load_value
            } else {
                self.alu_result
            };
            self.set_reg(self.rd, value);
        }
        Ok(())
    }

    /// One full cycle: the five stages in their fixed order.
    pub fn step(&mut self) -> Result<(), Error> {
        let instr = self.fetch()?;
        self.decode(instr)?;
        self.execute()?;
        self.memory_access()?;
        self.writeback()?;
        Ok(())
    }

    /// Issues cycles until the PC reaches `bound`, the number of
    /// instruction memory units the loader filled.
    pub fn run(&mut self, bound: usize) -> Result<(), Error> {
        while self.pc < bound {
            self.step()?;
        }
        Ok(())
    }

    /// Branch and jump offsets are byte-relative to the instruction's own
    /// address, but the PC counts hex characters, two per byte, and has
    /// already advanced past the instruction. Convert down, offset, convert
    /// back up.
    fn redirect(&mut self, offset: i32) -> Result<(), Error> {
        let base = (self.pc / 2) as i64 - (INSTRUCTION_UNITS / 2) as i64;
        let target = base + offset as i64;
        if target < 0 || target as usize * 2 > self.imem.len() {
            return Err(Error::TargetOutOfRange { target });
        }
        self.pc = target as usize * 2;
        Ok(())
    }

    pub fn print_state(&self) {
        eprintln!("{}", "Registers:".bright_blue());
        for i in 0..32 {
            eprint!(
                "{:>4}: {:08x} ",
                register_names::REGVEC[i].bright_blue(),
                self.registers[i]
            );
            if i % 4 == 3 {
                eprintln!();
            }
        }
    }
}

fn hex_value(c: u8, pos: usize) -> Result<u8, Error> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::InvalidHexDigit {
            pos,
            found: c as char,
        }),
    }
}
