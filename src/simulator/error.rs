use owo_colors::OwoColorize;
use thiserror::Error;

/// Any fatal condition the datapath can hit. A cycle either commits all of
/// its effects or aborts the whole run with one of these; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown opcode '{:#09b}'", .0.bright_yellow())]
    UnknownOpcode(u32),

    #[error("Unknown funct3 '{:#05b}' for this opcode", .funct3.bright_yellow())]
    UnknownFunct3 { funct3: u32 },

    #[error("Unknown funct7 '{:#09b}' (funct3 was '{funct3:#05b}')", .funct7.bright_yellow())]
    UnknownFunct7 { funct3: u32, funct7: u32 },

    #[error("funct3 '{:#05b}' does not select a memory access width", .0.bright_yellow())]
    UnknownMemWidth(u32),

    #[error("Instruction memory holds '{}' at offset {pos}, which is not a hex digit", .found.bright_yellow())]
    InvalidHexDigit { pos: usize, found: char },

    #[error("Tried to fetch at pc {}, but only {len} instruction memory units are loaded", .pc.bright_yellow())]
    PcOutOfRange { pc: usize, len: usize },

    #[error("Branch or jump target {} is outside the loaded program", .target.bright_yellow())]
    TargetOutOfRange { target: i64 },

    #[error("Data memory access of {len} byte(s) at address {:#x} is out of bounds", .addr.bright_yellow())]
    AccessOutOfBounds { addr: usize, len: usize },

    #[error("Register index {} is out of range, the register file has 32 entries", .0.bright_yellow())]
    RegisterOutOfRange(usize),

    #[error("Program image has {0} units, which does not fit the {1}-unit instruction memory")]
    ProgramTooLarge(usize, usize),
}
