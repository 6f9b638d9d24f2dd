//! Instruction encodings recognized by the datapath.

pub const OPCODE_TYPE_R: u32 = 0b0110011;
pub const OPCODE_TYPE_I: u32 = 0b0010011;
pub const OPCODE_LOAD: u32 = 0b0000011;
pub const OPCODE_STORE: u32 = 0b0100011;
pub const OPCODE_BRANCH: u32 = 0b1100011;
pub const OPCODE_LUI: u32 = 0b0110111;
pub const OPCODE_JAL: u32 = 0b1101111;
pub const OPCODE_NOP: u32 = 0b0000000;

// funct3 sub-decode shared by the R and I opcodes. `or` and `sra` ignore
// funct7; `add` and `xor` require funct7 == 0.
pub const FUNCT3_ADD: u32 = 0b000;
pub const FUNCT3_XOR: u32 = 0b100;
pub const FUNCT3_SRA: u32 = 0b101;
pub const FUNCT3_OR: u32 = 0b110;

// funct3 width sub-decode for loads and stores
pub const FUNCT3_MEM_BYTE: u32 = 0b000;
pub const FUNCT3_MEM_WORD: u32 = 0b010;
