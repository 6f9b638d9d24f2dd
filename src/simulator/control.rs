//! Control signal derivation.
//!
//! One fixed signal row per recognized opcode; the R and I rows pick their
//! ALU operation from funct3/funct7, and loads/stores pick their access
//! width from funct3. Anything outside those tables is fatal to the run.

use super::alu::AluOp;
use super::constants::*;
use super::error::Error;

/// Second ALU operand selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AluSrc {
    #[default]
    Register,
    Immediate,
}

/// Access width for loads and stores.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MemWidth {
    Byte,
    #[default]
    Word,
}

/// The control line bundle latched for one cycle. Derived once per
/// instruction and dropped at the end of the traversal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ControlUnit {
    pub reg_write: bool,
    pub alu_src: AluSrc,
    pub branch: bool,
    pub mem_read: bool,
    pub mem_write: bool,
    pub mem_to_reg: bool,
    pub mem_width: MemWidth,
    pub jump: bool,
    pub alu_op: AluOp,
}

impl ControlUnit {
    pub fn new(opcode: u32, funct3: u32, funct7: u32) -> Result<Self, Error> {
        let unit = match opcode {
            OPCODE_TYPE_R => Self {
                reg_write: true,
                alu_op: alu_op_control(funct3, funct7)?,
                ..Self::default()
            },
            OPCODE_TYPE_I => Self {
                reg_write: true,
                alu_src: AluSrc::Immediate,
                alu_op: alu_op_control(funct3, funct7)?,
                ..Self::default()
            },
            OPCODE_LUI => Self {
                reg_write: true,
                alu_src: AluSrc::Immediate,
                alu_op: AluOp::UpperImmediate,
                ..Self::default()
            },
            OPCODE_LOAD => Self {
                reg_write: true,
                alu_src: AluSrc::Immediate,
                mem_read: true,
                mem_to_reg: true,
                mem_width: mem_width_control(funct3)?,
                alu_op: AluOp::Add,
                ..Self::default()
            },
            OPCODE_STORE => Self {
                alu_src: AluSrc::Immediate,
                mem_write: true,
                mem_width: mem_width_control(funct3)?,
                alu_op: AluOp::Add,
                ..Self::default()
            },
            OPCODE_BRANCH => Self {
                branch: true,
                alu_op: AluOp::Sub,
                ..Self::default()
            },
            OPCODE_JAL => Self {
                reg_write: true,
                jump: true,
                ..Self::default()
            },
            OPCODE_NOP => Self::default(),
            _ => return Err(Error::UnknownOpcode(opcode)),
        };
        Ok(unit)
    }
}

fn alu_op_control(funct3: u32, funct7: u32) -> Result<AluOp, Error> {
    match (funct3, funct7) {
        (FUNCT3_OR, _) => Ok(AluOp::Or),
        (FUNCT3_SRA, _) => Ok(AluOp::Sra),
        (FUNCT3_ADD, 0) => Ok(AluOp::Add),
        (FUNCT3_XOR, 0) => Ok(AluOp::Xor),
        (FUNCT3_ADD | FUNCT3_XOR, _) => Err(Error::UnknownFunct7 { funct3, funct7 }),
        _ => Err(Error::UnknownFunct3 { funct3 }),
    }
}

fn mem_width_control(funct3: u32) -> Result<MemWidth, Error> {
    match funct3 {
        FUNCT3_MEM_BYTE => Ok(MemWidth::Byte),
        FUNCT3_MEM_WORD => Ok(MemWidth::Word),
        _ => Err(Error::UnknownMemWidth(funct3)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_register_row() {
        let c = ControlUnit::new(OPCODE_TYPE_R, FUNCT3_ADD, 0).unwrap();
        assert!(c.reg_write);
        assert_eq!(c.alu_src, AluSrc::Register);
        assert!(!c.branch && !c.mem_read && !c.mem_write && !c.mem_to_reg && !c.jump);
        assert_eq!(c.alu_op, AluOp::Add);

        let c = ControlUnit::new(OPCODE_TYPE_R, FUNCT3_XOR, 0).unwrap();
        assert_eq!(c.alu_op, AluOp::Xor);
    }

    #[test]
    fn test_register_immediate_row() {
        let c = ControlUnit::new(OPCODE_TYPE_I, FUNCT3_OR, 0).unwrap();
        assert!(c.reg_write);
        assert_eq!(c.alu_src, AluSrc::Immediate);
        assert_eq!(c.alu_op, AluOp::Or);

        // or and sra don't look at funct7 at all
        let c = ControlUnit::new(OPCODE_TYPE_I, FUNCT3_SRA, 0b0100000).unwrap();
        assert_eq!(c.alu_op, AluOp::Sra);
    }

    #[test]
    fn test_upper_immediate_row() {
        let c = ControlUnit::new(OPCODE_LUI, 0, 0).unwrap();
        assert!(c.reg_write);
        assert_eq!(c.alu_src, AluSrc::Immediate);
        assert_eq!(c.alu_op, AluOp::UpperImmediate);
    }

    #[test]
    fn test_load_store_rows() {
        let c = ControlUnit::new(OPCODE_LOAD, FUNCT3_MEM_BYTE, 0).unwrap();
        assert!(c.reg_write && c.mem_read && c.mem_to_reg);
        assert!(!c.mem_write);
        assert_eq!(c.mem_width, MemWidth::Byte);
        assert_eq!(c.alu_op, AluOp::Add);

        let c = ControlUnit::new(OPCODE_STORE, FUNCT3_MEM_WORD, 0).unwrap();
        assert!(!c.reg_write && !c.mem_read);
        assert!(c.mem_write);
        assert_eq!(c.mem_width, MemWidth::Word);
        assert_eq!(c.alu_op, AluOp::Add);
    }

    #[test]
    fn test_branch_and_jump_rows() {
        let c = ControlUnit::new(OPCODE_BRANCH, 0, 0).unwrap();
        assert!(c.branch && !c.reg_write && !c.jump);
        assert_eq!(c.alu_src, AluSrc::Register);
        assert_eq!(c.alu_op, AluOp::Sub);

        let c = ControlUnit::new(OPCODE_JAL, 0, 0).unwrap();
        assert!(c.jump && c.reg_write && !c.branch);
        assert_eq!(c.alu_op, AluOp::None);
    }

    #[test]
    fn test_nop_row() {
        let c = ControlUnit::new(OPCODE_NOP, 0, 0).unwrap();
        assert_eq!(c, ControlUnit::default());
        assert!(!c.reg_write);
        assert_eq!(c.alu_op, AluOp::None);
    }

    #[test]
    fn test_unknown_fields_are_fatal() {
        assert!(matches!(
            ControlUnit::new(0b1111011, 0, 0),
            Err(Error::UnknownOpcode(0b1111011))
        ));
        // sub's real-ISA encoding (funct7 = 0x20) is not in the supported set
        assert!(matches!(
            ControlUnit::new(OPCODE_TYPE_R, FUNCT3_ADD, 0b0100000),
            Err(Error::UnknownFunct7 { .. })
        ));
        assert!(matches!(
            ControlUnit::new(OPCODE_TYPE_I, 0b001, 0),
            Err(Error::UnknownFunct3 { funct3: 0b001 })
        ));
        // lh/sh width is not supported
        assert!(matches!(
            ControlUnit::new(OPCODE_LOAD, 0b001, 0),
            Err(Error::UnknownMemWidth(0b001))
        ));
        assert!(matches!(
            ControlUnit::new(OPCODE_STORE, 0b101, 0),
            Err(Error::UnknownMemWidth(0b101))
        ));
    }
}
