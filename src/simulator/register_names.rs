//! ABI mnemonics for the 32 general-purpose registers, in index order.
//! Used by the state dump; the datapath itself only ever sees indices.

pub const REGVEC: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Index of `a0`, the first register of the final report pair.
pub const A0: usize = 10;
/// Index of `a1`, the second register of the final report pair.
pub const A1: usize = 11;
