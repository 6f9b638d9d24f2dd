//!
//! monocycle executes a small RV32I subset on the classic single-cycle
//! datapath: every instruction makes one full fetch → decode → execute →
//! memory access → writeback traversal, exactly like the block diagram in
//! the textbook.
//!
//! It is meant as an instructional tool, not a fast emulator. The stages
//! are separate methods you can step through one at a time, and the state
//! they latch between each other is visible on [simulator::Cpu]. Programs
//! are plain text images, one hex byte per line, as produced by the usual
//! course assemblers.
//!
//! Note that the simulated machine is deliberately faithful to its
//! reference datapath rather than to the architecture manual: x0 is an
//! ordinary writable register here, and only the instruction subset in
//! [simulator::constants] decodes at all.
//!

pub mod config;
pub mod loader;
pub mod simulator;
