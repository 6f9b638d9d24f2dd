use criterion::{criterion_group, criterion_main, Criterion};
use monocycle::simulator::constants::*;
use monocycle::simulator::{Cpu, Instruction};

/// addi/beq/jal countdown, `iterations` trips around the loop.
fn countdown_program(iterations: i32) -> Vec<u8> {
    let addi = |rd: u32, rs1: u32, imm: i32| {
        let mut i = Instruction(0);
        i.set_opcode(OPCODE_TYPE_I);
        i.set_funct3(FUNCT3_ADD);
        i.set_rd(rd);
        i.set_rs1(rs1);
        i.set_imm_i(imm);
        i.0
    };
    let beq = |rs1: u32, rs2: u32, offset: i32| {
        let mut i = Instruction(0);
        i.set_opcode(OPCODE_BRANCH);
        i.set_rs1(rs1);
        i.set_rs2(rs2);
        i.set_imm_b(offset);
        i.0
    };
    let jal = |rd: u32, offset: i32| {
        let mut i = Instruction(0);
        i.set_opcode(OPCODE_JAL);
        i.set_rd(rd);
        i.set_imm_j(offset);
        i.0
    };

    let words = [
        addi(1, 0, iterations),
        addi(10, 10, 1),
        addi(1, 1, -1),
        beq(1, 0, 8),
        jal(6, -12),
    ];

    let mut image = Vec::with_capacity(words.len() * 8);
    for word in words {
        for byte in word.to_le_bytes() {
            image.extend_from_slice(format!("{:02x}", byte).as_bytes());
        }
    }
    image
}

fn criterion_benchmark(c: &mut Criterion) {
    let image = countdown_program(1000);
    let bound = image.len();

    c.bench_function("countdown_1000", |b| {
        b.iter(|| {
            let mut cpu = Cpu::new(&image).expect("program fits instruction memory");
            cpu.run(bound).expect("program runs to completion");
            cpu.register(10).unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
