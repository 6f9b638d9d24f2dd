use std::error::Error;

use owo_colors::OwoColorize;

use monocycle::config::Config;
use monocycle::loader;
use monocycle::simulator::{register_names, Cpu};

fn main() {
    let config = Config::get();

    if let Err(e) = run(&config) {
        eprintln!("{} {}", "error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let program = loader::load(&config.file)?;
    let mut cpu = Cpu::new(program.image())?;
    let bound = program.bound();

    // one loop iteration per simulated clock cycle
    while cpu.pc() < bound {
        let pc = cpu.pc();
        let instr = cpu.fetch()?;
        cpu.decode(instr)?;
        cpu.execute()?;
        cpu.memory_access()?;
        cpu.writeback()?;

        if config.trace {
            eprintln!("{:04x}: {:08x} alu={:08x}", pc / 2, instr.0, cpu.alu_result());
        }
    }

    if config.print_state {
        cpu.print_state();
    }

    // report the conventional result pair
    let a0 = cpu.register(register_names::A0)?;
    let a1 = cpu.register(register_names::A1)?;
    println!("({},{})", a0, a1);

    Ok(())
}
