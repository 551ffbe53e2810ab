//! Three programs admitted under first-come-first-served scheduling,
//! run to completion against the in-memory hardware simulator.

use osim::program::cpu_burst;
use osim::{Instruction, Kernel, KernelConfig, Program, Scheduler, StopCondition};
use osim_hardware_sim::HardwareSim;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("starting emulator");

    let config = KernelConfig::new(10, 4).with_gantt_stop(StopCondition::AtTick(30));
    let mut kernel = Kernel::new(config, Scheduler::fcfs());
    let mut hardware = HardwareSim::new(10, 4, 0, 2);

    let mut prg1 = cpu_burst(2);
    prg1.push(Instruction::Io);
    prg1.extend(cpu_burst(3));
    prg1.push(Instruction::Io);
    prg1.extend(cpu_burst(2));
    let prg1 = Program::new("prg1.exe", prg1);

    let prg2 = Program::new("prg2.exe", cpu_burst(7));

    let mut prg3 = cpu_burst(4);
    prg3.push(Instruction::Io);
    prg3.extend(cpu_burst(1));
    let prg3 = Program::new("prg3.exe", prg3);

    kernel.write_program("prg1.exe", prg1);
    kernel.write_program("prg2.exe", prg2);
    kernel.write_program("prg3.exe", prg3);

    kernel.run(&mut hardware, "prg1.exe", 1).expect("prg1.exe is registered");
    kernel.run(&mut hardware, "prg2.exe", 2).expect("prg2.exe is registered");
    kernel.run(&mut hardware, "prg3.exe", 3).expect("prg3.exe is registered");

    hardware.run_to_completion(&mut kernel);

    tracing::info!("all programs finished\n{}", kernel.gantt().render());
}
