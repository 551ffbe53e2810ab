use osim::program::cpu_burst;
use osim::pcb::ProcessState;
use osim::{Kernel, KernelConfig, Program, Scheduler};
use osim_hardware_sim::HardwareSim;

/// Three CPU-only programs admitted under FCFS must finish in admission
/// order: nothing preempts a running process, so each runs to
/// completion before the next is ever dispatched.
#[test]
fn programs_finish_in_the_order_they_were_admitted() {
    let config = KernelConfig::new(16, 4);
    let mut kernel = Kernel::new(config, Scheduler::fcfs());
    let mut hardware = HardwareSim::new(16, 4, 0, 1);

    kernel.write_program("a.exe", Program::new("a.exe", cpu_burst(2)));
    kernel.write_program("b.exe", Program::new("b.exe", cpu_burst(3)));
    kernel.write_program("c.exe", Program::new("c.exe", cpu_burst(4)));

    kernel.run(&mut hardware, "a.exe", 2).unwrap();
    kernel.run(&mut hardware, "b.exe", 2).unwrap();
    kernel.run(&mut hardware, "c.exe", 2).unwrap();

    assert_eq!(kernel.pcb_table().running(), Some(osim::Pid(0)));

    let mut finish_order = Vec::new();
    while kernel.has_live_processes() {
        hardware.step(&mut kernel);
        for pcb in kernel.pcb_table().iter() {
            if pcb.state() == ProcessState::Terminated && !finish_order.contains(&pcb.pid()) {
                finish_order.push(pcb.pid());
            }
        }
    }

    assert_eq!(finish_order, vec![osim::Pid(0), osim::Pid(1), osim::Pid(2)]);
}
