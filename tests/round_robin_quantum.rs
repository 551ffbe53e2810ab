use osim::program::cpu_burst;
use osim::{Kernel, KernelConfig, Pid, Program, Scheduler};
use osim_hardware_sim::HardwareSim;

/// Round robin must switch the running process every `quantum` CPU
/// ticks, handing the CPU back to whichever process is next in the
/// ready queue (here, alternating between the only two processes).
#[test]
fn quantum_expiry_rotates_the_running_process() {
    let config = KernelConfig::new(32, 4).with_round_robin_quantum(2);
    let mut kernel = Kernel::new(config, Scheduler::round_robin());
    let mut hardware = HardwareSim::new(32, 4, 2, 1);

    kernel.write_program("a.exe", Program::new("a.exe", cpu_burst(10)));
    kernel.write_program("b.exe", Program::new("b.exe", cpu_burst(10)));
    kernel.run(&mut hardware, "a.exe", 1).unwrap();
    kernel.run(&mut hardware, "b.exe", 1).unwrap();

    assert_eq!(kernel.pcb_table().running(), Some(Pid(0)));

    hardware.step(&mut kernel);
    assert_eq!(kernel.pcb_table().running(), Some(Pid(0)), "one tick in, the quantum isn't exhausted yet");

    hardware.step(&mut kernel);
    assert_eq!(kernel.pcb_table().running(), Some(Pid(1)), "quantum expired, pid 1 takes the cpu");

    hardware.step(&mut kernel);
    hardware.step(&mut kernel);
    assert_eq!(kernel.pcb_table().running(), Some(Pid(0)), "pid 1's quantum expired in turn");
}
