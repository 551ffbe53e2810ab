use osim::program::cpu_burst;
use osim::{Kernel, KernelConfig, Pid, Program, Scheduler};
use osim_hardware_sim::HardwareSim;

/// Under the preemptive priority policy, admitting a higher-priority
/// (lower-numbered) program while a lower-priority one is running must
/// immediately preempt it rather than enqueue behind it.
#[test]
fn higher_priority_admission_preempts_the_running_process() {
    let config = KernelConfig::new(16, 4);
    let mut kernel = Kernel::new(config, Scheduler::priority_preemptive());
    let mut hardware = HardwareSim::new(16, 4, 0, 1);

    kernel.write_program("low.exe", Program::new("low.exe", cpu_burst(10)));
    kernel.write_program("high.exe", Program::new("high.exe", cpu_burst(2)));

    kernel.run(&mut hardware, "low.exe", 4).unwrap();
    assert_eq!(kernel.pcb_table().running(), Some(Pid(0)));

    kernel.run(&mut hardware, "high.exe", 0).unwrap();
    assert_eq!(kernel.pcb_table().running(), Some(Pid(1)), "higher priority candidate must preempt");

    let low = kernel.pcb_table().get(Pid(0)).unwrap();
    assert_eq!(low.state(), osim::ProcessState::Ready, "preempted process goes back to ready, not waiting");
}

/// A same-or-lower priority admission under the preemptive policy just
/// enqueues; the running process keeps the CPU.
#[test]
fn equal_or_lower_priority_admission_does_not_preempt() {
    let config = KernelConfig::new(16, 4);
    let mut kernel = Kernel::new(config, Scheduler::priority_preemptive());
    let mut hardware = HardwareSim::new(16, 4, 0, 1);

    kernel.write_program("a.exe", Program::new("a.exe", cpu_burst(10)));
    kernel.write_program("b.exe", Program::new("b.exe", cpu_burst(2)));

    kernel.run(&mut hardware, "a.exe", 1).unwrap();
    kernel.run(&mut hardware, "b.exe", 1).unwrap();

    assert_eq!(kernel.pcb_table().running(), Some(Pid(0)));
}
