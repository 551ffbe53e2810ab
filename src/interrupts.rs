//! Interrupt kinds and the handlers that interpret them.
//!
//! Handlers are invoked synchronously, run to completion, and are the
//! only place a PCB's state or `running` slot changes. They never
//! re-enter the interrupt vector; further interrupts are issued by the
//! hardware loop observing the mutated kernel state, not by a handler
//! calling another handler.

use crate::hardware::Hardware;
use crate::kernel::Kernel;
use crate::pcb::{PageId, Pid, Priority};
use crate::program::Instruction;
use crate::scheduler::AdmissionDecision;
use crate::KernelError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Irq {
    New { path: String, priority: Priority },
    Kill,
    IoIn { instruction: Instruction },
    IoOut,
    Timeout,
    Stat,
    PageFault { page: PageId },
}

pub(crate) fn handle_new<H: Hardware>(
    kernel: &mut Kernel,
    hardware: &mut H,
    path: &str,
    priority: Priority,
) -> Result<(), KernelError> {
    let pid = kernel.pcb_table.new_pid();
    let page_count = kernel.loader.page_count(&kernel.file_system, path)?;
    let mut pcb = crate::pcb::Pcb::new(pid, path, priority, page_count);

    let running_priority = kernel.pcb_table.running_pcb().map(|p| p.priority());
    match kernel.scheduler.decide_admission(running_priority, priority) {
        AdmissionDecision::Run => {
            apply_round_robin_quantum(kernel, hardware);
            pcb.to_running();
            kernel.dispatcher.load(&pcb, hardware);
            kernel.pcb_table.add(pcb);
            kernel.pcb_table.set_running(Some(pid));
        }
        AdmissionDecision::Enqueue => {
            pcb.to_ready();
            kernel.scheduler.add(pid, priority);
            kernel.pcb_table.add(pcb);
        }
        AdmissionDecision::Preempt => {
            preempt_running(kernel, hardware);
            pcb.to_running();
            kernel.dispatcher.load(&pcb, hardware);
            kernel.pcb_table.add(pcb);
            kernel.pcb_table.set_running(Some(pid));
        }
    }

    tracing::info!(program = path, pid = pid.0, "admitted program");
    Ok(())
}

pub(crate) fn handle_kill<H: Hardware>(kernel: &mut Kernel, hardware: &mut H) -> Result<(), KernelError> {
    let pid = match kernel.pcb_table.running() {
        Some(pid) => pid,
        None => {
            tracing::error!("KILL with no running process");
            return Ok(());
        }
    };

    let pcb = kernel
        .pcb_table
        .get_mut(pid)
        .expect("running pid must be present in the pcb table");
    kernel.dispatcher.save(pcb, hardware);
    pcb.to_terminated();
    let frames = pcb.resident_frames();
    for frame in &frames {
        kernel.frame_owner.remove(frame);
    }
    kernel.memory_manager.free(frames);

    dispatch_next_or_idle(kernel, hardware);
    tracing::info!(pid = pid.0, "program finished");
    Ok(())
}

pub(crate) fn handle_io_in<H: Hardware>(
    kernel: &mut Kernel,
    hardware: &mut H,
    instruction: Instruction,
) -> Result<(), KernelError> {
    let pid = match kernel.pcb_table.running() {
        Some(pid) => pid,
        None => {
            tracing::error!("IO_IN with no running process");
            return Ok(());
        }
    };

    let pcb = kernel.pcb_table.get_mut(pid).expect("running pid must be present");
    kernel.dispatcher.save(pcb, hardware);
    pcb.to_waiting();
    kernel.io_controller.run_operation(hardware, pid, instruction);

    dispatch_next_or_idle(kernel, hardware);
    Ok(())
}

pub(crate) fn handle_io_out<H: Hardware>(kernel: &mut Kernel, hardware: &mut H) -> Result<(), KernelError> {
    match kernel.io_controller.finished_pcb(hardware) {
        Some(pid) => {
            admit_existing(kernel, hardware, pid);
            Ok(())
        }
        None => {
            tracing::error!("IO_OUT with no finished pcb");
            Ok(())
        }
    }
}

pub(crate) fn handle_timeout<H: Hardware>(kernel: &mut Kernel, hardware: &mut H) -> Result<(), KernelError> {
    if !kernel.scheduler.is_round_robin() {
        return Ok(());
    }
    hardware.reset();

    if let Some(pid) = kernel.pcb_table.running() {
        let pcb = kernel.pcb_table.get_mut(pid).expect("running pid must be present");
        kernel.dispatcher.save(pcb, hardware);
        pcb.to_ready();
        let priority = pcb.priority();
        kernel.scheduler.add(pid, priority);
    }

    dispatch_next_or_idle(kernel, hardware);
    Ok(())
}

pub(crate) fn handle_stat<H: Hardware>(kernel: &mut Kernel, hardware: &mut H) -> Result<(), KernelError> {
    kernel.gantt.record(&kernel.pcb_table);
    if kernel.gantt.should_flush(hardware) {
        tracing::info!(gantt = %kernel.gantt.render(), "gantt flush");
    }
    Ok(())
}

pub(crate) fn handle_page_fault<H: Hardware>(
    kernel: &mut Kernel,
    hardware: &mut H,
    page: PageId,
) -> Result<(), KernelError> {
    let pid = match kernel.pcb_table.running() {
        Some(pid) => pid,
        None => {
            tracing::error!("PAGE_FAULT with no running process");
            return Ok(());
        }
    };

    let frame = match kernel.memory_manager.alloc() {
        Some(frame) => frame,
        None => {
            let victim = match hardware.pop_lru_frame() {
                Some(victim) => victim,
                None => {
                    tracing::error!("PAGE_FAULT with no free frame and no victim to evict");
                    return Ok(());
                }
            };
            if let Some((owner_pid, owner_page)) = kernel.pcb_table.find_frame_owner(victim) {
                if let Some(owner) = kernel.pcb_table.get_mut(owner_pid) {
                    owner.clear_resident(owner_page);
                }
                kernel.frame_owner.remove(&victim);
                tracing::info!(
                    frame = victim.0,
                    victim_pid = owner_pid.0,
                    page = owner_page.0,
                    "evicted page"
                );
            }
            victim
        }
    };

    let path = kernel
        .pcb_table
        .get(pid)
        .expect("running pcb must exist")
        .path()
        .to_string();
    kernel.loader.load_page(&kernel.file_system, hardware, &path, page, frame)?;

    let pcb = kernel.pcb_table.get_mut(pid).expect("running pcb must exist");
    pcb.set_resident(page, frame);
    kernel.frame_owner.insert(frame, (pid, page));
    hardware.set_page_frame(page, frame);

    tracing::info!(pid = pid.0, page = page.0, frame = frame.0, "resolved page fault");
    Ok(())
}

/// Applies the configured round-robin quantum to the hardware timer at
/// the moment the CPU goes from idle to running. A no-op for any other
/// scheduling policy or when no quantum was configured.
fn apply_round_robin_quantum<H: Hardware>(kernel: &Kernel, hardware: &mut H) {
    if kernel.scheduler.is_round_robin() {
        if let Some(quantum) = kernel.round_robin_quantum {
            hardware.set_quantum(quantum);
        }
    }
}

/// Saves and re-enqueues the currently running PCB (if any) so a new,
/// higher-priority PCB can take the CPU. Shared by `handle_new` and
/// `admit_existing`'s preempt case.
fn preempt_running<H: Hardware>(kernel: &mut Kernel, hardware: &mut H) {
    let running_pid = kernel.pcb_table.running().expect("preempt implies a running pcb");
    let running = kernel
        .pcb_table
        .get_mut(running_pid)
        .expect("running pcb must be in the table");
    let priority = running.priority();
    kernel.dispatcher.save(running, hardware);
    running.to_ready();
    kernel.scheduler.add(running_pid, priority);
}

/// Admission for a PCB that already exists in the table (the IO_OUT path).
fn admit_existing<H: Hardware>(kernel: &mut Kernel, hardware: &mut H, pid: Pid) {
    let priority = kernel.pcb_table.get(pid).expect("pcb must exist").priority();
    let running_priority = kernel.pcb_table.running_pcb().map(|p| p.priority());

    match kernel.scheduler.decide_admission(running_priority, priority) {
        AdmissionDecision::Run => {
            apply_round_robin_quantum(kernel, hardware);
            let pcb = kernel.pcb_table.get_mut(pid).expect("pcb must exist");
            pcb.to_running();
            kernel.dispatcher.load(pcb, hardware);
            kernel.pcb_table.set_running(Some(pid));
        }
        AdmissionDecision::Enqueue => {
            let pcb = kernel.pcb_table.get_mut(pid).expect("pcb must exist");
            pcb.to_ready();
            kernel.scheduler.add(pid, priority);
        }
        AdmissionDecision::Preempt => {
            preempt_running(kernel, hardware);
            let pcb = kernel.pcb_table.get_mut(pid).expect("pcb must exist");
            pcb.to_running();
            kernel.dispatcher.load(pcb, hardware);
            kernel.pcb_table.set_running(Some(pid));
        }
    }
}

/// Shared tail of KILL/IO_IN/TIMEOUT: load the scheduler's next PCB, or
/// idle the CPU if the ready structure is empty.
fn dispatch_next_or_idle<H: Hardware>(kernel: &mut Kernel, hardware: &mut H) {
    if kernel.scheduler.is_empty() {
        kernel.pcb_table.set_running(None);
        hardware.set_pc(-1);
    } else {
        let next_pid = kernel.scheduler.get_next().expect("checked not empty");
        let next = kernel
            .pcb_table
            .get_mut(next_pid)
            .expect("scheduled pid must be in the table");
        kernel.dispatcher.load(next, hardware);
        next.to_running();
        kernel.pcb_table.set_running(Some(next_pid));
    }
}
