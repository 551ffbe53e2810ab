//! Per-tick state sampling for reporting, plus a plain tabular render.

use crate::config::StopCondition;
use crate::hardware::ClockState;
use crate::pcb::ProcessState;
use crate::pcb_table::PcbTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    Run,
    Wait,
    Ready,
    End,
}

impl From<ProcessState> for ProcState {
    fn from(state: ProcessState) -> Self {
        match state {
            ProcessState::Running => ProcState::Run,
            ProcessState::Waiting => ProcState::Wait,
            ProcessState::Ready | ProcessState::New => ProcState::Ready,
            ProcessState::Terminated => ProcState::End,
        }
    }
}

impl ProcState {
    fn label(self) -> &'static str {
        match self {
            ProcState::Run => "RUN",
            ProcState::Wait => "WAIT",
            ProcState::Ready => "READY",
            ProcState::End => "END",
        }
    }
}

#[derive(Debug, Default)]
pub struct GanttRecorder {
    rows: Vec<Vec<ProcState>>,
    stop: StopCondition,
    flushed: bool,
}

impl GanttRecorder {
    pub fn new(stop: StopCondition) -> Self {
        GanttRecorder {
            rows: Vec::new(),
            stop,
            flushed: false,
        }
    }

    /// Appends one row: every PCB's state, in table order, for this tick.
    pub fn record(&mut self, pcb_table: &PcbTable) {
        let row = pcb_table.iter().map(|p| ProcState::from(p.state())).collect();
        self.rows.push(row);
    }

    /// True exactly once, the first tick the configured stop condition
    /// is met (guards against re-flushing every subsequent tick).
    pub fn should_flush(&mut self, clock: &impl ClockState) -> bool {
        if self.flushed {
            return false;
        }
        let due = match self.stop {
            StopCondition::AtTick(tick) => clock.current_tick() == tick,
            StopCondition::Never => false,
        };
        if due {
            self.flushed = true;
        }
        due
    }

    pub fn rows(&self) -> &[Vec<ProcState>] {
        &self.rows
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Tick");
        for i in 0..self.rows.len() {
            out.push_str(&format!(" | {i}"));
        }
        out.push('\n');
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        for pcb_index in 0..width {
            out.push_str(&format!("p{pcb_index}"));
            for row in &self.rows {
                let cell = row.get(pcb_index).map(|s| s.label()).unwrap_or("-");
                out.push_str(&format!(" | {cell}"));
            }
            out.push('\n');
        }
        out
    }
}
