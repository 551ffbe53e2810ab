mod loader_arithmetic;
mod memory_pool;
mod pcb_transitions;
mod priority_aging;
