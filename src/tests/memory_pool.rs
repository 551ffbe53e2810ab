use crate::memory::MemoryManager;
use crate::pcb::FrameId;

#[test]
fn alloc_hands_out_frames_in_ascending_order() {
    let mut pool = MemoryManager::new(3);
    assert_eq!(pool.alloc(), Some(FrameId(0)));
    assert_eq!(pool.alloc(), Some(FrameId(1)));
    assert_eq!(pool.alloc(), Some(FrameId(2)));
    assert_eq!(pool.alloc(), None);
}

#[test]
fn freed_frames_are_reusable_fifo() {
    let mut pool = MemoryManager::new(2);
    let a = pool.alloc().unwrap();
    let b = pool.alloc().unwrap();
    pool.free([a, b]);
    assert_eq!(pool.free_count(), 2);
    // Freed in order a, b: FIFO allocation hands them back out a, b.
    assert_eq!(pool.alloc(), Some(a));
    assert_eq!(pool.alloc(), Some(b));
}
