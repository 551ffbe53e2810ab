use crate::pcb::{Pid, Priority};
use crate::scheduler::PriorityBuckets;

fn p(n: u8) -> Priority {
    Priority::new(n).unwrap()
}

#[test]
fn get_next_prefers_highest_priority_bucket() {
    let mut buckets = PriorityBuckets::new();
    buckets.add(Pid(1), p(2));
    buckets.add(Pid(2), p(0));
    assert_eq!(buckets.get_next(), Some(Pid(2)));
}

#[test]
fn fifo_order_within_a_bucket_is_preserved() {
    let mut buckets = PriorityBuckets::new();
    buckets.add(Pid(1), p(3));
    buckets.add(Pid(2), p(3));
    assert_eq!(buckets.get_next(), Some(Pid(1)));
    assert_eq!(buckets.get_next(), Some(Pid(2)));
}

#[test]
fn aging_promotes_every_remaining_pcb_by_one_bucket() {
    let mut buckets = PriorityBuckets::new();
    buckets.add(Pid(1), p(4));
    buckets.add(Pid(2), p(2));
    buckets.add(Pid(3), p(0));

    // Popping the priority-0 pcb ages everything else up one bucket.
    assert_eq!(buckets.get_next(), Some(Pid(3)));
    assert_eq!(buckets.occupied_buckets(), vec![1, 3]);

    assert_eq!(buckets.get_next(), Some(Pid(2)));
    assert_eq!(buckets.occupied_buckets(), vec![2]);
}

#[test]
fn aging_runs_only_when_a_pcb_is_actually_returned() {
    let mut buckets = PriorityBuckets::new();
    assert_eq!(buckets.get_next(), None);
    assert!(buckets.is_empty());
}

#[test]
fn size_and_is_empty_track_total_occupancy() {
    let mut buckets = PriorityBuckets::new();
    assert!(buckets.is_empty());
    buckets.add(Pid(1), p(1));
    buckets.add(Pid(2), p(1));
    assert_eq!(buckets.size(), 2);
    buckets.get_next();
    assert_eq!(buckets.size(), 1);
}
