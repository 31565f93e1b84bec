use pretty_assertions::assert_eq;

use super::*;

#[test]
fn first_miss_is_announced() {
    let mut poll = ElementPoll::new(100);
    assert_eq!(poll.miss(), Retry { delay_ms: 100, announce: true });
    assert_eq!(poll.misses(), 1);
}

#[test]
fn keeps_retrying_at_the_same_delay() {
    let mut poll = ElementPoll::new(100);
    poll.miss();
    for _ in 0..1_000 {
        assert_eq!(poll.miss(), Retry { delay_ms: 100, announce: false });
    }
    assert_eq!(poll.misses(), 1_001);
}

#[test]
fn miss_count_saturates() {
    let mut poll = ElementPoll { delay_ms: 100, misses: u32::MAX };
    assert_eq!(poll.miss().delay_ms, 100);
    assert_eq!(poll.misses(), u32::MAX);
}
