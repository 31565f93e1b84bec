use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;

struct Tracked {
    id: u32,
    drops: Rc<Cell<u32>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

fn tracked(id: u32, drops: &Rc<Cell<u32>>) -> Tracked {
    Tracked { id, drops: Rc::clone(drops) }
}

#[test]
fn stored_value_stays_alive() {
    let drops = Rc::new(Cell::new(0));
    let slot = PageSlot::new();
    assert!(slot.replace(tracked(1, &drops)).is_none());
    assert!(slot.is_occupied());
    assert_eq!(drops.get(), 0);
    assert_eq!(slot.with(|t| t.id), Some(1));
}

#[test]
fn replace_hands_back_previous() {
    let drops = Rc::new(Cell::new(0));
    let slot = PageSlot::new();
    assert!(slot.replace(tracked(1, &drops)).is_none());
    let previous = slot.replace(tracked(2, &drops));
    assert_eq!(previous.as_ref().map(|t| t.id), Some(1));
    drop(previous);
    assert_eq!(drops.get(), 1);
    assert_eq!(slot.with(|t| t.id), Some(2));
}

#[test]
fn take_empties_the_slot() {
    let drops = Rc::new(Cell::new(0));
    let slot = PageSlot::new();
    assert!(slot.replace(tracked(1, &drops)).is_none());
    drop(slot.take());
    assert_eq!(drops.get(), 1);
    assert!(!slot.is_occupied());
    assert!(slot.take().is_none());
    assert_eq!(slot.with(|t| t.id), None);
}

#[test]
fn dropping_taken_value_may_touch_the_slot() {
    let drops = Rc::new(Cell::new(0));
    let slot = PageSlot::new();
    assert!(slot.replace(tracked(1, &drops)).is_none());
    let taken = slot.take();
    assert!(!slot.is_occupied());
    drop(taken);
    assert!(slot.replace(tracked(2, &drops)).is_none());
    assert_eq!(drops.get(), 1);
}

thread_local! {
    static PAGE: PageSlot<u32> = const { PageSlot::new() };
}

#[test]
fn works_as_a_thread_local() {
    PAGE.with(|slot| assert!(slot.replace(7).is_none()));
    assert_eq!(PAGE.with(|slot| slot.with(|v| *v)), Some(7));
    assert_eq!(PAGE.with(PageSlot::take), Some(7));
}
