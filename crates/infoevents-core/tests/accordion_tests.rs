// FAQ accordion: one open item at most.

use infoevents_core::Accordion;
use proptest::prelude::*;

#[test]
fn second_item_replaces_first_then_closes() {
    let mut a = Accordion::new(4);
    assert_eq!(a.activate(0), Some(0));
    assert_eq!(a.activate(1), Some(1));
    assert!(!a.is_open(0));
    assert!(a.is_open(1));
    assert_eq!(a.activate(1), None);
    assert!((0..4).all(|i| !a.is_open(i)));
}

#[test]
fn item_shipped_open_closes_when_another_opens() {
    let mut a = Accordion::with_open(3, Some(1));
    assert!(a.is_open(1));
    assert_eq!(a.activate(0), Some(0));
    assert!(!a.is_open(1));
}

proptest! {
    #[test]
    fn never_more_than_one_open(clicks in proptest::collection::vec(0usize..6, 0..40)) {
        let mut a = Accordion::new(6);
        for c in clicks {
            a.activate(c);
            let open = (0..6).filter(|&i| a.is_open(i)).count();
            prop_assert!(open <= 1);
        }
    }
}
