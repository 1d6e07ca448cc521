// Drawer lifecycle: alternation after settle and the re-entrancy guard.

use infoevents_core::{NavPhase, NavTransition, NavigationState};
use proptest::prelude::*;

/// Mirror of the page state the web front-end keeps in sync with the machine.
#[derive(Default)]
struct FakeDrawer {
    active_class: bool,
    aria_expanded: &'static str,
}

impl FakeDrawer {
    fn apply(&mut self, s: &NavigationState, t: NavTransition) {
        self.active_class = t == NavTransition::Opened;
        self.aria_expanded = s.aria_expanded();
    }
}

#[test]
fn settled_toggles_alternate_and_match_drawer() {
    let mut s = NavigationState::new();
    let mut drawer = FakeDrawer::default();
    for i in 0..10 {
        let t = s.toggle().expect("settled toggle must transition");
        drawer.apply(&s, t);
        s.settle();
        let expect_open = i % 2 == 0;
        assert_eq!(s.is_open(), expect_open);
        assert_eq!(drawer.active_class, s.is_open());
        assert_eq!(drawer.aria_expanded, if expect_open { "true" } else { "false" });
    }
}

#[test]
fn double_toggle_inside_window_is_one_transition() {
    let mut s = NavigationState::new();
    let transitions = [s.toggle(), s.toggle()]
        .into_iter()
        .flatten()
        .count();
    assert_eq!(transitions, 1);
    assert!(s.is_open());
    assert_eq!(s.phase(), NavPhase::Opening);
}

#[test]
fn close_triggers_while_opening_are_dropped() {
    let mut s = NavigationState::new();
    s.open();
    // overlay click, Escape and resize all call close()
    assert_eq!(s.close(), None);
    assert_eq!(s.close(), None);
    s.settle();
    assert_eq!(s.close(), Some(NavTransition::Closed));
}

#[derive(Clone, Debug)]
enum Op {
    Toggle,
    Open,
    Close,
    Settle,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Toggle),
        Just(Op::Open),
        Just(Op::Close),
        Just(Op::Settle),
    ]
}

proptest! {
    #[test]
    fn visual_state_never_diverges(ops in proptest::collection::vec(op(), 0..64)) {
        let mut s = NavigationState::new();
        let mut drawer = FakeDrawer::default();
        for o in ops {
            let t = match o {
                Op::Toggle => s.toggle(),
                Op::Open => s.open(),
                Op::Close => s.close(),
                Op::Settle => { s.settle(); None }
            };
            if let Some(t) = t {
                drawer.apply(&s, t);
            }
            prop_assert_eq!(drawer.active_class, s.is_open());
        }
    }

    #[test]
    fn at_most_one_transition_per_window(n in 1usize..10) {
        let mut s = NavigationState::new();
        let accepted = (0..n).filter_map(|_| s.toggle()).count();
        prop_assert_eq!(accepted, 1);
    }
}
