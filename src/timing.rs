use crate::dom;
use infoevents_core::{Debounce, Throttle, ThrottleHit, TrailingRun};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

type Handler = Rc<RefCell<dyn FnMut()>>;

fn arm_trailing(gate: Rc<RefCell<Throttle>>, f: Handler, ticket: u64, after: Duration) {
    dom::set_timeout(after, move || {
        let run = gate.borrow_mut().redeem(ticket, Instant::now());
        match run {
            TrailingRun::Fire => (&mut *f.borrow_mut())(),
            TrailingRun::Wait(left) => arm_trailing(gate, f, ticket, left),
            TrailingRun::Stale => {}
        }
    });
}

/// Rate-limit an event handler. The first event of a burst runs at once;
/// events dropped by the gate collapse into one trailing run so the handler
/// always sees the final state.
pub fn throttled(
    interval: Duration,
    f: impl FnMut() + 'static,
) -> impl FnMut(web::Event) + 'static {
    let gate = Rc::new(RefCell::new(Throttle::new(interval)));
    let f: Handler = Rc::new(RefCell::new(f));
    move |_ev: web::Event| {
        let hit = gate.borrow_mut().hit(Instant::now());
        match hit {
            ThrottleHit::Fire => (&mut *f.borrow_mut())(),
            ThrottleHit::Drop => {}
            ThrottleHit::Schedule { ticket, after } => {
                arm_trailing(gate.clone(), f.clone(), ticket, after)
            }
        }
    }
}

/// Run the handler once input has been quiet for `wait`.
pub fn debounced(
    wait: Duration,
    f: impl FnMut() + 'static,
) -> impl FnMut(web::Event) + 'static {
    let gate = Rc::new(RefCell::new(Debounce::new(wait)));
    let f = Rc::new(RefCell::new(f));
    move |_ev: web::Event| {
        let ticket = gate.borrow_mut().call();
        let gate = gate.clone();
        let f = f.clone();
        dom::set_timeout(wait, move || {
            if gate.borrow().is_current(ticket) {
                (&mut *f.borrow_mut())();
            }
        });
    }
}
