//! Self-rearming animation-frame loop.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_render::{AnimationFrame, request_animation_frame};

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Run `step` on every animation frame until it returns `ControlFlow::Break`.
///
/// `step` receives the frame timestamp in milliseconds. The pending frame
/// handle lives in a shared slot that each frame replaces with the next one;
/// once `step` breaks, the slot is emptied and the loop ends.
pub fn animation_loop<F>(step: F)
where
    F: FnMut(f64) -> ControlFlow<()> + 'static,
{
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    schedule(slot, Rc::new(RefCell::new(step)));
}

fn schedule<F>(slot: FrameSlot, step: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> ControlFlow<()> + 'static,
{
    let next_slot = Rc::clone(&slot);
    let handle = request_animation_frame(move |timestamp| {
        next_slot.borrow_mut().take();
        let flow = (&mut *step.borrow_mut())(timestamp);
        if flow.is_continue() {
            schedule(next_slot, step);
        }
    });
    *slot.borrow_mut() = Some(handle);
}
