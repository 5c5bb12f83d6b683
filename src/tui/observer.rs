use std::cell::RefCell;
use std::rc::Rc;

use super::Value;

pub type ObserverRef = Rc<RefCell<dyn Observer>>;

/** A widget (or anything else) that shows a value set from outside. */
pub trait Observer {
    fn update(&mut self, value: Value);
}

#[cfg(test)]
pub use self::recorder::{Journal, Recorder, RecorderRef};
