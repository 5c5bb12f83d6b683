use super::{DisplayRef, WeatherDisplay, WeatherSnapshot};

use log::{info, trace};

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/** Registration and notification of weather displays. */
pub trait WeatherSubject {
    /// Append a display to the subscriber list. Adding the same display
    /// twice makes it get every notification twice.
    fn subscribe(&self, observer: &DisplayRef);

    /// Remove the first entry for this display. No-op if it isn't subscribed.
    fn unsubscribe(&self, observer: &DisplayRef);

    /// Render the current readings on all subscribed displays, in
    /// subscription order.
    fn notify_all(&self);
}

/** Owner of the current weather readings.
 *
 * Displays are only referenced weakly. They belong to the UI, and a display
 * that has been dropped is skipped and removed from the list on the next
 * notification.
 *
 * A notification works on a copy of the subscriber list and of the
 * readings, and no borrow is held while a display renders. Displays may
 * therefore subscribe, unsubscribe or update from within `render`; list
 * changes apply from the next notification on. An update from within
 * `render` ends the running pass, the nested pass has already shown the
 * newer readings to everyone.
 */
pub struct WeatherData {
    snapshot: RefCell<WeatherSnapshot>,
    observers: RefCell<Vec<Weak<dyn WeatherDisplay>>>,
    generation: Cell<u64>, // Bumped on every update
}

impl WeatherData {
    pub fn new() -> WeatherData {
        WeatherData{
            snapshot: RefCell::new(WeatherSnapshot::default()),
            observers: RefCell::new(Vec::new()),
            generation: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> WeatherSnapshot {
        self.snapshot.borrow().clone()
    }

    /** Replace all readings at once and notify the displays. */
    pub fn update(&self, temperature: &str, current_conditions: &str, forecast: &str) {
        info!("Update weather data: {:?}, {:?}, {:?}", temperature, current_conditions, forecast);
        *self.snapshot.borrow_mut() = WeatherSnapshot::new(temperature, current_conditions, forecast);
        self.generation.set(self.generation.get().wrapping_add(1));
        self.notify_all();
    }

    /** Number of live entries in the subscriber list. */
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().iter().filter(|o| o.strong_count() > 0).count()
    }

    /** How often the given display is currently subscribed. */
    pub fn subscription_count(&self, observer: &DisplayRef) -> usize {
        let observer = Rc::downgrade(observer);
        self.observers.borrow().iter().filter(|o| o.ptr_eq(&observer)).count()
    }

    fn prune(&self) {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|o| o.strong_count() > 0);
        if observers.len() != before {
            trace!("Dropped {} stale displays", before - observers.len());
        }
    }
}

impl Default for WeatherData {
    fn default() -> Self {
        WeatherData::new()
    }
}

impl WeatherSubject for WeatherData {
    fn subscribe(&self, observer: &DisplayRef) {
        trace!("Subscribe {} display", observer.kind());
        self.observers.borrow_mut().push(Rc::downgrade(observer));
    }

    fn unsubscribe(&self, observer: &DisplayRef) {
        let observer_weak = Rc::downgrade(observer);
        let mut observers = self.observers.borrow_mut();
        if let Some(pos) = observers.iter().position(|o| o.ptr_eq(&observer_weak)) {
            trace!("Unsubscribe {} display", observer.kind());
            observers.remove(pos);
        }
    }

    fn notify_all(&self) {
        let observers = self.observers.borrow().clone();
        let snapshot = self.snapshot();
        let generation = self.generation.get();
        trace!("Notify {} displays", observers.len());
        for observer in observers.iter() {
            if let Some(display) = observer.upgrade() {
                display.render(&snapshot);
            }
            if self.generation.get() != generation {
                trace!("Readings changed during notification, stopping outdated pass");
                break;
            }
        }
        self.prune();
    }
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------
