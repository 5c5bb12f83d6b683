use super::WeatherSnapshot;
use crate::tui::{Observer, ObserverRef, Value};

use log::trace;

use std::fmt;
use std::rc::Rc;

/// Shared handle to a display, owned by the UI.
pub type DisplayRef = Rc<dyn WeatherDisplay>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayKind {
    Temperature,
    Conditions,
    Forecast,
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DisplayKind::Temperature => "temperature",
            DisplayKind::Conditions => "conditions",
            DisplayKind::Forecast => "forecast",
        };
        f.write_str(name)
    }
}

/** Something that shows (part of) the current weather readings.
 *
 * Displays always get the full snapshot and pick the values they are
 * interested in. Rendering can't fail.
 */
pub trait WeatherDisplay {
    fn render(&self, snapshot: &WeatherSnapshot);
    fn kind(&self) -> DisplayKind;
}

// Set the text of the widget a display is bound to.
fn show(target: &ObserverRef, kind: DisplayKind, text: String) {
    trace!("Render {}: {}", kind, text);
    target.borrow_mut().update(Value::Str(text));
}

pub struct TemperatureDisplay {
    target: ObserverRef,
}

impl TemperatureDisplay {
    pub fn new(target: ObserverRef) -> Rc<TemperatureDisplay> {
        Rc::new(TemperatureDisplay{target})
    }

    pub fn format(snapshot: &WeatherSnapshot) -> String {
        format!("Temperature: {}°C", snapshot.temperature)
    }
}

impl WeatherDisplay for TemperatureDisplay {
    fn render(&self, snapshot: &WeatherSnapshot) {
        show(&self.target, self.kind(), TemperatureDisplay::format(snapshot));
    }

    fn kind(&self) -> DisplayKind {
        DisplayKind::Temperature
    }
}

pub struct ConditionsDisplay {
    target: ObserverRef,
}

impl ConditionsDisplay {
    pub fn new(target: ObserverRef) -> Rc<ConditionsDisplay> {
        Rc::new(ConditionsDisplay{target})
    }

    pub fn format(snapshot: &WeatherSnapshot) -> String {
        format!("Current conditions: {}", snapshot.current_conditions)
    }
}

impl WeatherDisplay for ConditionsDisplay {
    fn render(&self, snapshot: &WeatherSnapshot) {
        show(&self.target, self.kind(), ConditionsDisplay::format(snapshot));
    }

    fn kind(&self) -> DisplayKind {
        DisplayKind::Conditions
    }
}

pub struct ForecastDisplay {
    target: ObserverRef,
}

impl ForecastDisplay {
    pub fn new(target: ObserverRef) -> Rc<ForecastDisplay> {
        Rc::new(ForecastDisplay{target})
    }

    pub fn format(snapshot: &WeatherSnapshot) -> String {
        format!("Forecast: {}", snapshot.forecast)
    }
}

impl WeatherDisplay for ForecastDisplay {
    fn render(&self, snapshot: &WeatherSnapshot) {
        show(&self.target, self.kind(), ForecastDisplay::format(snapshot));
    }

    fn kind(&self) -> DisplayKind {
        DisplayKind::Forecast
    }
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::{Journal, Recorder};

    fn sample() -> WeatherSnapshot {
        WeatherSnapshot::new("25", "Sunny", "Warm and clear")
    }

    #[test]
    fn test_each_display_uses_its_own_template() {
        let s = sample();
        assert_eq!(TemperatureDisplay::format(&s), "Temperature: 25°C");
        assert_eq!(ConditionsDisplay::format(&s), "Current conditions: Sunny");
        assert_eq!(ForecastDisplay::format(&s), "Forecast: Warm and clear");
    }

    #[test]
    fn test_empty_values_render_as_empty() {
        let s = WeatherSnapshot::default();
        assert_eq!(TemperatureDisplay::format(&s), "Temperature: °C");
        assert_eq!(ConditionsDisplay::format(&s), "Current conditions: ");
        assert_eq!(ForecastDisplay::format(&s), "Forecast: ");
    }

    #[test]
    fn test_temperature_is_not_validated() {
        let s = WeatherSnapshot::new("warm-ish", "", "");
        assert_eq!(TemperatureDisplay::format(&s), "Temperature: warm-ish°C");
    }

    #[test]
    fn test_render_sets_target_text() {
        let journal = Journal::default();
        let target = Recorder::new("t", &journal);
        let display = ForecastDisplay::new(target.clone());

        display.render(&sample());

        assert_eq!(target.borrow().last(), Some("Forecast: Warm and clear"));
        assert_eq!(target.borrow().count(), 1);
    }

    #[test]
    fn test_rendering_twice_gives_same_output() {
        let journal = Journal::default();
        let target = Recorder::new("c", &journal);
        let display = ConditionsDisplay::new(target.clone());

        display.render(&sample());
        display.render(&sample());

        let entries = journal.borrow();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[test]
    fn test_kind_names() {
        let journal = Journal::default();
        let display = TemperatureDisplay::new(Recorder::new("t", &journal));
        assert_eq!(display.kind(), DisplayKind::Temperature);
        assert_eq!(DisplayKind::Conditions.to_string(), "conditions");
    }
}
