//! Terminal widgets and the weather station UI built from them.

mod color_scheme;
mod container;
mod label;
mod observer;
mod printer;
mod statemachine;
mod stdio_printer;
mod text_field;
pub mod tui;
mod value;
mod widget;

pub use color_scheme::ColorScheme;
pub use container::Container;
pub use label::{Label, LabelRef};
pub use observer::{Observer, ObserverRef};
pub use printer::{Index, Printer};
pub use statemachine::{SmEvent, SmResult, StateMachine};
pub use stdio_printer::StdioPrinter;
pub use text_field::{TextField, TextFieldRef};
pub use tui::Tui;
pub use value::Value;
pub use widget::{Widget, WidgetProperties, WidgetRef, fit};

#[cfg(test)]
pub use observer::{Journal, Recorder, RecorderRef};
#[cfg(test)]
pub use printer::BufferPrinter;
