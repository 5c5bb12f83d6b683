use std::cell::RefCell;
use std::rc::Rc;

use super::Index;
use super::Observer;
use super::Value;
use super::{Printer, Widget, WidgetProperties, fit};

pub type LabelRef = Rc<RefCell<Label>>;

/** A line of text. The text can be replaced through the Observer trait. */
pub struct Label {
    props: WidgetProperties,
    value: Value,
    light: bool,
}

impl Label {
    pub fn new(value: String, size: Index) -> LabelRef {
        let width = size;
        let height = 1;
        let props = WidgetProperties::new(width, height);
        let value = Value::Str(value);
        let light = false;
        Rc::new(RefCell::new(Label{props, value, light}))
    }

    pub fn select_light(&mut self) {
        self.light = true;
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.value.to_string()
    }
}

impl Widget for Label {
    fn get_widget_properties_mut(&mut self) -> &mut WidgetProperties {
        &mut self.props
    }

    fn get_widget_properties(&self) -> &WidgetProperties {
        &self.props
    }

    fn draw(&mut self, p: &mut dyn Printer) {
        if self.light {
            p.set_color(self.props.colors.fg_base_l, self.props.colors.bg_base);
        } else {
            p.set_color(self.props.colors.fg_base, self.props.colors.bg_base);
        }
        p.print(self.props.pos_x, self.props.pos_y, &fit(&self.value.to_string(), self.props.width));
        self.props.dirty = false;
    }
}

impl Observer for Label {
    fn update(&mut self, value: Value) {
        self.value = value;
        self.set_dirty(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::BufferPrinter;

    #[test]
    fn test_update_replaces_text_and_marks_dirty() {
        let label = Label::new("old".to_string(), 10);
        let mut p = BufferPrinter::new();
        label.borrow_mut().set_position(1, 1);
        label.borrow_mut().draw(&mut p);
        assert!(!label.borrow().is_dirty());

        label.borrow_mut().update(Value::Str("new".to_string()));
        assert!(label.borrow().is_dirty());
        assert_eq!(label.borrow().text(), "new");
    }

    #[test]
    fn test_shorter_text_overwrites_old_text() {
        let label = Label::new("Forecast: Warm".to_string(), 20);
        let mut p = BufferPrinter::new();
        label.borrow_mut().set_position(2, 3);
        label.borrow_mut().draw(&mut p);
        assert_eq!(p.line(3), "  Forecast: Warm");

        label.borrow_mut().update(Value::Str("Forecast: ".to_string()));
        label.borrow_mut().draw(&mut p);
        assert_eq!(p.line(3), "  Forecast:");
    }
}
