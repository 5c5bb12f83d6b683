use std::cell::RefCell;
use std::rc::Rc;

use super::Index;
use super::{Printer, Widget, WidgetProperties, fit};

pub type TextFieldRef = Rc<RefCell<TextField>>;

/** Single line text input with a caption in front of it. */
pub struct TextField {
    props: WidgetProperties,
    caption: String,
    caption_width: Index,
    text: String,
    focused: bool,
}

impl TextField {
    pub fn new(caption: &str, caption_width: Index, text_width: Index) -> TextFieldRef {
        let props = WidgetProperties::new(caption_width + text_width, 1);
        Rc::new(RefCell::new(TextField{
            props,
            caption: caption.to_string(),
            caption_width,
            text: "".to_string(),
            focused: false,
        }))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.set_dirty(true);
    }

    pub fn insert(&mut self, c: char) {
        self.text.push(c);
        self.set_dirty(true);
    }

    pub fn backspace(&mut self) {
        if self.text.pop().is_some() {
            self.set_dirty(true);
        }
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        self.set_dirty(true);
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    // Visible part of the text. Shows the end of the text if it is too
    // long, so the cursor stays in view.
    fn visible_text(&self) -> String {
        let text_width = self.props.width - self.caption_width;
        let mut shown = self.text.clone();
        if self.focused {
            shown.push('_');
        }
        let len = shown.chars().count();
        if len > text_width {
            shown.chars().skip(len - text_width).collect()
        } else {
            shown
        }
    }
}

impl Widget for TextField {
    fn get_widget_properties_mut(&mut self) -> &mut WidgetProperties {
        &mut self.props
    }

    fn get_widget_properties(&self) -> &WidgetProperties {
        &self.props
    }

    fn draw(&mut self, p: &mut dyn Printer) {
        let colors = self.props.colors.clone();
        p.set_color(colors.fg_base, colors.bg_base);
        p.print(self.props.pos_x, self.props.pos_y, &fit(&self.caption, self.caption_width));
        if self.focused {
            p.set_color(colors.fg_focus, colors.bg_focus);
        }
        let text_width = self.props.width - self.caption_width;
        p.print(self.props.pos_x + self.caption_width, self.props.pos_y, &fit(&self.visible_text(), text_width));
        self.props.dirty = false;
    }
}
