use super::{ColorScheme, Index, Printer};

use std::cell::RefCell;
use std::rc::Rc;

pub type WidgetRef = Rc<RefCell<dyn Widget>>;

/** Position, size and drawing state shared by all widgets. */
pub struct WidgetProperties {
    pub pos_x: Index,
    pub pos_y: Index,
    pub width: Index,
    pub height: Index,
    pub dirty: bool,
    pub colors: Rc<ColorScheme>,
}

impl WidgetProperties {
    pub fn new(width: Index, height: Index) -> WidgetProperties {
        WidgetProperties{
            pos_x: 0,
            pos_y: 0,
            width,
            height,
            dirty: true,
            colors: Rc::new(ColorScheme::new()),
        }
    }

    pub fn set_position(&mut self, x: Index, y: Index) -> bool {
        self.pos_x = x;
        self.pos_y = y;
        true
    }

    pub fn set_width(&mut self, width: Index) -> bool {
        self.width = width;
        true
    }

    pub fn set_height(&mut self, height: Index) -> bool {
        self.height = height;
        true
    }

    pub fn get_position(&self) -> (Index, Index) {
        (self.pos_x, self.pos_y)
    }

    pub fn get_size(&self) -> (Index, Index) {
        (self.width, self.height)
    }

    pub fn get_width(&self) -> Index {
        self.width
    }

    pub fn get_height(&self) -> Index {
        self.height
    }
}

/** A rectangular area of the screen.
 *
 * Widgets only redraw while dirty. Drawing resets the dirty flag.
 */
pub trait Widget {
    fn get_widget_properties(&self) -> &WidgetProperties;
    fn get_widget_properties_mut(&mut self) -> &mut WidgetProperties;

    fn set_position(&mut self, x: Index, y: Index) -> bool {
        self.get_widget_properties_mut().set_position(x, y)
    }

    fn set_dirty(&mut self, is_dirty: bool) {
        self.get_widget_properties_mut().dirty = is_dirty;
    }

    fn is_dirty(&self) -> bool {
        self.get_widget_properties().dirty
    }

    fn set_color_scheme(&mut self, colors: Rc<ColorScheme>) {
        self.get_widget_properties_mut().colors = colors;
        self.set_dirty(true);
    }

    fn get_position(&self) -> (Index, Index) {
        self.get_widget_properties().get_position()
    }

    fn get_size(&self) -> (Index, Index) {
        self.get_widget_properties().get_size()
    }

    fn draw(&mut self, p: &mut dyn Printer);
}

/** Cut or pad text to exactly width characters. */
pub fn fit(text: &str, width: Index) -> String {
    let mut s: String = text.chars().take(width).collect();
    let len = s.chars().count();
    s.extend(std::iter::repeat(' ').take(width - len));
    s
}
