use super::Index;
use super::Printer;
use super::ColorScheme;
use super::{Widget, WidgetProperties, WidgetRef};

use std::cell::RefCell;
use std::rc::Rc;
use std::fmt;

/** A group of widgets, optionally framed and titled. */
pub struct Container {
    title: String,
    props: WidgetProperties,
    draw_border: bool,
    children: Vec<WidgetRef>,
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
         .field("title", &self.title)
         .field("props.x", &self.props.pos_x)
         .field("props.y", &self.props.pos_y)
         .field("props.width", &self.props.width)
         .field("props.height", &self.props.height)
         .field("draw_border", &self.draw_border)
         .finish()
    }
}

impl Container {
    pub fn new() -> Container {
        let title = "".to_string();
        let props = WidgetProperties::new(0, 0);
        let draw_border = false;
        let children = vec!{};
        Container{title, props, draw_border, children}
    }

    /** Add a child at a position relative to the container.
     *
     * The container grows to fit the child.
     */
    pub fn add_child<C: Widget + 'static>(&mut self, child: Rc<RefCell<C>>, pos_x: Index, pos_y: Index) {
        // Leave space for drawing the border
        let (x_offset, y_offset) = if self.draw_border { (1, 1) } else { (0, 0) };
        child.borrow_mut().set_position(self.props.pos_x + pos_x + x_offset,
                                        self.props.pos_y + pos_y + y_offset);
        let (child_width, child_height) = child.borrow().get_size();
        let x_size = pos_x + child_width + x_offset * 2;
        let y_size = pos_y + child_height + y_offset * 2;
        let (width, height) = self.props.get_size();
        if x_size > width {
            self.props.set_width(x_size);
        }
        if y_size > height {
            self.props.set_height(y_size);
        }
        child.borrow_mut().set_color_scheme(self.props.colors.clone());
        self.children.push(child);
    }

    pub fn enable_border(&mut self, enable: bool) {
        if enable && !self.draw_border {
            self.props.set_width(self.props.get_width() + 2);
            self.props.set_height(self.props.get_height() + 2);
        } else if !enable && self.draw_border {
            self.props.set_width(self.props.get_width() - 2);
            self.props.set_height(self.props.get_height() - 2);
        }
        self.draw_border = enable;
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = format!("┤ {} ├", title);
    }

    fn draw_border(&self, p: &mut dyn Printer) {
        p.set_color(self.props.colors.fg_base, self.props.colors.bg_base);

        let x_start = self.props.pos_x;
        let x_end = x_start + self.props.width - 1;
        let y_start = self.props.pos_y;
        let y_end = y_start + self.props.height - 1;
        let inner = self.props.width - 2;

        // Upper line with centered title, if it fits
        let title_len = self.title.chars().count();
        let mut buff = String::with_capacity(self.props.width * 4);
        buff.push('┌');
        if title_len > 0 && title_len <= inner {
            let left = (inner - title_len) / 2;
            buff.extend(std::iter::repeat('─').take(left));
            buff.push_str(&self.title);
            buff.extend(std::iter::repeat('─').take(inner - title_len - left));
        } else {
            buff.extend(std::iter::repeat('─').take(inner));
        }
        buff.push('┐');
        p.print(x_start, y_start, &buff);

        for y in (y_start + 1)..(y_end) {
            p.print(x_start, y, "│");
            p.print(x_end, y, "│");
        }

        buff.clear();
        buff.push('└');
        buff.extend(std::iter::repeat('─').take(inner));
        buff.push('┘');
        p.print(x_start, y_end, &buff);
    }
}

impl Widget for Container {
    fn get_widget_properties_mut(&mut self) -> &mut WidgetProperties {
        &mut self.props
    }

    fn get_widget_properties(&self) -> &WidgetProperties {
        &self.props
    }

    /** Set the container's and all its children's position. */
    fn set_position(&mut self, x: Index, y: Index) -> bool {
        let (x_old, y_old) = self.props.get_position();
        let x_diff = (x as i32) - (x_old as i32);
        let y_diff = (y as i32) - (y_old as i32);
        self.props.set_position(x, y);
        for child in self.children.iter_mut() {
            let (x_child, y_child) = child.borrow().get_position();
            let x_new = (x_child as i32) + x_diff;
            let y_new = (y_child as i32) + y_diff;
            child.borrow_mut().set_position(x_new as Index, y_new as Index);
        }
        true
    }

    fn set_color_scheme(&mut self, colors: Rc<ColorScheme>) {
        for c in self.children.iter_mut() {
            c.borrow_mut().set_color_scheme(colors.clone());
        }
        self.props.colors = colors;
        self.props.dirty = true;
    }

    fn set_dirty(&mut self, is_dirty: bool) {
        self.props.dirty = is_dirty;
        for child in self.children.iter() {
            child.borrow_mut().set_dirty(is_dirty);
        }
    }

    fn is_dirty(&self) -> bool {
        self.props.dirty || self.children.iter().any(|c| c.borrow().is_dirty())
    }

    fn draw(&mut self, printer: &mut dyn Printer) {
        if self.draw_border && self.props.dirty {
            self.draw_border(printer);
        }
        for child in self.children.iter() {
            let mut child = child.borrow_mut();
            if child.is_dirty() {
                child.draw(printer);
            }
        }
        self.props.dirty = false;
    }
}

// ----------
// Unit tests
// ----------
