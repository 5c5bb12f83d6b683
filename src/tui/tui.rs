use super::{ColorScheme, Container, Index, Label, LabelRef, Observer, Printer, TextField, TextFieldRef, Value, Widget};
use super::{SmEvent, SmResult, StateMachine};
use crate::UiMessage;
use crate::weather::{ConditionsDisplay, DisplayRef, ForecastDisplay, TemperatureDisplay, WeatherDisplay};
use crate::weather::{WeatherData, WeatherSnapshot, WeatherSubject};

use crossbeam_channel::Receiver;
use log::{info, trace, warn};
use termion::event::Key;

use std::rc::Rc;

const LABEL_WIDTH: Index = 40;
const CAPTION_WIDTH: Index = 20;
const FIELD_WIDTH: Index = 36;

/** Everything the UI shows, plus the weather data it works on.
 *
 * This is the context of the UI state machine: one state for the main
 * view, one for the open update form.
 */
pub struct Shell {
    weather: Rc<WeatherData>,
    displays: Vec<DisplayRef>, // Temperature, conditions, forecast
    main_panel: Container,
    form_panel: Container,
    fields: Vec<TextFieldRef>, // Same order as displays
    status: LabelRef,
    focus: usize,
    form_open: bool,
    full_redraw: bool,
    keep_running: bool,
}

impl Shell {
    pub fn new(weather: Rc<WeatherData>, initial: &WeatherSnapshot, colors: Rc<ColorScheme>) -> Shell {
        let labels: Vec<LabelRef> = (0..3).map(|_| Label::new("".to_string(), LABEL_WIDTH)).collect();
        let temperature: DisplayRef = TemperatureDisplay::new(labels[0].clone());
        let conditions: DisplayRef = ConditionsDisplay::new(labels[1].clone());
        let forecast: DisplayRef = ForecastDisplay::new(labels[2].clone());
        let displays = vec!{temperature, conditions, forecast};

        let mut main_panel = Container::new();
        main_panel.enable_border(true);
        main_panel.set_title("Weather App");
        for (i, label) in labels.iter().enumerate() {
            main_panel.add_child(label.clone(), 0, i);
        }
        let hint = Label::new("u: update weather data   q: quit".to_string(), LABEL_WIDTH);
        hint.borrow_mut().select_light();
        main_panel.add_child(hint, 0, 4);
        main_panel.set_position(1, 1);
        main_panel.set_color_scheme(colors.clone());

        let mut form_panel = Container::new();
        form_panel.enable_border(true);
        form_panel.set_title("Update Weather Data");
        let captions = ["Temperature:", "Current Conditions:", "Forecast:"];
        let fields: Vec<TextFieldRef> = captions.iter()
            .map(|c| TextField::new(c, CAPTION_WIDTH, FIELD_WIDTH))
            .collect();
        for (i, field) in fields.iter().enumerate() {
            form_panel.add_child(field.clone(), 0, i);
        }
        let help = [
            "Enter: update   Tab: next field   Esc: close",
            "F1/F2/F3: remove temperature/conditions/forecast",
            "F5/F6/F7: add temperature/conditions/forecast",
        ];
        for (i, text) in help.iter().enumerate() {
            let line = Label::new(text.to_string(), CAPTION_WIDTH + FIELD_WIDTH);
            line.borrow_mut().select_light();
            form_panel.add_child(line, 0, 4 + i);
        }
        let status = Label::new("".to_string(), CAPTION_WIDTH + FIELD_WIDTH);
        form_panel.add_child(status.clone(), 0, 8);
        let (_, main_height) = main_panel.get_size();
        form_panel.set_position(1, 1 + main_height);
        form_panel.set_color_scheme(colors);

        for display in displays.iter() {
            weather.subscribe(display);
        }
        weather.update(&initial.temperature, &initial.current_conditions, &initial.forecast);

        Shell{
            weather,
            displays,
            main_panel,
            form_panel,
            fields,
            status,
            focus: 0,
            form_open: false,
            full_redraw: true,
            keep_running: true,
        }
    }

    fn state_main(shell: &mut Shell, event: &SmEvent<Key>) -> SmResult<Shell, Key> {
        match event {
            SmEvent::EnterState => {shell.full_redraw = true; SmResult::EventHandled},
            SmEvent::ExitState => SmResult::EventHandled,
            SmEvent::Event(Key::Char('u')) => SmResult::ChangeState(Shell::state_form),
            SmEvent::Event(Key::Char('q')) => {
                info!("Quit requested");
                shell.keep_running = false;
                SmResult::EventHandled
            }
            SmEvent::Event(k) => {trace!("Main view ignores {:?}", k); SmResult::EventHandled},
        }
    }

    fn state_form(shell: &mut Shell, event: &SmEvent<Key>) -> SmResult<Shell, Key> {
        match event {
            SmEvent::EnterState => {shell.open_form(); SmResult::EventHandled},
            SmEvent::ExitState => {shell.close_form(); SmResult::EventHandled},
            SmEvent::Event(key) => match key {
                Key::Esc => SmResult::ChangeState(Shell::state_main),
                Key::Char('\n') => {shell.apply_update(); SmResult::EventHandled},
                Key::Char('\t') | Key::Down => {shell.move_focus(true); SmResult::EventHandled},
                Key::BackTab | Key::Up => {shell.move_focus(false); SmResult::EventHandled},
                Key::Backspace => match shell.focused_field() {
                    Some(field) => {field.borrow_mut().backspace(); SmResult::EventHandled},
                    None => SmResult::Error,
                },
                Key::F(n) if (1..=3).contains(n) => {shell.remove_display(*n as usize - 1); SmResult::EventHandled},
                Key::F(n) if (5..=7).contains(n) => {shell.add_display(*n as usize - 5); SmResult::EventHandled},
                Key::F(n) => {warn!("No action on F{}", n); SmResult::Error},
                Key::Char(c) if !c.is_control() => match shell.focused_field() {
                    Some(field) => {field.borrow_mut().insert(*c); SmResult::EventHandled},
                    None => SmResult::Error,
                },
                _ => {trace!("Form ignores {:?}", key); SmResult::EventHandled},
            },
        }
    }

    fn open_form(&mut self) {
        self.load_fields();
        self.focus = 0;
        for (i, field) in self.fields.iter().enumerate() {
            field.borrow_mut().set_focus(i == self.focus);
        }
        self.refresh_status();
        self.form_open = true;
        self.full_redraw = true;
    }

    fn close_form(&mut self) {
        self.form_open = false;
        self.full_redraw = true;
    }

    // Show the subject's current readings in the edit fields.
    fn load_fields(&mut self) {
        let snapshot = self.weather.snapshot();
        self.fields[0].borrow_mut().set_text(&snapshot.temperature);
        self.fields[1].borrow_mut().set_text(&snapshot.current_conditions);
        self.fields[2].borrow_mut().set_text(&snapshot.forecast);
    }

    fn apply_update(&mut self) {
        let values: Vec<String> = self.fields.iter().map(|f| f.borrow().text().to_string()).collect();
        self.weather.update(&values[0], &values[1], &values[2]);
        self.load_fields();
    }

    fn focused_field(&self) -> Option<TextFieldRef> {
        let field = self.fields.get(self.focus).cloned();
        if field.is_none() {
            warn!("Focus index {} out of range", self.focus);
        }
        field
    }

    fn move_focus(&mut self, forward: bool) {
        let num_fields = self.fields.len();
        if let Some(field) = self.fields.get(self.focus) {
            field.borrow_mut().set_focus(false);
        }
        self.focus = if forward {
            (self.focus + 1) % num_fields
        } else {
            (self.focus + num_fields - 1) % num_fields
        };
        self.fields[self.focus].borrow_mut().set_focus(true);
    }

    fn remove_display(&mut self, index: usize) {
        let display = &self.displays[index];
        info!("Removing {} display", display.kind());
        self.weather.unsubscribe(display);
        self.refresh_status();
    }

    fn add_display(&mut self, index: usize) {
        let display = &self.displays[index];
        info!("Adding {} display", display.kind());
        self.weather.subscribe(display);
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let counts: Vec<String> = self.displays.iter()
            .map(|d| format!("{} {}", d.kind(), self.weather.subscription_count(d)))
            .collect();
        trace!("{} displays subscribed", self.weather.observer_count());
        self.status.borrow_mut().update(Value::Str(format!("Subscribed: {}", counts.join(", "))));
    }

    fn draw(&mut self, p: &mut dyn Printer) {
        if self.full_redraw {
            p.clear();
            self.main_panel.set_dirty(true);
            self.form_panel.set_dirty(true);
            self.full_redraw = false;
        }
        self.main_panel.draw(p);
        if self.form_open {
            self.form_panel.draw(p);
        }
        p.update();
    }
}

/** Terminal front end of the weather station.
 *
 * Receives key events from the input thread and feeds them to the UI state
 * machine, redrawing after each one.
 */
pub struct Tui {
    ui_receiver: Receiver<UiMessage>,
    printer: Box<dyn Printer>,
    shell: Shell,
    sm: StateMachine<Shell, Key>,
}

impl Tui {
    pub fn new(ui_receiver: Receiver<UiMessage>,
               weather: Rc<WeatherData>,
               initial: &WeatherSnapshot,
               colors: ColorScheme,
               printer: Box<dyn Printer>) -> Tui {
        let shell = Shell::new(weather, initial, Rc::new(colors));
        Tui{
            ui_receiver,
            printer,
            shell,
            sm: StateMachine::new(Shell::state_main),
        }
    }

    /** Handle UI messages until the user quits or the input side goes away. */
    pub fn run(&mut self) {
        self.sm.init(&mut self.shell);
        self.shell.draw(&mut *self.printer);
        while self.shell.keep_running {
            let msg = match self.ui_receiver.recv() {
                Ok(msg) => msg,
                Err(_) => {
                    warn!("UI channel closed");
                    break;
                }
            };
            match msg {
                UiMessage::Key(k) => self.sm.handle_event(&mut self.shell, &SmEvent::Event(k)),
                UiMessage::Exit => {
                    info!("Stopping TUI");
                    self.shell.keep_running = false;
                }
            }
            self.shell.draw(&mut *self.printer);
        }
    }
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------
