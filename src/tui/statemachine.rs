use log::error;

pub enum SmEvent<E> {
    EnterState,
    ExitState,
    Event(E),
}

pub enum SmResult<C, E> {
    EventHandled,
    ChangeState(fn(&mut C, &SmEvent<E>) -> SmResult<C, E>),
    Error,
}

/** Minimal state machine where each state is a function.
 *
 * A state function gets the context and the event and either handles the
 * event or names the next state. On a state change, the old state receives
 * ExitState and the new one EnterState. An event the state can't make sense
 * of is logged and the machine stays where it is.
 */
pub struct StateMachine<C, E> {
    current_state: fn(&mut C, &SmEvent<E>) -> SmResult<C, E>,
}

impl<C, E> StateMachine<C, E> {
    pub fn new(initial_state: fn(&mut C, &SmEvent<E>) -> SmResult<C, E>) -> StateMachine<C, E> {
        StateMachine{current_state: initial_state}
    }

    pub fn init(&mut self, context: &mut C) {
        self.handle_event(context, &SmEvent::EnterState)
    }

    pub fn handle_event(&mut self, context: &mut C, event: &SmEvent<E>) {
        let result = (self.current_state)(context, event);
        match result {
            SmResult::EventHandled => {},
            SmResult::ChangeState(new_state) => {
                (self.current_state)(context, &SmEvent::ExitState);
                self.current_state = new_state;
                (self.current_state)(context, &SmEvent::EnterState);
            }
            SmResult::Error => error!("Error handling event, staying in current state"),
        }
    }
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------

#[cfg(test)]
mod tests {
    use super::SmEvent;
    use super::SmResult;
    use super::StateMachine;

    /* Test object recording which states were entered and left */
    struct Door {
        trace: Vec<String>,
        knocks: u32,
    }

    impl Door {
        fn new() -> Door {
            Door{trace: vec!{}, knocks: 0}
        }

        fn closed(context: &mut Door, event: &SmEvent<char>) -> SmResult<Door, char> {
            match event {
                SmEvent::EnterState => {context.trace.push("enter closed".to_string()); SmResult::EventHandled},
                SmEvent::ExitState => {context.trace.push("exit closed".to_string()); SmResult::EventHandled},
                SmEvent::Event('o') => SmResult::ChangeState(Door::open),
                SmEvent::Event(_) => {context.knocks += 1; SmResult::EventHandled},
            }
        }

        fn open(context: &mut Door, event: &SmEvent<char>) -> SmResult<Door, char> {
            match event {
                SmEvent::EnterState => {context.trace.push("enter open".to_string()); SmResult::EventHandled},
                SmEvent::ExitState => {context.trace.push("exit open".to_string()); SmResult::EventHandled},
                SmEvent::Event('c') => SmResult::ChangeState(Door::closed),
                SmEvent::Event('x') => SmResult::Error,
                SmEvent::Event(_) => SmResult::EventHandled,
            }
        }
    }

    fn start() -> (StateMachine<Door, char>, Door) {
        let mut sm = StateMachine::new(Door::closed);
        let mut door = Door::new();
        sm.init(&mut door);
        (sm, door)
    }

    #[test]
    fn test_initial_state_is_entered() {
        let (_, door) = start();
        assert_eq!(door.trace, vec!["enter closed"]);
    }

    #[test]
    fn test_events_go_to_current_state() {
        let (mut sm, mut door) = start();
        sm.handle_event(&mut door, &SmEvent::Event('k'));
        sm.handle_event(&mut door, &SmEvent::Event('k'));
        assert_eq!(door.knocks, 2);

        sm.handle_event(&mut door, &SmEvent::Event('o'));
        sm.handle_event(&mut door, &SmEvent::Event('k'));
        assert_eq!(door.knocks, 2);
    }

    #[test]
    fn test_state_change_exits_old_and_enters_new_state() {
        let (mut sm, mut door) = start();
        sm.handle_event(&mut door, &SmEvent::Event('o'));
        sm.handle_event(&mut door, &SmEvent::Event('c'));
        assert_eq!(door.trace, vec!["enter closed", "exit closed", "enter open", "exit open", "enter closed"]);
    }

    #[test]
    fn test_error_keeps_current_state() {
        let (mut sm, mut door) = start();
        sm.handle_event(&mut door, &SmEvent::Event('o'));
        sm.handle_event(&mut door, &SmEvent::Event('x'));
        assert_eq!(door.trace, vec!["enter closed", "exit closed", "enter open"]);

        sm.handle_event(&mut door, &SmEvent::Event('c'));
        assert_eq!(door.trace.last().map(|s| s.as_str()), Some("enter closed"));
    }
}
