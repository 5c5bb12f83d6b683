use std::fmt;

/** Value passed from a model to an observing widget. */
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(x) => Some(x),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(x) => f.write_str(x),
        }
    }
}
