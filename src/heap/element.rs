pub type Priority = i32;

/// A payload paired with the priority it was inserted at.
///
/// The heap owns the wrapper but never looks inside `payload`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Element<P> {
    pub payload: P,
    pub priority: Priority,
}

impl<P> Element<P> {
    pub fn new(payload: P, priority: Priority) -> Self {
        Element { payload, priority }
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P> From<(P, Priority)> for Element<P> {
    fn from(pair: (P, Priority)) -> Self {
        Element::new(pair.0, pair.1)
    }
}
