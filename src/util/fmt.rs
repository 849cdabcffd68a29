use std::fmt::{self, Debug, Formatter};

/// Prints the contained string as is, without the quotes [`Debug`] would normally add.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lets a closure stand in for a [`Debug`] field, so that nested lists can be written inline with
/// [`debug_struct`](Formatter::debug_struct).
pub struct DebugWith<F: Fn(&mut Formatter<'_>) -> fmt::Result>(pub F);

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for DebugWith<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}
