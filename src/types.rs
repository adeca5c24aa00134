use std::fmt;
use std::panic::Location;

/// Identity of a gated callable, captured when it is registered.
///
/// `name` defaults to the callable's type name (the item path for `fn`
/// items, `..::{{closure}}` for closures) and `location` is the source
/// position of the registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnMeta {
    pub name: &'static str,
    pub location: &'static Location<'static>,
}

impl FnMeta {
    #[track_caller]
    pub fn of<F>() -> Self {
        Self {
            name: std::any::type_name::<F>(),
            location: Location::caller(),
        }
    }
}

impl fmt::Display for FnMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.location.file(),
            self.location.line(),
            self.name
        )
    }
}

/// Outcome of one gate check, decided fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// Backend reports the feature active; the wrapped function runs.
    Active,
    /// Feature inactive; the default runs instead.
    InactiveWithDefault,
    /// Feature inactive and nothing to fall back to; the call fails.
    InactiveNoDefault,
}

impl Dispatch {
    pub fn decide(active: bool, has_default: bool) -> Self {
        match (active, has_default) {
            (true, _) => Dispatch::Active,
            (false, true) => Dispatch::InactiveWithDefault,
            (false, false) => Dispatch::InactiveNoDefault,
        }
    }
}
