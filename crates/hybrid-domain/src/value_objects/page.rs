//! Page component identity

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies the type of a routable page component
///
/// Two values compare equal when they were created from the same Rust type,
/// regardless of the display name given.
#[derive(Clone, Copy)]
pub struct PageType {
    id: TypeId,
    name: &'static str,
}

impl PageType {
    /// Page type for `P`, displayed as `name`
    pub fn of<P: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<P>(),
            name,
        }
    }

    /// Display name of the page
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this page type was created from `P`
    pub fn is<P: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<P>()
    }

    /// Underlying type identity
    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for PageType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PageType {}

impl Hash for PageType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PageType").field(&self.name).finish()
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
