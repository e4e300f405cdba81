//! Identity collaborator contract
//!
//! Authentication itself is out of scope; the engine only asks who, if
//! anyone, is currently signed in, and snapshots that answer onto each
//! created comment.

/// Denormalized identity snapshot captured at comment creation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// Lookup for the currently authenticated user
pub trait IdentityProvider: Send + Sync {
    /// The signed-in identity, or `None` when signed out
    fn current_identity(&self) -> Option<Identity>;
}
