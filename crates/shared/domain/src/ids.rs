//! Identity assignment for newly constructed entities.

use uuid::Uuid;

/// Keep a caller-supplied identifier or generate a fresh random one.
pub fn assign_id(id: Option<Uuid>) -> Uuid {
    id.unwrap_or_else(Uuid::new_v4)
}
