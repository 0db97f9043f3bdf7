/// Failure inside a simulation tick. These indicate a defect, not a game condition.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    #[error("match entity lookup failed: {0}")]
    Entity(#[from] hecs::ComponentError),

    #[error("{what} left the finite range")]
    NonFinite { what: &'static str },
}
