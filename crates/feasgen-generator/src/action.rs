//! The driver action vocabulary emitted by the step selector and
//! consumed by touch application.

/// One step of the conditional feasibility generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Batch-apply every free void touch.
    TakeFreeVoid,
    /// Batch-apply every free solid touch.
    TakeFreeSolid,
    /// Apply a single forced void touch at `(i, j)`.
    ResolveVoid(u32, u32),
    /// Apply a single forced solid touch at `(i, j)`.
    ResolveSolid(u32, u32),
    /// Apply a single ordinary valid void touch at `(i, j)`.
    TouchVoid(u32, u32),
    /// Apply a single ordinary valid solid touch at `(i, j)`.
    TouchSolid(u32, u32),
}
