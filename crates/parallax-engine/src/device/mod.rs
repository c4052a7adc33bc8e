//! GPU device + surface management.
//!
//! One [`Gpu`] per window: it owns the device, queue and configured surface,
//! hands out [`GpuFrame`]s, and maps surface errors to a [`SurfaceErrorAction`].

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
