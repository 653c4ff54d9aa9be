pub mod fit;
pub mod gpu_context;
pub mod painter;

pub use fit::ScreenFit;
pub use gpu_context::GpuContext;
pub use painter::{paint_scene, PaintOptions};
