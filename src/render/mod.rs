mod block;
pub use block::*;

mod renderer;
pub use renderer::*;

mod html;
