mod dgml_renderer;
mod dot_renderer;
mod text_renderer;

pub use dgml_renderer::DgmlRenderer;
pub use dot_renderer::DotRenderer;
pub use text_renderer::PlainTextRenderer;
