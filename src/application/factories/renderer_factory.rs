use crate::adapters::outbound::renderers::{DgmlRenderer, DotRenderer, PlainTextRenderer};
use crate::application::dto::GraphFormat;
use crate::ports::outbound::GraphRenderer;

/// Factory for creating graph renderers
///
/// Selects the infrastructure adapter that spells a GraphModel in the
/// requested grammar.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for the specified output format
    ///
    /// # Examples
    /// ```
    /// use depend_info::application::dto::GraphFormat;
    /// use depend_info::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(GraphFormat::Dot);
    /// ```
    pub fn create(format: GraphFormat) -> Box<dyn GraphRenderer> {
        match format {
            GraphFormat::PlainText => Box::new(PlainTextRenderer::new()),
            GraphFormat::Dot => Box::new(DotRenderer::new()),
            GraphFormat::Dgml => Box::new(DgmlRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use depend_info::application::dto::GraphFormat;
    /// use depend_info::application::factories::RendererFactory;
    ///
    /// let message = RendererFactory::progress_message(GraphFormat::Dgml);
    /// assert_eq!(message, "📝 Rendering DGML graph...");
    /// ```
    pub fn progress_message(format: GraphFormat) -> &'static str {
        match format {
            GraphFormat::PlainText => "📝 Rendering dependency list...",
            GraphFormat::Dot => "📝 Rendering DOT graph...",
            GraphFormat::Dgml => "📝 Rendering DGML graph...",
        }
    }
}
