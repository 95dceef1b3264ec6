pub mod error;
pub mod progress;
pub mod radar;
pub mod text;
pub mod view;

pub use error::RenderError;
pub use progress::{progress_bar, MAX_BAR_WIDTH};
pub use radar::{Point, RadarAxis, RadarChart};
pub use text::{render_markdown, render_text};
pub use view::{render, OutputFormat, RenderedView};
