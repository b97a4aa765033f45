mod fragment;
mod render;
mod sink;

pub use fragment::Fragment;
pub use render::{Renderer, escape_html};
pub use sink::{FanoutSink, HtmlFileSink, MemorySink, OutputSink, TerminalSink};
