//! Charts module - colors, configuration and SVG rendering

mod color;
mod config;
mod renderer;

pub use color::{Rgba, PIE_PALETTE, RESPONSIBILITY_PURPLE, SALARY_TEAL, SKILLS_BLUE};
pub use config::{ChartConfig, ChartStyle};
pub use renderer::{ChartRenderer, RenderError};
