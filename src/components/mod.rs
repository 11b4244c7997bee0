pub mod chart_blocks;
pub mod component_preview;
pub mod html_preview;
pub mod sidebar;
pub mod slide_preview;
