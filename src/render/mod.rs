pub mod gradient;
pub mod path;
pub mod pipeline;
pub mod svg;
