//! Stage trait and the pipeline that chains stages together.

mod pipeline;
mod step;

pub use pipeline::Pipeline;
pub use step::Stage;
