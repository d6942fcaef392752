mod is_valid;
mod pass_through;

pub use is_valid::{Defect, IsValid};
pub use pass_through::{find_pass_through_vertex, has_pass_through_vertex, PassThrough};
