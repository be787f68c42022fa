pub mod order;
pub mod pipeline;
pub mod scan;
pub mod stride;
