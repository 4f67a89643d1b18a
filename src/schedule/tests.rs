mod allocation;
pub(crate) mod utils;
