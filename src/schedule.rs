pub mod advisor;
pub mod allocation;
pub mod feasibility;
#[allow(clippy::module_inception)]
pub mod schedule;

#[cfg(test)]
pub(crate) mod tests;
