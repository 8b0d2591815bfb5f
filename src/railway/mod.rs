//! The typed Railway API surface.
//!
//! This module provides [`RailwayClient`] — the seven project/service/
//! environment/variable operations — together with their typed inputs and
//! the records they return.

mod client;
mod inputs;
mod resources;

pub use client::RailwayClient;
pub use inputs::{
    ConnectServiceInput, CreateProjectInput, CreateServiceInput, ServiceSource, VariableScope,
    VariableUpsertInput,
};
pub use resources::{Environment, Project, Variable};
