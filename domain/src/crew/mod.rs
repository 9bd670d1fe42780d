//! Crew subdomain: agents, tasks, the plan that links them and run results.
//!
//! - [`factory::AgentFactory`] / [`factory::TaskFactory`] - template record → instance
//! - [`plan::CrewPlan`] - agent set + task DAG with explicit ids
//! - [`value_objects::CrewOutput`] - what a finished run returns

pub mod entities;
pub mod factory;
pub mod plan;
pub mod value_objects;
