//! # tick_app
//!
//! Resolve ticker symbols, fetch their quotes and print them once or on a timer

pub mod cli;
pub mod config_loader;
pub mod display;
pub mod driver;
pub mod errors;
pub mod formatter;
pub mod pipeline;
pub mod provider;
pub mod resolver;
pub mod time_utils;
pub mod tracing_setup;

pub use driver::Driver;
pub use driver::Mode;
pub use errors::Result;
pub use errors::TickError;
pub use pipeline::Pipeline;
pub use pipeline::PipelineSettings;
pub use provider::PriceProvider;
pub use resolver::WorkingSet;
