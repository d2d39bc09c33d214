//! Engine state, analysis loop and status server

pub mod context;
pub mod http;
pub mod runtime;
pub mod scheduler;

pub use context::EngineContext;
pub use http::{create_router, start_server, AppState};
pub use runtime::{
    load_context, AnalysisRuntime, CycleReport, CycleState, EngineStatus, InstrumentOutcome,
    SharedStatus,
};
pub use scheduler::{CycleScheduler, StopHandle, Tick};
