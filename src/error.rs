use thiserror::Error;

/// Failures reported by a `Renderer` implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RendererError {
    #[error("Shader program unavailable: {0}")]
    ProgramUnavailable(String),
    #[error("Off-screen render target is incomplete")]
    IncompleteTarget,
    #[error("Program has no uniform named {0}")]
    UnknownUniform(String),
    #[error("Renderer out of memory")]
    OutOfMemory,
    #[error("Renderer backend error: {0}")]
    Backend(String),
}

/// Lifecycle step of a transition instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Prepared,
    Failed,
    Finished,
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Prepared => "prepared",
            LifecycleState::Failed => "failed",
            LifecycleState::Finished => "finished",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum TransitionError {
    #[error(transparent)]
    Renderer(#[from] RendererError),
    #[error("Cannot {operation} a transition that is {state}")]
    InvalidState {
        operation: &'static str,
        state: LifecycleState,
    },
    #[error("Unknown transition: {0}")]
    UnknownTransition(String),
    #[error("Invalid transition config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
