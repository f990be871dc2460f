use std::fmt;

/// Lifecycle of one upload:
/// `Idle → Presigning → (SingleUploading | MultipartUploading) → Completing → Done`,
/// with `Failed` reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Presigning,
    SingleUploading,
    MultipartUploading,
    Completing,
    Done,
    Failed,
}

impl UploadState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Idle, Self::Presigning)
            | (Self::Presigning, Self::SingleUploading | Self::MultipartUploading)
            | (Self::SingleUploading | Self::MultipartUploading, Self::Completing)
            | (Self::Completing, Self::Done) => true,
            (current, Self::Failed) => !current.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Presigning => "presigning",
            Self::SingleUploading => "single uploading",
            Self::MultipartUploading => "multipart uploading",
            Self::Completing => "completing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// Holds the current state; illegal transitions are refused and logged.
#[derive(Debug)]
pub struct StateMachine {
    state: UploadState,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self {
            state: UploadState::Idle,
        }
    }
}

impl StateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> UploadState {
        self.state
    }

    /// Returns `false` and keeps the current state if the transition is illegal.
    pub fn advance(&mut self, next: UploadState) -> bool {
        if self.state.can_transition_to(next) {
            log::debug!("upload state: {} -> {next}", self.state);
            self.state = next;
            true
        } else {
            log::error!("illegal upload state transition: {} -> {next}", self.state);
            false
        }
    }
}
