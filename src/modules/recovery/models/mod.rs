pub mod recovery_process;

pub use recovery_process::{
    CreateRecoveryRequest, ProcessType, RecoveryProcess, RecoveryProcessResponse,
    RecoveryProgressRequest, RecoveryStatus, RecoverySummary, UpdateRecoveryRequest,
};
