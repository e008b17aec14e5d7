use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("unknown behavior kind {0:?}: expected \"stepper\", \"follower\" or \"tryer\"")]
    UnknownKind(String),
}
