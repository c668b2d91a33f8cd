use crate::entity::EntityHandle;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Prompt failed. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("No drawing file found in '{dir}'. Tried: {config_files}.")]
    ConfigNotFound { dir: String, config_files: String },

    #[error("Invalid drawing configuration: {0}.")]
    ConfigValidation(String),

    /// A prompt request violates its input constraints.
    #[error("Invalid prompt request: {0}.")]
    InvalidRequest(String),

    /// An allowed-class filter was attached before the reject message.
    #[error("Reject message must be set before allowing class '{class}'.")]
    RejectMessageRequired { class: String },

    #[error("Entity {0} cannot be resolved.")]
    HandleUnresolved(EntityHandle),

    #[error("Document is already locked.")]
    DocumentLocked,

    #[error("Layer '{0}' already exists.")]
    LayerExists(String),

    #[error("Layer '{0}' does not exist.")]
    LayerNotFound(String),

    #[error("Script has no response left for the {kind} prompt.")]
    ScriptExhausted { kind: String },

    #[error("Scripted response for the {kind} prompt is not a valid value: {found}.")]
    ScriptMismatch { kind: String, found: String },

    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
