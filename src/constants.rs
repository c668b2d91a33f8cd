//! Constants used throughout cadprompt

/// Drawing file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["cadprompt.yaml", "cadprompt.yml", "cadprompt.json"];

/// Layer that every drawing owns
pub const DEFAULT_LAYER: &str = "0";

/// Color index meaning "take the color of the layer"
pub const COLOR_BY_LAYER: u16 = 256;

/// Default color index for new layers and entities (white/black)
pub const DEFAULT_COLOR: u16 = 7;

/// Color applied by the `color2` command (red)
pub const ENTITY_COLOR: u16 = 1;

/// Name of the layer created by the `layer1` command
pub const NEW_LAYER_NAME: &str = "luck";

/// Group every built-in command is registered under
pub const COMMAND_GROUP: &str = "MyGroup";

/// Token that cancels a text prompt in the console session
pub const CANCEL_TOKEN: &str = "*cancel*";

/// Prefix of the reject message installed by typed entity prompts
pub const REJECT_MESSAGE_PREFIX: &str = "Allowed type: ";

/// Console messages
pub mod messages {
    pub const INVALID_POINT: &str = "Invalid point.";
    pub const INVALID_NUMBER: &str = "Requires numeric value.";
    pub const INVALID_INTEGER: &str = "Requires an integer value.";
    pub const VALUE_REQUIRED: &str = "A value is required.";
    /// Keyword menu entry that answers with nothing
    pub const NO_KEYWORD: &str = "(none)";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
