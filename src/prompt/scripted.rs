//! Scripted host session
//!
//! Replays a queue of predefined answers instead of asking a user. Useful for
//! automation, testing, or replaying a recorded command. It behaves like an
//! interactive host where that is observable: answers the prompt would not
//! accept (an empty answer where none is allowed, an unknown keyword, an
//! entity of a filtered-out class) are reported and the next answer is taken,
//! as if the user had been asked again.

use super::interface::*;
use crate::{
    entity::{EntityClass, EntityHandle},
    error::{Error, Result},
    geometry::Point3d,
};
use serde::Deserialize;
use serde_json::Value;
use std::{cell::RefCell, collections::VecDeque, path::Path};

/// One scripted answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptedResponse {
    #[serde(default = "default_status")]
    pub status: PromptStatus,
    #[serde(default)]
    pub value: Value,
    /// Class of a picked entity, checked against the prompt's filter.
    #[serde(default)]
    pub class: Option<EntityClass>,
}

fn default_status() -> PromptStatus {
    PromptStatus::Ok
}

/// Answers in the order they are consumed.
#[derive(Debug, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub responses: Vec<ScriptedResponse>,
}

impl Script {
    /// Loads a script, as JSON when the extension is `.json`, YAML otherwise.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let script = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        Ok(script)
    }
}

/// Prompt as seen by the scripted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPrompt {
    pub kind: &'static str,
    pub message: String,
}

/// Host session that answers from a script.
#[derive(Debug, Default)]
pub struct ScriptedSession {
    responses: RefCell<VecDeque<ScriptedResponse>>,
    prompts: RefCell<Vec<RecordedPrompt>>,
    implied_selection: RefCell<Vec<EntityHandle>>,
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_script(script: Script) -> Self {
        let session = Self::new();
        session.responses.borrow_mut().extend(script.responses);
        session
    }

    /// Queue an answer given with [`PromptStatus::Ok`]
    pub fn with_ok(self, value: impl Into<Value>) -> Self {
        self.with_response(ScriptedResponse {
            status: PromptStatus::Ok,
            value: value.into(),
            class: None,
        })
    }

    /// Queue a prompt that ends without a value
    pub fn with_status(self, status: PromptStatus) -> Self {
        self.with_response(ScriptedResponse { status, value: Value::Null, class: None })
    }

    /// Queue an entity pick of a given class
    pub fn with_entity(self, handle: EntityHandle, class: EntityClass) -> Self {
        self.with_response(ScriptedResponse {
            status: PromptStatus::Ok,
            value: Value::from(handle.0),
            class: Some(class),
        })
    }

    pub fn with_response(self, response: ScriptedResponse) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    /// Every prompt received so far.
    pub fn prompts(&self) -> Vec<RecordedPrompt> {
        self.prompts.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.borrow().len()
    }

    pub fn implied_selection(&self) -> Vec<EntityHandle> {
        self.implied_selection.borrow().clone()
    }

    /// Takes answers until one is acceptable. `convert` returns `Ok(None)`
    /// for answers the prompt rejects.
    fn answer<T>(
        &self,
        kind: &'static str,
        message: &str,
        allow_none: bool,
        mut convert: impl FnMut(&ScriptedResponse) -> Result<Option<T>>,
    ) -> Result<PromptResult<T>> {
        self.prompts.borrow_mut().push(RecordedPrompt { kind, message: message.to_string() });

        loop {
            let response = self
                .responses
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| Error::ScriptExhausted { kind: kind.to_string() })?;

            match response.status {
                PromptStatus::Ok => match convert(&response)? {
                    Some(value) => return Ok(PromptResult::ok(value)),
                    None => log::info!("Scripted {kind} answer {} rejected", response.value),
                },
                PromptStatus::None if !allow_none => {
                    log::info!("Scripted {kind} prompt requires a value");
                }
                status => return Ok(PromptResult::with_status(status)),
            }
        }
    }
}

fn mismatch(kind: &str, value: &Value) -> Error {
    Error::ScriptMismatch { kind: kind.to_string(), found: value.to_string() }
}

fn as_real(kind: &str, response: &ScriptedResponse, default: Option<f64>) -> Result<f64> {
    match (&response.value, default) {
        (Value::Null, Some(default)) => Ok(default),
        (value, _) => value.as_f64().ok_or_else(|| mismatch(kind, value)),
    }
}

fn as_point(kind: &str, value: &Value) -> Result<Point3d> {
    let coords: Option<Vec<f64>> = match value {
        Value::Array(items) => items.iter().map(Value::as_f64).collect(),
        Value::Object(_) => {
            return serde_json::from_value(value.clone()).map_err(|_| mismatch(kind, value))
        }
        _ => None,
    };
    match coords.as_deref() {
        Some([x, y]) => Ok(Point3d::new(*x, *y, 0.0)),
        Some([x, y, z]) => Ok(Point3d::new(*x, *y, *z)),
        _ => Err(mismatch(kind, value)),
    }
}

impl NumericPrompter for ScriptedSession {
    fn prompt_angle(&self, options: &AngleOptions) -> Result<PromptResult<f64>> {
        self.answer("angle", &options.message, options.allow_none, |response| {
            as_real("angle", response, options.default_value).map(Some)
        })
    }

    fn prompt_integer(&self, options: &IntegerOptions) -> Result<PromptResult<i32>> {
        self.answer("integer", &options.message, options.allow_none, |response| {
            match (&response.value, options.default_value) {
                (Value::Null, Some(default)) => Ok(Some(default)),
                (value, _) => value
                    .as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .map(Some)
                    .ok_or_else(|| mismatch("integer", value)),
            }
        })
    }

    fn prompt_distance(&self, options: &DistanceOptions) -> Result<PromptResult<f64>> {
        self.answer("distance", &options.message, options.allow_none, |response| {
            let distance = match options.base_point {
                Some(base) if response.value.is_array() || response.value.is_object() => {
                    base.distance_to(&as_point("distance", &response.value)?)
                }
                _ => as_real("distance", response, options.default_value)?,
            };
            Ok((distance >= 0.0).then_some(distance))
        })
    }
}

impl PointPrompter for ScriptedSession {
    fn prompt_point(&self, options: &PointOptions) -> Result<PromptResult<Point3d>> {
        self.answer("point", &options.message, options.allow_none, |response| {
            as_point("point", &response.value).map(Some)
        })
    }

    fn prompt_corner(&self, options: &CornerOptions) -> Result<PromptResult<Point3d>> {
        self.answer("corner", &options.message, options.allow_none, |response| {
            as_point("corner", &response.value).map(Some)
        })
    }
}

impl TextPrompter for ScriptedSession {
    fn prompt_string(&self, options: &StringOptions) -> Result<PromptResult<String>> {
        self.answer("string", &options.message, true, |response| {
            let text = match &response.value {
                Value::Null => String::new(),
                Value::String(text) if options.allow_spaces => text.trim().to_string(),
                Value::String(text) => text.split_whitespace().next().unwrap_or("").to_string(),
                value => return Err(mismatch("string", value)),
            };
            if text.is_empty() {
                return Ok(Some(options.default_value.clone().unwrap_or_default()));
            }
            Ok(Some(text))
        })
    }

    fn prompt_keywords(&self, options: &KeywordOptions) -> Result<PromptResult<String>> {
        self.answer("keyword", &options.message, options.allow_none, |response| {
            let keyword = match &response.value {
                Value::Null => options.keywords.default_keyword(),
                Value::String(input) => options.keywords.resolve(input),
                value => return Err(mismatch("keyword", value)),
            };
            Ok(keyword.map(|k| k.global.clone()))
        })
    }
}

impl EntityPrompter for ScriptedSession {
    fn prompt_entity(&self, options: &EntityOptions) -> Result<PromptResult<EntityHandle>> {
        self.answer("entity", options.message(), false, |response| {
            let handle = response
                .value
                .as_u64()
                .map(EntityHandle)
                .ok_or_else(|| mismatch("entity", &response.value))?;
            match response.class {
                Some(class) if !options.accepts(class) => {
                    log::info!("{}", options.reject_message().unwrap_or("Invalid selection"));
                    Ok(None)
                }
                _ => Ok(Some(handle)),
            }
        })
    }
}

impl SelectionHost for ScriptedSession {
    fn set_implied_selection(&self, handles: &[EntityHandle]) -> Result<()> {
        *self.implied_selection.borrow_mut() = handles.to_vec();
        Ok(())
    }
}
