//! Normalized prompt requests and outcomes
//!
//! Every gateway operation builds one [`PromptRequest`], sends it through a
//! single dispatch point and reads the typed value back out of the
//! [`PromptOutcome`]. The accessors on `PromptOutcome` carry the sentinel
//! policy: the value when the prompt ended with `Ok`, a fixed per-type
//! stand-in otherwise.

use super::interface::{
    AngleOptions, CornerOptions, DistanceOptions, EntityOptions, IntegerOptions, PointOptions,
    PromptResult, PromptStatus, StringOptions,
};
use crate::{
    entity::{EntityClass, EntityHandle},
    error::{Error, Result},
    geometry::Point3d,
};

/// One prompt, tagged by input kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptRequest {
    Angle(AngleOptions),
    Integer(IntegerOptions),
    Distance(DistanceOptions),
    Point(PointOptions),
    Corner(CornerOptions),
    String(StringOptions),
    /// Keywords given as a list; formatted into a spec before it is sent.
    KeywordList {
        message: String,
        keywords: Vec<String>,
        default_index: usize,
        allow_none: bool,
    },
    /// Keywords given as a formatted spec string plus global names.
    KeywordSpec {
        message_and_keywords: String,
        global_keywords: String,
        allow_none: bool,
    },
    Entity(EntityOptions),
    /// Entity pick restricted to one class. The reject message is derived
    /// from `allowed_class` and installed before the filter.
    TypedEntity {
        message: String,
        allowed_class: EntityClass,
        exact_match: bool,
    },
}

impl PromptRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            PromptRequest::Angle(_) => "angle",
            PromptRequest::Integer(_) => "integer",
            PromptRequest::Distance(_) => "distance",
            PromptRequest::Point(_) => "point",
            PromptRequest::Corner(_) => "corner",
            PromptRequest::String(_) => "string",
            PromptRequest::KeywordList { .. } => "keyword list",
            PromptRequest::KeywordSpec { .. } => "keyword spec",
            PromptRequest::Entity(_) => "entity",
            PromptRequest::TypedEntity { .. } => "typed entity",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PromptRequest::Angle(o) => &o.message,
            PromptRequest::Integer(o) => &o.message,
            PromptRequest::Distance(o) => &o.message,
            PromptRequest::Point(o) => &o.message,
            PromptRequest::Corner(o) => &o.message,
            PromptRequest::String(o) => &o.message,
            PromptRequest::KeywordList { message, .. } => message,
            PromptRequest::KeywordSpec { message_and_keywords, .. } => message_and_keywords,
            PromptRequest::Entity(o) => o.message(),
            PromptRequest::TypedEntity { message, .. } => message,
        }
    }

    /// Checks the constraints shared by every kind: the message must not be blank.
    pub fn validate(&self) -> Result<()> {
        if self.message().trim().is_empty() {
            return Err(Error::InvalidRequest(format!("{} prompt without a message", self.kind())));
        }
        Ok(())
    }
}

/// Value carried by an outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptValue {
    Real(f64),
    Integer(i32),
    Text(String),
    Point(Point3d),
    Entity(EntityHandle),
    Unit,
}

/// Status and value of a dispatched request. The value is only meaningful
/// when the status is [`PromptStatus::Ok`].
#[derive(Debug, Clone, PartialEq)]
pub struct PromptOutcome {
    pub status: PromptStatus,
    pub value: PromptValue,
}

impl PromptOutcome {
    pub fn from_result<T>(result: PromptResult<T>, wrap: impl FnOnce(T) -> PromptValue) -> Self {
        match (result.status, result.value) {
            (PromptStatus::Ok, Some(value)) => Self { status: PromptStatus::Ok, value: wrap(value) },
            (PromptStatus::Ok, None) => {
                log::warn!("Host answered Ok without a value");
                Self::error()
            }
            (status, _) => Self::with_status(status),
        }
    }

    pub fn with_status(status: PromptStatus) -> Self {
        Self { status, value: PromptValue::Unit }
    }

    pub fn error() -> Self {
        Self::with_status(PromptStatus::Error)
    }

    pub fn is_ok(&self) -> bool {
        self.status == PromptStatus::Ok
    }

    /// Angle or distance; NaN without an answer.
    pub fn real(&self) -> f64 {
        match (self.status, &self.value) {
            (PromptStatus::Ok, PromptValue::Real(value)) => *value,
            _ => f64::NAN,
        }
    }

    /// Integer; zero without an answer.
    pub fn integer(&self) -> i32 {
        match (self.status, &self.value) {
            (PromptStatus::Ok, PromptValue::Integer(value)) => *value,
            _ => 0,
        }
    }

    /// Point; the origin without an answer.
    pub fn point(&self) -> Point3d {
        self.point_or(Point3d::ORIGIN)
    }

    /// Corner point; [`Point3d::NULL`] without an answer.
    pub fn corner(&self) -> Point3d {
        self.point_or(Point3d::NULL)
    }

    /// String or keyword; `None` without an answer.
    pub fn text(self) -> Option<String> {
        match (self.status, self.value) {
            (PromptStatus::Ok, PromptValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Entity handle; [`EntityHandle::NULL`] without an answer.
    pub fn entity(&self) -> EntityHandle {
        match (self.status, &self.value) {
            (PromptStatus::Ok, PromptValue::Entity(handle)) => *handle,
            _ => EntityHandle::NULL,
        }
    }

    fn point_or(&self, sentinel: Point3d) -> Point3d {
        match (self.status, &self.value) {
            (PromptStatus::Ok, PromptValue::Point(point)) => *point,
            _ => sentinel,
        }
    }
}
