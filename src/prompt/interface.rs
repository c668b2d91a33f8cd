//! Pure interfaces to the host editor session
//!
//! This module defines the options each prompt kind sends to the host and the
//! traits a host session implements to answer them. These interfaces are
//! independent of any specific UI library implementation.

use crate::{
    constants::REJECT_MESSAGE_PREFIX,
    entity::{EntityClass, EntityHandle},
    error::{Error, Result},
    geometry::Point3d,
};
use serde::Deserialize;

/// How a prompt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStatus {
    /// The user gave a value.
    Ok,
    /// The user cancelled the prompt.
    Cancel,
    /// The host rejected the input or failed.
    Error,
    /// The user pressed enter without input where that is allowed.
    None,
}

/// Raw answer of the host: a status and, for [`PromptStatus::Ok`], a value.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptResult<T> {
    pub status: PromptStatus,
    pub value: Option<T>,
}

impl<T> PromptResult<T> {
    pub fn ok(value: T) -> Self {
        Self { status: PromptStatus::Ok, value: Some(value) }
    }

    pub fn cancelled() -> Self {
        Self { status: PromptStatus::Cancel, value: None }
    }

    pub fn none() -> Self {
        Self { status: PromptStatus::None, value: None }
    }

    pub fn error() -> Self {
        Self { status: PromptStatus::Error, value: None }
    }

    pub fn with_status(status: PromptStatus) -> Self {
        Self { status, value: None }
    }

    /// The value, only when the prompt ended with [`PromptStatus::Ok`].
    pub fn into_value(self) -> Option<T> {
        match self.status {
            PromptStatus::Ok => self.value,
            _ => None,
        }
    }
}

/// Options for angle prompts; the answer is in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleOptions {
    pub message: String,
    pub allow_none: bool,
    pub base_point: Option<Point3d>,
    pub default_value: Option<f64>,
}

/// Options for integer prompts
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerOptions {
    pub message: String,
    pub allow_none: bool,
    pub default_value: Option<i32>,
}

/// Options for distance prompts
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceOptions {
    pub message: String,
    pub allow_none: bool,
    pub base_point: Option<Point3d>,
    pub default_value: Option<f64>,
}

/// Options for point prompts
#[derive(Debug, Clone, PartialEq)]
pub struct PointOptions {
    pub message: String,
    pub allow_none: bool,
    pub base_point: Option<Point3d>,
}

/// Options for the opposite corner of a rectangle anchored at `base_point`
#[derive(Debug, Clone, PartialEq)]
pub struct CornerOptions {
    pub message: String,
    pub base_point: Point3d,
    pub allow_none: bool,
}

/// Options for free text prompts
#[derive(Debug, Clone, PartialEq)]
pub struct StringOptions {
    pub message: String,
    pub default_value: Option<String>,
    /// When false a space ends the input like enter does.
    pub allow_spaces: bool,
}

/// A keyword as typed (`global`) and as displayed (`local`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub global: String,
    pub local: String,
}

/// Ordered keywords with an optional default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordSet {
    pub keywords: Vec<Keyword>,
    pub default_index: Option<usize>,
}

impl KeywordSet {
    pub fn default_keyword(&self) -> Option<&Keyword> {
        self.default_index.and_then(|index| self.keywords.get(index))
    }

    /// Looks up typed input against global then local names, ignoring case.
    pub fn resolve(&self, input: &str) -> Option<&Keyword> {
        let input = input.trim();
        self.keywords
            .iter()
            .find(|k| k.global.eq_ignore_ascii_case(input))
            .or_else(|| self.keywords.iter().find(|k| k.local.eq_ignore_ascii_case(input)))
    }
}

/// Options for keyword prompts
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordOptions {
    pub message: String,
    pub keywords: KeywordSet,
    pub allow_none: bool,
}

/// Class filter entry of an entity prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowedClass {
    pub class: EntityClass,
    pub exact_match: bool,
}

/// Options for single entity picks.
///
/// Class filters can only be attached once a reject message is in place.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityOptions {
    message: String,
    reject_message: Option<String>,
    allowed_classes: Vec<AllowedClass>,
}

impl EntityOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), reject_message: None, allowed_classes: Vec::new() }
    }

    /// Options filtered to `class`, with the matching reject message already set.
    pub fn for_class(
        message: impl Into<String>,
        class: EntityClass,
        exact_match: bool,
    ) -> Result<Self> {
        let mut options = Self::new(message);
        options.set_reject_message(format!("{REJECT_MESSAGE_PREFIX}{}", class.name()));
        options.add_allowed_class(class, exact_match)?;
        Ok(options)
    }

    pub fn set_reject_message(&mut self, message: impl Into<String>) {
        self.reject_message = Some(message.into());
    }

    pub fn add_allowed_class(&mut self, class: EntityClass, exact_match: bool) -> Result<()> {
        if self.reject_message.is_none() {
            return Err(Error::RejectMessageRequired { class: class.name().to_string() });
        }
        self.allowed_classes.push(AllowedClass { class, exact_match });
        Ok(())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn reject_message(&self) -> Option<&str> {
        self.reject_message.as_deref()
    }

    pub fn allowed_classes(&self) -> &[AllowedClass] {
        &self.allowed_classes
    }

    /// True when no filter is attached or `class` passes one of them.
    pub fn accepts(&self, class: EntityClass) -> bool {
        self.allowed_classes.is_empty()
            || self.allowed_classes.iter().any(|a| class.matches(a.class, a.exact_match))
    }
}

/// Abstract interface for numeric prompts
pub trait NumericPrompter {
    fn prompt_angle(&self, options: &AngleOptions) -> Result<PromptResult<f64>>;
    fn prompt_integer(&self, options: &IntegerOptions) -> Result<PromptResult<i32>>;
    fn prompt_distance(&self, options: &DistanceOptions) -> Result<PromptResult<f64>>;
}

/// Abstract interface for point prompts
pub trait PointPrompter {
    fn prompt_point(&self, options: &PointOptions) -> Result<PromptResult<Point3d>>;
    fn prompt_corner(&self, options: &CornerOptions) -> Result<PromptResult<Point3d>>;
}

/// Abstract interface for string and keyword prompts
pub trait TextPrompter {
    fn prompt_string(&self, options: &StringOptions) -> Result<PromptResult<String>>;

    /// Answers with the global name of the chosen keyword.
    fn prompt_keywords(&self, options: &KeywordOptions) -> Result<PromptResult<String>>;
}

/// Abstract interface for entity picks
pub trait EntityPrompter {
    fn prompt_entity(&self, options: &EntityOptions) -> Result<PromptResult<EntityHandle>>;
}

/// Host-owned implied selection
pub trait SelectionHost {
    /// Replaces the implied selection with `handles`.
    fn set_implied_selection(&self, handles: &[EntityHandle]) -> Result<()>;
}

/// Combined interface of a host editor session
pub trait HostSession:
    NumericPrompter + PointPrompter + TextPrompter + EntityPrompter + SelectionHost
{
}

// Blanket implementation for any type that implements all session interfaces
impl<T> HostSession for T where
    T: NumericPrompter + PointPrompter + TextPrompter + EntityPrompter + SelectionHost
{
}

impl<T: NumericPrompter + ?Sized> NumericPrompter for &T {
    fn prompt_angle(&self, options: &AngleOptions) -> Result<PromptResult<f64>> {
        (**self).prompt_angle(options)
    }

    fn prompt_integer(&self, options: &IntegerOptions) -> Result<PromptResult<i32>> {
        (**self).prompt_integer(options)
    }

    fn prompt_distance(&self, options: &DistanceOptions) -> Result<PromptResult<f64>> {
        (**self).prompt_distance(options)
    }
}

impl<T: PointPrompter + ?Sized> PointPrompter for &T {
    fn prompt_point(&self, options: &PointOptions) -> Result<PromptResult<Point3d>> {
        (**self).prompt_point(options)
    }

    fn prompt_corner(&self, options: &CornerOptions) -> Result<PromptResult<Point3d>> {
        (**self).prompt_corner(options)
    }
}

impl<T: TextPrompter + ?Sized> TextPrompter for &T {
    fn prompt_string(&self, options: &StringOptions) -> Result<PromptResult<String>> {
        (**self).prompt_string(options)
    }

    fn prompt_keywords(&self, options: &KeywordOptions) -> Result<PromptResult<String>> {
        (**self).prompt_keywords(options)
    }
}

impl<T: EntityPrompter + ?Sized> EntityPrompter for &T {
    fn prompt_entity(&self, options: &EntityOptions) -> Result<PromptResult<EntityHandle>> {
        (**self).prompt_entity(options)
    }
}

impl<T: SelectionHost + ?Sized> SelectionHost for &T {
    fn set_implied_selection(&self, handles: &[EntityHandle]) -> Result<()> {
        (**self).set_implied_selection(handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_before_reject_message_is_refused() {
        let mut options = EntityOptions::new("Select a line");
        let err = options.add_allowed_class(EntityClass::Line, true).unwrap_err();
        assert!(matches!(err, Error::RejectMessageRequired { class } if class == "Line"));
        assert!(options.allowed_classes().is_empty());
    }

    #[test]
    fn filter_after_reject_message_is_attached() {
        let mut options = EntityOptions::new("Select a line");
        options.set_reject_message("Allowed type: Line");
        options.add_allowed_class(EntityClass::Line, true).unwrap();
        assert_eq!(
            options.allowed_classes(),
            &[AllowedClass { class: EntityClass::Line, exact_match: true }]
        );
        assert!(options.accepts(EntityClass::Line));
        assert!(!options.accepts(EntityClass::Circle));
    }

    #[test]
    fn for_class_names_the_class_in_the_reject_message() {
        let options = EntityOptions::for_class("Pick", EntityClass::Curve, false).unwrap();
        assert_eq!(options.reject_message(), Some("Allowed type: Curve"));
        assert!(options.accepts(EntityClass::Arc));
        assert!(!options.accepts(EntityClass::Hatch));
    }

    #[test]
    fn unfiltered_options_accept_everything() {
        let options = EntityOptions::new("Pick");
        assert!(options.accepts(EntityClass::Hatch));
        assert_eq!(options.reject_message(), None);
    }

    #[test]
    fn keyword_set_resolves_global_and_local_names() {
        let set = KeywordSet {
            keywords: vec![
                Keyword { global: "Line".into(), local: "Ligne".into() },
                Keyword { global: "Arc".into(), local: "Arc".into() },
            ],
            default_index: Some(1),
        };
        assert_eq!(set.resolve("line").map(|k| k.global.as_str()), Some("Line"));
        assert_eq!(set.resolve(" LIGNE ").map(|k| k.global.as_str()), Some("Line"));
        assert_eq!(set.resolve("circle"), None);
        assert_eq!(set.default_keyword().map(|k| k.global.as_str()), Some("Arc"));
    }

    #[test]
    fn prompt_result_value_only_for_ok() {
        assert_eq!(PromptResult::ok(3).into_value(), Some(3));
        assert_eq!(PromptResult::<i32>::cancelled().into_value(), None);
        let odd = PromptResult { status: PromptStatus::Error, value: Some(5) };
        assert_eq!(odd.into_value(), None);
    }
}
