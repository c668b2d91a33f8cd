//! Gateway between editor commands and the host session
//!
//! Each operation builds one [`PromptRequest`], hands it to [`PromptGateway::dispatch`]
//! (the only place that talks to the host) and normalizes the outcome into a
//! value or a sentinel. Nothing here returns an error: cancelled, empty,
//! rejected and failed prompts all come back as the sentinel of their type.

use super::{
    interface::{
        AngleOptions, CornerOptions, DistanceOptions, EntityOptions, HostSession, IntegerOptions,
        KeywordOptions, PointOptions, PromptStatus, StringOptions,
    },
    keywords::{format_keyword_spec, parse_keyword_spec},
    request::{PromptOutcome, PromptRequest, PromptValue},
};
use crate::{
    document::EntityStore,
    entity::{EntityClass, EntityHandle, EntityRecord},
    error::Result,
    geometry::Point3d,
};

/// Typed prompts and selection state on top of a host session and an entity store.
pub struct PromptGateway<H: HostSession, S: EntityStore> {
    session: H,
    store: S,
}

impl<H: HostSession, S: EntityStore> PromptGateway<H, S> {
    pub fn new(session: H, store: S) -> Self {
        Self { session, store }
    }

    pub fn session(&self) -> &H {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sends one request to the host and returns its outcome.
    ///
    /// Invalid requests and host failures are logged and reported with
    /// [`PromptStatus::Error`].
    pub fn dispatch(&self, request: &PromptRequest) -> PromptOutcome {
        if let Err(e) = request.validate() {
            log::warn!("{e}");
            return PromptOutcome::error();
        }

        let outcome = self.send(request).unwrap_or_else(|e| {
            log::warn!("The {} prompt failed: {e}", request.kind());
            PromptOutcome::error()
        });
        log::debug!("The {} prompt ended with {:?}", request.kind(), outcome.status);
        outcome
    }

    /// Angle in radians, NaN without an answer.
    pub fn get_angle(&self, message: &str) -> f64 {
        self.dispatch(&PromptRequest::Angle(AngleOptions {
            message: message.to_string(),
            allow_none: false,
            base_point: None,
            default_value: None,
        }))
        .real()
    }

    /// Integer, zero without an answer. Empty input is never accepted.
    pub fn get_integer(&self, message: &str) -> i32 {
        self.dispatch(&PromptRequest::Integer(IntegerOptions {
            message: message.to_string(),
            allow_none: false,
            default_value: None,
        }))
        .integer()
    }

    /// Distance, NaN without an answer.
    pub fn get_distance(&self, message: &str) -> f64 {
        self.dispatch(&PromptRequest::Distance(DistanceOptions {
            message: message.to_string(),
            allow_none: false,
            base_point: None,
            default_value: None,
        }))
        .real()
    }

    /// Point, [`Point3d::ORIGIN`] without an answer.
    pub fn get_point(&self, message: &str, allow_none: bool) -> Point3d {
        self.dispatch(&PromptRequest::Point(PointOptions {
            message: message.to_string(),
            allow_none,
            base_point: None,
        }))
        .point()
    }

    /// String, possibly the default, `None` without an answer.
    pub fn get_string(
        &self,
        message: &str,
        default_value: Option<&str>,
        allow_spaces: bool,
    ) -> Option<String> {
        self.dispatch(&PromptRequest::String(StringOptions {
            message: message.to_string(),
            default_value: default_value.map(str::to_string),
            allow_spaces,
        }))
        .text()
    }

    /// Opposite corner of a rectangle anchored at `base_point`,
    /// [`Point3d::NULL`] without an answer.
    pub fn get_corner(&self, message: &str, base_point: Point3d) -> Point3d {
        self.dispatch(&PromptRequest::Corner(CornerOptions {
            message: message.to_string(),
            base_point,
            allow_none: true,
        }))
        .corner()
    }

    /// Keyword chosen from a formatted spec such as `"Mode [A/B] <A>: "`
    /// with global names `"A B"`.
    pub fn get_keywords_from_spec(
        &self,
        message_and_keywords: &str,
        global_keywords: &str,
        allow_none: bool,
    ) -> Option<String> {
        self.dispatch(&PromptRequest::KeywordSpec {
            message_and_keywords: message_and_keywords.to_string(),
            global_keywords: global_keywords.to_string(),
            allow_none,
        })
        .text()
    }

    /// Keyword chosen from `keywords`, offering `keywords[default_index]` as default.
    pub fn get_keywords(
        &self,
        message: &str,
        keywords: &[&str],
        default_index: usize,
        allow_none: bool,
    ) -> Option<String> {
        self.dispatch(&PromptRequest::KeywordList {
            message: message.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            default_index,
            allow_none,
        })
        .text()
    }

    /// Picked entity opened for read, `None` without an answer or when the
    /// handle no longer resolves.
    pub fn get_entity(&self, message: &str) -> Option<EntityRecord> {
        let handle = self.get_entity_id(message);
        if handle.is_null() {
            return None;
        }
        match self.store.open_for_read(handle) {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("{e}");
                None
            }
        }
    }

    /// Picked entity handle, [`EntityHandle::NULL`] without an answer.
    pub fn get_entity_id(&self, message: &str) -> EntityHandle {
        self.dispatch(&PromptRequest::Entity(EntityOptions::new(message))).entity()
    }

    /// Picked entity handle restricted to `allowed_class`,
    /// [`EntityHandle::NULL`] without an answer.
    pub fn get_entity_id_of_type(
        &self,
        message: &str,
        allowed_class: EntityClass,
        exact_match: bool,
    ) -> EntityHandle {
        self.dispatch(&PromptRequest::TypedEntity {
            message: message.to_string(),
            allowed_class,
            exact_match,
        })
        .entity()
    }

    /// Replaces the host's implied selection. An empty slice clears it.
    pub fn set_pick_set(&self, handles: &[EntityHandle]) {
        if let Err(e) = self.session.set_implied_selection(handles) {
            log::warn!("Failed to set the implied selection: {e}");
        }
    }

    /// Highlights every resolvable handle; returns how many were highlighted.
    pub fn highlight_objects<I>(&self, handles: I) -> usize
    where
        I: IntoIterator<Item = EntityHandle>,
    {
        self.toggle_highlight(handles, true)
    }

    /// Removes the highlight of every resolvable handle; returns how many changed.
    pub fn unhighlight_objects<I>(&self, handles: I) -> usize
    where
        I: IntoIterator<Item = EntityHandle>,
    {
        self.toggle_highlight(handles, false)
    }

    fn toggle_highlight<I>(&self, handles: I, highlighted: bool) -> usize
    where
        I: IntoIterator<Item = EntityHandle>,
    {
        handles
            .into_iter()
            .filter(|&handle| match self.store.set_highlight(handle, highlighted) {
                Ok(()) => true,
                Err(e) => {
                    log::debug!("Skipping {handle}: {e}");
                    false
                }
            })
            .count()
    }

    fn send(&self, request: &PromptRequest) -> Result<PromptOutcome> {
        let outcome = match request {
            PromptRequest::Angle(options) => {
                PromptOutcome::from_result(self.session.prompt_angle(options)?, PromptValue::Real)
            }
            PromptRequest::Integer(options) => PromptOutcome::from_result(
                self.session.prompt_integer(options)?,
                PromptValue::Integer,
            ),
            PromptRequest::Distance(options) => PromptOutcome::from_result(
                self.session.prompt_distance(options)?,
                PromptValue::Real,
            ),
            PromptRequest::Point(options) => {
                PromptOutcome::from_result(self.session.prompt_point(options)?, PromptValue::Point)
            }
            PromptRequest::Corner(options) => PromptOutcome::from_result(
                self.session.prompt_corner(options)?,
                PromptValue::Point,
            ),
            PromptRequest::String(options) => {
                PromptOutcome::from_result(self.session.prompt_string(options)?, PromptValue::Text)
            }
            PromptRequest::KeywordList { message, keywords, default_index, allow_none } => {
                let (spec, globals) = format_keyword_spec(message, keywords, *default_index)?;
                self.send_keyword_spec(&spec, &globals, *allow_none)?
            }
            PromptRequest::KeywordSpec { message_and_keywords, global_keywords, allow_none } => {
                self.send_keyword_spec(message_and_keywords, global_keywords, *allow_none)?
            }
            PromptRequest::Entity(options) => {
                PromptOutcome::from_result(self.session.prompt_entity(options)?, PromptValue::Entity)
            }
            PromptRequest::TypedEntity { message, allowed_class, exact_match } => {
                let options = EntityOptions::for_class(message.as_str(), *allowed_class, *exact_match)?;
                PromptOutcome::from_result(self.session.prompt_entity(&options)?, PromptValue::Entity)
            }
        };
        Ok(outcome)
    }

    fn send_keyword_spec(
        &self,
        message_and_keywords: &str,
        global_keywords: &str,
        allow_none: bool,
    ) -> Result<PromptOutcome> {
        let (message, keywords) = parse_keyword_spec(message_and_keywords, global_keywords)?;
        let options = KeywordOptions { message, keywords, allow_none };
        let result = self.session.prompt_keywords(&options)?;

        // Hosts answer with the global name; anything else is not one of ours.
        if result.status == PromptStatus::Ok {
            if let Some(answer) = result.value.as_deref() {
                if !options.keywords.keywords.iter().any(|k| k.global == answer) {
                    log::warn!("Host answered with unknown keyword '{answer}'");
                    return Ok(PromptOutcome::error());
                }
            }
        }
        Ok(PromptOutcome::from_result(result, PromptValue::Text))
    }
}
