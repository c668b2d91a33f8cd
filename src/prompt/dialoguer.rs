//! Dialoguer-based host session
//!
//! Answers prompts on the terminal for drawings held in an
//! [`InMemoryDocument`]. Text prompts are read with `Input`; typing
//! `*cancel*` cancels them. Keyword and entity prompts use `Select`, where
//! Esc cancels.

use super::{interface::*, parser::InputParser};
use crate::{
    constants::{messages, CANCEL_TOKEN},
    document::{EntityStore, InMemoryDocument},
    entity::EntityHandle,
    error::Result,
    geometry::Point3d,
};
use dialoguer::{Input, Select};

/// Terminal implementation of all host session interfaces
pub struct ConsoleSession<'a> {
    document: &'a InMemoryDocument,
}

impl<'a> ConsoleSession<'a> {
    pub fn new(document: &'a InMemoryDocument) -> Self {
        Self { document }
    }

    /// Reads one line; `None` when the user cancels.
    fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        let line: String =
            Input::new().with_prompt(prompt.trim_end()).allow_empty(true).interact_text()?;
        if line.trim().eq_ignore_ascii_case(CANCEL_TOKEN) {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Asks until the input parses, is empty with a default, or is empty and
    /// allowed. The default comes with the text shown for it.
    fn ask<T: Clone>(
        &self,
        message: &str,
        allow_none: bool,
        default: Option<(T, String)>,
        invalid: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<PromptResult<T>> {
        let prompt = match &default {
            Some((_, shown)) => format!("{} <{shown}>", message.trim_end()),
            None => message.to_string(),
        };

        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(PromptResult::cancelled());
            };
            if line.trim().is_empty() {
                match (&default, allow_none) {
                    (Some((value, _)), _) => return Ok(PromptResult::ok(value.clone())),
                    (None, true) => return Ok(PromptResult::none()),
                    (None, false) => eprintln!("{}", messages::VALUE_REQUIRED),
                }
                continue;
            }
            match parse(&line) {
                Some(value) => return Ok(PromptResult::ok(value)),
                None => eprintln!("{invalid}"),
            }
        }
    }

    fn ask_point(
        &self,
        message: &str,
        allow_none: bool,
        base_point: Option<Point3d>,
    ) -> Result<PromptResult<Point3d>> {
        self.ask(message, allow_none, None, messages::INVALID_POINT, |input| {
            InputParser::parse_point(input, base_point)
        })
    }
}

impl NumericPrompter for ConsoleSession<'_> {
    fn prompt_angle(&self, options: &AngleOptions) -> Result<PromptResult<f64>> {
        // Shown in degrees, answered in radians.
        self.ask(
            &options.message,
            options.allow_none,
            options.default_value.map(|radians| (radians, radians.to_degrees().to_string())),
            messages::INVALID_NUMBER,
            InputParser::parse_angle,
        )
    }

    fn prompt_integer(&self, options: &IntegerOptions) -> Result<PromptResult<i32>> {
        self.ask(
            &options.message,
            options.allow_none,
            options.default_value.map(|value| (value, value.to_string())),
            messages::INVALID_INTEGER,
            InputParser::parse_integer,
        )
    }

    fn prompt_distance(&self, options: &DistanceOptions) -> Result<PromptResult<f64>> {
        self.ask(
            &options.message,
            options.allow_none,
            options.default_value.map(|value| (value, value.to_string())),
            messages::INVALID_NUMBER,
            |input| InputParser::parse_distance(input, options.base_point),
        )
    }
}

impl PointPrompter for ConsoleSession<'_> {
    fn prompt_point(&self, options: &PointOptions) -> Result<PromptResult<Point3d>> {
        self.ask_point(&options.message, options.allow_none, options.base_point)
    }

    fn prompt_corner(&self, options: &CornerOptions) -> Result<PromptResult<Point3d>> {
        eprintln!("Base point: {}", options.base_point);
        self.ask_point(&options.message, options.allow_none, Some(options.base_point))
    }
}

impl TextPrompter for ConsoleSession<'_> {
    fn prompt_string(&self, options: &StringOptions) -> Result<PromptResult<String>> {
        let prompt = match &options.default_value {
            Some(default) => format!("{} <{default}>", options.message.trim_end()),
            None => options.message.clone(),
        };
        let Some(line) = self.read_line(&prompt)? else {
            return Ok(PromptResult::cancelled());
        };

        let text = if options.allow_spaces {
            line.trim().to_string()
        } else {
            line.split_whitespace().next().unwrap_or("").to_string()
        };
        if text.is_empty() {
            return Ok(PromptResult::ok(options.default_value.clone().unwrap_or_default()));
        }
        Ok(PromptResult::ok(text))
    }

    fn prompt_keywords(&self, options: &KeywordOptions) -> Result<PromptResult<String>> {
        let selection = Select::new()
            .with_prompt(options.message.trim_end())
            .items(&keyword_items(options))
            .default(options.keywords.default_index.unwrap_or(0))
            .interact_opt()?;
        Ok(keyword_choice(options, selection))
    }
}

/// Local keyword names, plus an empty entry when the prompt allows no answer.
fn keyword_items(options: &KeywordOptions) -> Vec<&str> {
    let mut items: Vec<&str> = options.keywords.keywords.iter().map(|k| k.local.as_str()).collect();
    if options.allow_none {
        items.push(messages::NO_KEYWORD);
    }
    items
}

fn keyword_choice(options: &KeywordOptions, selection: Option<usize>) -> PromptResult<String> {
    match selection {
        Some(index) => match options.keywords.keywords.get(index) {
            Some(keyword) => PromptResult::ok(keyword.global.clone()),
            None => PromptResult::none(),
        },
        None => PromptResult::cancelled(),
    }
}

impl EntityPrompter for ConsoleSession<'_> {
    fn prompt_entity(&self, options: &EntityOptions) -> Result<PromptResult<EntityHandle>> {
        let records = self
            .document
            .handles()
            .into_iter()
            .filter_map(|handle| self.document.open_for_read(handle).ok())
            .collect::<Vec<_>>();
        if records.is_empty() {
            eprintln!("Nothing to select.");
            return Ok(PromptResult::error());
        }

        let items: Vec<String> = records
            .iter()
            .map(|r| format!("{} {} (layer {}, color {})", r.handle, r.class, r.layer, r.color))
            .collect();

        loop {
            let selection =
                Select::new().with_prompt(options.message().trim_end()).items(&items).interact_opt()?;
            let Some(index) = selection else {
                return Ok(PromptResult::cancelled());
            };
            let record = &records[index];
            if options.accepts(record.class) {
                return Ok(PromptResult::ok(record.handle));
            }
            eprintln!("{}", options.reject_message().unwrap_or("Invalid selection"));
        }
    }
}

impl SelectionHost for ConsoleSession<'_> {
    fn set_implied_selection(&self, handles: &[EntityHandle]) -> Result<()> {
        self.document.replace_implied_selection(handles);
        Ok(())
    }
}
