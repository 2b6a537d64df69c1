use std::{
    borrow::Cow,
    collections::{BTreeSet, HashMap},
    sync::LazyLock,
};

use regex::{Captures, Regex};

use crate::template::TemplateError;

pub type TextReplacements<'a> = HashMap<&'a str, Cow<'a, str>>;

static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("Static regex is valid"));

/// A text template with f-string style `{name}` placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    variables: BTreeSet<String>,
}

impl PromptTemplate {
    pub fn from_fstring(template: impl Into<String>) -> Self {
        let template = template.into();
        let variables = VARIABLE_RE
            .captures_iter(&template)
            .map(|cap| cap[1].to_string())
            .collect();

        Self {
            template,
            variables,
        }
    }

    /// Insert variables into the template in a single pass, so that
    /// substituted values are never themselves scanned for placeholders.
    pub fn format(&self, input: &TextReplacements) -> Result<String, TemplateError> {
        self.validate_input(input)?;

        let content = VARIABLE_RE.replace_all(&self.template, |caps: &Captures| {
            match input.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        });

        Ok(content.into_owned())
    }

    /// Returns the required input variable names, sorted.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(String::as_str)
    }

    pub fn validate_input(&self, input: &TextReplacements) -> Result<(), TemplateError> {
        let missing_variables = self
            .variables()
            .filter(|variable| !input.contains_key(variable))
            .collect::<Vec<_>>();

        if !missing_variables.is_empty() {
            return Err(TemplateError::MissingVariable(missing_variables.join(", ")));
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! text_replacements {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::template::TextReplacements::from([$(($key, ::std::borrow::Cow::from($value))),*])
    };
}
