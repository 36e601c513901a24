//! Template parameters: `key=value` parsing, typed coercion, and range checks

use std::collections::HashMap;
use std::fmt;

use inkplan_layout::TemplateLayoutOverrides;

use super::TemplateSpec;
use super::renderers::NOTES_FILL_TYPES;
use crate::error::{RenderError, Result};

const BOOL_TRUE: [&str; 4] = ["1", "true", "yes", "on"];
const BOOL_FALSE: [&str; 4] = ["0", "false", "no", "off"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Float,
    Int,
    Bool,
    Str,
}

impl ParamType {
    pub fn name(&self) -> &'static str {
        match self {
            ParamType::Float => "float",
            ParamType::Int => "int",
            ParamType::Bool => "bool",
            ParamType::Str => "str",
        }
    }
}

/// A coerced parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Str(String),
}

impl ParamValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Str(v) => f.write_str(v),
        }
    }
}

/// Validation rules for one template parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateParamSpec {
    pub key: &'static str,
    pub value_type: ParamType,
    pub description: &'static str,
    pub required: bool,
    /// Raw default, coerced like a user value
    pub default: Option<&'static str>,
    pub choices: &'static [&'static str],
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub aliases: &'static [&'static str],
}

impl TemplateParamSpec {
    const fn new(key: &'static str, value_type: ParamType, description: &'static str) -> Self {
        Self {
            key,
            value_type,
            description,
            required: false,
            default: None,
            choices: &[],
            min_value: None,
            max_value: None,
            aliases: &[],
        }
    }

    const fn min(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    const fn max(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// The canonical key followed by its aliases
    pub fn all_keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.key).chain(self.aliases.iter().copied())
    }

    /// Constraint summary for help output, e.g. `min=1; max=24`
    pub fn constraints(&self) -> String {
        let mut parts = Vec::new();
        if !self.choices.is_empty() {
            parts.push(format!("choices={}", self.choices.join(",")));
        }
        if let Some(min) = self.min_value {
            parts.push(format!("min={min}"));
        }
        if let Some(max) = self.max_value {
            parts.push(format!("max={max}"));
        }
        if let Some(default) = self.default {
            parts.push(format!("default={default}"));
        }
        if self.required {
            parts.push("required".to_string());
        }
        parts.join("; ")
    }
}

/// Layout overrides and fill type accepted by every built-in template
pub static COMMON_PARAMS: [TemplateParamSpec; 11] = [
    TemplateParamSpec::new("margin_mm", ParamType::Float, "Page margin in millimeters.").min(0.000001),
    TemplateParamSpec::new(
        "header_height_mm",
        ParamType::Float,
        "Header band height in millimeters.",
    )
    .min(0.0),
    TemplateParamSpec::new(
        "line_spacing_mm",
        ParamType::Float,
        "Writing line spacing in millimeters.",
    )
    .min(0.000001),
    TemplateParamSpec::new("grid_spacing_mm", ParamType::Float, "Grid spacing in millimeters.")
        .min(0.000001),
    TemplateParamSpec::new("dot_spacing_mm", ParamType::Float, "Dot spacing in millimeters.")
        .min(0.000001),
    TemplateParamSpec::new("dot_radius_mm", ParamType::Float, "Dot radius in millimeters.")
        .min(0.000001),
    TemplateParamSpec::new("checklist_rows", ParamType::Int, "Checklist row count.").min(1.0),
    TemplateParamSpec::new(
        "priorities_rows",
        ParamType::Int,
        "Priority row count for daily glance.",
    )
    .min(1.0),
    TemplateParamSpec::new(
        "schedule_start_hour",
        ParamType::Int,
        "Schedule start hour in 24h format.",
    )
    .min(0.0)
    .max(23.0),
    TemplateParamSpec::new(
        "schedule_end_hour",
        ParamType::Int,
        "Schedule end hour in 24h format.",
    )
    .min(1.0)
    .max(24.0),
    TemplateParamSpec {
        default: Some("lines"),
        choices: &NOTES_FILL_TYPES,
        ..TemplateParamSpec::new("notes_fill", ParamType::Str, "Notes fill type.")
    },
];

// =============================================================================
// Parsing
// =============================================================================

/// Parse repeatable `key=value` pairs.
///
/// Keys and values are trimmed. A repeated key replaces the earlier value
/// but keeps its position.
pub fn parse_param_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Vec<(String, String)>> {
    let mut parsed: Vec<(String, String)> = Vec::new();
    for raw in pairs {
        let raw = raw.as_ref();
        let Some((key, value)) = raw.split_once('=') else {
            return Err(RenderError::Config(format!(
                "invalid --param '{raw}'. Expected key=value."
            )));
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() {
            return Err(RenderError::Config(format!(
                "invalid --param '{raw}'. Key cannot be empty."
            )));
        }
        match parsed.iter_mut().find(|(existing, _)| existing == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => parsed.push((key.to_string(), value.to_string())),
        }
    }
    Ok(parsed)
}

fn invalid_value(value: impl fmt::Display, key: &str, template_id: &str, detail: &str) -> RenderError {
    RenderError::Template(format!(
        "invalid value '{value}' for '{key}' in template '{template_id}'. {detail}"
    ))
}

/// Coerce a raw string to the parameter's type and check its constraints
fn coerce_value(param: &TemplateParamSpec, raw: &str, template_id: &str) -> Result<ParamValue> {
    let key = param.key;
    let value = match param.value_type {
        ParamType::Bool => {
            let normalized = raw.trim().to_ascii_lowercase();
            if BOOL_TRUE.contains(&normalized.as_str()) {
                ParamValue::Bool(true)
            } else if BOOL_FALSE.contains(&normalized.as_str()) {
                ParamValue::Bool(false)
            } else {
                return Err(invalid_value(
                    raw,
                    key,
                    template_id,
                    "Expected a boolean (true/false).",
                ));
            }
        }
        ParamType::Int => raw
            .trim()
            .parse::<i64>()
            .map(ParamValue::Int)
            .map_err(|_| invalid_value(raw, key, template_id, "Expected an integer."))?,
        ParamType::Float => match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => ParamValue::Float(v),
            _ => return Err(invalid_value(raw, key, template_id, "Expected a float.")),
        },
        ParamType::Str => ParamValue::Str(raw.to_string()),
    };

    if !param.choices.is_empty() {
        let text = value.to_string();
        if !param.choices.contains(&text.as_str()) {
            let detail = format!("Valid values: {}.", param.choices.join(", "));
            return Err(invalid_value(&value, key, template_id, &detail));
        }
    }
    if let Some(number) = value.as_number() {
        if let Some(min) = param.min_value.filter(|min| number < *min) {
            let detail = format!("Minimum allowed value is {min}.");
            return Err(invalid_value(&value, key, template_id, &detail));
        }
        if let Some(max) = param.max_value.filter(|max| number > *max) {
            let detail = format!("Maximum allowed value is {max}.");
            return Err(invalid_value(&value, key, template_id, &detail));
        }
    }
    Ok(value)
}

// =============================================================================
// Resolution
// =============================================================================

/// Parameters resolved for one template, keyed by canonical key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateParams {
    values: HashMap<&'static str, ParamValue>,
}

impl TemplateParams {
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(ParamValue::Float(v)) => Some(*v),
            Some(ParamValue::Int(v)) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(ParamValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ParamValue::Str(v)) => Some(v),
            _ => None,
        }
    }

    fn count<T: TryFrom<i64>>(&self, key: &str) -> Result<Option<T>> {
        self.int(key)
            .map(|v| {
                T::try_from(v).map_err(|_| {
                    RenderError::Template(format!("value {v} for '{key}' is out of range."))
                })
            })
            .transpose()
    }

    /// Layout fields set by these parameters
    pub fn layout_overrides(&self) -> Result<TemplateLayoutOverrides> {
        Ok(TemplateLayoutOverrides {
            margin_mm: self.float("margin_mm"),
            header_height_mm: self.float("header_height_mm"),
            line_spacing_mm: self.float("line_spacing_mm"),
            grid_spacing_mm: self.float("grid_spacing_mm"),
            dot_spacing_mm: self.float("dot_spacing_mm"),
            dot_radius_mm: self.float("dot_radius_mm"),
            checklist_rows: self.count("checklist_rows")?,
            priorities_rows: self.count("priorities_rows")?,
            schedule_start_hour: self.count("schedule_start_hour")?,
            schedule_end_hour: self.count("schedule_end_hour")?,
        })
    }
}

/// Apply defaults, then coerce each raw `(key, value)` pair.
///
/// Keys may be canonical keys or aliases. Unknown keys and missing
/// required parameters fail with the template id in the message.
pub fn resolve_template_params(
    spec: &TemplateSpec,
    raw_params: &[(String, String)],
) -> Result<TemplateParams> {
    let mut indexed: HashMap<&'static str, &TemplateParamSpec> = HashMap::new();
    for param in spec.params {
        for key in param.all_keys() {
            if indexed.insert(key, param).is_some() {
                return Err(RenderError::Template(format!(
                    "duplicate parameter key mapping '{key}' in template '{}'.",
                    spec.id
                )));
            }
        }
    }

    let mut resolved = TemplateParams::default();
    for param in spec.params {
        if let Some(default) = param.default {
            let value = coerce_value(param, default, spec.id)?;
            resolved.values.insert(param.key, value);
        }
    }

    for (key, raw) in raw_params {
        let Some(param) = indexed.get(key.as_str()) else {
            let valid: Vec<&str> = spec.params.iter().map(|p| p.key).collect();
            return Err(RenderError::Template(format!(
                "unknown parameter '{key}' for template '{}'. Supported parameters: {}.",
                spec.id,
                valid.join(", ")
            )));
        };
        let value = coerce_value(param, raw, spec.id)?;
        resolved.values.insert(param.key, value);
    }

    let mut missing: Vec<&str> = spec
        .params
        .iter()
        .filter(|p| p.required && !resolved.values.contains_key(p.key))
        .map(|p| p.key)
        .collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(RenderError::Template(format!(
            "missing required parameter(s) for template '{}': {}.",
            spec.id,
            missing.join(", ")
        )));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_with(params: &'static [TemplateParamSpec]) -> TemplateSpec {
        TemplateSpec {
            params,
            ..*super::super::template_spec("lines").unwrap()
        }
    }

    #[test]
    fn test_bool_coercion() {
        let param = TemplateParamSpec::new("flag", ParamType::Bool, "A flag.");
        assert_eq!(coerce_value(&param, " Yes ", "t").unwrap(), ParamValue::Bool(true));
        assert_eq!(coerce_value(&param, "off", "t").unwrap(), ParamValue::Bool(false));
        let err = coerce_value(&param, "maybe", "t").unwrap_err().to_string();
        assert!(err.contains("Expected a boolean (true/false)."));
    }

    #[test]
    fn test_float_rejects_non_finite() {
        let param = TemplateParamSpec::new("x", ParamType::Float, "X.");
        assert!(coerce_value(&param, "inf", "t").is_err());
        assert!(coerce_value(&param, "NaN", "t").is_err());
        assert_eq!(coerce_value(&param, "2.5", "t").unwrap(), ParamValue::Float(2.5));
    }

    #[test]
    fn test_required_params_reported_sorted() {
        static REQUIRED: [TemplateParamSpec; 2] = [
            TemplateParamSpec {
                required: true,
                ..TemplateParamSpec::new("zeta", ParamType::Int, "Z.")
            },
            TemplateParamSpec {
                required: true,
                ..TemplateParamSpec::new("alpha", ParamType::Int, "A.")
            },
        ];
        let err = resolve_template_params(&spec_with(&REQUIRED), &[])
            .unwrap_err()
            .to_string();
        assert_eq!(
            err,
            "missing required parameter(s) for template 'lines': alpha, zeta."
        );
    }

    #[test]
    fn test_alias_resolves_to_canonical_key() {
        static ALIASED: [TemplateParamSpec; 1] = [TemplateParamSpec {
            aliases: &["rows"],
            ..TemplateParamSpec::new("checklist_rows", ParamType::Int, "Rows.")
        }];
        let params = resolve_template_params(
            &spec_with(&ALIASED),
            &[("rows".to_string(), "4".to_string())],
        )
        .unwrap();
        assert_eq!(params.int("checklist_rows"), Some(4));
    }

    #[test]
    fn test_duplicate_key_mapping_rejected() {
        static CLASHING: [TemplateParamSpec; 2] = [
            TemplateParamSpec {
                aliases: &["x"],
                ..TemplateParamSpec::new("a", ParamType::Int, "A.")
            },
            TemplateParamSpec::new("x", ParamType::Int, "X."),
        ];
        assert!(resolve_template_params(&spec_with(&CLASHING), &[]).is_err());
    }
}
