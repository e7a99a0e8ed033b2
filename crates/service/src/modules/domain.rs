//! Request bodies for the module endpoints and their validated forms.
//!
//! Bodies arrive loosely typed (any JSON value per field). They are turned
//! into [`NewModule`] / [`ModulePatch`] here, so nothing invalid reaches the
//! store. On create a JSON `null` counts as an absent field. On update a key
//! that is present is always validated: `"description": null` clears the
//! description, a `null` title, week or status is rejected.

use models::module::{self, ModuleStatus};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::ServiceError;

pub const MSG_REQUIRED: &str = "title y week son obligatorios";
pub const MSG_WEEK_NOT_INTEGER: &str = "week debe ser entero";
pub const MSG_INVALID_STATUS: &str = "status inválido";
pub const MSG_NOTHING_TO_UPDATE: &str = "Nada para actualizar";
pub const MSG_TITLE_NOT_TEXT: &str = "title debe ser texto";
pub const MSG_DESCRIPTION_NOT_TEXT: &str = "description debe ser texto";

/// Body of `POST /api/modules`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateModuleInput {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub week: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
}

/// Body of `PUT /api/modules/:id`; every field optional.
/// `None` means the key is missing, `Some(Value::Null)` an explicit null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateModuleInput {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub week: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Value>,
}

fn present<'de, D>(d: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(d).map(Some)
}

/// A module ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModule {
    pub title: String,
    pub description: String,
    pub week: i64,
    pub status: ModuleStatus,
}

/// Columns to change on an existing module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModulePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub week: Option<i64>,
    pub status: Option<ModuleStatus>,
}

impl ModulePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.week.is_none() && self.status.is_none()
    }
}

impl CreateModuleInput {
    /// Title and week are checked first, then status, then the remaining limits.
    pub fn validate(self) -> Result<NewModule, ServiceError> {
        let title = match self.title {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            _ => return Err(ServiceError::Validation(MSG_REQUIRED.into())),
        };
        let week = self
            .week
            .as_ref()
            .and_then(coerce_integer)
            .ok_or_else(|| ServiceError::Validation(MSG_REQUIRED.into()))?;
        let status = match self.status {
            Some(v) => parse_status(&v)?,
            None => ModuleStatus::default(),
        };
        let description = text_field(self.description, MSG_DESCRIPTION_NOT_TEXT)?.unwrap_or_default();

        module::validate_title(&title)?;
        module::validate_week(week)?;
        Ok(NewModule { title, description, week, status })
    }
}

impl UpdateModuleInput {
    pub fn validate(self) -> Result<ModulePatch, ServiceError> {
        let title = text_field(self.title, MSG_TITLE_NOT_TEXT)?;
        if let Some(t) = &title {
            module::validate_title(t)?;
        }
        let description = match self.description {
            Some(Value::Null) => Some(String::new()),
            other => text_field(other, MSG_DESCRIPTION_NOT_TEXT)?,
        };
        let week = match self.week {
            Some(v) => {
                let w = coerce_integer(&v)
                    .ok_or_else(|| ServiceError::Validation(MSG_WEEK_NOT_INTEGER.into()))?;
                module::validate_week(w)?;
                Some(w)
            }
            None => None,
        };
        let status = self.status.as_ref().map(parse_status).transpose()?;

        let patch = ModulePatch { title, description, week, status };
        if patch.is_empty() {
            return Err(ServiceError::Validation(MSG_NOTHING_TO_UPDATE.into()));
        }
        Ok(patch)
    }
}

/// Integer coercion for `week`: integral numbers (`5`, `5.0`) and strings
/// holding one (`"5"`, `" 5 "`). Booleans, empty strings and fractions fail.
pub fn coerce_integer(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                return None;
            }
            t.parse::<i64>()
                .ok()
                .or_else(|| t.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    // beyond 2^53 floats stop being exact integers
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= 9_007_199_254_740_991.0 {
        Some(f as i64)
    } else {
        None
    }
}

fn parse_status(v: &Value) -> Result<ModuleStatus, ServiceError> {
    match v {
        Value::String(s) => s
            .parse::<ModuleStatus>()
            .map_err(|_| ServiceError::Validation(MSG_INVALID_STATUS.into())),
        _ => Err(ServiceError::Validation(MSG_INVALID_STATUS.into())),
    }
}

fn text_field(v: Option<Value>, msg: &str) -> Result<Option<String>, ServiceError> {
    match v {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ServiceError::Validation(msg.into())),
    }
}
