//! # Health Metrics Form
//!
//! ## Responsibility
//! Holds the raw text of each form control, the smoking radio choice and
//! keyboard focus. Turns the current values into a [`UserSubmission`] or
//! reports the first field that blocks submission.
//!
//! ## Guarantees
//! - No submission is produced unless every field is present and every
//!   numeric field parses
//! - Numeric controls accept only characters a number input would accept
//! - `reset()` restores the pristine form

use std::fmt;

use thiserror::Error;

use crate::model::UserSubmission;

/// Longest accepted name, in characters.
pub const MAX_NAME_CHARS: usize = 40;

/// Longest accepted numeric entry, in characters.
pub const MAX_NUMBER_CHARS: usize = 6;

/// A focusable form control, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Display name.
    Name,
    /// Age in years.
    Age,
    /// Body-mass index.
    Bmi,
    /// Systolic blood pressure.
    SystolicBp,
    /// Fasting blood sugar.
    BloodSugar,
    /// Smoking radio group.
    Smoker,
    /// Submit control.
    Submit,
}

impl Field {
    /// Every control in tab order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Age,
        Field::Bmi,
        Field::SystolicBp,
        Field::BloodSugar,
        Field::Smoker,
        Field::Submit,
    ];

    /// Form control id; equals the JSON field name for data fields.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Bmi => "bmi",
            Self::SystolicBp => "systolic_bp",
            Self::BloodSugar => "blood_sugar",
            Self::Smoker => "is_smoker",
            Self::Submit => "submit",
        }
    }

    /// Whether the control is a free-text entry.
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Smoker | Self::Submit)
    }

    /// Whether the control only takes numbers.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Age | Self::Bmi | Self::SystolicBp | Self::BloodSugar
        )
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next control, wrapping around.
    pub fn next(self) -> Field {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous control, wrapping around.
    pub fn prev(self) -> Field {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Why the form cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required control is empty.
    #[error("{field} is required")]
    Missing {
        /// The empty control.
        field: Field,
    },
    /// A numeric control holds something that does not parse.
    #[error("{field} must be a number, got {value:?}")]
    NotANumber {
        /// The offending control.
        field: Field,
        /// Its raw text.
        value: String,
    },
}

impl FormError {
    /// The control that blocked submission.
    pub fn field(&self) -> Field {
        match self {
            Self::Missing { field } | Self::NotANumber { field, .. } => *field,
        }
    }
}

/// Current values of the form controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Name entry.
    pub name: String,
    /// Age entry.
    pub age: String,
    /// BMI entry.
    pub bmi: String,
    /// Systolic blood pressure entry.
    pub systolic_bp: String,
    /// Blood sugar entry.
    pub blood_sugar: String,
    /// Radio choice; `None` until the user picks one.
    pub is_smoker: Option<bool>,
    focus: Field,
}

impl FormState {
    /// A blank form focused on the name field.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            bmi: String::new(),
            systolic_bp: String::new(),
            blood_sugar: String::new(),
            is_smoker: None,
            focus: Field::Name,
        }
    }

    /// Restores the pristine form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The focused control.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Moves focus to `field`.
    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    /// Moves focus forward.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus backward.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Raw text of a text control; empty for the radio and submit controls.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Bmi => &self.bmi,
            Field::SystolicBp => &self.systolic_bp,
            Field::BloodSugar => &self.blood_sugar,
            Field::Smoker | Field::Submit => "",
        }
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Age => Some(&mut self.age),
            Field::Bmi => Some(&mut self.bmi),
            Field::SystolicBp => Some(&mut self.systolic_bp),
            Field::BloodSugar => Some(&mut self.blood_sugar),
            Field::Smoker | Field::Submit => None,
        }
    }

    /// Types `c` into the focused control.
    ///
    /// On the radio group, `y`/`n` pick an option. Characters the focused
    /// control does not accept are ignored.
    ///
    /// # Returns
    /// `true` if the form changed.
    pub fn insert_char(&mut self, c: char) -> bool {
        let field = self.focus;
        if field == Field::Smoker {
            return match c.to_ascii_lowercase() {
                'y' => self.select_smoker(true),
                'n' => self.select_smoker(false),
                _ => false,
            };
        }
        let Some(value) = self.value_mut(field) else {
            return false;
        };
        let accepted = if field.is_numeric() {
            (c.is_ascii_digit() || (c == '.' && field == Field::Bmi && !value.contains('.')))
                && value.chars().count() < MAX_NUMBER_CHARS
        } else {
            !c.is_control() && value.chars().count() < MAX_NAME_CHARS
        };
        if accepted {
            value.push(c);
        }
        accepted
    }

    /// Deletes the last character of the focused text control.
    pub fn backspace(&mut self) -> bool {
        let field = self.focus;
        self.value_mut(field).and_then(|v| v.pop()).is_some()
    }

    /// Picks a radio option.
    pub fn select_smoker(&mut self, is_smoker: bool) -> bool {
        let changed = self.is_smoker != Some(is_smoker);
        self.is_smoker = Some(is_smoker);
        changed
    }

    /// Flips the radio choice; an unset group becomes "no".
    pub fn toggle_smoker(&mut self) {
        self.is_smoker = Some(matches!(self.is_smoker, Some(false)));
    }

    /// Builds the submission, or names the first control that blocks it.
    ///
    /// Controls are checked in tab order.
    ///
    /// # Errors
    /// [`FormError::Missing`] for an empty control or unset radio group,
    /// [`FormError::NotANumber`] for unparsable numeric text.
    pub fn to_submission(&self) -> Result<UserSubmission, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Missing { field: Field::Name });
        }
        let age = parse_whole(&self.age, Field::Age)?;
        let bmi = parse_decimal(&self.bmi, Field::Bmi)?;
        let systolic_bp = parse_whole(&self.systolic_bp, Field::SystolicBp)?;
        let blood_sugar = parse_whole(&self.blood_sugar, Field::BloodSugar)?;
        let is_smoker = self.is_smoker.ok_or(FormError::Missing {
            field: Field::Smoker,
        })?;

        Ok(UserSubmission {
            name: name.to_string(),
            age,
            bmi,
            systolic_bp,
            blood_sugar,
            is_smoker,
        })
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_whole(raw: &str, field: Field) -> Result<u32, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Missing { field });
    }
    raw.parse().map_err(|_| FormError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

fn parse_decimal(raw: &str, field: Field) -> Result<f64, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Missing { field });
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FormError::NotANumber {
            field,
            value: raw.to_string(),
        }),
    }
}
