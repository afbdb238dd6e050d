//! Editable profile fields and how typed text becomes a [`UserPatch`].

use crate::domain::{SessionError, SessionResult, User, UserPatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Age,
    Height,
    Weight,
    Goal,
    TargetWeight,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Age,
        ProfileField::Height,
        ProfileField::Weight,
        ProfileField::Goal,
        ProfileField::TargetWeight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Email => "Email",
            ProfileField::Age => "Age",
            ProfileField::Height => "Height (cm)",
            ProfileField::Weight => "Weight (kg)",
            ProfileField::Goal => "Fitness Goal",
            ProfileField::TargetWeight => "Target Weight (kg)",
        }
    }

    pub fn display_value(&self, user: &User) -> String {
        fn optional<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        }

        match self {
            ProfileField::Name => user.name.clone(),
            ProfileField::Email => user.email.clone(),
            ProfileField::Age => user.age.to_string(),
            ProfileField::Height => optional(&user.height),
            ProfileField::Weight => optional(&user.weight),
            ProfileField::Goal => optional(&user.goal),
            ProfileField::TargetWeight => optional(&user.target_weight),
        }
    }

    /// Parses `input` into a patch touching only this field.
    pub fn to_patch(&self, input: &str) -> SessionResult<UserPatch> {
        let input = input.trim();
        let invalid = || SessionError::InvalidField { field: self.label(), value: input.to_string() };
        let number = || {
            input
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value > 0.0)
                .ok_or_else(invalid)
        };

        let mut patch = UserPatch::default();
        match self {
            ProfileField::Name => patch.name = Some(input.to_string()),
            ProfileField::Email => patch.email = Some(input.to_string()),
            ProfileField::Age => patch.age = Some(input.parse().map_err(|_| invalid())?),
            ProfileField::Height => patch.height = Some(number()?),
            ProfileField::Weight => patch.weight = Some(number()?),
            ProfileField::Goal => patch.goal = Some(input.to_string()),
            ProfileField::TargetWeight => patch.target_weight = Some(number()?),
        }
        Ok(patch)
    }
}

/// Cursor and input buffer of the profile screen.
#[derive(Debug, Clone, Default)]
pub struct ProfileEditor {
    pub selected: usize,
    pub input: String,
    pub editing: bool,
}

impl ProfileEditor {
    pub fn field(&self) -> ProfileField {
        ProfileField::ALL[self.selected.min(ProfileField::ALL.len() - 1)]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ProfileField::ALL.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + ProfileField::ALL.len() - 1) % ProfileField::ALL.len();
    }

    pub fn begin(&mut self, user: &User) {
        self.input = self.field().display_value(user);
        self.editing = true;
    }

    pub fn cancel(&mut self) {
        self.input.clear();
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_patch_numeric_fields() {
        let patch = ProfileField::Weight.to_patch(" 72.5 ").unwrap();
        assert_eq!(patch, UserPatch { weight: Some(72.5), ..UserPatch::default() });

        assert_eq!(
            ProfileField::Age.to_patch("thirty"),
            Err(SessionError::InvalidField { field: "Age", value: "thirty".to_string() })
        );
        assert!(ProfileField::Height.to_patch("-3").is_err());
    }

    #[test]
    fn test_to_patch_rejects_non_finite_numbers() {
        for input in ["inf", "1e309", "NaN"] {
            assert_eq!(
                ProfileField::Weight.to_patch(input),
                Err(SessionError::InvalidField { field: "Weight (kg)", value: input.to_string() })
            );
        }
        assert!(ProfileField::TargetWeight.to_patch("-inf").is_err());
    }

    #[test]
    fn test_to_patch_text_fields() {
        let patch = ProfileField::Goal.to_patch("Build muscle").unwrap();
        assert_eq!(patch.goal.as_deref(), Some("Build muscle"));
        assert!(patch.name.is_none());
    }

    #[test]
    fn test_editor_selection_wraps() {
        let mut editor = ProfileEditor::default();
        editor.select_previous();
        assert_eq!(editor.field(), ProfileField::TargetWeight);
        editor.select_next();
        assert_eq!(editor.field(), ProfileField::Name);
    }
}
