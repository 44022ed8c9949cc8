use crate::models::{FileType, SearchCriteria, TermsAppearing};

/// Per-field input limit (characters)
const MAX_FIELD_LEN: usize = 256;

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Base,
    ExactMatch,
    Exclude,
    Domain,
    TermsAppearing,
    FileType,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Base,
        FormField::ExactMatch,
        FormField::Exclude,
        FormField::Domain,
        FormField::TermsAppearing,
        FormField::FileType,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Base => "Search",
            FormField::ExactMatch => "Exact match",
            FormField::Exclude => "Exclude",
            FormField::Domain => "Domain",
            FormField::TermsAppearing => "Terms appearing",
            FormField::FileType => "File type",
        }
    }

    /// Hint shown while a text field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Base => "Enter search keywords",
            FormField::ExactMatch => "Exact words or phrases to match, separated by commas",
            FormField::Exclude => "Words or phrases to exclude, separated by commas",
            FormField::Domain => "example.com",
            FormField::TermsAppearing | FormField::FileType => "",
        }
    }

    pub fn is_selector(self) -> bool {
        matches!(self, FormField::TermsAppearing | FormField::FileType)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|field| *field == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, delta: isize) -> T {
    let idx = options.iter().position(|option| *option == current).unwrap_or(0) as isize;
    let len = options.len() as isize;
    options[(idx + delta).rem_euclid(len) as usize]
}

/// Editable form: the criteria being built plus the focused field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub criteria: SearchCriteria,
    pub focus: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self { criteria: SearchCriteria::default(), focus: FormField::Base }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Base => Some(&mut self.criteria.base),
            FormField::ExactMatch => Some(&mut self.criteria.exact_match),
            FormField::Exclude => Some(&mut self.criteria.exclude),
            FormField::Domain => Some(&mut self.criteria.domain),
            FormField::TermsAppearing | FormField::FileType => None,
        }
    }

    /// Displayed value: raw text for text fields, label for selectors
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Base => &self.criteria.base,
            FormField::ExactMatch => &self.criteria.exact_match,
            FormField::Exclude => &self.criteria.exclude,
            FormField::Domain => &self.criteria.domain,
            FormField::TermsAppearing => self.criteria.terms_appearing.label(),
            FormField::FileType => self.criteria.file_type.label(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type into the focused text field; returns false if nothing changed
    pub fn insert_char(&mut self, c: char) -> bool {
        let focus = self.focus;
        match self.text_mut(focus) {
            Some(text) if text.chars().count() < MAX_FIELD_LEN => {
                text.push(c);
                true
            }
            _ => false,
        }
    }

    /// Backspace in the focused text field; returns false if nothing changed
    pub fn delete_char(&mut self) -> bool {
        let focus = self.focus;
        self.text_mut(focus).is_some_and(|text| text.pop().is_some())
    }

    /// Step the focused selector forwards or backwards; returns false on text fields
    pub fn cycle_selection(&mut self, delta: isize) -> bool {
        match self.focus {
            FormField::TermsAppearing => {
                self.criteria.terms_appearing =
                    cycle(&TermsAppearing::ALL, self.criteria.terms_appearing, delta);
                true
            }
            FormField::FileType => {
                self.criteria.file_type = cycle(&FileType::ALL, self.criteria.file_type, delta);
                true
            }
            _ => false,
        }
    }

    /// Back to defaults, focus on the keywords
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replace every field with stored criteria (history autofill)
    pub fn fill(&mut self, criteria: SearchCriteria) {
        self.criteria = criteria;
        self.focus = FormField::Base;
    }
}
