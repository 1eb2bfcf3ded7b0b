// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Input validation as a pure reporting pass.
//!
//! `validate` walks a slice of [`IntervalDraft`]s and collects every defect
//! it finds, tagged with the index of the offending draft. It never stops at
//! the first error, never mutates or filters its input, and never decides
//! for the caller: packing invalid input is permitted (the compatibility
//! checks use the raw bounds as-is), so whether to abort is the caller's
//! call.

use crate::interval::IntervalDraft;
use num_traits::PrimInt;

/// The kind of defect found in one interval draft.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ValidationErrorKind {
    /// A required field is absent; carries the field name.
    MissingField(&'static str),
    /// `end < start`.
    NegativeDuration,
    /// Bounds are present and ordered but the duration `end - start` is not
    /// representable in the time type.
    InvalidInterval,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field '{}' is missing", field),
            Self::NegativeDuration => write!(f, "end is earlier than start"),
            Self::InvalidInterval => {
                write!(f, "duration is not representable in the time type")
            }
        }
    }
}

impl std::error::Error for ValidationErrorKind {}

/// One defect, tied to the index of the draft that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ValidationError {
    index: usize,
    kind: ValidationErrorKind,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    #[inline]
    pub const fn new(index: usize, kind: ValidationErrorKind) -> Self {
        Self { index, kind }
    }

    /// Returns the index of the originating draft in the validated slice.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the kind of defect.
    #[inline]
    pub const fn kind(&self) -> ValidationErrorKind {
        self.kind
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "interval at index {}: {}", self.index, self.kind)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ValidationErrorKind {
    fn from(error: ValidationError) -> Self {
        error.kind
    }
}

/// Checks every draft and returns all defects found, in slice order.
///
/// A single draft can contribute several errors (one per missing field).
/// An empty return value means the whole batch is well-formed. Calling
/// `validate` twice on the same input yields identical results.
///
/// # Examples
///
/// ```rust
/// # use slipway_model::interval::IntervalDraft;
/// # use slipway_model::validate::{validate, ValidationErrorKind};
///
/// let drafts = vec![
///     IntervalDraft::of("a", 0, 10),
///     IntervalDraft::of("b", 10, 2),
/// ];
/// let errors = validate(&drafts);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].index(), 1);
/// assert_eq!(errors[0].kind(), ValidationErrorKind::NegativeDuration);
/// ```
pub fn validate<I, T>(drafts: &[IntervalDraft<I, T>]) -> Vec<ValidationError>
where
    T: PrimInt,
{
    let mut errors = Vec::new();

    for (index, draft) in drafts.iter().enumerate() {
        if draft.id.is_none() {
            errors.push(ValidationError::new(
                index,
                ValidationErrorKind::MissingField("id"),
            ));
        }
        if draft.start.is_none() {
            errors.push(ValidationError::new(
                index,
                ValidationErrorKind::MissingField("start"),
            ));
        }
        if draft.end.is_none() {
            errors.push(ValidationError::new(
                index,
                ValidationErrorKind::MissingField("end"),
            ));
        }

        if let (Some(start), Some(end)) = (draft.start, draft.end) {
            if end < start {
                errors.push(ValidationError::new(
                    index,
                    ValidationErrorKind::NegativeDuration,
                ));
            } else if end.checked_sub(&start).is_none() {
                errors.push(ValidationError::new(
                    index,
                    ValidationErrorKind::InvalidInterval,
                ));
            }
        }
    }

    errors
}
