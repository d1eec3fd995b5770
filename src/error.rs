// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Planedge Contributors
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use thiserror::Error;

/// Result type for subdivision operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the subdivision engine and its operators.
///
/// Every variant is a reportable condition, not a panic: callers decide
/// whether an `AssumptionFailed` is fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("frame points are coincident or colinear")]
    DegenerateFrame,

    #[error("cancelled")]
    Cancelled,

    #[error("point location revisited an edge without converging")]
    LocateCycle,

    #[error("validation failed: {}", .reasons.join("; "))]
    ValidateFailed { reasons: Vec<String> },

    #[error("internal assumption failed: {detail}")]
    AssumptionFailed { detail: String },

    #[error("{what} is not supported")]
    Unsupported { what: String },
}

impl Error {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn assumption(detail: impl Into<String>) -> Self {
        Error::AssumptionFailed {
            detail: detail.into(),
        }
    }

    pub fn unsupported(what: impl Into<String>) -> Self {
        Error::Unsupported { what: what.into() }
    }
}

/// Defect list produced by the ring audit.
///
/// Collects every detected defect instead of bailing on the first one, so
/// a single validation pass paints the whole picture.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("invalid ring: {}", .reasons.join("; "))]
pub struct ErrInvalid {
    pub reasons: Vec<String>,
}

impl ErrInvalid {
    pub fn push(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn into_result(self) -> std::result::Result<(), ErrInvalid> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ErrInvalid> for Error {
    fn from(err: ErrInvalid) -> Self {
        Error::ValidateFailed {
            reasons: err.reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_failed_joins_reasons() {
        let mut inv = ErrInvalid::default();
        inv.push("first defect");
        inv.push("second defect");
        let err: Error = inv.into();
        assert_eq!(
            err.to_string(),
            "validation failed: first defect; second defect"
        );
    }

    #[test]
    fn err_invalid_empty_is_ok() {
        assert!(ErrInvalid::default().into_result().is_ok());
    }
}
