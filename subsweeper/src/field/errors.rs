// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Errors raised while building a [`Field`][crate::field::Field].

use thiserror::Error;

/// Reason a field definition could not be turned into a field. These are the only fatal
/// conditions in the simulation; everything after setup is absorbed as a no-op.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FieldError {
    /// The definition had no rows, or only empty ones.
    #[error("field definition is empty")]
    Empty,

    /// A row's width differs from the width of the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A character that is neither empty water nor a mine letter.
    #[error("invalid symbol {symbol:?} at ({x}, {y})")]
    InvalidSymbol {
        /// Column of the symbol.
        x: usize,
        /// Row of the symbol.
        y: usize,
        /// The symbol itself.
        symbol: char,
    },

    /// The field has more cells than can be addressed.
    #[error("field of {width}x{height} is too large")]
    TooLarge {
        /// Number of columns.
        width: usize,
        /// Number of rows.
        height: usize,
    },
}
