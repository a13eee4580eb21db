// Copyright 2020 - 2021 Alex Dukhno
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

use std::fmt::{self, Display, Formatter};

/// An error which can be returned when writing elements into [RingBuffer](crate::RingBuffer)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WriteError {
    /// Indicates that zero elements were requested or the source can't supply requested count
    InvalidCount(usize),
    /// Indicates that there is not enough free slots to write all requested elements
    InsufficientSpace {
        /// free slots at the moment of the call
        available: usize,
        /// elements the caller tried to write
        requested: usize,
    },
}

impl WriteError {
    /// `true` if the same call may succeed once the reader advances
    pub fn is_transient(&self) -> bool {
        matches!(self, WriteError::InsufficientSpace { .. })
    }
}

impl Display for WriteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::InvalidCount(count) => write!(f, "invalid count of elements to write: {}", count),
            WriteError::InsufficientSpace { available, requested } => write!(
                f,
                "insufficient space: {} slot(s) available, {} requested",
                available, requested
            ),
        }
    }
}

impl std::error::Error for WriteError {}

/// An error which can be returned when reading elements out of [RingBuffer](crate::RingBuffer)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReadError {
    /// Indicates that zero elements were requested or the destination can't hold requested count
    InvalidCount(usize),
    /// Indicates that there is not enough buffered elements to read all requested
    InsufficientData {
        /// buffered elements at the moment of the call
        available: usize,
        /// elements the caller tried to read
        requested: usize,
    },
}

impl ReadError {
    /// `true` if the same call may succeed once the writer advances
    pub fn is_transient(&self) -> bool {
        matches!(self, ReadError::InsufficientData { .. })
    }
}

impl Display for ReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::InvalidCount(count) => write!(f, "invalid count of elements to read: {}", count),
            ReadError::InsufficientData { available, requested } => write!(
                f,
                "insufficient data: {} element(s) available, {} requested",
                available, requested
            ),
        }
    }
}

impl std::error::Error for ReadError {}

#[cfg(test)]
mod error_kinds {
    use super::*;

    #[test]
    fn only_capacity_errors_are_transient() {
        assert!(WriteError::InsufficientSpace {
            available: 1,
            requested: 2
        }
        .is_transient());
        assert!(ReadError::InsufficientData {
            available: 0,
            requested: 1
        }
        .is_transient());
        assert!(!WriteError::InvalidCount(0).is_transient());
        assert!(!ReadError::InvalidCount(0).is_transient());
    }

    #[test]
    fn write_error_display() {
        assert_eq!(
            WriteError::InsufficientSpace {
                available: 3,
                requested: 5
            }
            .to_string(),
            "insufficient space: 3 slot(s) available, 5 requested"
        );
        assert_eq!(
            WriteError::InvalidCount(0).to_string(),
            "invalid count of elements to write: 0"
        );
    }

    #[test]
    fn read_error_display() {
        assert_eq!(
            ReadError::InsufficientData {
                available: 0,
                requested: 4
            }
            .to_string(),
            "insufficient data: 0 element(s) available, 4 requested"
        );
        assert_eq!(
            ReadError::InvalidCount(7).to_string(),
            "invalid count of elements to read: 7"
        );
    }
}
