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

use super::{prefix, RingBuffer};
use crate::errors::WriteError;
use std::sync::Arc;

/// Writing half of a split [RingBuffer]. There is exactly one per buffer.
pub struct Producer<T> {
    rb: Arc<RingBuffer<T>>,
}

impl<T: Copy> Producer<T> {
    pub(crate) fn new(rb: Arc<RingBuffer<T>>) -> Producer<T> {
        Producer { rb }
    }

    /// Returns capacity of the ring buffer.
    pub fn capacity(&self) -> usize {
        self.rb.capacity()
    }

    /// See [RingBuffer::approximate_count].
    pub fn approximate_count(&self) -> usize {
        self.rb.approximate_count()
    }

    /// See [RingBuffer::is_empty].
    pub fn is_empty(&self) -> bool {
        self.rb.is_empty()
    }

    /// See [RingBuffer::is_full].
    pub fn is_full(&self) -> bool {
        self.rb.is_full()
    }

    /// Writes all elements of `data` or nothing.
    pub fn write(&mut self, data: &[T]) -> Result<(), WriteError> {
        // SAFETY: `Producer` isn't `Clone` and `write` takes `&mut self`
        unsafe { self.rb.push_slice(data) }
    }

    /// Writes the first `count` elements of `data` or nothing.
    pub fn write_from(&mut self, data: &[T], count: usize) -> Result<(), WriteError> {
        let data = prefix(data, count).ok_or(WriteError::InvalidCount(count))?;
        self.write(data)
    }

    /// [write](Self::write) reporting [NO_ERR](crate::status::NO_ERR) or [FAILURE](crate::status::FAILURE)
    #[cfg(feature = "legacy_status")]
    pub fn write_status(&mut self, data: &[T]) -> i32 {
        crate::status::to_status(self.write(data))
    }
}
