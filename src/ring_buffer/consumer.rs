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

use super::{prefix_mut, RingBuffer};
use crate::errors::ReadError;
use std::sync::Arc;

/// Reading half of a split [RingBuffer]. There is exactly one per buffer.
pub struct Consumer<T> {
    rb: Arc<RingBuffer<T>>,
}

impl<T: Copy> Consumer<T> {
    pub(crate) fn new(rb: Arc<RingBuffer<T>>) -> Consumer<T> {
        Consumer { rb }
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

    /// Fills `into` entirely with the oldest buffered elements or reads nothing.
    pub fn read(&mut self, into: &mut [T]) -> Result<(), ReadError> {
        // SAFETY: `Consumer` isn't `Clone` and `read` takes `&mut self`
        unsafe { self.rb.pop_slice(into) }
    }

    /// Reads `count` oldest buffered elements into the front of `into` or reads nothing.
    pub fn read_into(&mut self, into: &mut [T], count: usize) -> Result<(), ReadError> {
        let into = prefix_mut(into, count).ok_or(ReadError::InvalidCount(count))?;
        self.read(into)
    }

    /// [read](Self::read) reporting [NO_ERR](crate::status::NO_ERR) or [FAILURE](crate::status::FAILURE)
    #[cfg(feature = "legacy_status")]
    pub fn read_status(&mut self, into: &mut [T]) -> i32 {
        crate::status::to_status(self.read(into))
    }
}
