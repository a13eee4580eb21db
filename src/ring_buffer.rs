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

use crate::errors::{ReadError, WriteError};
use crossbeam_utils::CachePadded;
use slots::Slots;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

pub use consumer::Consumer;
pub use producer::Producer;

mod consumer;
mod producer;
mod slots;

#[cfg(test)]
mod tests;

/// Fixed capacity circular buffer shared by one writer and one reader.
///
/// `write_head` and `read_head` count every element ever written and consumed.
/// They only grow (wrapping at `u64::MAX`), their difference is the number of
/// buffered elements and the physical slot of logical index `i` is `i % capacity`.
pub struct RingBuffer<T> {
    slots: Slots<T>,
    write_head: CachePadded<AtomicU64>,
    read_head: CachePadded<AtomicU64>,
}

impl<T: Copy> RingBuffer<T> {
    /// Creates a buffer of `capacity` slots, every one holding `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is `0`.
    pub fn new(fill: T, capacity: usize) -> RingBuffer<T> {
        assert!(capacity > 0, "capacity must be greater than 0");
        log::debug!("ring buffer created with capacity = {}", capacity);
        RingBuffer {
            slots: Slots::new(fill, capacity),
            write_head: CachePadded::new(AtomicU64::new(0)),
            read_head: CachePadded::new(AtomicU64::new(0)),
        }
    }

    /// Moves the buffer behind an `Arc` shared by its only writer and only reader.
    pub fn split(self) -> (Producer<T>, Consumer<T>) {
        log::debug!("ring buffer with capacity = {} split into producer and consumer", self.capacity());
        let shared = Arc::new(self);
        (Producer::new(shared.clone()), Consumer::new(shared))
    }

    /// Returns capacity of the ring buffer.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of buffered elements built from two separate relaxed loads.
    ///
    /// The loads are not synchronized with each other, so the value is a hint
    /// for monitoring only. A stale counter seen by an observer other than the
    /// writer and the reader is clamped, the result always stays in
    /// `0..=capacity`.
    pub fn approximate_count(&self) -> usize {
        let read = self.read_head.load(Ordering::Relaxed);
        let write = self.write_head.load(Ordering::Relaxed);
        let count = write.wrapping_sub(read);
        if count > u64::MAX / 2 {
            // stale `write_head`, reader appears ahead of writer
            0
        } else if count > self.capacity() as u64 {
            self.capacity()
        } else {
            count as usize
        }
    }

    /// Checks if the ring buffer is empty. Same guarantees as [approximate_count](Self::approximate_count).
    pub fn is_empty(&self) -> bool {
        self.approximate_count() == 0
    }

    /// Checks if the ring buffer is full. Same guarantees as [approximate_count](Self::approximate_count).
    pub fn is_full(&self) -> bool {
        self.approximate_count() == self.capacity()
    }

    /// Writes all elements of `data` or nothing.
    pub fn write(&mut self, data: &[T]) -> Result<(), WriteError> {
        // SAFETY: `&mut self` excludes any other writer
        unsafe { self.push_slice(data) }
    }

    /// Writes the first `count` elements of `data` or nothing.
    pub fn write_from(&mut self, data: &[T], count: usize) -> Result<(), WriteError> {
        let data = prefix(data, count).ok_or(WriteError::InvalidCount(count))?;
        self.write(data)
    }

    /// Fills `into` entirely with the oldest buffered elements or reads nothing.
    pub fn read(&mut self, into: &mut [T]) -> Result<(), ReadError> {
        // SAFETY: `&mut self` excludes any other reader
        unsafe { self.pop_slice(into) }
    }

    /// Reads `count` oldest buffered elements into the front of `into` or reads nothing.
    pub fn read_into(&mut self, into: &mut [T], count: usize) -> Result<(), ReadError> {
        let into = prefix_mut(into, count).ok_or(ReadError::InvalidCount(count))?;
        self.read(into)
    }

    /// # Safety
    ///
    /// At most one thread executes `push_slice` on the same buffer at a time.
    pub(crate) unsafe fn push_slice(&self, data: &[T]) -> Result<(), WriteError> {
        let count = data.len();
        if count == 0 {
            return Err(WriteError::InvalidCount(count));
        }

        let write = self.write_head.load(Ordering::Relaxed);
        let read = self.read_head.load(Ordering::Acquire);
        let available = self.capacity() - write.wrapping_sub(read) as usize;
        if available < count {
            return Err(WriteError::InsufficientSpace {
                available,
                requested: count,
            });
        }

        // the range `write..write + count` is not visible to the reader until the store below
        self.slots.copy_in(self.physical(write), data);
        self.write_head
            .store(write.wrapping_add(count as u64), Ordering::Release);
        Ok(())
    }

    /// # Safety
    ///
    /// At most one thread executes `pop_slice` on the same buffer at a time.
    pub(crate) unsafe fn pop_slice(&self, into: &mut [T]) -> Result<(), ReadError> {
        let count = into.len();
        if count == 0 {
            return Err(ReadError::InvalidCount(count));
        }

        let write = self.write_head.load(Ordering::Acquire);
        let read = self.read_head.load(Ordering::Relaxed);
        let available = write.wrapping_sub(read) as usize;
        if available < count {
            return Err(ReadError::InsufficientData {
                available,
                requested: count,
            });
        }

        // the writer can't reuse `read..read + count` until the store below
        self.slots.copy_out(self.physical(read), into);
        self.read_head
            .store(read.wrapping_add(count as u64), Ordering::Release);
        Ok(())
    }

    fn physical(&self, logical: u64) -> usize {
        (logical % self.capacity() as u64) as usize
    }
}

#[cfg(feature = "legacy_status")]
impl<T: Copy> RingBuffer<T> {
    /// [write](Self::write) reporting [NO_ERR](crate::status::NO_ERR) or [FAILURE](crate::status::FAILURE)
    pub fn write_status(&mut self, data: &[T]) -> i32 {
        crate::status::to_status(self.write(data))
    }

    /// [read](Self::read) reporting [NO_ERR](crate::status::NO_ERR) or [FAILURE](crate::status::FAILURE)
    pub fn read_status(&mut self, into: &mut [T]) -> i32 {
        crate::status::to_status(self.read(into))
    }
}

fn prefix<T>(data: &[T], count: usize) -> Option<&[T]> {
    if count == 0 {
        None
    } else {
        data.get(..count)
    }
}

fn prefix_mut<T>(data: &mut [T], count: usize) -> Option<&mut [T]> {
    if count == 0 {
        None
    } else {
        data.get_mut(..count)
    }
}
