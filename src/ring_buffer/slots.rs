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

use std::{cell::UnsafeCell, cmp::min, ops::Range, slice};

/// Fixed length backing store shared by the writer and the reader.
///
/// Every slot sits in its own `UnsafeCell`, so the two sides can hold
/// mutable and shared views of *different* ranges at the same time.
pub(crate) struct Slots<T> {
    cells: Box<[UnsafeCell<T>]>,
}

unsafe impl<T: Send> Sync for Slots<T> {}

impl<T: Copy> Slots<T> {
    pub(crate) fn new(fill: T, capacity: usize) -> Slots<T> {
        Slots {
            cells: (0..capacity).map(|_| UnsafeCell::new(fill)).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    // `UnsafeCell<T>` has the same in-memory representation as `T`
    fn base(&self) -> *mut T {
        self.cells.as_ptr() as *mut T
    }

    #[allow(clippy::mut_from_ref)]
    unsafe fn slice_mut(&self, range: Range<usize>) -> &mut [T] {
        debug_assert!(range.end <= self.len());
        slice::from_raw_parts_mut(self.base().add(range.start), range.len())
    }

    unsafe fn slice(&self, range: Range<usize>) -> &[T] {
        debug_assert!(range.end <= self.len());
        slice::from_raw_parts(self.base().add(range.start) as *const T, range.len())
    }

    /// Copies `src` into slots starting at physical index `start`, continuing
    /// from index 0 when the run crosses the end of the store.
    ///
    /// # Safety
    ///
    /// Nobody else reads or writes the covered slots during the call.
    pub(crate) unsafe fn copy_in(&self, start: usize, src: &[T]) {
        let (head, tail) = segments(self.len(), start, src.len());
        let (src_head, src_tail) = src.split_at(head.len());
        self.slice_mut(head).copy_from_slice(src_head);
        self.slice_mut(tail).copy_from_slice(src_tail);
    }

    /// Copies slots starting at physical index `start` into `dst`, continuing
    /// from index 0 when the run crosses the end of the store.
    ///
    /// # Safety
    ///
    /// Nobody writes the covered slots during the call.
    pub(crate) unsafe fn copy_out(&self, start: usize, dst: &mut [T]) {
        let (head, tail) = segments(self.len(), start, dst.len());
        let (dst_head, dst_tail) = dst.split_at_mut(head.len());
        dst_head.copy_from_slice(self.slice(head));
        dst_tail.copy_from_slice(self.slice(tail));
    }
}

/// Splits a run of `count` elements starting at physical index `start` into
/// the head segment up to the end of the store and the wrapped tail segment
/// starting at index 0 (empty when the run fits).
pub(crate) fn segments(capacity: usize, start: usize, count: usize) -> (Range<usize>, Range<usize>) {
    debug_assert!(start < capacity && count <= capacity);
    let head = min(count, capacity - start);
    (start..start + head, 0..count - head)
}
