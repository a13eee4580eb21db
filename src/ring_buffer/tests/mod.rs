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

use super::{Consumer, Producer, RingBuffer};
use crate::errors::{ReadError, WriteError};
use std::sync::atomic::Ordering;

mod concurrent;

/// Positions both counters at `head` as if `head` elements went through already.
fn with_heads<T: Copy>(rb: &RingBuffer<T>, head: u64) {
    rb.write_head.store(head, Ordering::Relaxed);
    rb.read_head.store(head, Ordering::Relaxed);
}
