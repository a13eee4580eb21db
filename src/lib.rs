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

#![warn(missing_docs)]
//! Lock-free single-producer single-consumer circular buffer of fixed capacity.
//!
//! [RingBuffer] keeps `capacity` elements in one contiguous allocation made at
//! construction and coordinates the writer and the reader with two atomic
//! counters only. Every `write`/`read` either transfers all requested elements
//! or is rejected without side effects; nothing ever blocks or waits.
//!
//! Used from a single thread the buffer is driven through `&mut` methods.
//! To hand the sides to different threads, [split](RingBuffer::split) it into
//! a [Producer] and a [Consumer].
//!
//! ```
//! use spsc_circular_buffer::{RingBuffer, WriteError};
//!
//! let (mut producer, mut consumer) = RingBuffer::new(0u8, 4).split();
//!
//! producer.write(&[1, 2, 3]).expect("fits");
//! assert_eq!(
//!     producer.write(&[4, 5]),
//!     Err(WriteError::InsufficientSpace { available: 1, requested: 2 })
//! );
//!
//! let mut out = [0; 3];
//! consumer.read(&mut out).expect("buffered");
//! assert_eq!(out, [1, 2, 3]);
//! ```

pub use errors::{ReadError, WriteError};
pub use ring_buffer::{Consumer, Producer, RingBuffer};

mod errors;
mod ring_buffer;
#[cfg(feature = "legacy_status")]
pub mod status;
