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

//! Integer status codes for callers that can't consume typed errors.

/// Operation succeeded
pub const NO_ERR: i32 = 0;
/// Operation was rejected, the buffer is left untouched
pub const FAILURE: i32 = -1;

/// Collapses a typed result into [NO_ERR] or [FAILURE]
pub fn to_status<E>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => NO_ERR,
        Err(_) => FAILURE,
    }
}
