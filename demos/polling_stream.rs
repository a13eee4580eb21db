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

use spsc_circular_buffer::{ReadError, RingBuffer, WriteError};

const FRAMES: u32 = 32;
const FRAME_LEN: usize = 6;

fn main() {
    smol::block_on(async {
        let (mut producer, mut consumer) = RingBuffer::new(0i16, 16).split();
        println!("buffer created with capacity {}", producer.capacity());

        let writer = smol::spawn(async move {
            for frame in 0..FRAMES {
                let samples = [frame as i16; FRAME_LEN];
                loop {
                    match producer.write(&samples) {
                        Ok(()) => break,
                        Err(WriteError::InsufficientSpace { available, requested }) => {
                            println!("writer waits: {} free, {} needed", available, requested);
                            smol::future::yield_now().await;
                        }
                        Err(other) => {
                            eprintln!("UNEXPECTED ERROR: {}", other);
                            return;
                        }
                    }
                }
            }
            println!("writer done");
        });

        let mut samples = [0i16; FRAME_LEN];
        let mut frames = 0;
        while frames < FRAMES {
            match consumer.read(&mut samples) {
                Ok(()) => {
                    println!("frame {:?}, ~{} buffered", samples, consumer.approximate_count());
                    frames += 1;
                }
                Err(ReadError::InsufficientData { .. }) => smol::future::yield_now().await,
                Err(other) => {
                    eprintln!("UNEXPECTED ERROR: {}", other);
                    break;
                }
            }
        }

        writer.await;
    })
}
