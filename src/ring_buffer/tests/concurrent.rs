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

use super::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    thread,
    time::{Duration, Instant},
};

const CAPACITY: usize = 1024;
const TOTAL: u64 = 200_000;
const MAX_CHUNK: usize = 64;
const STALL_LIMIT: Duration = Duration::from_secs(30);

/// Fails the calling thread instead of spinning forever when the other side died.
fn check_progress(since: Instant) {
    assert!(since.elapsed() < STALL_LIMIT, "no progress for {:?}", STALL_LIMIT);
}

#[test]
fn writer_and_reader_threads() {
    let (mut producer, mut consumer) = RingBuffer::new(0u64, CAPACITY).split();

    let writer = thread::spawn(move || {
        let mut rng = StdRng::seed_from_u64(17);
        let mut next = 0;
        while next < TOTAL {
            let chunk_len = rng.gen_range(1..=MAX_CHUNK as u64).min(TOTAL - next);
            let chunk = (next..next + chunk_len).collect::<Vec<_>>();
            let since = Instant::now();
            loop {
                match producer.write(&chunk) {
                    Ok(()) => break,
                    Err(WriteError::InsufficientSpace { available, requested }) => {
                        assert!(available < requested);
                        assert!(available <= CAPACITY);
                        check_progress(since);
                        thread::yield_now();
                    }
                    Err(other) => panic!("{:?}", other),
                }
            }
            next += chunk_len;
        }
    });

    let reader = thread::spawn(move || {
        let mut rng = StdRng::seed_from_u64(42);
        let mut buf = [0u64; MAX_CHUNK];
        let mut expected = 0;
        while expected < TOTAL {
            let chunk_len = rng.gen_range(1..=MAX_CHUNK as u64).min(TOTAL - expected) as usize;
            let since = Instant::now();
            loop {
                match consumer.read(&mut buf[..chunk_len]) {
                    Ok(()) => break,
                    Err(ReadError::InsufficientData { available, requested }) => {
                        assert!(available < requested);
                        assert!(available <= CAPACITY);
                        check_progress(since);
                        thread::yield_now();
                    }
                    Err(other) => panic!("{:?}", other),
                }
            }
            for value in &buf[..chunk_len] {
                assert_eq!(*value, expected);
                expected += 1;
            }
        }
        consumer
    });

    let consumer = reader.join().expect("reader finished");
    writer.join().expect("writer finished");
    assert!(consumer.is_empty());
}

#[test]
fn polling_tasks() {
    let (mut producer, mut consumer) = RingBuffer::new(0u32, 8).split();
    let sent = (0..100).collect::<Vec<u32>>();
    let expected = sent.clone();

    let received = smol::block_on(async move {
        let writer = smol::spawn(async move {
            for chunk in sent.chunks(5) {
                while let Err(error) = producer.write(chunk) {
                    assert!(error.is_transient());
                    smol::future::yield_now().await;
                }
            }
        });

        let mut received = Vec::new();
        let mut buf = [0; 4];
        while received.len() < 100 {
            match consumer.read(&mut buf) {
                Ok(()) => received.extend_from_slice(&buf),
                Err(error) => {
                    assert!(error.is_transient());
                    smol::future::yield_now().await;
                }
            }
        }
        writer.await;
        received
    });

    assert_eq!(received, expected);
}
