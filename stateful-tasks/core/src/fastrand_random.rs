// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;

pub struct FastrandRandom;

impl Random for FastrandRandom {
    fn i64(&self, range: std::ops::Range<i64>) -> i64 {
        fastrand::i64(range)
    }
}
