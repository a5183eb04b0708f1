// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Collection of clock implementations.

use std::time::Duration;
use time::OffsetDateTime;

/// Generic definition of a clock.
pub trait Clock {
    /// Returns the current UTC time.
    fn now_utc(&self) -> OffsetDateTime;

    /// Returns how much time has passed since `start`.
    ///
    /// This is a wall-clock difference.  Clocks are not required to be monotonic, so a `start` in
    /// the future yields a zero duration.
    fn elapsed_since(&self, start: OffsetDateTime) -> Duration {
        Duration::try_from(self.now_utc() - start).unwrap_or(Duration::ZERO)
    }
}

/// Clock implementation that uses the system clock.
#[derive(Clone, Default)]
pub struct SystemClock {}

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Test utilities.
#[cfg(any(test, feature = "testutils"))]
pub mod testutils {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// A clock that returns a preconfigured instant and that can be modified at will.
    pub struct SettableClock {
        /// Current fake time in nanoseconds since the Unix epoch.
        now_ns: AtomicU64,
    }

    impl SettableClock {
        /// Creates a new clock that returns `now` until advanced.
        pub fn new(now: OffsetDateTime) -> Self {
            let now_ns = u64::try_from(now.unix_timestamp_nanos())
                .expect("Fake clocks only support times after the epoch");
            Self { now_ns: AtomicU64::new(now_ns) }
        }

        /// Advances the current time by `delta`.
        pub fn advance(&self, delta: Duration) {
            let delta_ns = u64::try_from(delta.as_nanos()).expect("Delta too large");
            self.now_ns.fetch_add(delta_ns, Ordering::SeqCst);
        }
    }

    impl Clock for SettableClock {
        fn now_utc(&self) -> OffsetDateTime {
            let now_ns = self.now_ns.load(Ordering::SeqCst);
            OffsetDateTime::from_unix_timestamp_nanos(i128::from(now_ns)).unwrap()
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_systemclock_trivial() {
        let clock = SystemClock::default();
        let now1 = clock.now_utc();
        assert!(now1.unix_timestamp_nanos() > 0);
        let now2 = clock.now_utc();
        assert!(now2 >= now1);
    }
}
