use chrono::Utc;
use plutus_core::Timestamp;
use plutus_ports::Clock;

/// Wall-clock time source, the production choice
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_wall_clock_time() {
        let clock = SystemClock::new();

        let before = Utc::now();
        let read = clock.now();
        let after = Utc::now();

        assert!(read >= before);
        assert!(read <= after);
    }
}
