//! The unit of measurement: one latency reading from the probe.

/// One latency observation from the probe tool.
///
/// Every dialect parser produces this same type, including for timeouts
/// (the underlying tools report those in three different shapes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// A successful echo reply, in whole milliseconds (rounded at parse time).
    Value(u64),
    /// The probe reported an explicit timeout or failure for this request.
    Timeout,
    /// No reading exists for this slot yet (history pre-fill).
    Unknown,
}

impl Sample {
    /// The latency in milliseconds, if this is a real reading.
    pub fn millis(&self) -> Option<u64> {
        match self {
            Sample::Value(ms) => Some(*ms),
            _ => None,
        }
    }

    /// Whether this sample carries a usable latency value.
    pub fn is_usable(&self) -> bool {
        matches!(self, Sample::Value(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_only_for_values() {
        assert_eq!(Sample::Value(27).millis(), Some(27));
        assert_eq!(Sample::Timeout.millis(), None);
        assert_eq!(Sample::Unknown.millis(), None);
    }

    #[test]
    fn test_usable_distinguishes_placeholders() {
        assert!(Sample::Value(0).is_usable());
        assert!(!Sample::Timeout.is_usable());
        assert!(!Sample::Unknown.is_usable());
    }
}
