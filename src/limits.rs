//! Resource limits for decoding.

/// Caps enforced between reading an image header and allocating pixels.
///
/// Guards against decompression bombs. All limits are optional; the
/// default is unrestricted.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Maximum image width in pixels.
    pub max_width: Option<u64>,
    /// Maximum image height in pixels.
    pub max_height: Option<u64>,
    /// Maximum total pixels (width x height).
    pub max_pixels: Option<u64>,
    /// Maximum decode buffer allocation in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits with no restrictions.
    pub fn none() -> Self {
        Self::default()
    }

    /// Checks header dimensions against the configured caps.
    ///
    /// Returns `Err` naming the first exceeded limit. The pixel count
    /// saturates rather than wrapping, so absurd dimensions always trip a
    /// configured pixel cap.
    pub fn check_dimensions(&self, width: u64, height: u64) -> Result<(), &'static str> {
        Self::cap(width, self.max_width, "width exceeds limit")?;
        Self::cap(height, self.max_height, "height exceeds limit")?;
        Self::cap(
            width.saturating_mul(height),
            self.max_pixels,
            "pixel count exceeds limit",
        )
    }

    /// Checks a pending buffer allocation against the memory cap.
    pub fn check_memory(&self, bytes: u64) -> Result<(), &'static str> {
        Self::cap(bytes, self.max_memory_bytes, "memory allocation exceeds limit")
    }

    fn cap(value: u64, cap: Option<u64>, message: &'static str) -> Result<(), &'static str> {
        match cap {
            Some(max) if value > max => Err(message),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_by_default() {
        let limits = Limits::none();
        assert!(limits.check_dimensions(u64::MAX, u64::MAX).is_ok());
        assert!(limits.check_memory(u64::MAX).is_ok());
    }

    #[test]
    fn dimension_caps() {
        let limits = Limits {
            max_width: Some(640),
            max_height: Some(480),
            max_pixels: Some(200_000),
            ..Default::default()
        };

        assert!(limits.check_dimensions(640, 300).is_ok());
        assert!(limits.check_dimensions(641, 100).is_err());
        assert!(limits.check_dimensions(100, 481).is_err());
        // 640 * 480 = 307_200 pixels, over the pixel cap alone.
        assert!(limits.check_dimensions(640, 480).is_err());
    }

    #[test]
    fn pixel_count_saturates_instead_of_wrapping() {
        let limits = Limits {
            max_pixels: Some(1_000_000),
            ..Default::default()
        };
        assert!(limits.check_dimensions(u64::MAX, 2).is_err());
    }

    #[test]
    fn memory_cap() {
        let limits = Limits {
            max_memory_bytes: Some(1 << 20),
            ..Default::default()
        };

        assert!(limits.check_memory(1 << 20).is_ok());
        assert!(limits.check_memory((1 << 20) + 1).is_err());
    }
}
