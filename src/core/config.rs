// Build-time configuration.
//
// Values come from environment variables captured at compile time with
// `option_env!`; a browser bundle has no process environment at runtime.

use super::constants::*;

const FALLBACK_SERVICE_ID: &str = "YOUR_SERVICE_ID";
const FALLBACK_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
const FALLBACK_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

/// Credentials for the email delivery service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    /// Empty or missing values fall back to the literal placeholders.
    pub fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        fn pick(v: Option<&str>, fallback: &str) -> String {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        }
        Self {
            service_id: pick(service_id, FALLBACK_SERVICE_ID),
            template_id: pick(template_id, FALLBACK_TEMPLATE_ID),
            public_key: pick(public_key, FALLBACK_PUBLIC_KEY),
        }
    }

    /// True while any field still holds its placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.service_id == FALLBACK_SERVICE_ID
            || self.template_id == FALLBACK_TEMPLATE_ID
            || self.public_key == FALLBACK_PUBLIC_KEY
    }
}

/// Console log level from `TUNNEL_LOG_LEVEL`, defaulting to `info`.
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("TUNNEL_LOG_LEVEL")).unwrap_or(log::Level::Info)
}

pub fn parse_log_level(raw: Option<&str>) -> Option<log::Level> {
    raw.and_then(|s| s.trim().parse::<log::Level>().ok())
}

/// Geometry and interaction budget for the current viewport class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceProfile {
    Desktop,
    Mobile,
}

impl DeviceProfile {
    pub fn classify(viewport_width: f64, touch_only: bool) -> Self {
        if touch_only || viewport_width < MOBILE_BREAKPOINT_PX {
            DeviceProfile::Mobile
        } else {
            DeviceProfile::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceProfile::Mobile
    }

    pub fn particle_count(self) -> usize {
        match self {
            DeviceProfile::Desktop => PARTICLE_COUNT_DESKTOP,
            DeviceProfile::Mobile => PARTICLE_COUNT_MOBILE,
        }
    }

    pub fn ring_count(self) -> usize {
        match self {
            DeviceProfile::Desktop => RING_COUNT_DESKTOP,
            DeviceProfile::Mobile => RING_COUNT_MOBILE,
        }
    }

    /// Mouse parallax is disabled on touch layouts.
    pub fn parallax(self) -> bool {
        self == DeviceProfile::Desktop
    }

    pub fn bloom_strength(self) -> f32 {
        match self {
            DeviceProfile::Desktop => BLOOM_STRENGTH_DESKTOP,
            DeviceProfile::Mobile => BLOOM_STRENGTH_MOBILE,
        }
    }

    pub fn max_device_pixel_ratio(self) -> f64 {
        match self {
            DeviceProfile::Desktop => DPR_MAX_DESKTOP,
            DeviceProfile::Mobile => DPR_MAX_MOBILE,
        }
    }
}
