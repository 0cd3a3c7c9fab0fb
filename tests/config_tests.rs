// Host-side tests for build-time configuration, device profiles and content.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod content {
    include!("../src/core/content.rs");
}

use config::*;
use constants::*;

#[test]
fn email_config_falls_back_to_placeholders() {
    let cfg = EmailConfig::from_values(None, Some("   "), Some(" pk_live "));
    assert_eq!(cfg.service_id, "YOUR_SERVICE_ID");
    assert_eq!(cfg.template_id, "YOUR_TEMPLATE_ID");
    assert_eq!(cfg.public_key, "pk_live");
    assert!(cfg.is_placeholder());

    let real = EmailConfig::from_values(Some("svc"), Some("tpl"), Some("pk"));
    assert!(!real.is_placeholder());
}

#[test]
fn log_level_parsing() {
    assert_eq!(parse_log_level(Some("debug")), Some(log::Level::Debug));
    assert_eq!(parse_log_level(Some(" WARN ")), Some(log::Level::Warn));
    assert_eq!(parse_log_level(Some("chatty")), None);
    assert_eq!(parse_log_level(None), None);
}

#[test]
fn profile_follows_the_breakpoint_and_touch() {
    assert_eq!(DeviceProfile::classify(767.0, false), DeviceProfile::Mobile);
    assert_eq!(DeviceProfile::classify(768.0, false), DeviceProfile::Desktop);
    assert_eq!(DeviceProfile::classify(1920.0, true), DeviceProfile::Mobile);
}

#[test]
fn mobile_profile_halves_the_geometry_and_disables_parallax() {
    let d = DeviceProfile::Desktop;
    let m = DeviceProfile::Mobile;
    assert_eq!(d.particle_count(), 1200);
    assert_eq!(m.particle_count(), 600);
    assert_eq!(d.ring_count(), 50);
    assert_eq!(m.ring_count(), 25);
    assert!(d.parallax());
    assert!(!m.parallax());
    assert!(m.bloom_strength() < d.bloom_strength());
    assert_eq!(m.max_device_pixel_ratio(), 1.0);
    assert_eq!(d.max_device_pixel_ratio(), 1.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tunables_are_consistent() {
    assert!(FOG_NEAR < FOG_FAR);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_SMOOTHING > 0.0 && CAMERA_SMOOTHING < 1.0);
    assert!(CLOUD_DIST_BEHIND < 0.0 && CLOUD_DIST_FAR > 0.0);
    assert!(TAG_STAGGER_START < TAG_FADE_OUT_START);
    assert_eq!(CURSOR_TRAIL_OPACITY.len(), 3);
    assert!(CURSOR_DOT_SEC < CURSOR_RING_SEC && CURSOR_RING_SEC < CURSOR_TRAIL_BASE_SEC);
}

#[test]
fn content_lists_match_the_site() {
    assert_eq!(content::PROJECTS.len(), 6);
    assert_eq!(content::SKILLS.len(), 12);
    assert!(content::SKILLS.iter().all(|s| s.level <= 100));
    assert!(content::PROJECTS.iter().all(|p| !p.stack.is_empty()));
    let mut names: Vec<_> = content::SKILLS.iter().map(|s| s.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), content::SKILLS.len());
}

fn srgb_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

#[test]
fn palette_is_stored_linear() {
    let hexes = [0x6366f1, 0xa855f7, 0x3b82f6];
    for (color, hex) in BAND_COLORS.iter().zip(hexes) {
        let expected = srgb_to_linear(hex);
        for (c, e) in color.iter().zip(expected) {
            assert!((c - e).abs() < 1e-3, "{hex:06x}: {c} vs {e}");
        }
    }
    assert_eq!(RING_COLOR, BAND_COLORS[0]);
    let bg = srgb_to_linear(0x050505);
    assert!((BACKGROUND_RGB[0] - bg[0]).abs() < 1e-4);
}
