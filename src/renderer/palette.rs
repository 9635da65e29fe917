//! Colour helpers for gradient shading

/// Lighten (positive) or darken (negative) a `#rrggbb` colour by a percent
/// of full scale. Each channel is clamped to 0..=255.
///
/// Returns `None` for anything that isn't a six-digit hex colour.
pub fn shade_color(color: &str, percent: f32) -> Option<String> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 {
        return None;
    }
    let num = u32::from_str_radix(hex, 16).ok()?;
    let amt = (2.55 * percent).round() as i32;

    let shift = |channel: u32| ((channel & 0xFF) as i32 + amt).clamp(0, 255) as u32;
    let r = shift(num >> 16);
    let g = shift(num >> 8);
    let b = shift(num);

    Some(format!("#{:06x}", (r << 16) | (g << 8) | b))
}

/// Background sky gradient stops (top, bottom)
pub const SKY_TOP: &str = "#87CEEB";
pub const SKY_BOTTOM: &str = "#E0F6FF";

/// Avatar body gradient stops (centre, rim)
pub const AVATAR_CORE: &str = "#FFD700";
pub const AVATAR_RIM: &str = "#FFA500";
pub const BEAK: &str = "#FF6347";
pub const OUTLINE: &str = "#333";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken() {
        // -20% => -51 per channel
        assert_eq!(shade_color("#FF6B6B", -20.0).as_deref(), Some("#cc3838"));
    }

    #[test]
    fn test_clamps_channels() {
        assert_eq!(shade_color("#101010", -20.0).as_deref(), Some("#000000"));
        assert_eq!(shade_color("#F0F0F0", 20.0).as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(shade_color("#FFF", -20.0), None);
        assert_eq!(shade_color("#GGGGGG", -20.0), None);
    }
}
