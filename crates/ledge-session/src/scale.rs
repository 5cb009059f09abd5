//! Scale-compatibility environment derivation for launched applications.
//!
//! Child processes render with their own toolkits, each with its own idea
//! of display scaling. Launches inject three assignments so Qt, GTK, and
//! EFL applications agree with the shell about effective DPI.

use ledge_core::screen::Screen;

/// Per-screen scale factors, consumed by Qt applications.
pub const QT_SCREEN_SCALE_FACTORS: &str = "QT_SCREEN_SCALE_FACTORS";
/// Integer UI scale, consumed by GTK applications.
pub const GDK_SCALE: &str = "GDK_SCALE";
/// Fractional UI scale, consumed by EFL applications.
pub const ELM_SCALE: &str = "ELM_SCALE";

/// Builds the environment assignments for a child process, given the
/// active screen's canvas scale and the full topology.
pub fn scale_environment(scale: f32, screens: &[Screen]) -> Vec<(String, String)> {
    let int_scale = scale.round() as i32;

    vec![
        (
            QT_SCREEN_SCALE_FACTORS.to_string(),
            qt_screen_scales(screens),
        ),
        (GDK_SCALE.to_string(), int_scale.to_string()),
        (ELM_SCALE.to_string(), format!("{scale:.1}")),
    ]
}

/// Concatenates `name=scale` pairs across the topology, `;`-separated.
fn qt_screen_scales(screens: &[Screen]) -> String {
    screens
        .iter()
        .map(|screen| {
            // Qt cannot render below unit scale
            let positive_scale = screen.scale.max(1.0);
            format!("{}={:.1}", screen.name, positive_scale)
        })
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topology() -> Vec<Screen> {
        vec![
            Screen::new("A", 1920, 1080, 0.8),
            Screen::new("B", 3840, 2160, 1.5),
        ]
    }

    #[test]
    fn test_qt_scales_floor_at_unit() {
        assert_eq!(qt_screen_scales(&topology()), "A=1.0;B=1.5");
    }

    #[test]
    fn test_environment_assignments() {
        let env = scale_environment(1.5, &topology());
        assert_eq!(
            env,
            vec![
                (
                    "QT_SCREEN_SCALE_FACTORS".to_string(),
                    "A=1.0;B=1.5".to_string()
                ),
                ("GDK_SCALE".to_string(), "2".to_string()),
                ("ELM_SCALE".to_string(), "1.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_gdk_scale_rounds_to_nearest() {
        let screens = topology();
        assert_eq!(scale_environment(1.4, &screens)[1].1, "1");
        assert_eq!(scale_environment(1.5, &screens)[1].1, "2");
        assert_eq!(scale_environment(2.0, &screens)[1].1, "2");
    }

    #[test]
    fn test_elm_scale_keeps_one_decimal() {
        let screens = topology();
        assert_eq!(scale_environment(0.8, &screens)[2].1, "0.8");
        assert_eq!(scale_environment(2.0, &screens)[2].1, "2.0");
    }
}
