//! Pure snap and resize geometry.
//!
//! Everything here is a function of pointer coordinates, gesture-start
//! snapshots, and viewport bounds; no shell state is read or written.

use crate::model::{PointerPosition, ResizeEdge, ShellTuning, SnapTarget, WindowRect};

/// Evaluates the snap zones against the current pointer position.
///
/// The top edge arms a full-screen snap, the left and right edges arm
/// half-screen snaps. At most one zone is active; the top zone is checked
/// first, so it wins near the upper corners.
pub fn snap_target_for_pointer(
    pointer: PointerPosition,
    viewport_w: i32,
    viewport_h: i32,
    tuning: &ShellTuning,
) -> Option<SnapTarget> {
    let menu_bar = tuning.menu_bar_height_px;
    let threshold = tuning.snap_threshold_px;
    let half_width = ((viewport_w as f64) / 2.0).round() as i32;
    let docked_height = viewport_h - menu_bar;

    if pointer.y <= threshold {
        return Some(SnapTarget {
            rect: WindowRect {
                x: 0,
                y: menu_bar,
                w: viewport_w,
                h: docked_height,
            },
            full_screen: true,
        });
    }

    if pointer.x <= threshold {
        return Some(SnapTarget {
            rect: WindowRect {
                x: 0,
                y: menu_bar,
                w: half_width,
                h: docked_height,
            },
            full_screen: false,
        });
    }

    if pointer.x >= viewport_w - threshold {
        return Some(SnapTarget {
            rect: WindowRect {
                x: half_width,
                y: menu_bar,
                w: half_width,
                h: docked_height,
            },
            full_screen: false,
        });
    }

    None
}

/// Applies a resize delta for the given edge to the gesture-start rect.
///
/// Width and height are clamped to the tuning floor at every step. When a
/// left or top edge crosses the floor, the origin is pinned so the opposite
/// edge's absolute position never moves.
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    tuning: &ShellTuning,
) -> WindowRect {
    let mut rect = match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            w: start.w + dx,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    };

    if rect.w < tuning.min_window_width {
        rect.w = tuning.min_window_width;
        if edge.touches_left() {
            rect.x = start.x + start.w - tuning.min_window_width;
        }
    }
    if rect.h < tuning.min_window_height {
        rect.h = tuning.min_window_height;
        if edge.touches_top() {
            rect.y = start.y + start.h - tuning.min_window_height;
        }
    }

    rect
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tuning() -> ShellTuning {
        ShellTuning::default()
    }

    fn start_rect() -> WindowRect {
        WindowRect {
            x: 200,
            y: 150,
            w: 800,
            h: 600,
        }
    }

    #[test]
    fn pointer_away_from_edges_arms_no_zone() {
        let target = snap_target_for_pointer(
            PointerPosition { x: 640, y: 400 },
            1280,
            800,
            &tuning(),
        );
        assert_eq!(target, None);
    }

    #[test]
    fn left_edge_arms_half_screen_snap() {
        let target = snap_target_for_pointer(PointerPosition { x: 3, y: 400 }, 1280, 800, &tuning())
            .expect("left zone");
        assert_eq!(
            target.rect,
            WindowRect {
                x: 0,
                y: 28,
                w: 640,
                h: 772
            }
        );
        assert!(!target.full_screen);
    }

    #[test]
    fn right_edge_arms_half_screen_snap() {
        let target =
            snap_target_for_pointer(PointerPosition { x: 1278, y: 400 }, 1280, 800, &tuning())
                .expect("right zone");
        assert_eq!(
            target.rect,
            WindowRect {
                x: 640,
                y: 28,
                w: 640,
                h: 772
            }
        );
        assert!(!target.full_screen);
    }

    #[test]
    fn top_edge_arms_full_screen_snap() {
        let target = snap_target_for_pointer(PointerPosition { x: 640, y: 2 }, 1280, 800, &tuning())
            .expect("top zone");
        assert!(target.full_screen);
        assert_eq!(
            target.rect,
            WindowRect {
                x: 0,
                y: 28,
                w: 1280,
                h: 772
            }
        );
    }

    #[test]
    fn top_zone_wins_inside_a_corner() {
        let target = snap_target_for_pointer(PointerPosition { x: 2, y: 2 }, 1280, 800, &tuning())
            .expect("corner zone");
        assert!(target.full_screen);
    }

    #[test]
    fn east_resize_grows_width_only() {
        let rect = resize_rect(start_rect(), ResizeEdge::East, 40, 99, &tuning());
        assert_eq!(
            rect,
            WindowRect {
                x: 200,
                y: 150,
                w: 840,
                h: 600
            }
        );
    }

    #[test]
    fn west_resize_moves_origin_and_shrinks_width() {
        let rect = resize_rect(start_rect(), ResizeEdge::West, 40, 0, &tuning());
        assert_eq!(
            rect,
            WindowRect {
                x: 240,
                y: 150,
                w: 760,
                h: 600
            }
        );
    }

    #[test]
    fn north_west_resize_adjusts_both_axes() {
        let rect = resize_rect(start_rect(), ResizeEdge::NorthWest, -20, 30, &tuning());
        assert_eq!(
            rect,
            WindowRect {
                x: 180,
                y: 180,
                w: 820,
                h: 570
            }
        );
    }

    #[test]
    fn width_floor_pins_right_edge_on_west_shrink() {
        let rect = resize_rect(start_rect(), ResizeEdge::West, 700, 0, &tuning());
        assert_eq!(rect.w, 300);
        // Right edge stays at x=1000 even though the drag overshot.
        assert_eq!(rect.x + rect.w, start_rect().x + start_rect().w);
    }

    #[test]
    fn height_floor_pins_bottom_edge_on_north_shrink() {
        let rect = resize_rect(start_rect(), ResizeEdge::North, 0, 550, &tuning());
        assert_eq!(rect.h, 200);
        assert_eq!(rect.y + rect.h, start_rect().y + start_rect().h);
    }

    #[test]
    fn east_shrink_clamps_width_without_moving_origin() {
        let rect = resize_rect(start_rect(), ResizeEdge::East, -700, 0, &tuning());
        assert_eq!(rect.w, 300);
        assert_eq!(rect.x, 200);
    }
}
