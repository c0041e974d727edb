//! # Popup Lifecycle Integration Tests
//!
//! Drives a popup through a headless container the way a graph surface
//! does on hover: set content, set position, show, hide.

use netpop_ui::surface::{DIRECTION_ATTRIBUTE, GRAPH_ID_ATTRIBUTE};
use netpop_ui::{
    Direction, MemoryContainer, MemoryNode, MemorySurface, Point, Popup, PopupConfig,
    PopupContent, PopupError, Rect, Size, Surface, Visibility,
};

fn popup_in(container: &mut MemoryContainer, size: Size) -> Popup<MemorySurface> {
    let mut popup = Popup::new(container);
    popup.surface_mut().set_client_size(size);
    popup
}

/// Test: hiding twice leaves the same hidden state.
#[test]
fn test_hide_is_idempotent() {
    let mut container = MemoryContainer::new(Size::new(100, 100));
    let mut popup = popup_in(&mut container, Size::new(30, 20));
    popup.set_text("hello");
    popup.set_position(50, 50).unwrap();
    popup.show();

    popup.hide();
    let first = (
        popup.is_hidden(),
        popup.surface().style("visibility"),
        popup.surface().offset(),
        popup.direction(),
    );

    popup.hide();
    let second = (
        popup.is_hidden(),
        popup.surface().style("visibility"),
        popup.surface().offset(),
        popup.direction(),
    );

    assert!(first.0);
    assert_eq!(first.1.as_deref(), Some("hidden"));
    assert_eq!(first, second);
}

/// Test: identical direction requests write the attribute once.
#[test]
fn test_repeated_direction_writes_once() {
    let mut container = MemoryContainer::new(Size::new(100, 100));
    let mut popup = popup_in(&mut container, Size::new(30, 20));

    popup.set_direction(Direction::Right);
    popup.set_direction(Direction::Right);

    assert_eq!(popup.surface().attribute_writes(DIRECTION_ATTRIBUTE), 1);
}

/// Test: bottom overflow pulls the popup up to keep the padding.
#[test]
fn test_bottom_overflow_clamps_top() {
    let mut container = MemoryContainer::new(Size::new(100, 100));
    let mut popup = popup_in(&mut container, Size::new(30, 20));

    // naive top = 90, and 90 + 20 + 5 = 115 > 100
    popup.set_position(50, 110).unwrap();
    popup.show();

    assert_eq!(popup.surface().style("top").as_deref(), Some("75px"));
}

/// Test: a popup taller than the container is pinned to the top padding.
#[test]
fn test_tall_popup_pinned_to_padding() {
    let mut container = MemoryContainer::new(Size::new(100, 100));
    let mut popup = popup_in(&mut container, Size::new(30, 150));

    popup.set_position(50, 50).unwrap();
    popup.show();

    assert_eq!(popup.surface().style("top").as_deref(), Some("5px"));
    assert!(popup.placement().unwrap().pinned_top);
}

/// Test: a right-edge clamp forces direction "none" over an explicit hint.
#[test]
fn test_horizontal_clamp_suppresses_direction() {
    for explicit in [Direction::Left, Direction::Right] {
        let mut container = MemoryContainer::new(Size::new(100, 100));
        let mut popup = popup_in(&mut container, Size::new(30, 20));
        popup.set_direction(explicit);

        // 95 + 15 + 5 = 115 > 100
        popup.set_position(95, 50).unwrap();
        popup.show();

        assert_eq!(popup.surface().style("left").as_deref(), Some("65px"));
        assert_eq!(popup.direction(), Some(Direction::Suppressed));
        assert_eq!(
            popup.surface().attribute(DIRECTION_ATTRIBUTE).as_deref(),
            Some("none")
        );
        // pulled fully back inside the padded container
        let inner = Rect::from_size(container.size()).shrink(popup.padding());
        let placed = popup.placement().unwrap().rect(Size::new(30, 20));
        assert!(inner.contains_rect(&placed));
    }
}

/// Test: a left-edge clamp forces direction "none" over an explicit hint.
#[test]
fn test_left_clamp_suppresses_direction() {
    let mut container = MemoryContainer::new(Size::new(100, 100));
    let mut popup = popup_in(&mut container, Size::new(30, 20));
    popup.set_direction(Direction::Left);

    // 10 - 15 < 5
    popup.set_position(10, 50).unwrap();
    popup.show();

    let placement = popup.placement().unwrap();
    assert!(placement.clamped_left);
    assert!(!placement.clamped_right);
    assert_eq!(popup.surface().style("left").as_deref(), Some("5px"));
    assert_eq!(popup.direction(), Some(Direction::Suppressed));
    assert_eq!(
        popup.surface().attribute(DIRECTION_ATTRIBUTE).as_deref(),
        Some("none")
    );
}

/// Test: a popup wider than its container trips both horizontal clamps,
/// ends at the left padding and drops its hint.
#[test]
fn test_wide_popup_trips_both_clamps() {
    let mut container = MemoryContainer::new(Size::new(100, 100));
    let mut popup = popup_in(&mut container, Size::new(150, 20));
    popup.set_direction(Direction::Right);

    popup.set_position(50, 50).unwrap();
    popup.show();

    let placement = popup.placement().unwrap();
    assert!(placement.clamped_right);
    assert!(placement.clamped_left);
    assert_eq!(popup.surface().style("left").as_deref(), Some("5px"));
    assert_eq!(popup.surface().style("top").as_deref(), Some("30px"));
    assert_eq!(popup.direction(), Some(Direction::Suppressed));
    assert_eq!(
        popup.surface().attribute(DIRECTION_ATTRIBUTE).as_deref(),
        Some("none")
    );
}

/// Test: once clamping is no longer needed the hint goes back to auto.
#[test]
fn test_direction_reverts_to_auto_when_unclamped() {
    let mut container = MemoryContainer::new(Size::new(100, 100));
    let mut popup = popup_in(&mut container, Size::new(30, 20));

    popup.set_position(95, 50).unwrap();
    popup.show();
    assert_eq!(popup.direction(), Some(Direction::Suppressed));

    popup.set_position(50, 50).unwrap();
    popup.show();

    assert_eq!(popup.direction(), Some(Direction::Auto));
    assert_eq!(
        popup.surface().attribute(DIRECTION_ATTRIBUTE).as_deref(),
        Some("")
    );
}

/// Test: setting content twice leaves only the second.
#[test]
fn test_content_replacement_is_total() {
    let mut container = MemoryContainer::new(Size::new(300, 300));
    let mut popup = Popup::new(&mut container);

    popup.set_text("<b>first</b>");
    popup.set_text("second");
    assert_eq!(popup.surface().content().inner_markup(), "second");

    popup.set_text(PopupContent::node(MemoryNode::new("span", "third")));
    popup.set_text("fourth");
    let markup = popup.surface().content().inner_markup();
    assert_eq!(markup, "fourth");
    assert!(!markup.contains("third"));
}

/// Test: show, hide, show restores the last position and content.
#[test]
fn test_show_hide_show_round_trip() {
    let mut container = MemoryContainer::new(Size::new(200, 200));
    let mut popup = popup_in(&mut container, Size::new(30, 20));
    popup.set_text("Edge 3 → 4");
    popup.set_position(100, 100).unwrap();

    popup.show();
    let shown_at = popup.surface().offset();

    popup.hide();
    assert_eq!(popup.surface().visibility(), Some(Visibility::Hidden));

    popup.show();
    assert!(!popup.is_hidden());
    assert_eq!(popup.surface().visibility(), Some(Visibility::Visible));
    assert_eq!(popup.surface().offset(), shown_at);
    assert_eq!(popup.surface().content().inner_markup(), "Edge 3 → 4");
}

/// Test: container resizes are picked up on the next show only.
#[test]
fn test_container_resize_applies_on_next_show() {
    let mut container = MemoryContainer::new(Size::new(200, 200));
    let mut popup = popup_in(&mut container, Size::new(30, 20));
    popup.set_position(150, 100).unwrap();
    popup.show();
    assert_eq!(popup.surface().style("left").as_deref(), Some("150px"));

    container.resize(Size::new(100, 100));
    assert_eq!(popup.surface().style("left").as_deref(), Some("150px"));

    popup.show();
    assert_eq!(popup.surface().style("left").as_deref(), Some("65px"));
}

/// Test: measured content keeps the padding vertically and on the left,
/// and its midline inside the right padding, at every anchor.
#[test]
fn test_measured_popup_respects_padding() {
    let mut container = MemoryContainer::new(Size::new(240, 160));
    let mut popup = Popup::new(&mut container);
    popup.set_text("Node 12<br>degree: 4");
    let size = popup.surface().client_size();
    let bounds = container.size();
    let padding = popup.padding();
    let inner = Rect::from_size(bounds).shrink(padding);

    for x in (-40..=280).step_by(20) {
        for y in (-40..=200).step_by(20) {
            popup.set_position(x, y).unwrap();
            popup.show();

            let rect = popup.placement().unwrap().rect(size);
            assert!(
                inner.contains(rect.x, rect.y),
                "anchor ({x}, {y}) placed at {rect:?}"
            );
            assert!(
                rect.bottom() <= inner.bottom(),
                "anchor ({x}, {y}) placed at {rect:?}"
            );
            assert!(
                2 * (rect.x + padding) + rect.width <= 2 * bounds.width,
                "anchor ({x}, {y}) placed at {rect:?}"
            );
        }
    }
}

/// Test: a long hover session drained every frame keeps the log short.
#[test]
fn test_hover_session_write_log_stays_bounded() {
    let mut container = MemoryContainer::new(Size::new(640, 480));
    let mut popup = popup_in(&mut container, Size::new(80, 30));

    for frame in 0..5_000 {
        popup.set_anchor(Point::new(frame % 640, 240));
        popup.show_for(&(u64::try_from(frame).unwrap() % 50));
        let writes = popup.surface_mut().take_write_log();
        assert!(writes.len() <= 2, "frame {frame} wrote {writes:?}");
    }

    assert!(popup.surface().write_log().is_empty());
    assert_eq!(
        popup.surface().attribute(GRAPH_ID_ATTRIBUTE).as_deref(),
        Some("49")
    );
}

/// Test: rejected coordinates leave the popup where it was.
#[test]
fn test_non_numeric_position_keeps_anchor() {
    let mut container = MemoryContainer::new(Size::new(100, 100));
    let mut popup = popup_in(&mut container, Size::new(30, 20));
    popup.set_position("40", "60.9").unwrap();

    let result = popup.set_position("left", 10);

    assert!(matches!(result, Err(PopupError::NonNumericCoordinate { .. })));
    assert_eq!(popup.anchor().x, 40);
    assert_eq!(popup.anchor().y, 60);
}

/// Test: padding and class come from a TOML config file.
#[test]
fn test_popup_from_config_file() {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("test_popup_config_{id}.toml"));
    std::fs::write(&path, "padding = 10\nclass_name = \"graph-tooltip\"\n").unwrap();

    let config = PopupConfig::from_toml_file(&path).unwrap();
    let mut container = MemoryContainer::new(Size::new(100, 100));
    let mut popup = Popup::with_config(&mut container, &config).unwrap();
    popup.surface_mut().set_client_size(Size::new(30, 20));

    popup.set_position(95, 50).unwrap();
    popup.show();

    assert_eq!(popup.padding(), 10);
    assert_eq!(popup.surface().class_name(), "graph-tooltip");
    assert_eq!(popup.surface().style("left").as_deref(), Some("60px"));

    std::fs::remove_file(&path).ok();
}
