use super::*;

const CONTAINER: Size = Size {
    width: 400.0,
    height: 800.0,
};

#[test]
fn open_offsets_follow_edge_signs() {
    assert_eq!(AxisPolicy::new(Position::Left).open_offset(300), 300.0);
    assert_eq!(AxisPolicy::new(Position::Top).open_offset(300), 300.0);
    assert_eq!(AxisPolicy::new(Position::Right).open_offset(300), -300.0);
    assert_eq!(AxisPolicy::new(Position::Bottom).open_offset(300), -300.0);
}

#[test]
fn offset_ranges_are_ordered() {
    assert_eq!(AxisPolicy::new(Position::Left).offset_range(300), (0.0, 300.0));
    assert_eq!(
        AxisPolicy::new(Position::Right).offset_range(300),
        (-300.0, 0.0)
    );
}

#[test]
fn axis_and_cross_values() {
    let point = Point::new(10.0, 20.0);
    let horizontal = AxisPolicy::new(Position::Left);
    assert_eq!(horizontal.axis(), Axis::Horizontal);
    assert_eq!(horizontal.axis_value(point), 10.0);
    assert_eq!(horizontal.cross_value(point), 20.0);

    let vertical = AxisPolicy::new(Position::Bottom);
    assert_eq!(vertical.axis(), Axis::Vertical);
    assert_eq!(vertical.axis_value(point), 20.0);
    assert_eq!(vertical.cross_value(point), 10.0);
}

#[test]
fn edge_strips_hug_their_edges() {
    let touch = 24.0;
    assert!(AxisPolicy::new(Position::Left).edge_contains(Point::new(24.0, 400.0), CONTAINER, touch));
    assert!(!AxisPolicy::new(Position::Left).edge_contains(Point::new(25.0, 400.0), CONTAINER, touch));
    assert!(AxisPolicy::new(Position::Right).edge_contains(Point::new(376.0, 400.0), CONTAINER, touch));
    assert!(!AxisPolicy::new(Position::Right).edge_contains(Point::new(375.0, 400.0), CONTAINER, touch));
    assert!(AxisPolicy::new(Position::Top).edge_contains(Point::new(200.0, 24.0), CONTAINER, touch));
    assert!(AxisPolicy::new(Position::Bottom).edge_contains(Point::new(200.0, 776.0), CONTAINER, touch));
    assert!(!AxisPolicy::new(Position::Bottom).edge_contains(Point::new(200.0, 775.0), CONTAINER, touch));
}

#[test]
fn content_points_sit_past_the_exposed_menu() {
    let left = AxisPolicy::new(Position::Left);
    assert!(left.is_content_point(Point::new(150.0, 10.0), 100.0, CONTAINER));
    assert!(!left.is_content_point(Point::new(50.0, 10.0), 100.0, CONTAINER));

    let right = AxisPolicy::new(Position::Right);
    assert!(right.is_content_point(Point::new(250.0, 10.0), -100.0, CONTAINER));
    assert!(!right.is_content_point(Point::new(350.0, 10.0), -100.0, CONTAINER));
}

#[test]
fn velocity_sign_decides_direction() {
    assert!(AxisPolicy::new(Position::Left).velocity_opens(500.0));
    assert!(!AxisPolicy::new(Position::Left).velocity_opens(-500.0));
    assert!(AxisPolicy::new(Position::Right).velocity_opens(-500.0));
    assert!(!AxisPolicy::new(Position::Right).velocity_opens(500.0));
    assert!(!AxisPolicy::new(Position::Left).velocity_opens(0.0));
}

#[test]
fn layout_translates_content_by_offset() {
    let left = AxisPolicy::new(Position::Left);
    let frames = left.layout(300.0, 300, CONTAINER, false);
    assert_eq!(frames.content.x, 300.0);
    assert_eq!(frames.menu, Rect::new(0.0, 0.0, 300.0, 800.0));

    let right = AxisPolicy::new(Position::Right);
    let frames = right.layout(-300.0, 300, CONTAINER, false);
    assert_eq!(frames.content.x, -300.0);
    assert_eq!(frames.menu, Rect::new(100.0, 0.0, 300.0, 800.0));
}

#[test]
fn parallax_tucks_the_closed_menu_toward_its_edge() {
    let left = AxisPolicy::new(Position::Left);
    let closed = left.layout(0.0, 300, CONTAINER, true);
    assert_eq!(closed.menu.x, -100.0);
    let open = left.layout(300.0, 300, CONTAINER, true);
    assert_eq!(open.menu.x, 0.0);

    let right = AxisPolicy::new(Position::Right);
    let closed = right.layout(0.0, 300, CONTAINER, true);
    assert_eq!(closed.menu.x, 200.0);
    let open = right.layout(-300.0, 300, CONTAINER, true);
    assert_eq!(open.menu.x, 100.0);
}
