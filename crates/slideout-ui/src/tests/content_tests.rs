use super::*;

#[test]
fn point_outside_bounds_never_consumes() {
    let node = ContentNode::new(Rect::new(0.0, 0.0, 100.0, 100.0)).scrollable(|_| true);
    assert!(!node.can_consume(10.0, Point::new(150.0, 50.0)));
}

#[test]
fn scrollable_node_consults_its_closure() {
    let node = ContentNode::new(Rect::new(0.0, 0.0, 100.0, 100.0)).scrollable(|delta| delta > 0.0);
    assert!(node.can_consume(10.0, Point::new(50.0, 50.0)));
    assert!(!node.can_consume(-10.0, Point::new(50.0, 50.0)));
}

#[test]
fn node_without_closure_does_not_consume() {
    let node = ContentNode::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    assert!(!node.can_consume(10.0, Point::new(50.0, 50.0)));
}

#[test]
fn children_are_hit_tested_in_local_coordinates() {
    let root = ContentNode::new(Rect::new(0.0, 0.0, 400.0, 800.0))
        .child(ContentNode::new(Rect::new(50.0, 50.0, 100.0, 100.0)).scrollable(|_| true));
    assert!(root.can_consume(10.0, Point::new(60.0, 60.0)));
    assert!(!root.can_consume(10.0, Point::new(200.0, 200.0)));
}

#[test]
fn translation_shifts_the_hit_box() {
    let root = ContentNode::new(Rect::new(0.0, 0.0, 400.0, 800.0)).child(
        ContentNode::new(Rect::new(0.0, 0.0, 100.0, 100.0))
            .translation(Point::new(200.0, 0.0))
            .scrollable(|_| true),
    );
    assert!(root.can_consume(10.0, Point::new(250.0, 50.0)));
    assert!(!root.can_consume(10.0, Point::new(50.0, 50.0)));
}

#[test]
fn deep_child_wins_over_its_parent() {
    let root = ContentNode::new(Rect::new(0.0, 0.0, 400.0, 800.0))
        .scrollable(|_| false)
        .child(
            ContentNode::new(Rect::new(0.0, 0.0, 400.0, 400.0))
                .child(ContentNode::new(Rect::new(0.0, 0.0, 400.0, 400.0)).scrollable(|_| true)),
        );
    assert!(root.can_consume(10.0, Point::new(100.0, 100.0)));
}
