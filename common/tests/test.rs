use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.left(), 2.0);
    assert_eq!(rect.right(), 6.0);
    assert_eq!(rect.top(), 3.0);
    assert_eq!(rect.bottom(), 9.0);
    assert_eq!(rect.top_left(), (2.0, 3.0));
    assert_eq!(rect.top_right(), (6.0, 3.0));
    assert_eq!(rect.bottom_left(), (2.0, 9.0));
    assert_eq!(rect.bottom_right(), (6.0, 9.0));
    assert_eq!(rect.center_x(), 4.0);
    assert_eq!(rect.center_y(), 6.0);
    assert_eq!(rect.area(), 24.0);
}

#[test]
fn test_contains_point() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert!(rect.contains_point(2.0, 3.0));
    assert!(rect.contains_point(6.0, 9.0));
    assert!(!rect.contains_point(6.5, 3.0));
    assert!(!rect.contains_point(2.0, 9.5));
}

#[test]
fn test_contains_rectangle() {
    let outer = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(outer.contains_rectangle(&Rectangle::new(0.0, 0.0, 10.0, 10.0)));
    assert!(outer.contains_rectangle(&Rectangle::new(2.0, 2.0, 3.0, 3.0)));
    assert!(!outer.contains_rectangle(&Rectangle::new(8.0, 8.0, 3.0, 3.0)));
}

#[test]
fn test_intersects() {
    let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
    let touching = Rectangle::new(10.0, 0.0, 5.0, 5.0);
    let far = Rectangle::new(20.0, 20.0, 1.0, 1.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&touching));
    assert!(!a.intersects(&far));
}

#[test]
fn test_is_valid() {
    assert!(Rectangle::new(0.0, 0.0, 0.0, 0.0).is_valid());
    assert!(!Rectangle::new(0.0, 0.0, -1.0, 1.0).is_valid());
    assert!(!Rectangle::new(f32::NAN, 0.0, 1.0, 1.0).is_valid());
    assert!(!Rectangle::new(0.0, 0.0, 1.0, f32::INFINITY).is_valid());
}

#[test]
fn test_expand_to_include() {
    let mut rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    let other_rect = Rectangle::new(6.0, 5.0, 4.0, 2.0);
    rect.expand_to_include(&other_rect);
    assert_eq!(rect.left(), 2.0);
    assert_eq!(rect.right(), 10.0);
    assert_eq!(rect.top(), 3.0);
    assert_eq!(rect.bottom(), 9.0);
    assert_eq!(rect.width(), 8.0);
    assert_eq!(rect.height(), 6.0);
}

#[test]
fn test_get_random_rect_inside() {
    let mut rng = StdRng::seed_from_u64(42);
    let bounds = Rectangle::new(-50.0, 10.0, 100.0, 80.0);
    for _ in 0..1000 {
        let rect = bounds.get_random_rect_inside(15.0, 25.0, &mut rng);
        assert!(rect.is_valid());
        assert!(rect.width <= 15.0);
        assert!(rect.height <= 25.0);
        assert!(rect.left() >= bounds.left() && rect.top() >= bounds.top());
        assert!(rect.right() <= bounds.right() + 1e-3, "{:?} escaped {:?}", rect, bounds);
        assert!(rect.bottom() <= bounds.bottom() + 1e-3, "{:?} escaped {:?}", rect, bounds);
    }
}

#[test]
fn test_get_random_rect_inside_larger_than_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let bounds = Rectangle::new(0.0, 0.0, 4.0, 4.0);
    let rect = bounds.get_random_rect_inside(100.0, 100.0, &mut rng);
    assert!(rect.width <= 4.0 && rect.height <= 4.0);
    assert!(rect.right() <= 4.0 + 1e-3 && rect.bottom() <= 4.0 + 1e-3);
}
