mod core;
mod geometry;

pub use self::core::*;
pub use geometry::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 450.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 1920.0,
            height: 1080.0,
        };
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn rect_edges_and_parts() {
        let r = Rect::from_parts(Point::new(20.0, 30.0), Size::new(100.0, 50.0));
        assert_eq!(r.right(), 120.0);
        assert_eq!(r.bottom(), 80.0);
        assert_eq!(r.origin(), Point::new(20.0, 30.0));
        assert_eq!(r.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn rect_contains_is_edge_inclusive() {
        let r = Rect::from_parts(Point::new(0.0, 0.0), Size::new(100.0, 50.0));
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(100.0, 50.0)));
        assert!(r.contains(Point::new(50.0, 25.0)));
        assert!(!r.contains(Point::new(100.1, 25.0)));
        assert!(!r.contains(Point::new(50.0, -0.1)));
    }

    #[test]
    fn point_delta_and_offset() {
        let start = Point::new(100.0, 200.0);
        let now = Point::new(130.0, 180.0);
        assert_eq!(now.delta_from(start), (30.0, -20.0));
        assert_eq!(start.offset(30.0, -20.0), now);
    }

    #[test]
    fn point_sanitized_replaces_non_finite() {
        let p = Point::new(f64::NAN, f64::INFINITY).sanitized();
        assert_eq!(p, Point::new(0.0, 0.0));
        let p = Point::new(-5.0, 7.5).sanitized();
        assert_eq!(p, Point::new(-5.0, 7.5));
    }

    #[test]
    fn size_sanitized_treats_negative_as_zero() {
        let s = Size::new(-10.0, f64::NEG_INFINITY).sanitized();
        assert_eq!(s, Size::new(0.0, 0.0));
        let s = Size::new(300.0, 200.0).sanitized();
        assert_eq!(s, Size::new(300.0, 200.0));
    }

    #[test]
    fn panel_id_display() {
        let id = PanelId::new("price-chart");
        assert_eq!(id.to_string(), "panel:price-chart");
        assert_eq!(id.as_str(), "price-chart");
    }

    #[test]
    fn panel_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PanelId::from("a"));
        set.insert(PanelId::from("b"));
        set.insert(PanelId::from("a"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn panel_id_serializes_as_plain_string() {
        let id = PanelId::new("financials");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"financials\"");
        let deserialized: PanelId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
