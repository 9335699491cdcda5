//! The PanelLayoutManager turns pointer events into panel geometry,
//! focus and stacking changes.

mod paint;
mod pointer;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::EventLog;
    use crate::capture::RecordingCapture;
    use crate::focus::ACTIVE_Z_INDEX;
    use crate::guides::AlignmentGuide;
    use crate::hit::HitTarget;
    use crate::interaction::{Handle, InteractionState};
    use crate::panel::PanelGeometry;
    use crate::settings::LayoutSettings;
    use finboard_common::events::PanelEvent;
    use finboard_common::types::{PanelId, Point, Size};

    fn manager() -> PanelLayoutManager {
        PanelLayoutManager::default()
    }

    fn geometry(id: &str, x: f64, y: f64, w: f64, h: f64) -> PanelGeometry {
        PanelGeometry {
            id: PanelId::new(id),
            position: Point::new(x, y),
            size: Size::new(w, h),
            min_size: Size::new(300.0, 200.0),
        }
    }

    fn last_position(log: &EventLog) -> Option<Point> {
        log.events().iter().rev().find_map(|e| match e {
            PanelEvent::PositionChanged { position, .. } => Some(*position),
            _ => None,
        })
    }

    fn last_size(log: &EventLog) -> Option<Size> {
        log.events().iter().rev().find_map(|e| match e {
            PanelEvent::SizeChanged { size, .. } => Some(*size),
            _ => None,
        })
    }

    const DRAG: HitTarget = HitTarget::Handle(Handle::Drag);
    const CORNER: HitTarget = HitTarget::Handle(Handle::ResizeCorner);

    #[test]
    fn new_manager_is_idle() {
        let mgr = manager();
        assert!(!mgr.is_tracking());
        assert!(mgr.active_panel().is_none());
        assert_eq!(mgr.state_of(&PanelId::new("a")), InteractionState::Idle);
    }

    #[test]
    fn drag_handle_starts_drag_and_focuses() {
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 20.0, 20.0, 800.0, 450.0);

        assert!(mgr.pointer_down(&a, DRAG, Point::new(100.0, 30.0), vec![], &mut log));
        assert_eq!(mgr.state_of(&a.id), InteractionState::Dragging);
        assert!(mgr.is_tracking());
        assert_eq!(log.events(), &[PanelEvent::Focused(a.id.clone())]);
    }

    #[test]
    fn body_click_focuses_without_interaction() {
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 20.0, 20.0, 800.0, 450.0);

        assert!(mgr.pointer_down(&a, HitTarget::Body, Point::new(300.0, 300.0), vec![], &mut log));
        assert_eq!(mgr.state_of(&a.id), InteractionState::Idle);
        assert!(!mgr.is_tracking());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn drag_move_commits_position() {
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 20.0, 20.0, 800.0, 450.0);
        mgr.pointer_down(&a, DRAG, Point::new(100.0, 30.0), vec![], &mut log);

        assert!(mgr.pointer_move(Point::new(160.0, 70.0), &mut log));
        assert_eq!(last_position(&log), Some(Point::new(80.0, 60.0)));
    }

    #[test]
    fn drag_clamps_to_left_bound() {
        // A at {20,20}, 800x450, margin 100, drag (-900, 0) => x = -700.
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = PanelGeometry {
            min_size: Size::new(400.0, 300.0),
            ..geometry("a", 20.0, 20.0, 800.0, 450.0)
        };
        mgr.pointer_down(&a, DRAG, Point::new(1000.0, 30.0), vec![], &mut log);
        mgr.pointer_move(Point::new(100.0, 30.0), &mut log);
        assert_eq!(last_position(&log), Some(Point::new(-700.0, 20.0)));
    }

    #[test]
    fn drag_never_goes_above_canvas_top() {
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 20.0, 20.0, 400.0, 300.0);
        mgr.pointer_down(&a, DRAG, Point::new(50.0, 30.0), vec![], &mut log);
        mgr.pointer_move(Point::new(50.0, -500.0), &mut log);
        assert_eq!(last_position(&log).map(|p| p.y), Some(0.0));
    }

    #[test]
    fn drag_snaps_to_vertical_guide() {
        // Guide at x=500, left edge lands at 505 with threshold 10 => 500.
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 0.0, 100.0, 400.0, 300.0);
        let guides = vec![AlignmentGuide::vertical(500.0)];
        mgr.pointer_down(&a, DRAG, Point::new(10.0, 110.0), guides, &mut log);
        mgr.pointer_move(Point::new(515.0, 110.0), &mut log);

        assert_eq!(last_position(&log), Some(Point::new(500.0, 100.0)));
        assert_eq!(mgr.active_guides(), &[AlignmentGuide::vertical(500.0)]);
    }

    #[test]
    fn bounds_clamp_alone_reports_no_guide() {
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 0.0, 100.0, 400.0, 300.0);
        let guides = vec![AlignmentGuide::horizontal(0.0)];
        mgr.pointer_down(&a, DRAG, Point::new(10.0, 110.0), guides, &mut log);
        mgr.pointer_move(Point::new(10.0, -400.0), &mut log);

        assert_eq!(last_position(&log), Some(Point::new(0.0, 0.0)));
        assert!(mgr.active_guides().is_empty());

        // Close enough to snap onto the same line.
        mgr.pointer_move(Point::new(10.0, 15.0), &mut log);
        assert_eq!(last_position(&log), Some(Point::new(0.0, 0.0)));
        assert_eq!(mgr.active_guides(), &[AlignmentGuide::horizontal(0.0)]);
    }

    #[test]
    fn snapping_disabled_by_settings() {
        let settings = LayoutSettings {
            show_alignment_guides: false,
            ..LayoutSettings::default()
        };
        let mut mgr = PanelLayoutManager::new(settings);
        let mut log = EventLog::new();
        let a = geometry("a", 0.0, 100.0, 400.0, 300.0);
        mgr.pointer_down(&a, DRAG, Point::new(10.0, 110.0), vec![AlignmentGuide::vertical(500.0)], &mut log);
        mgr.pointer_move(Point::new(515.0, 110.0), &mut log);

        assert_eq!(last_position(&log), Some(Point::new(505.0, 100.0)));
        assert!(mgr.active_guides().is_empty());
    }

    #[test]
    fn corner_resize_clamps_to_minimum() {
        // {400,300}, min {300,200}: (-50,-50) => {350,250}; (-100,-100) more => {300,200}.
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 20.0, 20.0, 400.0, 300.0);
        mgr.pointer_down(&a, CORNER, Point::new(420.0, 320.0), vec![], &mut log);
        assert_eq!(mgr.state_of(&a.id), InteractionState::ResizingCorner);

        mgr.pointer_move(Point::new(370.0, 270.0), &mut log);
        assert_eq!(last_size(&log), Some(Size::new(350.0, 250.0)));

        mgr.pointer_move(Point::new(270.0, 170.0), &mut log);
        assert_eq!(last_size(&log), Some(Size::new(300.0, 200.0)));
    }

    #[test]
    fn resize_does_not_snap() {
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 0.0, 0.0, 400.0, 300.0);
        let guides = vec![AlignmentGuide::vertical(500.0)];
        mgr.pointer_down(&a, HitTarget::Handle(Handle::ResizeRight), Point::new(400.0, 150.0), guides, &mut log);
        mgr.pointer_move(Point::new(495.0, 150.0), &mut log);
        assert_eq!(last_size(&log), Some(Size::new(495.0, 300.0)));
        assert!(mgr.active_guides().is_empty());
    }

    #[test]
    fn shrinking_reclamps_position_into_bounds() {
        // At the left bound for width 800 (x = -700); shrinking to 400
        // moves the bound to -300.
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", -700.0, 20.0, 800.0, 450.0);
        mgr.pointer_down(&a, HitTarget::Handle(Handle::ResizeRight), Point::new(100.0, 200.0), vec![], &mut log);
        mgr.pointer_move(Point::new(-300.0, 200.0), &mut log);

        assert_eq!(last_size(&log), Some(Size::new(400.0, 450.0)));
        assert_eq!(last_position(&log), Some(Point::new(-300.0, 20.0)));

        // Growing back restores the anchored position.
        mgr.pointer_move(Point::new(100.0, 200.0), &mut log);
        assert_eq!(last_position(&log), Some(Point::new(-700.0, 20.0)));
    }

    #[test]
    fn pointer_up_returns_to_idle_and_releases() {
        let mut mgr = PanelLayoutManager::with_capture(LayoutSettings::default(), RecordingCapture::default());
        let mut log = EventLog::new();
        let a = geometry("a", 20.0, 20.0, 400.0, 300.0);
        mgr.pointer_down(&a, DRAG, Point::new(30.0, 30.0), vec![], &mut log);
        assert!(mgr.capture().is_captured());

        assert!(mgr.pointer_up());
        assert_eq!(mgr.state_of(&a.id), InteractionState::Idle);
        assert!(!mgr.is_tracking());
        assert!(!mgr.capture().is_captured());
        assert_eq!(mgr.capture().releases, 1);
    }

    #[test]
    fn orphaned_pointer_up_is_a_no_op() {
        let mut mgr = PanelLayoutManager::with_capture(LayoutSettings::default(), RecordingCapture::default());
        assert!(!mgr.pointer_up());
        assert!(!mgr.pointer_up());
        assert!(!mgr.is_tracking());
        assert_eq!(mgr.capture(), &RecordingCapture::default());
    }

    #[test]
    fn move_without_interaction_is_a_no_op() {
        let mut mgr = manager();
        let mut log = EventLog::new();
        assert!(!mgr.pointer_move(Point::new(10.0, 10.0), &mut log));
        assert!(log.is_empty());
    }

    #[test]
    fn capture_lost_resolves_to_idle() {
        let mut mgr = PanelLayoutManager::with_capture(LayoutSettings::default(), RecordingCapture::default());
        let mut log = EventLog::new();
        let a = geometry("a", 20.0, 20.0, 400.0, 300.0);
        mgr.pointer_down(&a, CORNER, Point::new(420.0, 320.0), vec![], &mut log);
        assert!(mgr.capture_lost());
        assert!(!mgr.is_tracking());
        assert_eq!(mgr.capture().releases, 1);
    }

    #[test]
    fn second_pointer_down_ends_first_interaction() {
        let mut mgr = PanelLayoutManager::with_capture(LayoutSettings::default(), RecordingCapture::default());
        let mut log = EventLog::new();
        let a = geometry("a", 20.0, 20.0, 400.0, 300.0);
        let b = geometry("b", 600.0, 20.0, 400.0, 300.0);

        mgr.pointer_down(&a, DRAG, Point::new(30.0, 30.0), vec![], &mut log);
        mgr.pointer_down(&b, CORNER, Point::new(1000.0, 320.0), vec![], &mut log);

        assert_eq!(mgr.state_of(&a.id), InteractionState::Idle);
        assert_eq!(mgr.state_of(&b.id), InteractionState::ResizingCorner);
        assert_eq!(mgr.capture().captures, 2);
        assert_eq!(mgr.capture().releases, 1);
    }

    #[test]
    fn active_panel_paints_on_top() {
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 20.0, 20.0, 400.0, 300.0);
        let b = PanelId::new("b");

        assert_eq!(mgr.effective_z(&a.id, 2), 2);
        mgr.pointer_down(&a, DRAG, Point::new(30.0, 30.0), vec![], &mut log);
        assert_eq!(mgr.effective_z(&a.id, 2), ACTIVE_Z_INDEX);
        assert_eq!(mgr.effective_z(&b, 7), 7);
        mgr.pointer_up();
        assert_eq!(mgr.effective_z(&a.id, 2), 2);
    }

    #[test]
    fn cancel_for_only_matches_active_panel() {
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 20.0, 20.0, 400.0, 300.0);
        mgr.pointer_down(&a, DRAG, Point::new(30.0, 30.0), vec![], &mut log);
        assert!(!mgr.cancel_for(&PanelId::new("b")));
        assert!(mgr.is_tracking());
        assert!(mgr.cancel_for(&a.id));
        assert!(!mgr.is_tracking());
    }

    #[test]
    fn drop_releases_live_capture() {
        let mut capture = RecordingCapture::default();
        {
            let mut mgr = PanelLayoutManager::with_capture(LayoutSettings::default(), &mut capture);
            let mut log = EventLog::new();
            let a = geometry("a", 20.0, 20.0, 400.0, 300.0);
            mgr.pointer_down(&a, DRAG, Point::new(30.0, 30.0), vec![], &mut log);
        }
        assert_eq!(capture.captures, 1);
        assert_eq!(capture.releases, 1);
    }

    #[test]
    fn events_arrive_in_delivery_order() {
        let mut mgr = manager();
        let mut log = EventLog::new();
        let a = geometry("a", 0.0, 0.0, 400.0, 300.0);
        mgr.pointer_down(&a, DRAG, Point::new(0.0, 0.0), vec![], &mut log);
        for step in 1..=5 {
            mgr.pointer_move(Point::new(step as f64 * 10.0, 0.0), &mut log);
        }
        mgr.pointer_up();

        let xs: Vec<f64> = log
            .events()
            .iter()
            .filter_map(|e| match e {
                PanelEvent::PositionChanged { position, .. } => Some(position.x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![10.0, 20.0, 30.0, 40.0, 50.0]);
    }
}
