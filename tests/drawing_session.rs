use egui::Color32;
use pixel_gallery::{CellPos, DrawingSession, GridError, Pixel, PixelGrid, PointerEvent, SessionState};

fn blank(width: u32, height: u32) -> PixelGrid {
    PixelGrid::new(width, height).unwrap()
}

#[test]
fn test_press_paints_immediately() {
    let mut grid = blank(3, 3);
    let mut session = DrawingSession::new(Color32::RED);

    session.begin(&mut grid, CellPos::new(1, 1)).unwrap();

    assert_eq!(session.state(), SessionState::Painting);
    assert_eq!(grid.get(CellPos::new(1, 1)), Some(Pixel::Color(Color32::RED)));
}

#[test]
fn test_extend_without_begin_is_a_no_op() {
    let mut grid = blank(3, 3);
    let mut session = DrawingSession::new(Color32::RED);

    assert_eq!(session.extend(&mut grid, CellPos::new(0, 0)), Ok(false));
    assert!(grid.is_blank());
}

#[test]
fn test_extend_after_end_is_a_no_op() {
    let mut grid = blank(3, 3);
    let mut session = DrawingSession::new(Color32::RED);

    session.begin(&mut grid, CellPos::new(0, 0)).unwrap();
    session.end();
    let after_gesture = grid.clone();

    assert_eq!(session.extend(&mut grid, CellPos::new(2, 2)), Ok(false));
    assert_eq!(grid, after_gesture);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_drag_paints_every_entered_cell() {
    let mut grid = blank(4, 1);
    let mut session = DrawingSession::new(Color32::BLUE);

    session.handle(&mut grid, PointerEvent::Press(CellPos::new(0, 0))).unwrap();
    for col in 1..3 {
        assert_eq!(session.handle(&mut grid, PointerEvent::Enter(CellPos::new(0, col))), Ok(true));
    }
    session.handle(&mut grid, PointerEvent::Release).unwrap();
    session.handle(&mut grid, PointerEvent::Enter(CellPos::new(0, 3))).unwrap();

    let painted: Vec<bool> = grid.rows()[0].iter().map(|p| !p.is_transparent()).collect();
    assert_eq!(painted, vec![true, true, true, false]);
}

#[test]
fn test_leaving_bounds_ends_the_gesture() {
    let mut grid = blank(2, 2);
    let mut session = DrawingSession::new(Color32::BLUE);

    session.handle(&mut grid, PointerEvent::Press(CellPos::new(0, 0))).unwrap();
    session.handle(&mut grid, PointerEvent::LeaveBounds).unwrap();
    assert!(!session.is_painting());

    // Coming back with the button still held does not resume painting.
    session.handle(&mut grid, PointerEvent::Enter(CellPos::new(1, 1))).unwrap();
    assert_eq!(grid.get(CellPos::new(1, 1)), Some(Pixel::Transparent));
}

#[test]
fn test_color_change_applies_to_later_cells_only() {
    let mut grid = blank(3, 1);
    let mut session = DrawingSession::new(Color32::RED);

    session.begin(&mut grid, CellPos::new(0, 0)).unwrap();
    session.extend(&mut grid, CellPos::new(0, 1)).unwrap();
    session.set_color(Color32::GREEN);
    session.extend(&mut grid, CellPos::new(0, 2)).unwrap();

    assert_eq!(grid.get(CellPos::new(0, 0)), Some(Pixel::Color(Color32::RED)));
    assert_eq!(grid.get(CellPos::new(0, 1)), Some(Pixel::Color(Color32::RED)));
    assert_eq!(grid.get(CellPos::new(0, 2)), Some(Pixel::Color(Color32::GREEN)));
}

#[test]
fn test_begin_while_painting_restarts_the_gesture() {
    let mut grid = blank(2, 1);
    let mut session = DrawingSession::new(Color32::RED);

    session.begin(&mut grid, CellPos::new(0, 0)).unwrap();
    session.set_color(Color32::BLUE);
    session.begin(&mut grid, CellPos::new(0, 1)).unwrap();

    assert!(session.is_painting());
    assert_eq!(grid.get(CellPos::new(0, 1)), Some(Pixel::Color(Color32::BLUE)));
}

#[test]
fn test_out_of_bounds_press_stays_idle() {
    let mut grid = blank(2, 2);
    let mut session = DrawingSession::default();

    let err = session.begin(&mut grid, CellPos::new(5, 0)).unwrap_err();
    assert!(matches!(err, GridError::OutOfBounds { row: 5, col: 0, .. }));
    assert_eq!(session.state(), SessionState::Idle);
    assert!(grid.is_blank());
}

#[test]
fn test_default_color_is_black() {
    assert_eq!(DrawingSession::default().color(), Color32::BLACK);
}
