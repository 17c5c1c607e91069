use dotship::{
    can_rotate, rotate_ship, FrameInput, GridError, LedCursor, LedGrid, Orientation,
    PlacementError, PlacementEvent, PlacementSession, ShipType, ShotOutcome, Direction, FLEET,
    GRID_COLS, GRID_ROWS,
};
use rand::{rngs::SmallRng, SeedableRng};

type Session = PlacementSession<u8, GRID_COLS, GRID_ROWS>;
type Fleet = dotship::Fleet<u8, GRID_COLS, GRID_ROWS>;

const CRUISER: ShipType = ShipType::new("Cruiser", 3);
const DINGHY: ShipType = ShipType::new("Dinghy", 1);

#[test]
fn test_new_ship_centres_on_cursor() -> Result<(), PlacementError> {
    let s = Session::new(CRUISER, LedCursor::home())?;
    assert_eq!(s.grid().columns(), &[0, 0x08, 0x08, 0x08, 0]);
    assert_eq!(s.orientation(), Orientation::Horizontal);

    let d = Session::new(DINGHY, LedCursor::home())?;
    assert_eq!(d.grid().columns(), &[0, 0, 0x08, 0, 0]);
    Ok(())
}

#[test]
fn test_rotate_there_and_back() -> Result<(), PlacementError> {
    let mut s = Session::new(CRUISER, LedCursor::home())?;
    assert!(s.rotate());
    assert_eq!(s.orientation(), Orientation::Vertical);
    // rows 2, 3 and 4 of the cursor column
    assert_eq!(s.grid().columns(), &[0, 0, 0b0001_1100, 0, 0]);

    assert!(s.rotate());
    assert_eq!(s.orientation(), Orientation::Horizontal);
    assert_eq!(s.grid().columns(), &[0, 0x08, 0x08, 0x08, 0]);
    Ok(())
}

#[test]
fn test_rotate_about_first_cell() {
    // cruiser on columns 1..=3 of row 3, cursor on its first cell
    let mut grid = LedGrid::from_columns([0, 0x08, 0x08, 0x08, 0]);
    let cursor = LedCursor::new(1, 3);
    let mut orientation = Orientation::Horizontal;
    assert!(rotate_ship(&mut grid, 3, &cursor, &mut orientation));
    assert_eq!(orientation, Orientation::Vertical);
    assert_eq!(grid.columns(), &[0, 0b0001_1100, 0, 0, 0]);

    assert!(rotate_ship(&mut grid, 3, &cursor, &mut orientation));
    assert_eq!(grid.columns(), &[0x08, 0x08, 0x08, 0, 0]);
}

#[test]
fn test_rotation_wraps_at_top_and_bottom_rows() -> Result<(), PlacementError> {
    let mut top = Session::new(CRUISER, LedCursor::new(2, 0))?;
    assert!(top.rotate());
    assert_eq!(top.grid().column(2), 0b0100_0011);
    assert!(top.rotate());
    assert_eq!(top.grid().columns(), &[0, 1, 1, 1, 0]);

    let mut bottom = Session::new(CRUISER, LedCursor::new(2, 6))?;
    assert!(bottom.rotate());
    assert_eq!(bottom.grid().column(2), 0b0110_0001);
    assert_eq!(bottom.grid().count_ones(), 3);
    Ok(())
}

#[test]
fn test_rotation_blocked_across_side_edge() -> Result<(), PlacementError> {
    let mut fleet = Fleet::new();
    // cursor on column 0 puts the cruiser on columns 4, 0 and 1
    let mut s = Session::new(CRUISER, LedCursor::new(0, 3))?;
    assert_eq!(s.grid().columns(), &[0x08, 0x08, 0, 0, 0x08]);
    assert!(!can_rotate(s.grid(), Orientation::Horizontal));
    let before = *s.grid();
    assert_eq!(s.handle(&FrameInput::rotating(), &mut fleet), PlacementEvent::RotateRejected);
    assert_eq!(*s.grid(), before);
    assert_eq!(s.orientation(), Orientation::Horizontal);

    s.advance(Direction::East);
    assert!(s.can_rotate());
    assert_eq!(s.handle(&FrameInput::rotating(), &mut fleet), PlacementEvent::Rotated);
    assert_eq!(s.grid().columns(), &[0, 0b0001_1100, 0, 0, 0]);
    Ok(())
}

#[test]
fn test_vertical_always_rotates() {
    let g = LedGrid::from_columns([0x7f, 0, 0, 0, 0x7f]);
    assert!(can_rotate(&g, Orientation::Vertical));
    assert!(!can_rotate(&g, Orientation::Horizontal));
}

#[test]
fn test_single_cell_never_rotates() -> Result<(), PlacementError> {
    let mut fleet = Fleet::new();
    let mut s = Session::new(DINGHY, LedCursor::home())?;
    assert!(!s.can_rotate());
    assert!(!s.rotate());
    assert_eq!(s.handle(&FrameInput::rotating(), &mut fleet), PlacementEvent::Idle);

    let mut g = *s.grid();
    let mut o = Orientation::Horizontal;
    assert!(!rotate_ship(&mut g, 1, &s.cursor(), &mut o));
    assert_eq!(g, *s.grid());
    Ok(())
}

#[test]
fn test_invalid_ships_rejected() {
    assert_eq!(
        Session::new(ShipType::new("Barge", 6), LedCursor::home()).unwrap_err(),
        PlacementError::ShipTooLong { length: 6, max: 5 }
    );
    assert_eq!(
        Session::new(ShipType::new("Ghost", 0), LedCursor::home()).unwrap_err(),
        PlacementError::EmptyShip
    );
    assert_eq!(
        PlacementSession::<u8, 5, 8>::new(CRUISER, dotship::Cursor::new(0, 0)).unwrap_err(),
        PlacementError::Grid(GridError::HeightTooLarge {
            height: 8,
            word_bits: 8
        })
    );
}

#[test]
fn test_commit_then_overlap() -> Result<(), PlacementError> {
    let mut fleet = Fleet::new();
    let cruiser = Session::new(CRUISER, LedCursor::home())?;
    assert!(cruiser.confirm(&mut fleet));
    let dinghy = Session::new(DINGHY, LedCursor::new(0, 0))?;
    assert!(dinghy.confirm(&mut fleet));
    assert_eq!(fleet.ships_committed(), 2);
    assert_eq!(fleet.cells_remaining(), 4);

    let destroyer = ShipType::new("Destroyer", 2);
    // columns 3 and 4 on row 3 share a cell with the cruiser
    let mut clash = Session::new(destroyer, LedCursor::new(4, 3))?;
    assert!(clash.overlaps(&fleet));
    assert_eq!(clash.handle(&FrameInput::confirming(), &mut fleet), PlacementEvent::Collision);
    assert_eq!(fleet.ships_committed(), 2);

    let clear = Session::new(destroyer, LedCursor::new(4, 6))?;
    assert!(!clear.overlaps(&fleet));
    Ok(())
}

#[test]
fn test_frame_applies_move_then_rotate() -> Result<(), PlacementError> {
    let mut fleet = Fleet::new();
    let mut s = Session::new(CRUISER, LedCursor::home())?;
    let input = FrameInput {
        south: true,
        rotate: true,
        ..FrameInput::default()
    };
    assert_eq!(s.handle(&input, &mut fleet), PlacementEvent::Rotated);
    assert_eq!(s.cursor().row(), 4);
    assert_eq!(s.grid().column(2), 0b0011_1000);
    assert_eq!(s.handle(&FrameInput::default(), &mut fleet), PlacementEvent::Idle);
    assert_eq!(s.handle(&FrameInput::confirming(), &mut fleet), PlacementEvent::Committed);
    // the same shape cannot be committed twice
    assert_eq!(s.handle(&FrameInput::confirming(), &mut fleet), PlacementEvent::Collision);
    Ok(())
}

#[test]
fn test_random_fleet_is_disjoint() -> Result<(), PlacementError> {
    for seed in 0..50u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fleet = Fleet::new();
        for ship in FLEET {
            let s = fleet.random_session(&mut rng, ship)?;
            assert_eq!(s.grid().count_ones(), ship.length());
            assert!(s.confirm(&mut fleet));
        }
        assert_eq!(fleet.cells_remaining(), 4);
    }
    Ok(())
}

#[test]
fn test_shots_clear_hit_cells() -> Result<(), GridError> {
    let mut fleet = Fleet::new();
    fleet.commit(&LedGrid::from_cells([(3, 1), (3, 2)])?);
    assert_eq!(fleet.receive_shot(3, 1)?, ShotOutcome::Hit);
    assert_eq!(fleet.receive_shot(3, 1)?, ShotOutcome::Miss);
    assert_eq!(fleet.receive_shot(0, 0)?, ShotOutcome::Miss);
    assert!(!fleet.is_destroyed());
    assert_eq!(fleet.receive_shot(3, 2)?, ShotOutcome::Hit);
    assert!(fleet.is_destroyed());
    assert!(fleet.receive_shot(7, 0).is_err());
    Ok(())
}
