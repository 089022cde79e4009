//! Board tests - voxel pit storage, collision and layer clearing

use tetris3d::core::{Board, Shape};
use tetris3d::types::Dimensions;

fn unit() -> Shape {
    Shape::from_flat(1, 1, 1, &[1]).unwrap()
}

fn fill_layer(board: &mut Board, y: i32) {
    for z in 0..board.depth() as i32 {
        for x in 0..board.width() as i32 {
            board.set(x, y, z, Some(0x00ffff));
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(Dimensions::CLASSIC);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert_eq!(board.depth(), 10);
    assert_eq!(board.layer_count(), 20);
    assert_eq!(board.cells().len(), 2000);

    for y in 0..20 {
        for z in 0..10 {
            for x in 0..10 {
                assert_eq!(board.get(x, y, z), Some(None), "({x}, {y}, {z})");
            }
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(Dimensions::CLASSIC);
    assert_eq!(board.get(-1, 0, 0), None);
    assert_eq!(board.get(0, -1, 0), None);
    assert_eq!(board.get(0, 0, -1), None);
    assert_eq!(board.get(10, 0, 0), None);
    assert_eq!(board.get(0, 20, 0), None);
    assert_eq!(board.get(0, 0, 10), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(Dimensions::CLASSIC);

    assert!(board.set(5, 10, 3, Some(0xaa00ff)));
    assert_eq!(board.get(5, 10, 3), Some(Some(0xaa00ff)));
    assert!(board.is_occupied(5, 10, 3));

    assert!(board.set(5, 10, 3, None));
    assert_eq!(board.get(5, 10, 3), Some(None));

    assert!(!board.set(-1, 0, 0, Some(1)));
    assert!(!board.set(0, 0, 10, Some(1)));
}

#[test]
fn test_collides_with_walls_floor_and_ceiling() {
    let board = Board::new(Dimensions::new(4, 6, 5));
    let cube = unit();

    assert!(!board.collides(&cube, 0, 0, 0));
    assert!(!board.collides(&cube, 3, 5, 4));
    assert!(board.collides(&cube, -1, 0, 0));
    assert!(board.collides(&cube, 4, 0, 0));
    assert!(board.collides(&cube, 0, -1, 0));
    assert!(board.collides(&cube, 0, 6, 0));
    assert!(board.collides(&cube, 0, 0, -1));
    assert!(board.collides(&cube, 0, 0, 5));
}

#[test]
fn test_collides_only_with_occupied_slots() {
    let mut board = Board::new(Dimensions::CLASSIC);
    // hollow-centered 3x1 frame: middle slot empty
    let frame = Shape::from_flat(1, 1, 3, &[1, 0, 1]).unwrap();
    board.set(5, 0, 0, Some(1));

    assert!(!board.collides(&frame, 4, 0, 0));
    assert!(board.collides(&frame, 3, 0, 0));
}

#[test]
fn test_place_then_collides() {
    let mut board = Board::new(Dimensions::CLASSIC);
    let bar = Shape::from_flat(1, 1, 3, &[1, 1, 1]).unwrap();

    board.place(&bar, 2, 4, 6, 0x00ffff);
    assert_eq!(board.occupied_count(), 3);
    assert_eq!(board.get(4, 4, 6), Some(Some(0x00ffff)));
    assert!(board.collides(&bar, 2, 4, 6));
}

#[test]
fn test_place_skips_out_of_range_cells() {
    let mut board = Board::new(Dimensions::new(4, 4, 4));
    let bar = Shape::from_flat(1, 1, 3, &[1, 1, 1]).unwrap();
    board.place(&bar, 2, 0, 0, 7);
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_single_layer() {
    let mut board = Board::new(Dimensions::CLASSIC);
    fill_layer(&mut board, 0);
    board.set(3, 1, 3, Some(9));

    assert!(board.is_layer_full(0));
    assert_eq!(board.clear_lines(), 1);
    assert_eq!(board.layer_count(), 20);
    assert_eq!(board.get(3, 0, 3), Some(Some(9)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_non_adjacent_layers() {
    let mut board = Board::new(Dimensions::new(3, 6, 3));
    fill_layer(&mut board, 0);
    board.set(1, 1, 1, Some(5));
    fill_layer(&mut board, 2);
    board.set(2, 3, 0, Some(6));

    assert_eq!(board.clear_lines(), 2);
    assert_eq!(board.get(1, 0, 1), Some(Some(5)));
    assert_eq!(board.get(2, 1, 0), Some(Some(6)));
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.layer_count(), 6);
}

#[test]
fn test_clear_top_layer() {
    let mut board = Board::new(Dimensions::new(2, 3, 2));
    fill_layer(&mut board, 2);
    assert_eq!(board.clear_lines(), 1);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_nearly_full_layer_is_kept() {
    let mut board = Board::new(Dimensions::CLASSIC);
    fill_layer(&mut board, 0);
    board.set(9, 0, 9, None);
    assert!(!board.is_layer_full(0));
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board.occupied_count(), 99);
}

#[test]
fn test_column_height_and_clear() {
    let mut board = Board::new(Dimensions::CLASSIC);
    board.set(2, 0, 2, Some(1));
    board.set(2, 7, 2, Some(1));
    assert_eq!(board.column_height(2, 2), 8);

    board.clear();
    assert_eq!(board.column_height(2, 2), 0);
    assert_eq!(board.occupied_count(), 0);
}
