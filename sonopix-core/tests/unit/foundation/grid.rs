use super::*;

#[test]
fn from_rgb_checks_buffer_length() {
    assert!(PixelGrid::from_rgb(2, 2, vec![0u8; 12]).is_ok());
    assert!(PixelGrid::from_rgb(2, 2, vec![0u8; 11]).is_err());
    assert!(PixelGrid::from_rgb(2, 2, vec![0u8; 13]).is_err());
}

#[test]
fn accessors_expose_geometry_and_bytes() {
    let rgb: Vec<u8> = (0..18).collect();
    let grid = PixelGrid::from_rgb(3, 2, rgb.clone()).unwrap();
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.pixel_count(), 6);
    assert_eq!(grid.as_rgb(), rgb.as_slice());
    assert_eq!(grid.into_rgb(), rgb);
}

#[test]
fn zero_sized_grid_is_representable() {
    let grid = PixelGrid::from_rgb(0, 5, Vec::new()).unwrap();
    assert_eq!(grid.pixel_count(), 0);
}
