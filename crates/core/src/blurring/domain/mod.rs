pub mod grid_blurrer;
