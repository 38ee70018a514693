pub mod d400_home;
